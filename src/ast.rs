use std::fmt::Write as _;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expression` covers every value-producing construct of the language, from
/// literals and identifiers to function literals, calls, conditionals,
/// arrays, hashes, and indexing. Each variant carries the source line of the
/// token that introduced it for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A reference to a name, spelled exactly as in the source.
    Identifier {
        /// The referenced name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal, `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A double-quoted string literal.
    StringLiteral {
        /// The literal text, without the surrounding quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation (`!x` or `-x`).
    Prefix {
        /// The prefix operator to apply.
        operator: PrefixOperator,
        /// The operand expression.
        right:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// An infix operation (arithmetic or comparison).
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A conditional expression with an optional alternative.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A function literal: `fn(x, y) { x + y }`.
    FunctionLiteral {
        /// Parameter names in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStatement,
        /// Line number in the source code.
        line:       usize,
    },
    /// A call expression applied to any callee expression.
    Call {
        /// The expression producing the callee.
        function:  Box<Self>,
        /// Argument expressions in call order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An array literal: `[1, 2, 3]`.
    ArrayLiteral {
        /// Element expressions in source order.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A hash literal: `{key: value, ...}`.
    ///
    /// Pairs keep their source order; the evaluator enforces key
    /// hashability, not the parser.
    HashLiteral {
        /// Key/value expression pairs in source order.
        pairs: Vec<(Self, Self)>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An indexing expression: `target[index]`.
    Index {
        /// The expression being indexed.
        target: Box<Self>,
        /// The index expression.
        index:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Expression {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use vervet::ast::Expression;
    ///
    /// let expr = Expression::Identifier { name: "x".to_string(),
    ///                                     line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::If { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::Call { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::HashLiteral { line, .. }
            | Self::Index { line, .. } => *line,
        }
    }
}

/// A top-level statement.
///
/// Statements are the units a program or block is made of.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding introduced with `let`.
    Let {
        /// The bound name.
        name:  String,
        /// The value expression.
        value: Expression,
        /// Line number in the source code.
        line:  usize,
    },
    /// An early return, with an optional value.
    Return {
        /// The returned expression, or `None` for a bare `return;`.
        value: Option<Expression>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A single expression evaluated for its value.
    Expression {
        /// The expression to evaluate.
        expr: Expression,
        /// Line number in the source code.
        line: usize,
    },
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as conditional branches and function bodies. They do not
/// open a scope of their own; bindings land in the surrounding environment.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// Statements inside the block, in source order.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

/// A parsed program: the ordered sequence of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// An infix operator.
///
/// Infix operators cover arithmetic, comparison, and equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`); also string concatenation.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl PrefixOperator {
    /// Returns the operator's source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Negate => "-",
        }
    }
}

impl InfixOperator {
    /// Returns the operator's source spelling.
    ///
    /// # Example
    /// ```
    /// use vervet::ast::InfixOperator;
    ///
    /// assert_eq!(InfixOperator::Add.symbol(), "+");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        }
    }
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "{value}"),
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right,
                          .. } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alt) = alternative {
                    write!(f, " else {alt}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { function, arguments, .. } => {
                write!(f, "{function}({})", join_expressions(arguments))
            },
            Self::ArrayLiteral { elements, .. } => {
                write!(f, "[{}]", join_expressions(elements))
            },
            Self::HashLiteral { pairs, .. } => {
                let mut rendered = String::new();
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        rendered.push_str(", ");
                    }
                    let _ = write!(rendered, "{key}: {value}");
                }
                write!(f, "{{{rendered}}}")
            },
            Self::Index { target, index, .. } => write!(f, "({target}[{index}])"),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value: Some(value), .. } => write!(f, "return {value};"),
            Self::Return { value: None, .. } => write!(f, "return;"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

impl std::fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

fn join_expressions(expressions: &[Expression]) -> String {
    expressions.iter()
               .map(ToString::to_string)
               .collect::<Vec<_>>()
               .join(", ")
}
