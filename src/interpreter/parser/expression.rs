use crate::{
    ast::{Expression, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

/// Maps a token to its corresponding infix operator.
///
/// Returns `Some(InfixOperator)` when the token represents one of the
/// arithmetic or comparison operators; `None` for all other tokens
/// (including `(` and `[`, which continue an expression but are not
/// operators).
///
/// # Example
/// ```
/// use vervet::{
///     ast::InfixOperator,
///     interpreter::{lexer::Token, parser::expression::token_to_infix_operator},
/// };
///
/// assert_eq!(token_to_infix_operator(&Token::Plus),
///            Some(InfixOperator::Add));
/// assert_eq!(token_to_infix_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Star => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Less => Some(InfixOperator::Less),
        Token::Greater => Some(InfixOperator::Greater),
        Token::EqualEqual => Some(InfixOperator::Equal),
        Token::BangEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses the expression started by the current token.
    ///
    /// This is the prefix half of the Pratt dispatch: each token kind that
    /// may begin an expression has a parse routine here. A token with no
    /// routine produces a `NoPrefixParseFn` diagnostic.
    pub(crate) fn parse_prefix(&mut self) -> ParseResult<Expression> {
        match self.tokens.peek() {
            Some((Token::Integer(..) | Token::Str(..) | Token::Bool(..), _)) => {
                self.parse_literal()
            },
            Some((Token::Identifier(_), _)) => self.parse_identifier(),
            Some((Token::Bang | Token::Minus, _)) => self.parse_prefix_operator(),
            Some((Token::LParen, _)) => self.parse_grouping(),
            Some((Token::If, _)) => self.parse_if_expression(),
            Some((Token::Function, _)) => self.parse_function_literal(),
            Some((Token::LBracket, _)) => self.parse_array_literal(),
            Some((Token::LBrace, _)) => self.parse_hash_literal(),
            Some((token, line)) => {
                Err(ParseError::NoPrefixParseFn { token: token.kind_name().to_string(),
                                                  line:  *line, })
            },
            None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    /// Continues the expression `left` with the current token.
    ///
    /// This is the infix half of the Pratt dispatch: `(` continues into a
    /// call, `[` into an index, and the operator tokens into an infix
    /// operation. Only invoked by the driver for tokens whose precedence
    /// exceeds the current context.
    pub(crate) fn parse_infix(&mut self, left: Expression) -> ParseResult<Expression> {
        match self.tokens.peek() {
            Some((Token::LParen, _)) => self.parse_call(left),
            Some((Token::LBracket, _)) => self.parse_index(left),
            _ => self.parse_infix_operator(left),
        }
    }

    /// Parses an integer, string, or boolean literal.
    fn parse_literal(&mut self) -> ParseResult<Expression> {
        match self.tokens.next() {
            Some((Token::Integer(value), line)) => Ok(Expression::IntegerLiteral { value: *value,
                                                                                   line:  *line, }),
            Some((Token::Str(value), line)) => {
                Ok(Expression::StringLiteral { value: value.clone(),
                                               line:  *line, })
            },
            Some((Token::Bool(value), line)) => Ok(Expression::BooleanLiteral { value: *value,
                                                                                line:  *line, }),
            _ => unreachable!(),
        }
    }

    /// Parses an identifier reference.
    fn parse_identifier(&mut self) -> ParseResult<Expression> {
        let (name, line) = self.expect_identifier()?;
        Ok(Expression::Identifier { name, line })
    }

    /// Parses a prefix operation: `!x` or `-x`.
    ///
    /// The operand binds at [`Precedence::Prefix`], so `!-a` parses as
    /// `(!(-a))` and `-a * b` as `((-a) * b)`.
    fn parse_prefix_operator(&mut self) -> ParseResult<Expression> {
        let (token, line) = self.tokens.next().unwrap();
        let line = *line;

        let operator = match token {
            Token::Bang => PrefixOperator::Not,
            Token::Minus => PrefixOperator::Negate,
            _ => unreachable!(),
        };

        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix { operator,
                                right: Box::new(right),
                                line })
    }

    /// Parses a parenthesized expression.
    ///
    /// Grammar: `grouping := "(" expression ")"`
    ///
    /// # Returns
    /// The inner expression as-is (no wrapper node).
    fn parse_grouping(&mut self) -> ParseResult<Expression> {
        self.tokens.next();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect(&Token::RParen)?;
        Ok(expr)
    }

    /// Parses an `if` expression with an optional `else` block.
    ///
    /// Grammar: `if := "if" "(" expression ")" block ("else" block)?`
    fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        let (_, line) = self.tokens.next().unwrap();
        let line = *line;

        self.expect(&Token::LParen)?;
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect(&Token::RParen)?;

        let brace_line = self.expect(&Token::LBrace)?;
        let consequence = self.parse_block(brace_line)?;

        let alternative = if let Some((Token::Else, _)) = self.tokens.peek() {
            self.tokens.next();
            let brace_line = self.expect(&Token::LBrace)?;
            Some(self.parse_block(brace_line)?)
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition),
                            consequence,
                            alternative,
                            line })
    }

    /// Parses a function literal.
    ///
    /// Grammar: `function := "fn" "(" (IDENT ("," IDENT)*)? ")" block`
    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        let (_, line) = self.tokens.next().unwrap();
        let line = *line;

        self.expect(&Token::LParen)?;
        let parameters =
            self.parse_comma_separated(|parser| parser.expect_identifier().map(|(name, _)| name),
                                       &Token::RParen)?;

        let brace_line = self.expect(&Token::LBrace)?;
        let body = self.parse_block(brace_line)?;

        Ok(Expression::FunctionLiteral { parameters, body, line })
    }

    /// Parses an array literal of the form `[expr1, expr2, ..., exprN]`.
    fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        let (_, line) = self.tokens.next().unwrap();
        let line = *line;

        let elements =
            self.parse_comma_separated(|parser| parser.parse_expression(Precedence::Lowest),
                                       &Token::RBracket)?;

        Ok(Expression::ArrayLiteral { elements, line })
    }

    /// Parses a hash literal of the form `{k1: v1, k2: v2, ..., kN: vN}`.
    ///
    /// Any expression may appear in key position; hashability is enforced
    /// at evaluation time, not here.
    fn parse_hash_literal(&mut self) -> ParseResult<Expression> {
        let (_, line) = self.tokens.next().unwrap();
        let line = *line;

        let pairs = self.parse_comma_separated(|parser| {
                                                   let key =
                                                       parser.parse_expression(Precedence::Lowest)?;
                                                   parser.expect(&Token::Colon)?;
                                                   let value =
                                                       parser.parse_expression(Precedence::Lowest)?;
                                                   Ok((key, value))
                                               },
                                               &Token::RBrace)?;

        Ok(Expression::HashLiteral { pairs, line })
    }

    /// Parses an infix operation, folding `left` into a binary node.
    ///
    /// The right-hand side binds at the operator's own precedence, which
    /// makes every infix operator left-associative.
    fn parse_infix_operator(&mut self, left: Expression) -> ParseResult<Expression> {
        let (token, line) = self.tokens.next().unwrap();
        let line = *line;

        let Some(operator) = token_to_infix_operator(token) else {
            return Err(ParseError::UnexpectedToken { expected: "operator",
                                                     got:      token.kind_name().to_string(),
                                                     line, });
        };

        let right = self.parse_expression(Precedence::of(token))?;

        Ok(Expression::Infix { left: Box::new(left),
                               operator,
                               right: Box::new(right),
                               line })
    }

    /// Parses a call expression: `callee(arg1, arg2, ..., argN)`.
    fn parse_call(&mut self, function: Expression) -> ParseResult<Expression> {
        let (_, line) = self.tokens.next().unwrap();
        let line = *line;

        let arguments =
            self.parse_comma_separated(|parser| parser.parse_expression(Precedence::Lowest),
                                       &Token::RParen)?;

        Ok(Expression::Call { function: Box::new(function),
                              arguments,
                              line })
    }

    /// Parses an index expression: `target[index]`.
    fn parse_index(&mut self, target: Expression) -> ParseResult<Expression> {
        let (_, line) = self.tokens.next().unwrap();
        let line = *line;

        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect(&Token::RBracket)?;

        Ok(Expression::Index { target: Box::new(target),
                               index: Box::new(index),
                               line })
    }
}
