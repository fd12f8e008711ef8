use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{function, index, infix, prefix},
        value::{
            core::{Function, Object},
            environment::{EnvId, Environment},
            hash_key::HashKey,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. An `Err` propagates outward
/// through `?` exactly like the language's run-time errors bubble through
/// blocks and calls: the first failure aborts everything around it.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the environment arena: every scope created over the
/// lifetime of a program, including those kept alive by closures. It is
/// created once and reused across inputs, which is what lets a REPL keep
/// bindings from line to line.
pub struct Context {
    pub(crate) envs: Environment,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context holding only the empty global
    /// scope.
    #[must_use]
    pub fn new() -> Self {
        Self { envs: Environment::new() }
    }

    /// Evaluates a whole program in the global scope.
    ///
    /// Statements run in order. A `return` at the top level ends the
    /// program with the returned value; otherwise the program's value is
    /// the value of its last statement (`null` for an empty program).
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement; the
    /// remaining statements are not evaluated.
    ///
    /// # Example
    /// ```
    /// use vervet::{
    ///     interpreter::{evaluator::core::Context, parser::core::Parser, value::core::Object},
    ///     lex,
    /// };
    ///
    /// let tokens = lex("let a = 2; a * 3").unwrap();
    /// let (program, _) = Parser::new(&tokens).parse_program();
    ///
    /// let mut context = Context::new();
    /// assert_eq!(context.eval_program(&program), Ok(Object::Integer(6)));
    /// ```
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Object> {
        let global = self.envs.global();
        let mut result = Object::Null;

        for statement in &program.statements {
            match self.eval_statement(statement, global)? {
                Object::ReturnValue(value) => return Ok(*value),
                value => result = value,
            }
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// - `let` evaluates its value and binds the name in `env` itself;
    ///   the statement yields the bound value.
    /// - `return` wraps its value in the `ReturnValue` signal.
    /// - An expression statement yields the expression's value.
    pub fn eval_statement(&mut self, statement: &Statement, env: EnvId) -> EvalResult<Object> {
        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval(value, env)?;
                if value.is_return() {
                    return Ok(value);
                }
                self.envs.set(env, name, value.clone());
                Ok(value)
            },
            Statement::Return { value, .. } => {
                let result = match value {
                    Some(expr) => self.eval(expr, env)?,
                    None => Object::Null,
                };
                if result.is_return() {
                    return Ok(result);
                }
                Ok(Object::ReturnValue(Box::new(result)))
            },
            Statement::Expression { expr, .. } => self.eval(expr, env),
        }
    }

    /// Evaluates the statements of a block.
    ///
    /// Unlike [`eval_program`], a block passes a `ReturnValue` through
    /// *without* unwrapping it, so the signal bubbles out of nested blocks
    /// until the enclosing function call (or the program) unwraps it.
    /// Blocks do not open a scope; bindings land in `env` directly.
    ///
    /// [`eval_program`]: Context::eval_program
    pub(crate) fn eval_block(&mut self, block: &BlockStatement, env: EnvId) -> EvalResult<Object> {
        let mut result = Object::Null;

        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
            if result.is_return() {
                return Ok(result);
            }
        }

        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main dispatch of the evaluator: a single match over
    /// every expression variant. Run-time errors short-circuit through
    /// `?`; the `ReturnValue` signal short-circuits through explicit
    /// checks so that a `return` inside a subexpression punches through
    /// its siblings the same way an error does.
    pub fn eval(&mut self, expression: &Expression, env: EnvId) -> EvalResult<Object> {
        match expression {
            Expression::Identifier { name, .. } => self.eval_identifier(name, env),
            Expression::IntegerLiteral { value, .. } => Ok(Object::Integer(*value)),
            Expression::BooleanLiteral { value, .. } => Ok(Object::Bool(*value)),
            Expression::StringLiteral { value, .. } => Ok(value.clone().into()),
            Expression::Prefix { operator, right, .. } => {
                let operand = self.eval(right, env)?;
                if operand.is_return() {
                    return Ok(operand);
                }
                prefix::eval_prefix(*operator, &operand)
            },
            Expression::Infix { left,
                                operator,
                                right,
                                .. } => {
                // The right operand is evaluated before the left one;
                // error ordering observes this.
                let right_value = self.eval(right, env)?;
                if right_value.is_return() {
                    return Ok(right_value);
                }
                let left_value = self.eval(left, env)?;
                if left_value.is_return() {
                    return Ok(left_value);
                }
                infix::eval_infix(&left_value, *operator, &right_value)
            },
            Expression::If { condition,
                             consequence,
                             alternative,
                             .. } => {
                let condition = self.eval(condition, env)?;
                if condition.is_return() {
                    return Ok(condition);
                }
                if condition.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(Object::Null)
                }
            },
            Expression::FunctionLiteral { parameters, body, .. } => {
                Ok(Object::Function(Rc::new(Function { parameters: parameters.clone(),
                                                       body: body.clone(),
                                                       env })))
            },
            Expression::Call { function, arguments, .. } => {
                let callee = self.eval(function, env)?;
                if callee.is_return() {
                    return Ok(callee);
                }

                let mut args = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    let value = self.eval(argument, env)?;
                    if value.is_return() {
                        return Ok(value);
                    }
                    args.push(value);
                }

                self.apply_function(callee, args)
            },
            Expression::ArrayLiteral { elements, .. } => {
                let mut values = Vec::with_capacity(elements.len());

                for element in elements {
                    let value = self.eval(element, env)?;
                    if value.is_return() {
                        return Ok(value);
                    }
                    values.push(value);
                }

                Ok(values.into())
            },
            Expression::HashLiteral { pairs, .. } => {
                let mut map = HashMap::with_capacity(pairs.len());

                for (key_expr, value_expr) in pairs {
                    // Each pair's value is evaluated before its key;
                    // error ordering observes this.
                    let value = self.eval(value_expr, env)?;
                    if value.is_return() {
                        return Ok(value);
                    }
                    let key = self.eval(key_expr, env)?;
                    if key.is_return() {
                        return Ok(key);
                    }

                    let key = HashKey::from_object(&key)
                        .ok_or(RuntimeError::KeyNotHashable { kind: key.kind() })?;

                    // Duplicate keys: last write wins.
                    map.insert(key, value);
                }

                Ok(Object::Hash(Rc::new(map)))
            },
            Expression::Index { target, index, .. } => {
                let target_value = self.eval(target, env)?;
                if target_value.is_return() {
                    return Ok(target_value);
                }
                let index_value = self.eval(index, env)?;
                if index_value.is_return() {
                    return Ok(index_value);
                }
                index::eval_index(&target_value, &index_value)
            },
        }
    }

    /// Resolves a name.
    ///
    /// Lookup order: the environment chain starting at `env`, then the
    /// builtin registry. A binding therefore shadows a builtin of the same
    /// name.
    fn eval_identifier(&self, name: &str, env: EnvId) -> EvalResult<Object> {
        if let Some(value) = self.envs.get(env, name) {
            return Ok(value.clone());
        }
        if let Some(builtin) = function::lookup_builtin(name) {
            return Ok(Object::Builtin(builtin));
        }
        Err(RuntimeError::IdentifierNotFound { name: name.to_string() })
    }
}
