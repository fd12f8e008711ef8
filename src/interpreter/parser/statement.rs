use crate::{
    ast::{BlockStatement, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a `let` binding,
    /// - a `return` statement,
    /// - an expression used as a statement.
    ///
    /// The first token decides which; anything that is not `let` or
    /// `return` starts an expression statement.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.tokens.peek() {
            Some((Token::Let, _)) => self.parse_let_statement(),
            Some((Token::Return, _)) => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a `let` statement: `let IDENT = EXPR ;`.
    ///
    /// Both the `=` and the terminating `;` are required; `let x;` without
    /// an initializer is a parse error.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let (_, line) = self.tokens.next().unwrap();
        let line = *line;

        let (name, _) = self.expect_identifier()?;
        self.expect(&Token::Assign)?;

        let value = self.parse_expression(Precedence::Lowest)?;
        self.expect(&Token::Semicolon)?;

        Ok(Statement::Let { name, value, line })
    }

    /// Parses a `return` statement: `return EXPR? ;`.
    ///
    /// The value is optional; a bare `return` before `;`, `}` or end of
    /// input yields `null`. The semicolon itself is optional but consumed
    /// when present.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let (_, line) = self.tokens.next().unwrap();
        let line = *line;

        let value = match self.tokens.peek() {
            Some((Token::Semicolon | Token::RBrace, _)) | None => None,
            _ => Some(self.parse_expression(Precedence::Lowest)?),
        };

        if let Some((Token::Semicolon, _)) = self.tokens.peek() {
            self.tokens.next();
        }

        Ok(Statement::Return { value, line })
    }

    /// Parses an expression statement with an optional trailing `;`.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current_line();
        let expr = self.parse_expression(Precedence::Lowest)?;

        if let Some((Token::Semicolon, _)) = self.tokens.peek() {
            self.tokens.next();
        }

        Ok(Statement::Expression { expr, line })
    }

    /// Parses the statements of a block whose `{` was already consumed.
    ///
    /// Parsing continues until the matching `}` (which is consumed) or the
    /// end of input.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Parameters
    /// - `line`: Line number of the opening brace.
    pub(crate) fn parse_block(&mut self, line: usize) -> ParseResult<BlockStatement> {
        let mut statements = Vec::new();

        loop {
            match self.tokens.peek() {
                Some((Token::RBrace, _)) => {
                    self.tokens.next();
                    break;
                },
                Some(_) => statements.push(self.parse_statement()?),
                None => break,
            }
        }

        Ok(BlockStatement { statements, line })
    }
}
