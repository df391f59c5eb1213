use crate::{
    ast::{Statement, StatementList},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses statements up to the `end` or `else` that closes the block.
    ///
    /// Reaching end of input inside a block is reported by
    /// [`Self::parse_statement`] as an unexpected token.
    ///
    /// Grammar: `stmt_list := stmt+`
    ///
    /// # Errors
    /// `EmptySequence` if the block has no statements, or any statement error.
    pub(in crate::interpreter::parser) fn parse_statement_list(&mut self)
                                                               -> ParseResult<StatementList> {
        let line = self.tokens.current().line;
        let mut statements = Vec::new();
        while !matches!(self.tokens.peek_kind(), TokenKind::End | TokenKind::Else) {
            statements.push(self.parse_statement()?);
        }

        if statements.is_empty() {
            return Err(ParseError::EmptySequence { construct: "statement list",
                                                   line:      self.tokens.current().line, });
        }
        Ok(StatementList { statements,
                           line })
    }

    /// Parses a single statement, chosen by its first token.
    ///
    /// Grammar: `stmt := assign | if | while | read | write`
    fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.tokens.peek_kind() {
            TokenKind::Identifier => self.parse_assign(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Read => {
                let (names, line) = self.parse_io(TokenKind::Read)?;
                Ok(Statement::Read { names, line })
            },
            TokenKind::Write => {
                let (names, line) = self.parse_io(TokenKind::Write)?;
                Ok(Statement::Write { names, line })
            },
            _ => self.unexpected("statement"),
        }
    }

    /// Grammar: `assign := id "=" exp ";"`
    fn parse_assign(&mut self) -> ParseResult<Statement> {
        let target = self.expect_declared()?;
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Statement::Assign { target: target.text,
                               value,
                               line: target.line })
    }

    /// Grammar: `if := "if" cond "then" stmt_list ("else" stmt_list)? "end" ";"`
    fn parse_if(&mut self) -> ParseResult<Statement> {
        let line = self.expect(TokenKind::If)?.line;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::Then)?;
        let then_branch = self.parse_statement_list()?;

        let else_branch = if self.check(TokenKind::Else) {
            self.tokens.advance();
            Some(self.parse_statement_list()?)
        } else {
            None
        };

        self.expect(TokenKind::End)?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Statement::If { condition,
                           then_branch,
                           else_branch,
                           line })
    }

    /// Grammar: `while := "while" cond "loop" stmt_list "end" ";"`
    fn parse_while(&mut self) -> ParseResult<Statement> {
        let line = self.expect(TokenKind::While)?.line;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::Loop)?;
        let body = self.parse_statement_list()?;
        self.expect(TokenKind::End)?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Statement::While { condition,
                              body,
                              line })
    }

    /// Parses the shared shape of `read` and `write`.
    ///
    /// Grammar: `io := keyword id ("," id)* ";"`
    fn parse_io(&mut self, keyword: TokenKind) -> ParseResult<(Vec<String>, usize)> {
        let line = self.expect(keyword)?.line;
        let names = self.parse_identifier_list()?;
        self.expect(TokenKind::Semicolon)?;
        Ok((names, line))
    }
}
