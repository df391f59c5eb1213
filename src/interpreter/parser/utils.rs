use crate::{
    ast::CompareOperator,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Consumes the current token if it has the given kind.
    ///
    /// # Errors
    /// - `UnexpectedToken` if input ended before a `kind` token was found.
    /// - `ConsumeMismatch` if a different token is present.
    pub(in crate::interpreter::parser) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        let current = self.tokens.current();
        if kind != TokenKind::EndOfInput && current.kind == TokenKind::EndOfInput {
            return Err(ParseError::UnexpectedToken { expected: kind.to_string(),
                                                     found:    current.text.clone(),
                                                     line:     current.line, });
        }
        if current.kind != kind {
            return Err(ParseError::ConsumeMismatch { expected: kind.to_string(),
                                                     found:    current.text.clone(),
                                                     line:     current.line, });
        }
        Ok(self.tokens.advance())
    }

    /// Returns `true` if the current token has the given kind.
    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        self.tokens.peek_kind() == kind
    }

    /// Builds an `UnexpectedToken` error for the current token.
    pub(in crate::interpreter::parser) fn unexpected<T>(&self, expected: &str) -> ParseResult<T> {
        let current = self.tokens.current();
        Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                          found:    current.text.clone(),
                                          line:     current.line, })
    }

    /// Consumes an identifier that must already be declared.
    ///
    /// # Errors
    /// - Token errors from [`Self::expect`].
    /// - `Undeclared` if the name is not in the symbol table.
    pub(in crate::interpreter::parser) fn expect_declared(&mut self) -> ParseResult<Token> {
        let token = self.expect(TokenKind::Identifier)?;
        if !self.symbols.contains(&token.text) {
            return Err(ParseError::Undeclared { name: token.text,
                                                line: token.line, });
        }
        Ok(token)
    }

    /// Parses `id ("," id)*` where every id must be declared.
    pub(in crate::interpreter::parser) fn parse_identifier_list(&mut self)
                                                                -> ParseResult<Vec<String>> {
        let mut names = vec![self.expect_declared()?.text];
        while self.check(TokenKind::Comma) {
            self.tokens.advance();
            names.push(self.expect_declared()?.text);
        }
        Ok(names)
    }

    /// Consumes any relational operator.
    ///
    /// The operators are matched as one contiguous range of token kinds
    /// rather than one by one.
    pub(in crate::interpreter::parser) fn expect_comparison(&mut self)
                                                            -> ParseResult<CompareOperator> {
        let current = self.tokens.current();
        if !current.kind.is_comparison() {
            if current.kind == TokenKind::EndOfInput {
                return self.unexpected("comparison operator");
            }
            return Err(ParseError::ConsumeMismatch { expected: "comparison operator".to_string(),
                                                     found:    current.text.clone(),
                                                     line:     current.line, });
        }

        let op = match self.tokens.advance().kind {
            TokenKind::NotEqual => CompareOperator::NotEqual,
            TokenKind::EqualEqual => CompareOperator::Equal,
            TokenKind::GreaterEqual => CompareOperator::GreaterEqual,
            TokenKind::LessEqual => CompareOperator::LessEqual,
            TokenKind::Greater => CompareOperator::Greater,
            TokenKind::Less => CompareOperator::Less,
            _ => unreachable!("is_comparison admitted a non-comparison token"),
        };
        Ok(op)
    }
}
