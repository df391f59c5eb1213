use crate::{
    ast::{Expression, Factor, Term},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction.
    ///
    /// The rule recurses on its right-hand side, so `a - b - c` produces a
    /// right-leaning chain; the evaluator folds it left to right.
    ///
    /// Grammar: `exp := term (("+" | "-") exp)?`
    ///
    /// # Errors
    /// Any syntax or context error inside the expression.
    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        let line = self.tokens.current().line;
        let term = self.parse_term()?;

        match self.tokens.peek_kind() {
            TokenKind::Plus => {
                self.tokens.advance();
                let rest = Box::new(self.parse_expression()?);
                Ok(Expression::Plus { term, rest, line })
            },
            TokenKind::Minus => {
                self.tokens.advance();
                let rest = Box::new(self.parse_expression()?);
                Ok(Expression::Minus { term, rest, line })
            },
            _ => Ok(Expression::Term { term, line }),
        }
    }

    /// Parses multiplication.
    ///
    /// Grammar: `term := factor ("*" term)?`
    fn parse_term(&mut self) -> ParseResult<Term> {
        let line = self.tokens.current().line;
        let factor = self.parse_factor()?;

        if self.check(TokenKind::Star) {
            self.tokens.advance();
            let rest = Box::new(self.parse_term()?);
            return Ok(Term::Multiply { factor, rest, line });
        }
        Ok(Term::Factor { factor, line })
    }

    /// Parses a literal, a declared variable, or a parenthesized expression.
    ///
    /// Grammar: `factor := id | number | "(" exp ")"`
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Factor> {
        match self.tokens.peek_kind() {
            TokenKind::Identifier => {
                let token = self.expect_declared()?;
                Ok(Factor::Identifier { name: token.text,
                                        line: token.line, })
            },
            TokenKind::Number => {
                let token = self.tokens.advance();
                let value = token.text
                                 .parse::<i32>()
                                 .map_err(|_| ParseError::InvalidToken { token: token.text.clone(),
                                                                         line:  token.line, })?;
                Ok(Factor::Number { value,
                                    line: token.line })
            },
            TokenKind::LParen => {
                let line = self.tokens.advance().line;
                let expr = Box::new(self.parse_expression()?);
                self.expect(TokenKind::RParen)?;
                Ok(Factor::Parenthesized { expr, line })
            },
            _ => self.unexpected("factor"),
        }
    }
}
