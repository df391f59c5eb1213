use crate::{
    ast::{Comparison, Condition},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a condition.
    ///
    /// Grammar:
    /// ```text
    ///     cond := comparison
    ///           | "!" cond
    ///           | "[" cond ("and" | "or") cond "]"
    /// ```
    ///
    /// # Errors
    /// `UnexpectedToken` if the current token cannot start a condition or a
    /// bracketed condition lacks `and`/`or`; otherwise any nested error.
    pub fn parse_condition(&mut self) -> ParseResult<Condition> {
        match self.tokens.peek_kind() {
            TokenKind::LParen => Ok(Condition::Comparison(self.parse_comparison()?)),
            TokenKind::Bang => {
                let line = self.tokens.advance().line;
                let condition = Box::new(self.parse_condition()?);
                Ok(Condition::Not { condition, line })
            },
            TokenKind::LBracket => {
                let line = self.tokens.advance().line;
                let left = Box::new(self.parse_condition()?);

                let is_and = match self.tokens.peek_kind() {
                    TokenKind::And => true,
                    TokenKind::Or => false,
                    _ => return self.unexpected("'and' or 'or'"),
                };
                self.tokens.advance();

                let right = Box::new(self.parse_condition()?);
                self.expect(TokenKind::RBracket)?;

                if is_and {
                    Ok(Condition::And { left, right, line })
                } else {
                    Ok(Condition::Or { left, right, line })
                }
            },
            _ => self.unexpected("condition"),
        }
    }

    /// Grammar: `comparison := "(" factor comp_op factor ")"`
    fn parse_comparison(&mut self) -> ParseResult<Comparison> {
        let line = self.expect(TokenKind::LParen)?.line;
        let left = self.parse_factor()?;
        let op = self.expect_comparison()?;
        let right = self.parse_factor()?;
        self.expect(TokenKind::RParen)?;

        Ok(Comparison { op,
                        left,
                        right,
                        line })
    }
}
