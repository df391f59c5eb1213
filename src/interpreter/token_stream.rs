use crate::interpreter::{
    lexer::{Token, TokenKind, tokenize},
    parser::core::ParseResult,
};

/// A finite, single-lookahead sequence of tokens.
///
/// The stream always ends with an [`TokenKind::EndOfInput`] token, and once
/// it is reached every further read observes that same terminal token.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens:   Vec<Token>,
    position: usize,
}

impl TokenStream {
    /// Wraps `tokens`, appending an end-of-input marker if it is missing.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::EndOfInput) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::end_of_input(line));
        }
        Self { tokens,
               position: 0 }
    }

    /// Lexes `source` and wraps the result.
    ///
    /// # Errors
    /// Propagates [`crate::error::ParseError::InvalidToken`] from the lexer.
    pub fn from_source(source: &str) -> ParseResult<Self> {
        Ok(Self::new(tokenize(source)?))
    }

    /// The token under the cursor.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// Returns the current token and moves past it.
    ///
    /// At end of input the cursor does not move, so the terminal token is
    /// returned again.
    ///
    /// ```
    /// use core_lang::interpreter::{lexer::TokenKind, token_stream::TokenStream};
    ///
    /// let mut stream = TokenStream::from_source("end").unwrap();
    /// assert_eq!(stream.advance().kind, TokenKind::End);
    /// assert_eq!(stream.advance().kind, TokenKind::EndOfInput);
    /// assert_eq!(stream.advance().kind, TokenKind::EndOfInput);
    /// assert_eq!(stream.current().kind, TokenKind::EndOfInput);
    /// ```
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.position].clone();
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// Kind of the current token.
    #[must_use]
    pub fn peek_kind(&self) -> TokenKind {
        self.current().kind
    }
}
