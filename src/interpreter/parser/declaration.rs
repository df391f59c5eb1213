use crate::{
    ast::{Declaration, DeclarationList},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses consecutive `int` lines.
    ///
    /// Grammar: `decl_list := decl+`
    ///
    /// # Errors
    /// `EmptySequence` if no declaration is present, or any error from
    /// [`Self::parse_declaration`].
    pub(in crate::interpreter::parser) fn parse_declaration_list(&mut self)
                                                                 -> ParseResult<DeclarationList> {
        let line = self.tokens.current().line;
        let mut declarations = Vec::new();
        while self.check(TokenKind::Int) {
            declarations.push(self.parse_declaration()?);
        }

        if declarations.is_empty() {
            return Err(ParseError::EmptySequence { construct: "declaration list",
                                                   line });
        }
        Ok(DeclarationList { declarations,
                             line })
    }

    /// Parses one declaration line, declaring each name as it is read.
    ///
    /// Grammar: `decl := "int" id ("," id)* ";"`
    fn parse_declaration(&mut self) -> ParseResult<Declaration> {
        let line = self.expect(TokenKind::Int)?.line;
        let mut names = Vec::new();
        loop {
            let token = self.expect(TokenKind::Identifier)?;
            self.symbols.declare(&token.text, token.line)?;
            names.push(token.text);

            if !self.check(TokenKind::Comma) {
                break;
            }
            self.tokens.advance();
        }
        self.expect(TokenKind::Semicolon)?;

        Ok(Declaration { names, line })
    }
}
