use tracing::debug;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{lexer::TokenKind, symbol_table::SymbolTable, token_stream::TokenStream},
};

/// Result type used by the lexer and parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser with one token of lookahead.
///
/// Semantic checks happen in the same pass as parsing: every identifier is
/// checked against the symbol table the moment its token is consumed, so the
/// first error in token order is the one reported, whether it is a syntax or
/// a context error.
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) tokens:  TokenStream,
    pub(in crate::interpreter::parser) symbols: &'a mut SymbolTable,
}

impl<'a> Parser<'a> {
    /// Creates a parser reading `tokens` and declaring into `symbols`.
    pub const fn new(tokens: TokenStream, symbols: &'a mut SymbolTable) -> Self {
        Self { tokens, symbols }
    }

    /// Parses a complete program.
    ///
    /// Grammar: `program := "program" decl_list "begin" stmt_list "end" EOF`
    ///
    /// # Errors
    /// Returns the first syntax or context error met in token order.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let line = self.expect(TokenKind::Program)?.line;
        let declarations = self.parse_declaration_list()?;
        self.expect(TokenKind::Begin)?;
        let statements = self.parse_statement_list()?;
        self.expect(TokenKind::End)?;
        self.expect(TokenKind::EndOfInput)?;

        debug!(variables = self.symbols.len(),
               statements = statements.statements.len(),
               "parsed program");

        Ok(Program { declarations,
                     statements,
                     line })
    }
}

/// Parses `tokens` into a [`Program`], filling `symbols` with its
/// declarations.
///
/// # Errors
/// Returns the first syntax or context error met in token order.
///
/// # Example
/// ```
/// use core_lang::interpreter::{
///     parser::core::parse_program, symbol_table::SymbolTable, token_stream::TokenStream,
/// };
///
/// let tokens = TokenStream::from_source("program int X; begin X = 1; end").unwrap();
/// let mut symbols = SymbolTable::new();
/// let program = parse_program(tokens, &mut symbols).unwrap();
///
/// assert!(symbols.contains("X"));
/// assert_eq!(program.statements.statements.len(), 1);
/// ```
pub fn parse_program(tokens: TokenStream, symbols: &mut SymbolTable) -> ParseResult<Program> {
    debug!("parsing program");
    Parser::new(tokens, symbols).parse_program()
}
