//! # core_lang
//!
//! `core_lang` is an interpreter for CORE, a small imperative teaching
//! language. Programs declare 32-bit integer variables and then run
//! assignments, `if`/`while` control flow and console `read`/`write`
//! statements.
//!
//! The pipeline is lexer, recursive-descent parser with inline declaration
//! checks, and a tree-walking evaluator that reports overflow, underflow and
//! uninitialized reads. A pretty-printer renders a parsed tree back in
//! canonical form.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::{
    ast::Program,
    error::{CoreError, ParseError},
    interpreter::{
        evaluator::core::Context,
        lexer::{Token, tokenize},
        parser::core::parse_program,
        printer::pretty_print,
        symbol_table::SymbolTable,
        token_stream::TokenStream,
    },
};

/// Defines the structure of parsed programs.
///
/// This module declares the program, statement, expression and condition
/// types produced by the parser. Every node records the source line it
/// started on so the evaluator can attribute runtime errors.
///
/// # Responsibilities
/// - Mirrors the CORE grammar one node type per production.
/// - Keeps expression chains right-leaning, exactly as parsed.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Parse errors cover lexical, syntax and declaration (context) failures.
/// Runtime errors cover arithmetic range failures, uninitialized reads and
/// console problems. Both carry the line number they were raised on.
///
/// # Responsibilities
/// - Defines one error enum per phase and a wrapper joining the two.
/// - Maps every error kind to a distinct process exit code.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and printing.
///
/// # Responsibilities
/// - Coordinates the lexer, token stream, parser, symbol table and evaluator.
/// - Exposes each phase on its own for tools and tests.
pub mod interpreter;
/// General utilities for checked numeric conversion.
pub mod util;

/// Splits `source` into tokens, ending with the end-of-input token.
///
/// # Errors
/// Returns `ParseError::InvalidToken` for the first malformed lexeme.
///
/// # Examples
/// ```
/// use core_lang::tokenize_source;
///
/// let codes: Vec<u8> = tokenize_source("program int X;").unwrap()
///                                                       .iter()
///                                                       .map(|token| token.kind.code())
///                                                       .collect();
/// assert_eq!(codes, vec![1, 4, 32, 14, 33]);
/// ```
pub fn tokenize_source(source: &str) -> Result<Vec<Token>, ParseError> {
    tokenize(source)
}

/// Parses `source` into a program, declaring its variables in `symbols`.
///
/// # Errors
/// Returns the first lexical, syntax or declaration error found.
///
/// # Examples
/// ```
/// use core_lang::{error::ParseError, interpreter::symbol_table::SymbolTable, parse_source};
///
/// let mut symbols = SymbolTable::new();
/// assert!(parse_source("program int X; begin X = 1; end", &mut symbols).is_ok());
///
/// let mut symbols = SymbolTable::new();
/// let err = parse_source("program int X; begin Y = 1; end", &mut symbols).unwrap_err();
/// assert!(matches!(err, ParseError::Undeclared { .. }));
/// ```
pub fn parse_source(source: &str, symbols: &mut SymbolTable) -> Result<Program, ParseError> {
    parse_program(TokenStream::from_source(source)?, symbols)
}

/// Parses `source` and renders it in canonical form.
///
/// # Errors
/// Returns any error [`parse_source`] would.
pub fn print_source(source: &str) -> Result<String, ParseError> {
    let mut symbols = SymbolTable::new();
    let program = parse_source(source, &mut symbols)?;
    Ok(pretty_print(&program))
}

/// Parses and runs `source`, reading `read` values from `input` and
/// writing prompts and `write` lines to `output`.
///
/// Nothing runs unless the whole program parses.
///
/// # Errors
/// Returns the parse error, or the first runtime error raised while running.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use core_lang::run_source;
///
/// let source = "program int X; begin X = 5; if ( X > 3 ) then write X; end; end";
/// let mut output = Vec::new();
/// run_source(source, Cursor::new(""), &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "X = 5\n");
///
/// // 'Y' is read before it is ever assigned.
/// let source = "program int X, Y; begin X = Y; end";
/// let err = run_source(source, Cursor::new(""), Vec::new()).unwrap_err();
/// assert_eq!(err.exit_code(), 20);
/// ```
pub fn run_source<R, W>(source: &str, input: R, output: W) -> Result<(), CoreError>
    where R: BufRead,
          W: Write
{
    let mut symbols = SymbolTable::new();
    let program = parse_source(source, &mut symbols)?;
    Context::new(&mut symbols, input, output).exec_program(&program)?;
    Ok(())
}
