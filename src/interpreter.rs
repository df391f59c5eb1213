/// The evaluator module executes a parsed program.
///
/// The evaluator walks the tree statement by statement, updates the symbol
/// table and talks to the console for `read` and `write`.
///
/// # Responsibilities
/// - Evaluates expressions in 32-bit arithmetic with range checks.
/// - Runs `if` and `while` control flow.
/// - Reports uninitialized reads, overflow, underflow and console failures.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens for reserved
/// words, symbols, integer literals and identifiers, each tagged with the
/// line it appeared on.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Enforces the identifier and integer literal shapes.
/// - Reports the first malformed lexeme as an invalid token.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// Parsing is recursive descent with one production per grammar rule.
/// Declarations are registered in the symbol table as they are parsed and
/// every later identifier use is checked against it.
///
/// # Responsibilities
/// - Converts tokens into program, statement, expression and condition nodes.
/// - Reports syntax and declaration errors with their line.
pub mod parser;
/// Renders a syntax tree back to canonical source text.
pub mod printer;
/// Variables known to a program and their current values.
pub mod symbol_table;
/// Cursor over the token sequence consumed by the parser.
pub mod token_stream;
