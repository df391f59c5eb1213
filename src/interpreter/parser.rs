/// Parser state and the program-level entry point.
///
/// Holds the token stream and the symbol table handle shared by every
/// grammar rule, and parses the outermost `program ... begin ... end` frame.
pub mod core;

/// Declaration parsing.
///
/// Parses `int` lines and registers each name in the symbol table as soon as
/// it is read.
pub mod declaration;

/// Statement parsing.
///
/// Handles statement lists, assignments, `if`, `while`, `read` and `write`.
pub mod statement;

/// Expression parsing.
///
/// Parses the right-recursive `+`/`-` and `*` chains and factors.
pub mod expression;

/// Condition parsing.
///
/// Parses comparisons, negation, and bracketed `and`/`or` conditions.
pub mod condition;

/// Shared helpers for the parser.
///
/// Token matching, the range match for comparison operators, and the
/// declared-identifier check.
pub mod utils;
