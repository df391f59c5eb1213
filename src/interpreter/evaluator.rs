/// Core evaluation logic and context management.
///
/// Contains the runtime context that ties the symbol table to the console,
/// and runs whole programs and blocks.
pub mod core;

/// Statement execution.
///
/// Assignment and the `if`/`while` control flow.
pub mod statement;

/// Console statements.
///
/// `read` prompts and retries until it gets a valid integer; `write` prints
/// `NAME = value` lines.
pub mod console;

/// Arithmetic evaluation with 32-bit range checks.
pub mod expression;

/// Boolean evaluation of conditions.
pub mod condition;
