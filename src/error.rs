/// Parsing errors.
///
/// Defines every failure detected before execution: invalid tokens, grammar
/// violations, and the declaration checks performed while parsing.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a program,
/// such as reading an uninitialized variable or leaving the 32-bit range.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a full program run, parse or execution.
#[derive(Debug)]
pub enum CoreError {
    /// The program was rejected before it ran.
    Parse(ParseError),
    /// The program failed while running.
    Runtime(RuntimeError),
}

impl CoreError {
    /// Line the error is attributed to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }

    /// Non-zero process exit code for this failure.
    ///
    /// ```
    /// use core_lang::error::{CoreError, ParseError};
    ///
    /// let err: CoreError = ParseError::Undeclared { name: "X".to_string(),
    ///                                               line: 3, }.into();
    /// assert_eq!(err.exit_code(), 14);
    /// assert_eq!(err.line(), 3);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Parse(e) => e.exit_code(),
            Self::Runtime(e) => e.exit_code(),
        }
    }
}

impl From<ParseError> for CoreError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for CoreError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
