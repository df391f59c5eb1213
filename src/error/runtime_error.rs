#[derive(Debug)]
/// Represents all errors that can occur while executing a parsed program.
pub enum RuntimeError {
    /// A declared variable was read before any value was assigned to it.
    Uninitialized {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic result exceeded `i32::MAX`.
    Overflow {
        /// The expression being computed, as source text.
        expression: String,
        /// The source line where the error occurred.
        line:       usize,
    },
    /// An arithmetic result fell below `i32::MIN`.
    Underflow {
        /// The expression being computed, as source text.
        expression: String,
        /// The source line where the error occurred.
        line:       usize,
    },
    /// Console input for a `read` was not a 32-bit integer.
    ///
    /// This is reported to the user and the value is requested again; it is
    /// never returned from the evaluator.
    InvalidInput {
        /// The rejected input line.
        input: String,
        /// The source line of the `read` statement.
        line:  usize,
    },
    /// Console input ended while a `read` still needed a value.
    InputClosed {
        /// The variable that was being read.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading from or writing to the console failed.
    Io {
        /// The underlying I/O failure.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl RuntimeError {
    /// Line the error is attributed to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Uninitialized { line, .. }
            | Self::Overflow { line, .. }
            | Self::Underflow { line, .. }
            | Self::InvalidInput { line, .. }
            | Self::InputClosed { line, .. }
            | Self::Io { line, .. } => *line,
        }
    }

    /// Process exit code distinguishing each kind of runtime failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Uninitialized { .. } => 20,
            Self::Overflow { .. } => 21,
            Self::Underflow { .. } => 22,
            Self::InputClosed { .. } => 23,
            Self::Io { .. } => 24,
            Self::InvalidInput { .. } => 25,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized { name, line } => {
                write!(f, "Runtime error on line {line}: Variable {name} is uninitialized.")
            },
            Self::Overflow { expression, line } => write!(f,
                                                          "Runtime error on line {line}: Integer overflow while computing '{expression}'."),
            Self::Underflow { expression, line } => write!(f,
                                                           "Runtime error on line {line}: Integer underflow while computing '{expression}'."),
            Self::InvalidInput { input, line } => write!(f,
                                                         "Runtime error on line {line}: '{input}' is not a 32-bit integer, try again."),
            Self::InputClosed { name, line } => {
                write!(f, "Runtime error on line {line}: Input ended while reading {name}.")
            },
            Self::Io { source, line } => write!(f, "Runtime error on line {line}: I/O failure: {source}."),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
