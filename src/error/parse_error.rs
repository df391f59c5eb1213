#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Syntax errors and context errors (declaration checks) share this type
/// because both are raised in the same single pass over the tokens.
pub enum ParseError {
    /// The lexer met a character or word that is not part of the language.
    InvalidToken {
        /// The offending source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The current token cannot start or continue the construct being parsed,
    /// including a premature end of input.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The text of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A specific token kind was required but a different one was found.
    ConsumeMismatch {
        /// The required token.
        expected: String,
        /// The text of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An identifier was declared a second time.
    Redeclared {
        /// The identifier name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An identifier was used without being declared first.
    Undeclared {
        /// The identifier name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The symbol table is already full.
    NoMoreDeclarations {
        /// The identifier that did not fit.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A declaration list or statement list contained nothing.
    EmptySequence {
        /// Which kind of list was empty.
        construct: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl ParseError {
    /// Line the error is attributed to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidToken { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::ConsumeMismatch { line, .. }
            | Self::Redeclared { line, .. }
            | Self::Undeclared { line, .. }
            | Self::NoMoreDeclarations { line, .. }
            | Self::EmptySequence { line, .. } => *line,
        }
    }

    /// Process exit code distinguishing each kind of parse failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidToken { .. } => 10,
            Self::UnexpectedToken { .. } => 11,
            Self::ConsumeMismatch { .. } => 12,
            Self::Redeclared { .. } => 13,
            Self::Undeclared { .. } => 14,
            Self::NoMoreDeclarations { .. } => 15,
            Self::EmptySequence { .. } => 16,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { token, line } => {
                write!(f, "Syntax error on line {line}: Invalid token '{token}'.")
            },
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => write!(f,
                                                      "Syntax error on line {line}: Expected {expected}, got '{found}'."),
            Self::ConsumeMismatch { expected,
                                    found,
                                    line, } => write!(f,
                                                      "Syntax error on line {line}: Expected token {expected}, got '{found}'."),
            Self::Redeclared { name, line } => {
                write!(f, "Context error on line {line}: {name} already declared.")
            },
            Self::Undeclared { name, line } => {
                write!(f, "Context error on line {line}: Using undeclared variable {name}.")
            },
            Self::NoMoreDeclarations { name, line } => write!(f,
                                                              "Context error on line {line}: Cannot declare {name}, the limit of {} variables is reached.",
                                                              crate::interpreter::symbol_table::MAX_DECLARATIONS),
            Self::EmptySequence { construct, line } => {
                write!(f, "Syntax error on line {line}: Empty {construct}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
