use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Longest identifier the language accepts.
pub const MAX_IDENTIFIER_LEN: usize = 8;

/// The kind of a lexical token.
///
/// The declaration order is significant: [`TokenKind::code`] is derived from
/// it, and the comparison operators must stay contiguous between
/// [`TokenKind::NotEqual`] and [`TokenKind::Less`] so the parser can match
/// them as a range.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// `program`
    #[token("program")]
    Program,
    /// `begin`
    #[token("begin")]
    Begin,
    /// `end`
    #[token("end")]
    End,
    /// `int`
    #[token("int")]
    Int,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `loop`
    #[token("loop")]
    Loop,
    /// `read`
    #[token("read")]
    Read,
    /// `write`
    #[token("write")]
    Write,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Assign,
    /// `!`
    #[token("!")]
    Bang,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// Unsigned integer literal that fits in an `i32`, such as `42`.
    #[regex(r"[0-9][a-zA-Z0-9]*", is_number)]
    Number,
    /// Identifier such as `X` or `SUM2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", is_identifier)]
    Identifier,
    /// Terminal marker appended after the last real token.
    EndOfInput,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
}

impl TokenKind {
    /// Numeric code of the kind, starting at 1 for `program`.
    ///
    /// ```
    /// use core_lang::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::Program.code(), 1);
    /// assert_eq!(TokenKind::Less.code(), 30);
    /// assert_eq!(TokenKind::EndOfInput.code(), 33);
    /// ```
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8 + 1
    }

    /// Returns `true` for the six relational operators.
    #[must_use]
    pub fn is_comparison(self) -> bool {
        (Self::NotEqual..=Self::Less).contains(&self)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Program => "'program'",
            Self::Begin => "'begin'",
            Self::End => "'end'",
            Self::Int => "'int'",
            Self::If => "'if'",
            Self::Then => "'then'",
            Self::Else => "'else'",
            Self::While => "'while'",
            Self::Loop => "'loop'",
            Self::Read => "'read'",
            Self::Write => "'write'",
            Self::And => "'and'",
            Self::Or => "'or'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Assign => "'='",
            Self::Bang => "'!'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::NotEqual => "'!='",
            Self::EqualEqual => "'=='",
            Self::GreaterEqual => "'>='",
            Self::LessEqual => "'<='",
            Self::Greater => "'>'",
            Self::Less => "'<'",
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::EndOfInput => "end of input",
            Self::NewLine => "newline",
        };
        write!(f, "{text}")
    }
}

/// Additional information carried by the lexer during tokenization.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A single token with its literal text and source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The exact source slice the token was read from.
    pub text: String,
    /// Line on which the token starts.
    pub line: usize,
}

impl Token {
    /// Builds the terminal token reported at `line`.
    #[must_use]
    pub fn end_of_input(line: usize) -> Self {
        Self { kind: TokenKind::EndOfInput,
               text: "EOF".to_string(),
               line }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind.code())
    }
}

/// Splits `source` into tokens, terminated by a single
/// [`TokenKind::EndOfInput`].
///
/// # Errors
/// Returns [`ParseError::InvalidToken`] for any character or word that is
/// not part of the language, including malformed identifiers and numbers
/// that do not fit in an `i32`.
///
/// # Example
/// ```
/// use core_lang::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("int X;\nX = 12;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Int,
///                 TokenKind::Identifier,
///                 TokenKind::Semicolon,
///                 TokenKind::Identifier,
///                 TokenKind::Assign,
///                 TokenKind::Number,
///                 TokenKind::Semicolon,
///                 TokenKind::EndOfInput]);
/// assert_eq!(tokens[3].line, 2);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        if let Ok(kind) = kind {
            tokens.push(Token { kind,
                                text: lexer.slice().to_string(),
                                line: lexer.extras.line });
        } else {
            return Err(ParseError::InvalidToken { token: lexer.slice().to_string(),
                                                  line:  lexer.extras.line, });
        }
    }

    tokens.push(Token::end_of_input(lexer.extras.line));
    Ok(tokens)
}

/// Accepts digit runs whose value fits in an `i32`.
fn is_number(lex: &logos::Lexer<TokenKind>) -> bool {
    let slice = lex.slice();
    slice.bytes().all(|b| b.is_ascii_digit()) && slice.parse::<i32>().is_ok()
}

/// Accepts `[A-Z]+[0-9]*` of at most [`MAX_IDENTIFIER_LEN`] characters.
fn is_identifier(lex: &logos::Lexer<TokenKind>) -> bool {
    let slice = lex.slice();
    let digits_at = slice.find(|c: char| c.is_ascii_digit()).unwrap_or(slice.len());
    let (letters, digits) = slice.split_at(digits_at);

    slice.len() <= MAX_IDENTIFIER_LEN
    && !letters.is_empty()
    && letters.bytes().all(|b| b.is_ascii_uppercase())
    && digits.bytes().all(|b| b.is_ascii_digit())
}
