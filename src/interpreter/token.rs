use std::fmt;

/// A location in the source text.
///
/// Lines and columns both start at 1. Columns count characters from the start
/// of the line, so a tab or a multi-byte character each advance it by one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// The 1-based line number.
    pub line:   usize,
    /// The 1-based column number.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The closed set of token categories.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal, such as `42`, `.5` or `2.1e-10`.
    Number,
    /// Variable name, such as `x` or `a12C`.
    Identifier,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl TokenKind {
    /// Upper-case name used in token tables.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::Identifier => "IDENTIFIER",
            Self::Plus => "OP_PLUS",
            Self::Minus => "OP_MINUS",
            Self::Times => "OP_TIMES",
            Self::Divide => "OP_DIVIDE",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Identifier => write!(f, "identifier"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Times => write!(f, "'*'"),
            Self::Divide => write!(f, "'/'"),
            Self::LeftParen => write!(f, "'('"),
            Self::RightParen => write!(f, "')'"),
        }
    }
}

/// A lexical token.
///
/// Tokens are produced once by the lexer and never modified. Only `Number`
/// tokens carry a literal value.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind:     TokenKind,
    lexeme:   String,
    literal:  Option<f64>,
    position: Position,
}

impl Token {
    /// Creates a token without a literal value.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: None,
               position }
    }

    /// Creates a `Number` token carrying its parsed value.
    #[must_use]
    pub fn number(lexeme: impl Into<String>, value: f64, position: Position) -> Self {
        Self { kind: TokenKind::Number,
               lexeme: lexeme.into(),
               literal: Some(value),
               position }
    }

    /// The category of the token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text of the token.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The numeric value of a `Number` token, `None` for every other kind.
    #[must_use]
    pub const fn literal(&self) -> Option<f64> {
        self.literal
    }

    /// Where the token starts.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }
}
