use thiserror::Error as ThisError;

/// Parsing errors.
///
/// Defines the errors raised while turning source text into tokens and while
/// matching those tokens against the grammar: unexpected characters,
/// unexpected tokens, premature end of input and excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while computing a value, such as division by
/// zero or a reference to a variable that has no binding.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

use crate::interpreter::token::Position;

/// Any failure of a single evaluation.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Lexing or parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Computing the value failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Coarse classification of an [`Error`], for callers that branch on the
/// kind of failure rather than on its details.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character that starts no token.
    Lex,
    /// The tokens do not match the grammar.
    Syntax,
    /// An identifier without a binding.
    UndefinedVariable,
    /// A division whose right operand is zero.
    DivisionByZero,
    /// Parentheses nested past the configured limit.
    NestingTooDeep,
}

impl Error {
    /// Classifies the error.
    ///
    /// # Examples
    /// ```
    /// use stackcalc::{ErrorKind, evaluate};
    ///
    /// let err = evaluate("1 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::UnexpectedCharacter { .. } | ParseError::InvalidNumber { .. }) => {
                ErrorKind::Lex
            },
            Self::Parse(ParseError::UnexpectedToken { .. }
                        | ParseError::UnexpectedEndOfInput { .. }
                        | ParseError::TrailingInput { .. })
            | Self::Runtime(RuntimeError::MissingOperand { .. }) => ErrorKind::Syntax,
            Self::Parse(ParseError::NestingTooDeep { .. }) => ErrorKind::NestingTooDeep,
            Self::Runtime(RuntimeError::UndefinedVariable { .. }) => ErrorKind::UndefinedVariable,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
        }
    }

    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}
