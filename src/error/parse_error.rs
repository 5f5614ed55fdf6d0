use thiserror::Error;

use crate::interpreter::token::{Position, TokenKind};

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A character that does not start any token.
    #[error("Error on {position}: Unexpected character {character:?}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  Position,
    },
    /// A numeric lexeme that could not be converted to `f64`.
    ///
    /// Internal guard: every lexeme the number pattern accepts converts, so
    /// well-formed input never produces this.
    #[error("Error on {position}: Invalid number literal '{lexeme}'.")]
    InvalidNumber {
        /// The lexeme as written in the source.
        lexeme:   String,
        /// Where the lexeme starts.
        position: Position,
    },
    /// Found a token of the wrong kind at a match point.
    #[error("Error on {position}: Expected {} but found {found}.", describe_expected(.expected))]
    UnexpectedToken {
        /// The token kinds that would have been accepted.
        expected: &'static [TokenKind],
        /// The token kind actually found.
        found:    TokenKind,
        /// Position of the found token.
        position: Position,
    },
    /// The token stream ended while a token was still required.
    #[error("Error on {position}: Expected {} but found end of input.", describe_expected(.expected))]
    UnexpectedEndOfInput {
        /// The token kinds that would have been accepted.
        expected: &'static [TokenKind],
        /// Position just past the last character of the input.
        position: Position,
    },
    /// Tokens left over after a complete expression, when trailing input is
    /// rejected.
    #[error("Error on {position}: Extra tokens after expression, starting with {found}.")]
    TrailingInput {
        /// Kind of the first leftover token.
        found:    TokenKind,
        /// Position of the first leftover token.
        position: Position,
    },
    /// Parentheses nested deeper than the configured limit.
    #[error("Error on {position}: Parentheses nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Position of the `(` that crossed the limit.
        position: Position,
    },
}

impl ParseError {
    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::TrailingInput { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init = init.iter().map(ToString::to_string).collect::<Vec<_>>();
            format!("{} or {last}", init.join(", "))
        },
    }
}
