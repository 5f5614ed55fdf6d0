use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::token::{Position, TokenKind},
};

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Binding strength of a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `+` and `-`
    Additive,
    /// `*` and `/`
    Multiplicative,
}

impl BinaryOperator {
    /// Maps a token kind to the operator it spells, if any.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::{operator::BinaryOperator, token::TokenKind};
    ///
    /// assert_eq!(BinaryOperator::from_token_kind(TokenKind::Times), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_token_kind(TokenKind::LeftParen), None);
    /// ```
    #[must_use]
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Times => Some(Self::Mul),
            TokenKind::Divide => Some(Self::Div),
            TokenKind::Number
            | TokenKind::Identifier
            | TokenKind::LeftParen
            | TokenKind::RightParen => None,
        }
    }

    /// The precedence level the operator belongs to.
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Additive,
            Self::Mul | Self::Div => Precedence::Multiplicative,
        }
    }

    /// Combines two operands.
    ///
    /// Division by exactly zero (either sign) is an error instead of an
    /// infinity or NaN.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] at `position` when dividing by
    /// zero.
    pub fn apply(self, left: f64, right: f64, position: Position) -> Result<f64, RuntimeError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                Ok(left / right)
            },
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}
