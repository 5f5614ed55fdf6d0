use thiserror::Error;

use crate::interpreter::token::Position;

/// Represents all errors that can occur while computing a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to use a variable that has no binding.
    #[error("Error on {position}: Unknown variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Position of the identifier.
        position: Position,
    },
    /// The right operand of a division evaluated to zero.
    #[error("Error on {position}: Division by zero.")]
    DivisionByZero {
        /// Position of the `/` operator.
        position: Position,
    },
    /// The evaluation stack held fewer values than an operation needed.
    ///
    /// Internal guard: the grammar pushes one value per operand, so a
    /// completed parse never runs short. Classified as a syntax error.
    #[error("Error on {position}: Value missing.")]
    MissingOperand {
        /// Position of the operation that ran short.
        position: Position,
    },
}

impl RuntimeError {
    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UndefinedVariable { position, .. }
            | Self::DivisionByZero { position }
            | Self::MissingOperand { position } => *position,
        }
    }
}
