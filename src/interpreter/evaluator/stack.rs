use crate::{
    error::RuntimeError,
    interpreter::{operator::BinaryOperator, token::Position},
};

/// Last-in, first-out store of intermediate values for one evaluation.
///
/// Every grammar rule leaves exactly one value on the stack, so a complete
/// expression reduces to a single remaining value.
#[derive(Debug, Default)]
pub struct EvalStack {
    values: Vec<f64>,
}

impl EvalStack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Pushes a value.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Pops the most recent value.
    ///
    /// # Errors
    /// Returns [`RuntimeError::MissingOperand`] if the stack is empty.
    pub fn pop(&mut self, position: Position) -> Result<f64, RuntimeError> {
        self.values
            .pop()
            .ok_or(RuntimeError::MissingOperand { position })
    }

    /// Replaces the top value with its negation.
    ///
    /// # Errors
    /// Returns [`RuntimeError::MissingOperand`] if the stack is empty.
    pub fn negate(&mut self, position: Position) -> Result<(), RuntimeError> {
        let value = self.pop(position)?;
        self.push(-value);
        Ok(())
    }

    /// Pops the right operand, then the left one, and pushes `left op right`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::MissingOperand`] if fewer than two values are
    /// stacked, or whatever [`BinaryOperator::apply`] reports.
    pub fn reduce(&mut self, op: BinaryOperator, position: Position) -> Result<(), RuntimeError> {
        let right = self.pop(position)?;
        let left = self.pop(position)?;
        self.push(op.apply(left, right, position)?);
        Ok(())
    }

    /// Number of values currently stacked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is stacked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERE: Position = Position::new(1, 1);

    #[test]
    fn reduce_pops_right_then_left() {
        let mut stack = EvalStack::new();
        stack.push(8.0);
        stack.push(2.0);
        stack.reduce(BinaryOperator::Sub, HERE).unwrap();
        assert_eq!(stack.pop(HERE).unwrap(), 6.0);
        assert!(stack.is_empty());
    }

    #[test]
    fn division_by_zero_leaves_no_result() {
        let mut stack = EvalStack::new();
        stack.push(1.0);
        stack.push(-0.0);
        let err = stack.reduce(BinaryOperator::Div, HERE).unwrap_err();
        assert_eq!(err, RuntimeError::DivisionByZero { position: HERE });
        assert!(stack.is_empty());
    }

    #[test]
    fn negate_flips_the_top_value_only() {
        let mut stack = EvalStack::new();
        stack.push(3.0);
        stack.push(4.0);
        stack.negate(HERE).unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(HERE).unwrap(), -4.0);
        assert_eq!(stack.pop(HERE).unwrap(), 3.0);
    }

    #[test]
    fn popping_an_empty_stack_is_an_error() {
        let mut stack = EvalStack::new();
        assert_eq!(stack.pop(HERE),
                   Err(RuntimeError::MissingOperand { position: HERE }));
    }
}
