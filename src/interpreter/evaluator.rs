/// Evaluator state and entry points.
///
/// Holds the variable bindings and configuration that persist across calls,
/// and drives a fresh parser for each expression.
pub mod core;

/// The evaluation stack.
///
/// Intermediate values pushed by the grammar rules and reduced by each binary
/// operator.
pub mod stack;
