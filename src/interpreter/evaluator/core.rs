use std::{
    collections::HashMap,
    f64::consts::{E, PI},
};

use tracing::debug;

use crate::{error::Error, interpreter::parser::core::Parser};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an [`Error`]
/// describing the failure.
pub type EvalResult<T> = Result<T, Error>;

/// Default limit on simultaneously open parentheses.
pub const MAX_NESTING_DEPTH: usize = 256;

/// What to do with tokens that follow a complete expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TrailingInput {
    /// Leave them unread; `1 + 1 )` evaluates to `2`.
    #[default]
    Ignore,
    /// Report the first of them as a syntax error.
    Reject,
}

/// Stores the evaluation state that outlives a single call.
///
/// This struct owns the variable bindings and the parser configuration.
/// Bindings start with the constants `pi` and `e` and accumulate across calls
/// to [`Evaluator::evaluate_with`] and [`Evaluator::bind`]; a later binding of
/// the same name replaces the earlier one, built-ins included.
///
/// ## Usage
///
/// ```
/// use stackcalc::Evaluator;
///
/// let mut evaluator = Evaluator::new();
/// assert_eq!(evaluator.evaluate_with("x * 2", [("x", 4.0)]).unwrap(), 8.0);
///
/// // `x` is still bound for later calls.
/// assert_eq!(evaluator.evaluate("x + 1").unwrap(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    /// Variable bindings keyed by exact, case-sensitive name.
    variables:      HashMap<String, f64>,
    /// Maximum number of simultaneously open parentheses.
    max_depth:      usize,
    /// Handling of tokens after a complete expression.
    trailing_input: TrailingInput,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with `pi` and `e` bound, the default nesting limit
    /// and trailing input ignored.
    #[must_use]
    pub fn new() -> Self {
        let variables = HashMap::from([("pi".to_string(), PI), ("e".to_string(), E)]);
        Self { variables,
               max_depth: MAX_NESTING_DEPTH,
               trailing_input: TrailingInput::default() }
    }

    /// Sets the maximum number of simultaneously open parentheses.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets how tokens after a complete expression are handled.
    #[must_use]
    pub fn with_trailing_input(mut self, trailing_input: TrailingInput) -> Self {
        self.trailing_input = trailing_input;
        self
    }

    /// Binds `name` to `value`, returning the value it replaced.
    pub fn bind(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        let name = name.into();
        debug!(name = %name, value, "binding variable");
        self.variables.insert(name, value)
    }

    /// Looks up a single binding.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// All current bindings.
    #[must_use]
    pub const fn variables(&self) -> &HashMap<String, f64> {
        &self.variables
    }

    /// Evaluates `expression` against the current bindings.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or runtime error; see
    /// [`crate::ErrorKind`] for the categories.
    pub fn evaluate(&self, expression: &str) -> EvalResult<f64> {
        debug!(expression, "evaluating expression");

        let result = Parser::new(expression, &self.variables, self.max_depth)
            .map_err(Error::from)
            .and_then(|parser| parser.evaluate(self.trailing_input));

        match &result {
            Ok(value) => debug!(value = *value, "evaluation finished"),
            Err(error) => debug!(%error, kind = ?error.kind(), "evaluation failed"),
        }
        result
    }

    /// Merges `bindings` into the evaluator, then evaluates `expression`.
    ///
    /// The bindings stay in place after the call, even if evaluation fails.
    ///
    /// # Errors
    /// Same as [`Evaluator::evaluate`].
    pub fn evaluate_with<I, K>(&mut self, expression: &str, bindings: I) -> EvalResult<f64>
        where I: IntoIterator<Item = (K, f64)>,
              K: Into<String>
    {
        for (name, value) in bindings {
            self.bind(name, value);
        }
        self.evaluate(expression)
    }
}
