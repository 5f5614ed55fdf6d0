//! # stackcalc
//!
//! stackcalc evaluates arithmetic expressions written as text. It supports
//! `+`, `-`, `*`, `/`, a leading unary minus, parentheses, numeric literals
//! and named variables, including the built-in constants `pi` and `e`.
//!
//! Evaluation happens in a single pass: a lazy lexer feeds a recursive
//! descent parser that computes each grammar rule's value on a stack as soon
//! as the rule is recognized.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every failure carries structured fields, such as the offending character,
/// the expected and found token kinds, or the undefined variable's name,
/// together with the source position.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Classifies errors into an [`ErrorKind`] callers can branch on.
/// - Formats errors with line and column for user feedback.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the token model, the lexer, the parser with its
/// evaluation stack, and the evaluator that owns variable bindings.
pub mod interpreter;

pub use error::{Error, ErrorKind, ParseError, RuntimeError};
pub use interpreter::{
    evaluator::core::{EvalResult, Evaluator, MAX_NESTING_DEPTH, TrailingInput},
    lexer::tokenize,
    parser::core::ParseResult,
    table::TokenTable,
    token::{Position, Token, TokenKind},
};

/// Evaluates an expression with only the built-in constants bound.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use stackcalc::evaluate;
///
/// assert_eq!(evaluate("8 / 3 * 2").unwrap(), 5.333333333333333);
/// assert_eq!(evaluate("-2 + 3").unwrap(), 1.0);
///
/// // Division by zero is an error, not an infinity.
/// assert!(evaluate("1 / (2 - 2)").is_err());
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    Evaluator::new().evaluate(expression)
}

/// Evaluates an expression with extra variable bindings.
///
/// Bindings take precedence over the built-in constants of the same name.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use stackcalc::evaluate_with;
///
/// let value = evaluate_with("a12C + b435", [("a12C", 19.23), ("b435", 29.123)]).unwrap();
/// assert_eq!(value, 48.353);
///
/// assert_eq!(evaluate_with("pi", [("pi", 1.0)]).unwrap(), 1.0);
/// ```
pub fn evaluate_with<I, K>(expression: &str, bindings: I) -> EvalResult<f64>
    where I: IntoIterator<Item = (K, f64)>,
          K: Into<String>
{
    Evaluator::new().evaluate_with(expression, bindings)
}
