/// Parser state and token matching.
///
/// Holds the lookahead token, the evaluation stack and the nesting counter,
/// and provides the `expect` primitive every grammar rule is built on.
pub mod core;

/// Additive and multiplicative rules.
///
/// Implements `expression` and `term`, including the leading negation of the
/// first term.
pub mod binary;

/// Factor rule: groups, numbers and variables.
pub mod factor;
