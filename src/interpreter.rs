/// The evaluator module owns bindings and configuration across calls.
///
/// It creates a fresh parser for every expression, hands it the current
/// variable bindings, and reports the resulting value or error.
///
/// # Responsibilities
/// - Seeds the built-in constants `pi` and `e`.
/// - Merges caller bindings before each evaluation.
/// - Holds the evaluation stack used by the grammar rules.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw text and produces a lazy stream of tokens: numbers,
/// identifiers, the four arithmetic operators and parentheses. Spaces, tabs
/// and newlines are skipped, with newlines advancing the line counter.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Parses numeric literals, including fractions and exponents.
/// - Reports characters that start no token.
pub mod lexer;
/// Binary operators and their arithmetic.
pub mod operator;
/// The parser module recognizes the grammar and evaluates as it goes.
///
/// Each grammar rule is one method that pulls tokens with a single token of
/// lookahead and pushes its value onto the evaluation stack. No syntax tree
/// is built.
///
/// # Responsibilities
/// - Enforces precedence and left associativity of `+ -` and `* /`.
/// - Applies the leading negation of an expression's first term.
/// - Validates token order, reporting expected and found token kinds.
pub mod parser;
/// Token table rendering for diagnostics.
pub mod table;
/// Tokens and source positions shared by the lexer and parser.
pub mod token;
