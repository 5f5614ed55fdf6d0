use std::fmt;

use crate::interpreter::token::Token;

const SEPARATOR_WIDTH: usize = 66;

/// Fixed-width table of tokens, one row per token.
///
/// Columns are the token type, its lexeme, and its line and column, each
/// right-aligned. Lexemes wider than their column are printed in full.
///
/// # Example
/// ```
/// use stackcalc::{TokenTable, tokenize};
///
/// let tokens = tokenize("x + 1").unwrap();
/// let table = TokenTable::new(&tokens).to_string();
/// assert!(table.contains("|  IDENTIFIER |                              x |      1 |      1 |"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TokenTable<'a> {
    tokens: &'a [Token],
}

impl<'a> TokenTable<'a> {
    /// Wraps a token slice for display.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens }
    }
}

impl fmt::Display for TokenTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "=".repeat(SEPARATOR_WIDTH);

        writeln!(f, "{separator}")?;
        writeln!(f, "| {:>11} | {:>30} | {:>6} | {:>6} |", "TYPE", "VALUE", "LINE", "COLUMN")?;
        writeln!(f, "{separator}")?;
        for token in self.tokens {
            let position = token.position();
            writeln!(f,
                     "| {:>11} | {:>30} | {:>6} | {:>6} |",
                     token.kind().name(),
                     token.lexeme(),
                     position.line,
                     position.column)?;
        }
        writeln!(f, "{separator}")
    }
}
