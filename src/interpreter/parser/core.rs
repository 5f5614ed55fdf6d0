use std::collections::HashMap;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            core::{EvalResult, TrailingInput},
            stack::EvalStack,
        },
        lexer::Lexer,
        token::{Position, Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Single-pass recursive descent parser that evaluates as it recognizes.
///
/// The parser holds one token of lookahead, pulled lazily from the lexer, and
/// an [`EvalStack`] that each grammar rule pushes its value onto. No syntax
/// tree is built. A parser evaluates one expression and is then consumed.
///
/// Grammar, lowest precedence first:
/// ```text
///     expression := ["-"] term (("+" | "-") term)*
///     term       := factor (("*" | "/") factor)*
///     factor     := "(" expression ")" | NUMBER | IDENTIFIER
/// ```
pub struct Parser<'src, 'vars> {
    lexer:            Lexer<'src>,
    lookahead:        Option<Token>,
    pub(super) stack: EvalStack,
    variables:        &'vars HashMap<String, f64>,
    max_depth:        usize,
    depth:            usize,
}

impl<'src, 'vars> Parser<'src, 'vars> {
    /// Creates a parser over `source` and reads the first lookahead token.
    ///
    /// # Parameters
    /// - `source`: The expression text.
    /// - `variables`: Bindings used to resolve identifiers.
    /// - `max_depth`: Maximum number of simultaneously open parentheses.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be scanned.
    pub fn new(source: &'src str,
               variables: &'vars HashMap<String, f64>,
               max_depth: usize)
               -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let lookahead = lexer.next().transpose()?;

        Ok(Self { lexer,
                  lookahead,
                  stack: EvalStack::new(),
                  variables,
                  max_depth,
                  depth: 0 })
    }

    /// Evaluates one complete expression and returns its value.
    ///
    /// With [`TrailingInput::Ignore`], tokens after the expression are left
    /// unread. With [`TrailingInput::Reject`], the first of them is reported.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or runtime error encountered.
    pub fn evaluate(mut self, trailing_input: TrailingInput) -> EvalResult<f64> {
        self.parse_expression()?;

        if trailing_input == TrailingInput::Reject
           && let Some(token) = &self.lookahead
        {
            return Err(ParseError::TrailingInput { found:    token.kind(),
                                                   position: token.position(), }.into());
        }

        let position = self.here();
        let result = self.stack.pop(position)?;
        debug_assert!(self.stack.is_empty(), "expression left extra values behind");
        Ok(result)
    }

    /// Kind of the lookahead token, `None` at end of input.
    pub(super) fn peek_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(Token::kind)
    }

    /// Position of the lookahead token, or of the end of input.
    pub(super) fn here(&self) -> Position {
        self.lookahead
            .as_ref()
            .map_or_else(|| self.lexer.end_position(), Token::position)
    }

    /// Consumes the lookahead if its kind is one of `expected`.
    ///
    /// The next token is pulled immediately, so a lexical error right after a
    /// matched token surfaces here.
    ///
    /// # Returns
    /// The consumed token.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the lookahead has another kind.
    /// - `UnexpectedEndOfInput` if there is no lookahead.
    /// - Any lexical error from scanning the next token.
    pub(super) fn expect(&mut self, expected: &'static [TokenKind]) -> ParseResult<Token> {
        let token = match self.lookahead.take() {
            Some(token) if expected.contains(&token.kind()) => token,
            other => {
                self.lookahead = other;
                return Err(self.unexpected(expected));
            },
        };
        self.lookahead = self.lexer.next().transpose()?;
        Ok(token)
    }

    /// Builds the error for a lookahead that is not one of `expected`.
    pub(super) fn unexpected(&self, expected: &'static [TokenKind]) -> ParseError {
        match &self.lookahead {
            Some(token) => ParseError::UnexpectedToken { expected,
                                                         found: token.kind(),
                                                         position: token.position() },
            None => ParseError::UnexpectedEndOfInput { expected,
                                                       position: self.lexer.end_position() },
        }
    }

    /// Records an opening parenthesis at `position`.
    ///
    /// # Errors
    /// Returns `NestingTooDeep` once more than `max_depth` groups are open.
    pub(super) fn enter_group(&mut self, position: Position) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    position });
        }
        self.depth += 1;
        Ok(())
    }

    /// Records a closing parenthesis.
    pub(super) fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Resolves a variable by exact name.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if `name` has no binding.
    pub(super) fn lookup(&self, name: &str, position: Position) -> Result<f64, RuntimeError> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             position })
    }
}
