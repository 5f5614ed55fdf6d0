use std::num::ParseFloatError;

use logos::Logos;
use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        token::{Position, Token, TokenKind},
    },
};

/// Raw scanner output, before positions and lexemes are attached.
///
/// Spaces and tabs are skipped. Newlines are skipped too, but bump the line
/// counter kept in [`LexerExtras`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t]+")]
enum RawToken {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// Identifier tokens, such as `x`, `a12C` or `π`.
    ///
    /// Any Unicode letter or `_` starts one; letters, numeric characters and
    /// `_` continue it. Number literals stay ASCII-only.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line      += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    Newline,
}

/// Failure reported by the raw scanner.
#[derive(Debug, Default, Clone, PartialEq)]
enum LexFault {
    /// Nothing matched at the current position.
    #[default]
    UnexpectedCharacter,
    /// A numeric lexeme did not convert to `f64`.
    InvalidNumber,
}

impl From<ParseFloatError> for LexFault {
    fn from(_: ParseFloatError) -> Self {
        Self::InvalidNumber
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so that
/// columns can be computed for any token on that line.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// The current 1-based line number.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

fn parse_float(lex: &logos::Lexer<RawToken>) -> Result<f64, ParseFloatError> {
    lex.slice().parse()
}

/// Lazy token stream over a source string.
///
/// Each call to `next` scans just far enough to produce one token, so a bad
/// character is only reported once the consumer asks for it. After the first
/// error the stream should be abandoned.
///
/// # Examples
/// ```
/// use stackcalc::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let kinds = Lexer::new("2 * (x + 1)").map(|token| token.map(|t| t.kind()))
///                                      .collect::<Result<Vec<_>, _>>()
///                                      .unwrap();
/// assert_eq!(kinds,
///            [TokenKind::Number,
///             TokenKind::Times,
///             TokenKind::LeftParen,
///             TokenKind::Identifier,
///             TokenKind::Plus,
///             TokenKind::Number,
///             TokenKind::RightParen]);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: RawToken::lexer_with_extras(source, LexerExtras::default()) }
    }

    /// Position just past the last character scanned so far.
    ///
    /// Once the stream is exhausted this is the end of the input.
    #[must_use]
    pub fn end_position(&self) -> Position {
        self.position_at(self.inner.source().len())
    }

    fn position_at(&self, offset: usize) -> Position {
        let LexerExtras { line, line_start } = self.inner.extras;
        let column = self.inner.source()[line_start..offset].chars().count() + 1;
        Position::new(line, column)
    }
}

impl Iterator for Lexer<'_> {
    type Item = ParseResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.inner.next()?;
        let start = self.inner.span().start;
        let position = self.position_at(start);

        if let Err(LexFault::UnexpectedCharacter) = raw {
            // The error span may end inside a multi-byte character.
            let character = self.inner.source()[start..].chars()
                                                        .next()
                                                        .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Some(Err(ParseError::UnexpectedCharacter { character, position }));
        }

        let slice = self.inner.slice();

        let kind = match raw {
            Ok(RawToken::Number(value)) => {
                trace!(lexeme = slice, value, %position, "number");
                return Some(Ok(Token::number(slice, value, position)));
            },
            Ok(RawToken::Identifier) => TokenKind::Identifier,
            Ok(RawToken::Plus) => TokenKind::Plus,
            Ok(RawToken::Minus) => TokenKind::Minus,
            Ok(RawToken::Star) => TokenKind::Times,
            Ok(RawToken::Slash) => TokenKind::Divide,
            Ok(RawToken::LParen) => TokenKind::LeftParen,
            Ok(RawToken::RParen) => TokenKind::RightParen,
            // Skipped by its callback, never yielded.
            Ok(RawToken::Newline) => return self.next(),
            Err(_) => {
                return Some(Err(ParseError::InvalidNumber { lexeme: slice.to_string(),
                                                            position }));
            },
        };

        trace!(kind = kind.name(), lexeme = slice, %position, "token");
        Some(Ok(Token::new(kind, slice, position)))
    }
}

/// Scans the whole of `source` into a vector of tokens.
///
/// Stops at the first lexical error.
///
/// # Errors
/// Returns [`ParseError::UnexpectedCharacter`] for a character that starts no
/// token.
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    Lexer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().iter().map(Token::kind).collect()
    }

    #[test]
    fn numbers_take_every_supported_shape() {
        let tokens = tokenize("42 3.25 .5 2e3 1.5E-2 7e+1").unwrap();
        let values = tokens.iter().map(|t| t.literal().unwrap()).collect::<Vec<_>>();
        assert_eq!(values, [42.0, 3.25, 0.5, 2000.0, 0.015, 70.0]);
        assert!(tokens.iter().all(|t| t.kind() == TokenKind::Number));
    }

    #[test]
    fn identifiers_are_maximal() {
        let tokens = tokenize("a12C _x b_2").unwrap();
        let lexemes = tokens.iter().map(Token::lexeme).collect::<Vec<_>>();
        assert_eq!(lexemes, ["a12C", "_x", "b_2"]);
        assert!(tokens.iter().all(|t| t.literal().is_none()));
    }

    #[test]
    fn identifiers_accept_unicode_letters() {
        let tokens = tokenize("é + π2 * x_ü").unwrap();
        let lexemes = tokens.iter()
                            .filter(|t| t.kind() == TokenKind::Identifier)
                            .map(Token::lexeme)
                            .collect::<Vec<_>>();
        assert_eq!(lexemes, ["é", "π2", "x_ü"]);
        // Columns count characters, not bytes.
        assert_eq!(tokens[2].position(), Position::new(1, 5));
    }

    #[test]
    fn number_followed_by_letters_splits() {
        assert_eq!(kinds("12abc"), [TokenKind::Number, TokenKind::Identifier]);
    }

    #[test]
    fn operators_and_parens() {
        assert_eq!(kinds("+-*/()"),
                   [TokenKind::Plus,
                    TokenKind::Minus,
                    TokenKind::Times,
                    TokenKind::Divide,
                    TokenKind::LeftParen,
                    TokenKind::RightParen]);
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let tokens = tokenize("1 +\n\t x").unwrap();
        let positions = tokens.iter().map(Token::position).collect::<Vec<_>>();
        assert_eq!(positions,
                   [Position::new(1, 1), Position::new(1, 3), Position::new(2, 3)]);
    }

    #[test]
    fn whitespace_only_input_has_no_tokens() {
        assert!(tokenize(" \t\n  \n").unwrap().is_empty());
    }

    #[test]
    fn end_position_follows_trailing_newlines() {
        let mut lexer = Lexer::new("1\n  ");
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_none());
        assert_eq!(lexer.end_position(), Position::new(2, 3));
    }

    #[test]
    fn unexpected_character_is_reported_with_position() {
        let err = tokenize("1 +\n  $").unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedCharacter { character: '$',
                                                     position:  Position::new(2, 3), });
    }

    #[test]
    fn trailing_dot_is_not_part_of_a_number() {
        let err = tokenize("1.").unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedCharacter { character: '.',
                                                     position:  Position::new(1, 2), });
    }
}
