use crate::{
    error::ParseError,
    interpreter::{evaluator::core::EvalResult, parser::core::Parser, token::TokenKind},
};

const FACTOR_START: &[TokenKind] = &[TokenKind::LeftParen, TokenKind::Number, TokenKind::Identifier];

impl Parser<'_, '_> {
    /// Parses and evaluates a factor.
    ///
    /// Grammar:
    /// ```text
    ///     factor := "(" expression ")"
    ///             | NUMBER
    ///             | IDENTIFIER
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedToken` or `UnexpectedEndOfInput` when the lookahead cannot
    ///   start a factor.
    /// - `UndefinedVariable` for an identifier without a binding.
    pub(super) fn parse_factor(&mut self) -> EvalResult<()> {
        match self.peek_kind() {
            Some(TokenKind::LeftParen) => self.parse_group(),
            Some(TokenKind::Number) => {
                let token = self.expect(&[TokenKind::Number])?;
                let Some(value) = token.literal() else {
                    return Err(ParseError::InvalidNumber { lexeme:   token.lexeme().to_string(),
                                                           position: token.position(), }.into());
                };
                self.stack.push(value);
                Ok(())
            },
            Some(TokenKind::Identifier) => {
                let token = self.expect(&[TokenKind::Identifier])?;
                let value = self.lookup(token.lexeme(), token.position())?;
                self.stack.push(value);
                Ok(())
            },
            Some(TokenKind::Plus
                 | TokenKind::Minus
                 | TokenKind::Times
                 | TokenKind::Divide
                 | TokenKind::RightParen)
            | None => Err(self.unexpected(FACTOR_START).into()),
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// The inner expression may start with its own leading `-`.
    fn parse_group(&mut self) -> EvalResult<()> {
        let open = self.expect(&[TokenKind::LeftParen])?;
        self.enter_group(open.position())?;
        self.parse_expression()?;
        self.expect(&[TokenKind::RightParen])?;
        self.leave_group();
        Ok(())
    }
}
