use crate::interpreter::{
    evaluator::core::EvalResult,
    operator::{BinaryOperator, Precedence},
    parser::core::Parser,
    token::TokenKind,
};

const ADDITIVE: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus];
const MULTIPLICATIVE: &[TokenKind] = &[TokenKind::Times, TokenKind::Divide];
const NEGATION: &[TokenKind] = &[TokenKind::Minus];

impl Parser<'_, '_> {
    /// Parses and evaluates a full expression.
    ///
    /// An optional leading `-` negates the first term only, so `-2 + 3` is
    /// `1` and `-2 * 3` is `-6`. A `-` in front of any later term is read as
    /// the binary operator, which leaves `3 * -2` without a valid factor.
    ///
    /// The rule is: `expression := ["-"] term (("+" | "-") term)*`
    ///
    /// # Errors
    /// Propagates any error from the terms or from combining them.
    pub(super) fn parse_expression(&mut self) -> EvalResult<()> {
        let negation = match self.peek_kind() {
            Some(TokenKind::Minus) => Some(self.expect(NEGATION)?),
            _ => None,
        };

        self.parse_term()?;

        if let Some(minus) = negation {
            self.stack.negate(minus.position())?;
        }

        while let Some(op) = self.peek_operator(Precedence::Additive) {
            let token = self.expect(ADDITIVE)?;
            self.parse_term()?;
            self.stack.reduce(op, token.position())?;
        }
        Ok(())
    }

    /// Parses and evaluates a product or quotient chain.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    ///
    /// # Errors
    /// Propagates factor errors, and `DivisionByZero` when a right operand of
    /// `/` is zero.
    fn parse_term(&mut self) -> EvalResult<()> {
        self.parse_factor()?;

        while let Some(op) = self.peek_operator(Precedence::Multiplicative) {
            let token = self.expect(MULTIPLICATIVE)?;
            self.parse_factor()?;
            self.stack.reduce(op, token.position())?;
        }
        Ok(())
    }

    /// The lookahead as an operator of the given level, if it is one.
    fn peek_operator(&self, level: Precedence) -> Option<BinaryOperator> {
        self.peek_kind()
            .and_then(BinaryOperator::from_token_kind)
            .filter(|op| op.precedence() == level)
    }
}
