use log::debug;

use crate::{
    ast::expressions::{BinaryOperator, Expr},
    errors::errors::Error,
    lexer::{
        source::TokenSource,
        tokens::{Literal, TokenKind},
    },
};

use super::parser::Parser;

// expr   -> term (('+' | '-') term)*
// term   -> factor ('*' factor)*
// factor -> INTEGER | BOOLEAN
//
// Precedence comes from which rule calls which; each loop folds to the left.
impl<S: TokenSource> Parser<S> {
    /// Parses an additive expression, the root of the grammar.
    pub fn parse_expr(&mut self) -> Result<Expr, Error> {
        debug!("parse_expr at {}", self.current_token_kind());

        let mut lhs = self.parse_term()?;

        loop {
            let operator = match BinaryOperator::from_token_kind(self.current_token_kind()) {
                Some(operator @ (BinaryOperator::Plus | BinaryOperator::Minus)) => operator,
                _ => break,
            };
            self.advance();

            let rhs = self.parse_term()?;
            lhs = Expr::binary(lhs, operator, rhs);
        }

        Ok(lhs)
    }

    /// Parses a multiplicative expression.
    pub fn parse_term(&mut self) -> Result<Expr, Error> {
        debug!("parse_term at {}", self.current_token_kind());

        let mut lhs = self.parse_factor()?;

        while self.peek_is(TokenKind::Star) {
            self.advance();
            let rhs = self.parse_factor()?;
            lhs = Expr::binary(lhs, BinaryOperator::Multiply, rhs);
        }

        Ok(lhs)
    }

    /// Parses a single literal.
    pub(crate) fn parse_factor(&mut self) -> Result<Expr, Error> {
        debug!("parse_factor at {}", self.current_token_kind());

        let expr = match (self.current_token_kind(), self.current_token().literal) {
            (TokenKind::Integer, Some(Literal::Integer(value))) => Expr::Integer(value),
            (TokenKind::Boolean, Some(Literal::Boolean(value))) => Expr::Boolean(value),
            _ => return Err(self.unexpected("parse_factor")),
        };

        self.advance();
        Ok(expr)
    }
}
