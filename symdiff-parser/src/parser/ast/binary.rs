use crate::{
    parser::{
        ast::{expr::Expr, unary::parse_factor},
        error::Error,
        token::op::BinOpKind,
        Parser,
    },
    tokenizer::TokenKind,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand-side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOpKind,

    /// The right-hand-side of the binary expression.
    pub rhs: Box<Expr>,
}

impl Binary {
    /// Consumes the node, returning its operands and dropping only the node itself.
    pub fn into_operands(self) -> (Expr, Expr) {
        (*self.lhs, *self.rhs)
    }
}

/// Parses a sequence of terms separated by `+` and `-`, grouping from the left.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// ```
pub(crate) fn parse_expression(input: &mut Parser) -> Result<Expr, Error> {
    let mut lhs = parse_term(input)?;
    loop {
        let op = match input.current_token().kind {
            TokenKind::Add => BinOpKind::Add,
            TokenKind::Sub => BinOpKind::Sub,
            _ => return Ok(lhs),
        };
        input.advance();

        let rhs = parse_term(input)?;
        lhs = Expr::binary(op, lhs, rhs);
    }
}

/// Parses a sequence of factors separated by `*`, `/`, or juxtaposition, grouping from the left.
///
/// Juxtaposition is only a multiplication for the token pairs accepted by
/// [`TokenKind::implies_multiplication`]; any other pair ends the term.
pub(crate) fn parse_term(input: &mut Parser) -> Result<Expr, Error> {
    let mut lhs = parse_factor(input)?;
    loop {
        let next = input.current_token().kind;
        let op = match next {
            TokenKind::Mul => {
                input.advance();
                BinOpKind::Mul
            },
            TokenKind::Div => {
                input.advance();
                BinOpKind::Div
            },
            _ if input.prev_token().is_some_and(|prev| prev.kind.implies_multiplication(next)) => {
                BinOpKind::Mul
            },
            _ => return Ok(lhs),
        };

        let rhs = parse_factor(input)?;
        lhs = Expr::binary(op, lhs, rhs);
    }
}

/// Parses a primary expression, optionally raised to a power. The exponent is itself a power,
/// which makes `^` right-associative. A sign cannot follow `^` directly: `2^-x` must be written
/// `2^(-x)`.
pub(crate) fn parse_power(input: &mut Parser) -> Result<Expr, Error> {
    let base = super::expr::parse_primary(input)?;
    if input.match_token(TokenKind::Exp).is_some() {
        let exponent = parse_power(input)?;
        Ok(Expr::binary(BinOpKind::Exp, base, exponent))
    } else {
        Ok(base)
    }
}
