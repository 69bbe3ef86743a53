use crate::{
    parser::{
        ast::{binary::parse_power, expr::Expr},
        error::Error,
        token::op::UnaryOpKind,
        Parser,
    },
    tokenizer::TokenKind,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOpKind,
}

/// Parses any number of prefix signs applied to a power.
///
/// ```text
/// factor := ('+' | '-') factor | power
/// ```
pub(crate) fn parse_factor(input: &mut Parser) -> Result<Expr, Error> {
    let op = match input.current_token().kind {
        TokenKind::Add => UnaryOpKind::Pos,
        TokenKind::Sub => UnaryOpKind::Neg,
        _ => return parse_power(input),
    };
    input.advance();

    let operand = parse_factor(input)?;
    Ok(Expr::unary(op, operand))
}
