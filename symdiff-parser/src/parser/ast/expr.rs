use crate::{
    parser::{
        ast::{binary::{parse_expression, Binary}, call::{parse_call, Call, Func}, unary::Unary},
        error::{kind, Error},
        token::op::{BinOpKind, UnaryOpKind},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::{Token, TokenKind},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An expression in the single free variable `x`.
///
/// Every node exclusively owns its children, so cloning an expression copies the whole tree, and
/// dropping it releases the whole tree. Taking the children out of a node (for example with
/// [`Binary::into_operands`]) consumes only that node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric constant.
    Number(f64),

    /// The free variable `x`.
    Variable,

    /// A binary operation, such as `x + 1`.
    Binary(Binary),

    /// A unary sign, such as `-x`.
    Unary(Unary),

    /// A function call, such as `sin(x)`.
    Call(Call),
}

impl Expr {
    /// Creates a numeric constant.
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a reference to the free variable `x`.
    pub fn variable() -> Self {
        Self::Variable
    }

    /// Creates a binary operation taking ownership of both operands.
    pub fn binary(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary(Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        })
    }

    /// Creates a unary sign taking ownership of its operand.
    pub fn unary(op: UnaryOpKind, operand: Expr) -> Self {
        Self::Unary(Unary {
            operand: Box::new(operand),
            op,
        })
    }

    /// Creates a function call taking ownership of its argument.
    pub fn call(func: Func, arg: Expr) -> Self {
        Self::Call(Call {
            func,
            arg: Box::new(arg),
        })
    }

    /// Returns the value of this expression if it is a numeric constant.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if this expression is the numeric constant `value`.
    pub fn is_number(&self, value: f64) -> bool {
        self.as_number() == Some(value)
    }

    /// Returns true if `x` appears anywhere in this expression.
    pub fn contains_variable(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Variable => true,
            Self::Binary(binary) => binary.lhs.contains_variable() || binary.rhs.contains_variable(),
            Self::Unary(unary) => unary.operand.contains_variable(),
            Self::Call(call) => call.arg.contains_variable(),
        }
    }

    /// Returns the number of nodes in this expression.
    pub fn node_count(&self) -> usize {
        1 + match self {
            Self::Number(_) | Self::Variable => 0,
            Self::Binary(binary) => binary.lhs.node_count() + binary.rhs.node_count(),
            Self::Unary(unary) => unary.operand.node_count(),
            Self::Call(call) => call.arg.node_count(),
        }
    }

    /// Returns the precedence of this expression's top-level construct when printed. A negative
    /// number is printed with a leading sign, so it binds like a unary minus.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Number(n) if *n < 0.0 => Precedence::Neg,
            Self::Binary(binary) => binary.op.precedence(),
            Self::Unary(unary) => unary.op.precedence(),
            Self::Number(_) | Self::Variable | Self::Call(_) => Precedence::Primary,
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        parse_expression(input)
    }
}

/// Parses a number, the variable, a function call, or a parenthesized expression.
pub(crate) fn parse_primary(input: &mut Parser) -> Result<Expr, Error> {
    let token = input.next_token();
    match token.kind {
        TokenKind::Number => token.lexeme
            .parse::<f64>()
            .map(Expr::number)
            .map_err(|_| Error::new(vec![token.span.clone()], kind::MalformedNumber {
                lexeme: token.lexeme.to_string(),
            })),
        TokenKind::Variable => Ok(Expr::variable()),
        TokenKind::FunctionName => parse_call(input, token),
        TokenKind::OpenParen => {
            let inner = Expr::parse(input)?;
            parse_closing_paren(input, &token)?;
            Ok(inner)
        },
        TokenKind::End => Err(Error::new(vec![token.span], kind::UnexpectedEof)),
        found => Err(Error::new(vec![token.span], kind::UnexpectedToken {
            expected: &[
                TokenKind::Number,
                TokenKind::Variable,
                TokenKind::FunctionName,
                TokenKind::OpenParen,
            ],
            found,
        })),
    }
}

/// Consumes the `)` matching the given opening parenthesis.
pub(crate) fn parse_closing_paren(input: &mut Parser, open: &Token) -> Result<(), Error> {
    if input.match_token(TokenKind::CloseParen).is_some() {
        return Ok(());
    }

    let current = input.current_token();
    match current.kind {
        TokenKind::End => Err(Error::new(
            vec![open.span.clone(), current.span.clone()],
            kind::UnclosedParenthesis,
        )),
        found => Err(Error::new(vec![current.span.clone()], kind::UnexpectedToken {
            expected: &[
                TokenKind::Add,
                TokenKind::Sub,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::Exp,
                TokenKind::CloseParen,
            ],
            found,
        })),
    }
}
