//! Constant folding in either of the two [`ConstantMode`]s.

use crate::numerical::{constant_value, func};
use super::{fraction::Fraction, ConstantMode};
use symdiff_parser::parser::{
    ast::{Expr, Func},
    token::op::{BinOpKind, UnaryOpKind},
};

/// Wraps a value in a number node, unless it is not finite. Negative zero becomes zero.
fn finite_number(value: f64) -> Option<Expr> {
    value.is_finite().then(|| Expr::number(if value == 0.0 { 0.0 } else { value }))
}

/// Returns the exact value of `func(arg)` for the arguments where it is rational.
fn special_value(func: Func, arg: Fraction) -> Option<Fraction> {
    let zero = Fraction::integer(0);
    let one = Fraction::integer(1);
    match func {
        Func::Sin | Func::Tan if arg == zero => Some(zero),
        Func::Cos | Func::Exp if arg == zero => Some(one),
        Func::Ln if arg == one => Some(zero),
        Func::Log => arg.log10().map(Fraction::integer),
        _ => None,
    }
}

/// Computes the exact value of a constant expression, if it is rational and no intermediate value
/// overflows.
fn exact_value(expr: &Expr) -> Option<Fraction> {
    match expr {
        Expr::Number(n) => Fraction::from_f64(*n),
        Expr::Variable => None,
        Expr::Binary(binary) => {
            exact_value(&binary.lhs)?.checked_binary(binary.op, exact_value(&binary.rhs)?)
        },
        Expr::Unary(unary) => {
            let value = exact_value(&unary.operand)?;
            match unary.op {
                UnaryOpKind::Pos => Some(value),
                UnaryOpKind::Neg => value.checked_neg(),
            }
        },
        Expr::Call(call) => special_value(call.func, exact_value(&call.arg)?),
    }
}

/// Returns true if the expression is a numeric literal in the given mode. In exact mode, the
/// quotient of two integers is a literal, since that is how fractions are written.
pub(crate) fn is_literal(expr: &Expr, mode: ConstantMode) -> bool {
    match (expr, mode) {
        (Expr::Number(_), _) => true,
        (Expr::Binary(binary), ConstantMode::Exact) => {
            binary.op == BinOpKind::Div
                && binary.lhs.as_number().is_some()
                && binary.rhs.as_number().is_some()
                && exact_value(expr).is_some()
        },
        _ => false,
    }
}

/// Collapses an operation whose operands are all numbers into a single number.
fn fold_float(expr: &Expr) -> Option<Expr> {
    let value = match expr {
        Expr::Number(_) | Expr::Variable => return None,
        Expr::Binary(binary) => {
            func::binary(binary.op, binary.lhs.as_number()?, binary.rhs.as_number()?)
        },
        Expr::Unary(unary) => unary.op.sign() * unary.operand.as_number()?,
        Expr::Call(call) => func::call(call.func, call.arg.as_number()?),
    };
    finite_number(value)
}

/// Collapses an operation whose operands are all literals into a single literal, keeping the
/// result as a fraction when it is rational.
///
/// An operation that cannot be carried out exactly, because an operand is not an integer or
/// because of overflow, is folded as a float instead. A function call on an exact argument that
/// has no rational value, such as `sin(1)`, is kept as it is.
fn fold_exact(expr: &Expr) -> Option<Expr> {
    if let Some(value) = exact_value(expr).filter(Fraction::fits_f64) {
        let folded = value.into_expr();
        return (folded != *expr).then_some(folded);
    }

    let operands_are_literals = match expr {
        Expr::Number(_) | Expr::Variable => false,
        Expr::Binary(binary) => {
            is_literal(&binary.lhs, ConstantMode::Exact) && is_literal(&binary.rhs, ConstantMode::Exact)
        },
        Expr::Unary(unary) => is_literal(&unary.operand, ConstantMode::Exact),
        Expr::Call(call) => {
            is_literal(&call.arg, ConstantMode::Exact) && exact_value(&call.arg).is_none()
        },
    };

    if operands_are_literals {
        finite_number(constant_value(expr)?)
    } else {
        None
    }
}

/// Folds the given node if its operands are constants. Returns [`None`] if the node is left as
/// it is.
pub(crate) fn fold(expr: &Expr, mode: ConstantMode) -> Option<Expr> {
    match mode {
        ConstantMode::Float => fold_float(expr),
        ConstantMode::Exact => fold_exact(expr),
    }
}

/// Combines two literals with the given operator into one literal, if the result is finite.
pub(crate) fn fold_literals(op: BinOpKind, lhs: &Expr, rhs: &Expr, mode: ConstantMode) -> Option<Expr> {
    fold(&Expr::binary(op, lhs.clone(), rhs.clone()), mode)
        .filter(|folded| is_literal(folded, mode))
}
