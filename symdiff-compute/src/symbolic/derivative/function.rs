//! Derivatives of the supported functions, with the chain rule applied.

use symdiff_parser::parser::{
    ast::{Expr, Func},
    token::op::BinOpKind,
};
use super::{derivative, negated};

/// Computes the derivative of `func(arg)`.
pub(super) fn function_derivative(func: Func, arg: &Expr) -> Expr {
    let chain = |outer: Expr| Expr::binary(BinOpKind::Mul, outer, derivative(arg));

    match func {
        // sin' = cos
        Func::Sin => chain(Expr::call(Func::Cos, arg.clone())),

        // cos' = -sin
        Func::Cos => chain(negated(Expr::call(Func::Sin, arg.clone()))),

        // tan' = 1 / cos^2
        Func::Tan => chain(Expr::binary(
            BinOpKind::Div,
            Expr::number(1.0),
            Expr::binary(BinOpKind::Exp, Expr::call(Func::Cos, arg.clone()), Expr::number(2.0)),
        )),

        // ln(f)' = f' / f
        Func::Ln => Expr::binary(BinOpKind::Div, derivative(arg), arg.clone()),

        // log(f)' = f' / (ln(10) * f)
        Func::Log => Expr::binary(
            BinOpKind::Div,
            derivative(arg),
            Expr::binary(
                BinOpKind::Mul,
                Expr::call(Func::Ln, Expr::number(10.0)),
                arg.clone(),
            ),
        ),

        // exp' = exp
        Func::Exp => chain(Expr::call(Func::Exp, arg.clone())),
    }
}
