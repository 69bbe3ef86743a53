//! Floating-point implementations of the operators and functions of the language.

use symdiff_parser::parser::{ast::Func, token::op::BinOpKind};

/// Applies a binary operator to two values.
pub fn binary(op: BinOpKind, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinOpKind::Add => lhs + rhs,
        BinOpKind::Sub => lhs - rhs,
        BinOpKind::Mul => lhs * rhs,
        BinOpKind::Div => lhs / rhs,
        BinOpKind::Exp => lhs.powf(rhs),
    }
}

/// Applies a function to a value.
pub fn call(func: Func, arg: f64) -> f64 {
    match func {
        Func::Sin => arg.sin(),
        Func::Cos => arg.cos(),
        Func::Tan => arg.tan(),
        Func::Ln => arg.ln(),
        Func::Log => arg.log10(),
        Func::Exp => arg.exp(),
    }
}
