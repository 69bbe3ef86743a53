//! Implementation of the local simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at a node and its direct children, which the simplifier
//! has already simplified.

pub mod add;
pub mod function;
pub mod multiply;
pub mod negate;
pub mod power;

use crate::symbolic::step_collector::StepCollector;
use super::{fold::{fold_literals, is_literal}, step::Step, ConstantMode};
use symdiff_parser::parser::{
    ast::{Expr, Func},
    token::op::{BinOpKind, UnaryOpKind},
};

/// If the expression is a call of the given function, calls the given transformation function
/// with the argument.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_call(expr: &Expr, func: Func, f: impl Fn(&Expr) -> Option<Expr>) -> Option<Expr> {
    match expr {
        Expr::Call(call) if call.func == func => f(&call.arg),
        _ => None,
    }
}

/// If the expression is a unary expression with the given operator, calls the given
/// transformation function with the operand.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_unary(expr: &Expr, op: UnaryOpKind, f: impl Fn(&Expr) -> Option<Expr>) -> Option<Expr> {
    match expr {
        Expr::Unary(unary) if unary.op == op => f(&unary.operand),
        _ => None,
    }
}

/// If the expression is a binary expression with the given operator, calls the given
/// transformation function with the left and right-hand-side.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Expr,
    op: BinOpKind,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    match expr {
        Expr::Binary(binary) if binary.op == op => f(&binary.lhs, &binary.rhs),
        _ => None,
    }
}

/// If the expression is an add expression, calls the given transformation function with the
/// terms.
pub(crate) fn do_add(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    do_binary(expr, BinOpKind::Add, f)
}

/// If the expression is a multiplication expression, calls the given transformation function
/// with the factors.
pub(crate) fn do_multiply(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    do_binary(expr, BinOpKind::Mul, f)
}

/// If the expression is a power expression, calls the given transformation function with the
/// base and exponent.
pub(crate) fn do_power(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    do_binary(expr, BinOpKind::Exp, f)
}

/// If the expression is an operation `op` with a literal on one side, returns the literal and
/// the other side.
fn split_literal(expr: &Expr, op: BinOpKind, mode: ConstantMode) -> Option<(&Expr, &Expr)> {
    match expr {
        Expr::Binary(binary) if binary.op == op => {
            if is_literal(&binary.lhs, mode) {
                Some((&*binary.lhs, &*binary.rhs))
            } else if is_literal(&binary.rhs, mode) {
                Some((&*binary.rhs, &*binary.lhs))
            } else {
                None
            }
        },
        _ => None,
    }
}

/// Combines the literals of a chain of additions, or a chain of multiplications, without
/// flattening the chain. `op` must be commutative and associative.
///
/// `n+(m+a) = (n+m)+a`
/// `(n+a)+m = (n+m)+a`
/// `(n+a)+(m+b) = (n+m)+(a+b)`
pub(crate) fn combine_literals(
    expr: &Expr,
    op: BinOpKind,
    mode: ConstantMode,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let opt = do_binary(expr, op, |lhs, rhs| {
        match (is_literal(lhs, mode), is_literal(rhs, mode)) {
            (true, false) => {
                let (literal, rest) = split_literal(rhs, op, mode)?;
                let folded = fold_literals(op, lhs, literal, mode)?;
                Some(Expr::binary(op, folded, rest.clone()))
            },
            (false, true) => {
                let (literal, rest) = split_literal(lhs, op, mode)?;
                let folded = fold_literals(op, literal, rhs, mode)?;
                Some(Expr::binary(op, folded, rest.clone()))
            },
            (false, false) => {
                let (lhs_literal, lhs_rest) = split_literal(lhs, op, mode)?;
                let (rhs_literal, rhs_rest) = split_literal(rhs, op, mode)?;
                let folded = fold_literals(op, lhs_literal, rhs_literal, mode)?;
                Some(Expr::binary(op, folded, Expr::binary(op, lhs_rest.clone(), rhs_rest.clone())))
            },
            // already handled by constant folding
            (true, true) => None,
        }
    })?;

    step_collector.push(Step::CombineLiterals);
    Some(opt)
}

/// Applies the first rule that matches.
pub fn all(
    expr: &Expr,
    mode: ConstantMode,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    add::all(expr, mode, step_collector)
        .or_else(|| multiply::all(expr, mode, step_collector))
        .or_else(|| power::all(expr, step_collector))
        .or_else(|| negate::all(expr, step_collector))
        .or_else(|| function::all(expr, step_collector))
}
