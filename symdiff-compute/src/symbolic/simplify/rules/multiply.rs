//! Simplification rules for expressions involving multiplication and division.

use crate::symbolic::{
    simplify::{rules::{combine_literals, do_binary, do_multiply}, step::Step, ConstantMode},
    step_collector::StepCollector,
};
use symdiff_parser::parser::{ast::Expr, token::op::BinOpKind};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        (lhs.is_number(0.0) || rhs.is_number(0.0)).then(|| Expr::number(0.0))
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if lhs.is_number(1.0) {
            Some(rhs.clone())
        } else if rhs.is_number(1.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        rhs.is_number(1.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// Applies all multiplication and division rules.
pub fn all(
    expr: &Expr,
    mode: ConstantMode,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| divide_one(expr, step_collector))
        .or_else(|| combine_literals(expr, BinOpKind::Mul, mode, step_collector))
}
