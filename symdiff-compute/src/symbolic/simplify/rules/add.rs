//! Simplification rules for expressions involving addition.

use crate::symbolic::{
    simplify::{rules::{combine_literals, do_add}, step::Step, ConstantMode},
    step_collector::StepCollector,
};
use symdiff_parser::parser::{ast::Expr, token::op::BinOpKind};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if lhs.is_number(0.0) {
            Some(rhs.clone())
        } else if rhs.is_number(0.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(
    expr: &Expr,
    mode: ConstantMode,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    add_zero(expr, step_collector)
        .or_else(|| combine_literals(expr, BinOpKind::Add, mode, step_collector))
}
