//! Simplification rules for functions undoing their inverse.

use crate::symbolic::{
    simplify::{rules::{do_call, do_power}, step::Step},
    step_collector::StepCollector,
};
use symdiff_parser::parser::ast::{Expr, Func};

/// `ln(exp(a)) = a`
pub fn ln_exp(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, Func::Ln, |arg| do_call(arg, Func::Exp, |inner| Some(inner.clone())))?;

    step_collector.push(Step::LnExp);
    Some(opt)
}

/// `log(10^a) = a`
pub fn log_power_of_ten(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, Func::Log, |arg| {
        do_power(arg, |base, exponent| base.is_number(10.0).then(|| exponent.clone()))
    })?;

    step_collector.push(Step::LogPowerOfTen);
    Some(opt)
}

/// Applies all function rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    ln_exp(expr, step_collector)
        .or_else(|| log_power_of_ten(expr, step_collector))
}
