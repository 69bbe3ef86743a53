//! Simplification rules for powers.

use crate::{
    numerical::constant_value,
    symbolic::{
        simplify::{error::ZeroToNegativePower, rules::do_power, step::Step},
        step_collector::StepCollector,
    },
};
use symdiff_error::Error;
use symdiff_parser::parser::{ast::Expr, token::op::BinOpKind};

/// Rejects `0^n` for a constant exponent `n < 0`.
///
/// This runs before constant folding, so that such a power is reported instead of being folded to
/// an infinity.
pub(crate) fn check_zero_base(expr: &Expr) -> Result<(), Error> {
    if let Expr::Binary(binary) = expr {
        if binary.op == BinOpKind::Exp && binary.lhs.is_number(0.0) {
            if let Some(exponent) = constant_value(&binary.rhs).filter(|n| *n < 0.0) {
                return Err(Error::unspanned(ZeroToNegativePower { exponent }));
            }
        }
    }

    Ok(())
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| rhs.is_number(1.0).then(|| lhs.clone()))?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `a^0 = 1`
///
/// This includes `0^0 = 1`.
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |_, rhs| rhs.is_number(0.0).then(|| Expr::number(1.0)))?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `0^a = 0`, for `a > 0`
///
/// An exponent that depends on `x` is assumed to be positive. This is not checked, so `0^x` is
/// simplified to `0` even though it is undefined for `x <= 0`.
pub fn zero_base(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        if !lhs.is_number(0.0) {
            return None;
        }

        match constant_value(rhs) {
            Some(exponent) if exponent > 0.0 => Some(Expr::number(0.0)),
            Some(_) => None,
            None => Some(Expr::number(0.0)),
        }
    })?;

    step_collector.push(Step::ZeroBase);
    Some(opt)
}

/// `1^a = 1`
pub fn one_base(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, _| lhs.is_number(1.0).then(|| Expr::number(1.0)))?;

    step_collector.push(Step::OneBase);
    Some(opt)
}

/// `a^(-n) = 1/a^n`
pub fn negative_exponent(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        let exponent = rhs.as_number().filter(|n| *n < 0.0)?;
        if lhs.as_number().is_some() {
            return None;
        }

        Some(Expr::binary(
            BinOpKind::Div,
            Expr::number(1.0),
            Expr::binary(BinOpKind::Exp, lhs.clone(), Expr::number(-exponent)),
        ))
    })?;

    step_collector.push(Step::NegativeExponent);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_one(expr, step_collector)
        .or_else(|| power_zero(expr, step_collector))
        .or_else(|| zero_base(expr, step_collector))
        .or_else(|| one_base(expr, step_collector))
        .or_else(|| negative_exponent(expr, step_collector))
}
