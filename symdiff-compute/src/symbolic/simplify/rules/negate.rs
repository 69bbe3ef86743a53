//! Simplification rules for unary signs.

use crate::symbolic::{
    simplify::{rules::do_unary, step::Step},
    step_collector::StepCollector,
};
use symdiff_parser::parser::{ast::Expr, token::op::{BinOpKind, UnaryOpKind}};

/// Returns true if negating the expression does not add a node: it is a number, or is already
/// negated.
fn absorbs_negation(expr: &Expr) -> bool {
    match expr {
        Expr::Number(_) => true,
        Expr::Unary(unary) => unary.op == UnaryOpKind::Neg,
        _ => false,
    }
}

/// Negates an expression, flipping the sign of a number or removing an existing negation where
/// possible.
pub(crate) fn negate(expr: &Expr) -> Expr {
    match expr {
        Expr::Number(n) if *n == 0.0 => Expr::number(0.0),
        Expr::Number(n) => Expr::number(-n),
        Expr::Unary(unary) if unary.op == UnaryOpKind::Neg => (*unary.operand).clone(),
        _ => Expr::unary(UnaryOpKind::Neg, expr.clone()),
    }
}

/// `+a = a`
pub fn unary_plus(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_unary(expr, UnaryOpKind::Pos, |operand| Some(operand.clone()))?;

    step_collector.push(Step::UnaryPlus);
    Some(opt)
}

/// `-(-a) = a`
pub fn double_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_unary(expr, UnaryOpKind::Neg, |operand| match operand {
        Expr::Unary(inner) if inner.op == UnaryOpKind::Neg => Some((*inner.operand).clone()),
        _ => None,
    })?;

    step_collector.push(Step::DoubleNegation);
    Some(opt)
}

/// `-(n+a) = (-n)+(-a)`
/// `-((-a)+b) = a+(-b)`
///
/// Only applies when one of the terms absorbs the negation, so the rewrite never grows the tree.
pub fn distribute_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_unary(expr, UnaryOpKind::Neg, |operand| match operand {
        Expr::Binary(binary)
            if binary.op == BinOpKind::Add
                && (absorbs_negation(&binary.lhs) || absorbs_negation(&binary.rhs)) =>
        {
            Some(Expr::binary(BinOpKind::Add, negate(&binary.lhs), negate(&binary.rhs)))
        },
        _ => None,
    })?;

    step_collector.push(Step::DistributeNegation);
    Some(opt)
}

/// `-(n*a) = (-n)*a`
/// `-(a*(-b)) = a*b`
///
/// Also applies to division, on either side.
pub fn negate_factor(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_unary(expr, UnaryOpKind::Neg, |operand| match operand {
        Expr::Binary(binary) if matches!(binary.op, BinOpKind::Mul | BinOpKind::Div) => {
            if absorbs_negation(&binary.lhs) {
                Some(Expr::binary(binary.op, negate(&binary.lhs), (*binary.rhs).clone()))
            } else if absorbs_negation(&binary.rhs) {
                Some(Expr::binary(binary.op, (*binary.lhs).clone(), negate(&binary.rhs)))
            } else {
                None
            }
        },
        _ => None,
    })?;

    step_collector.push(Step::NegateFactor);
    Some(opt)
}

/// Applies all rules for unary signs.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    unary_plus(expr, step_collector)
        .or_else(|| double_negation(expr, step_collector))
        .or_else(|| distribute_negation(expr, step_collector))
        .or_else(|| negate_factor(expr, step_collector))
}
