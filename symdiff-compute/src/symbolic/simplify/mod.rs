//! Rule-based simplification of expressions.
//!
//! A single pass of [`simplify_once`] visits the tree bottom-up. At each node, once its children
//! are simplified:
//!
//! 1. a subtraction `a - b` is replaced by `a + (-b)`, so that the rest of the simplifier never
//!    sees [`BinOpKind::Sub`],
//! 2. `0^n` for a negative constant `n` is rejected with an
//!    [`error::ZeroToNegativePower`] error,
//! 3. an operation on constants is folded according to the [`ConstantMode`],
//! 4. the first matching rule in [`rules`] is applied.
//!
//! [`simplify_to_fixed_point`] repeats passes until one changes nothing.

pub mod error;
mod fold;
pub mod fraction;
pub mod rules;
pub mod step;

use crate::symbolic::step_collector::StepCollector;
use fold::fold;
use rules::{negate::negate, power::check_zero_base};
use step::Step;
use symdiff_error::Error;
use symdiff_parser::parser::{ast::Expr, token::op::BinOpKind};

/// How operations on constants are folded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConstantMode {
    /// Operations on numbers are evaluated with floating-point arithmetic, including function
    /// calls such as `sin(1)`.
    #[default]
    Float,

    /// Rational results are kept as exact fractions, such as `1 / 3`. Operations on values that
    /// are not integers fall back to floating-point arithmetic, and function calls are only
    /// folded where their value is rational, such as `cos(0)`.
    Exact,
}

/// Options for [`simplify_to_fixed_point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyOptions {
    /// How constants are folded.
    pub mode: ConstantMode,

    /// The maximum number of passes to run before giving up on reaching a fixed point.
    pub max_passes: usize,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            mode: ConstantMode::default(),
            max_passes: 256,
        }
    }
}

impl SimplifyOptions {
    /// Sets the constant folding mode.
    pub fn mode(mut self, mode: ConstantMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the maximum number of passes.
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }
}

/// The state of a single bottom-up pass.
struct Pass<'a> {
    mode: ConstantMode,
    step_collector: &'a mut dyn StepCollector<Step>,
    changed: bool,
}

impl Pass<'_> {
    fn record(&mut self, step: Step) {
        self.step_collector.push(step);
        self.changed = true;
    }

    fn simplify(&mut self, expr: Expr) -> Result<Expr, Error> {
        let expr = match expr {
            Expr::Binary(binary) => {
                let op = binary.op;
                let (lhs, rhs) = binary.into_operands();
                let lhs = self.simplify(lhs)?;
                let rhs = self.simplify(rhs)?;

                if op == BinOpKind::Sub {
                    self.record(Step::SubtractToAdd);
                    Expr::binary(BinOpKind::Add, lhs, negate(&rhs))
                } else {
                    Expr::binary(op, lhs, rhs)
                }
            },
            Expr::Unary(unary) => Expr::unary(unary.op, self.simplify(*unary.operand)?),
            Expr::Call(call) => Expr::call(call.func, self.simplify(*call.arg)?),
            leaf => leaf,
        };

        check_zero_base(&expr)?;

        let expr = match fold(&expr, self.mode) {
            Some(folded) => {
                log::trace!("folded `{}` into `{}`", expr, folded);
                self.record(Step::FoldConstant);
                folded
            },
            None => expr,
        };

        match rules::all(&expr, self.mode, &mut *self.step_collector) {
            Some(rewritten) => {
                log::trace!("rewrote `{}` into `{}`", expr, rewritten);
                self.changed = true;
                Ok(rewritten)
            },
            None => Ok(expr),
        }
    }
}

/// Runs a single bottom-up simplification pass over the expression, returning the new expression
/// and whether anything changed.
pub fn simplify_once(
    expr: Expr,
    mode: ConstantMode,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<(Expr, bool), Error> {
    let mut pass = Pass { mode, step_collector, changed: false };
    let expr = pass.simplify(expr)?;
    Ok((expr, pass.changed))
}

fn fixed_point(
    mut expr: Expr,
    options: &SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    for pass in 1..=options.max_passes {
        let (next, changed) = simplify_once(expr, options.mode, step_collector)?;
        expr = next;
        log::debug!("simplify pass {}: {}", pass, expr);

        if !changed {
            return Ok(expr);
        }
    }

    log::warn!("simplification did not settle after {} passes", options.max_passes);
    Ok(expr)
}

/// Simplifies the expression until no rule applies, or until [`SimplifyOptions::max_passes`]
/// passes have run.
pub fn simplify_to_fixed_point(expr: Expr, options: &SimplifyOptions) -> Result<Expr, Error> {
    fixed_point(expr, options, &mut ())
}

/// Simplifies a copy of the expression with the default options.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    simplify_to_fixed_point(expr.clone(), &SimplifyOptions::default())
}

/// Simplifies a copy of the expression, also returning the steps taken in the order they were
/// applied.
pub fn simplify_with_steps(
    expr: &Expr,
    options: &SimplifyOptions,
) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let expr = fixed_point(expr.clone(), options, &mut steps)?;
    Ok((expr, steps))
}
