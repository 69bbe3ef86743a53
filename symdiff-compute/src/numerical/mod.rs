//! Numeric evaluation of expressions at a point.

pub mod func;

use symdiff_parser::parser::ast::Expr;

/// Any type that can be evaluated to a floating-point value for a given value of `x`.
///
/// Evaluation never fails: operations outside their domain produce `NaN` or an infinity, as the
/// underlying floating-point operations do.
pub trait Eval {
    /// Evaluates the expression with `x` bound to the given value.
    fn eval(&self, x: f64) -> f64;
}

impl Eval for Expr {
    fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Variable => x,
            Expr::Binary(binary) => func::binary(binary.op, binary.lhs.eval(x), binary.rhs.eval(x)),
            Expr::Unary(unary) => unary.op.sign() * unary.operand.eval(x),
            Expr::Call(call) => func::call(call.func, call.arg.eval(x)),
        }
    }
}

/// Returns the value of an expression that does not depend on `x`.
pub fn constant_value(expr: &Expr) -> Option<f64> {
    if expr.contains_variable() {
        None
    } else {
        Some(expr.eval(0.0))
    }
}
