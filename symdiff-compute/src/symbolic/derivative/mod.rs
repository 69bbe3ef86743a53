use symdiff_parser::parser::{
    ast::{Binary, Expr, Func},
    token::op::{BinOpKind, UnaryOpKind},
};

mod function;

/// Returns the value of an exponent that is a numeric literal, possibly behind a sign.
fn literal_exponent(exponent: &Expr) -> Option<f64> {
    match exponent {
        Expr::Number(n) => Some(*n),
        Expr::Unary(unary) => unary.operand.as_number().map(|n| unary.op.sign() * n),
        _ => None,
    }
}

/// `(f * g)' = f * g' + f' * g`
fn product_rule(f: &Expr, g: &Expr) -> Expr {
    Expr::binary(
        BinOpKind::Add,
        Expr::binary(BinOpKind::Mul, f.clone(), derivative(g)),
        Expr::binary(BinOpKind::Mul, derivative(f), g.clone()),
    )
}

/// `(f / g)' = (f' * g - f * g') / g^2`
fn quotient_rule(f: &Expr, g: &Expr) -> Expr {
    Expr::binary(
        BinOpKind::Div,
        Expr::binary(
            BinOpKind::Sub,
            Expr::binary(BinOpKind::Mul, derivative(f), g.clone()),
            Expr::binary(BinOpKind::Mul, f.clone(), derivative(g)),
        ),
        Expr::binary(BinOpKind::Exp, g.clone(), Expr::number(2.0)),
    )
}

/// Differentiates `base ^ exponent`.
fn power_rule(base: &Expr, exponent: &Expr) -> Expr {
    // (f ^ n)' = n * f ^ (n - 1) * f'
    if let Some(n) = literal_exponent(exponent) {
        return Expr::binary(
            BinOpKind::Mul,
            Expr::binary(
                BinOpKind::Mul,
                Expr::number(n),
                Expr::binary(BinOpKind::Exp, base.clone(), Expr::number(n - 1.0)),
            ),
            derivative(base),
        );
    }

    // (f ^ c)' = c * f ^ (c - 1) * f', for any c not involving x
    if !exponent.contains_variable() {
        return Expr::binary(
            BinOpKind::Mul,
            Expr::binary(
                BinOpKind::Mul,
                exponent.clone(),
                Expr::binary(
                    BinOpKind::Exp,
                    base.clone(),
                    Expr::binary(BinOpKind::Sub, exponent.clone(), Expr::number(1.0)),
                ),
            ),
            derivative(base),
        );
    }

    // (f ^ g)' = (exp(ln(f) * g))'
    // the rewritten form is only needed while it is differentiated
    let rewritten = Expr::call(
        Func::Exp,
        Expr::binary(BinOpKind::Mul, Expr::call(Func::Ln, base.clone()), exponent.clone()),
    );
    derivative(&rewritten)
}

/// Computes the derivative of the given expression with respect to `x`.
///
/// The input is only borrowed; every part of it that appears in the result is an independent
/// copy. Since the tree can only contain supported functions, differentiation always succeeds.
pub fn derivative(f: &Expr) -> Expr {
    match f {
        Expr::Number(_) => Expr::number(0.0),
        Expr::Variable => Expr::number(1.0),
        Expr::Binary(Binary { lhs, op, rhs }) => match op {
            // (f +/- g)' = f' +/- g'
            BinOpKind::Add | BinOpKind::Sub => Expr::binary(*op, derivative(lhs), derivative(rhs)),
            BinOpKind::Mul => product_rule(lhs, rhs),
            BinOpKind::Div => quotient_rule(lhs, rhs),
            BinOpKind::Exp => power_rule(lhs, rhs),
        },
        // (-f)' = -(f')
        Expr::Unary(unary) => Expr::unary(unary.op, derivative(&unary.operand)),
        Expr::Call(call) => function::function_derivative(call.func, &call.arg),
    }
}

/// Negates an expression without simplifying it.
pub(crate) fn negated(expr: Expr) -> Expr {
    Expr::unary(UnaryOpKind::Neg, expr)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::numerical::Eval;
    use symdiff_parser::parse;

    /// Approximates the derivative of the provided expression with a central difference.
    fn central_difference(e: &Expr, x: f64) -> f64 {
        const DX: f64 = 1e-6;
        (e.eval(x + DX) - e.eval(x - DX)) / (2.0 * DX)
    }

    fn test_for_function(function: &'static str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-4;

        let expr = parse(function).unwrap();
        let symbolic = derivative(&expr);

        for point in points.into_iter() {
            let symbolically_computed = symbolic.eval(point);
            let numerically_computed = central_difference(&expr, point);

            assert!(
                (symbolically_computed - numerically_computed).abs() < TOL,
                "For \"{function}\" at x={point}, symbolically computed derivative was {symbolically_computed} but numerically computed derivative was {numerically_computed}, which was out of tolerance {TOL}",
            );
        }
    }

    #[test]
    fn constant_and_variable() {
        assert_eq!(derivative(&Expr::number(7.0)), Expr::number(0.0));
        assert_eq!(derivative(&Expr::variable()), Expr::number(1.0));
    }

    #[test]
    fn power_rule_shape() {
        let expr = parse("x^3").unwrap();
        assert_eq!(
            derivative(&expr),
            Expr::binary(
                BinOpKind::Mul,
                Expr::binary(
                    BinOpKind::Mul,
                    Expr::number(3.0),
                    Expr::binary(BinOpKind::Exp, Expr::variable(), Expr::number(2.0)),
                ),
                Expr::number(1.0),
            ),
        );
    }

    #[test]
    fn signed_literal_exponent() {
        let expr = parse("x^(-2)").unwrap();
        let derived = derivative(&expr);
        assert_eq!(derived.to_string(), "-2 * x ^ (-3) * 1");
    }

    #[test]
    fn input_is_untouched() {
        let expr = parse("x * sin(x) / (x + 1)").unwrap();
        let copy = expr.clone();
        let _ = derivative(&expr);
        assert_eq!(expr, copy);
    }

    #[test]
    fn power_rule() {
        test_for_function("x^2 + x + 1", [0., 1., 2., 5., 8.]);
        test_for_function("x^2", [-3., -0.5, 0., 1., 4.]);
        test_for_function("(2x + 1)^3", [-1., 0., 0.5, 2.]);
        test_for_function("x^(-2)", [-2., -0.5, 0.5, 3.]);
        test_for_function("x^(1/2)", [0.25, 1., 4.]);
    }

    #[test]
    fn product_and_quotient_rules() {
        test_for_function("x*cos(x)", [-2., 0., 1., 3.]);
        test_for_function("1/x", [-2., -0.5, 0.5, 3.]);
        test_for_function("(x^2 + 1) / (x - 3)", [-1., 0., 2., 5.]);
    }

    #[test]
    fn variable_exponent() {
        test_for_function("x^x", [0.5, 1., 2., 3.]);
        test_for_function("2^x", [-1., 0., 1., 2.]);
    }

    #[test]
    fn functions() {
        test_for_function("sin(x)", [-1., 0., 1., 2.]);
        test_for_function("cos(2x)", [-1., 0., 1., 2.]);
        test_for_function("tan(x)", [-1., 0., 0.5, 1.]);
        test_for_function("ln(x^2 + 1)", [-2., 0., 1., 3.]);
        test_for_function("log(3x)", [0.5, 1., 4.]);
        test_for_function("exp(-x^2)", [-1., 0., 0.5, 2.]);
    }

    #[test]
    fn unary_signs() {
        test_for_function("-sin(x) + +x", [-1., 0., 1.]);
    }
}
