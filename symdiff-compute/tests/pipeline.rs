use assert_float_eq::{afe_is_relative_eq, afe_relative_error_msg, afe_abs, assert_float_relative_eq};
use pretty_assertions::assert_eq;
use symdiff_compute::{
    numerical::Eval,
    symbolic::{derivative, simplify, simplify::error::ZeroToNegativePower},
};
use symdiff_parser::{
    parse,
    parser::token::op::BinOpKind,
    Expr,
};

/// Parses, differentiates and simplifies the given source.
fn simplified_derivative(source: &str) -> Expr {
    let expr = parse(source).unwrap();
    simplify(&derivative(&expr)).unwrap()
}

fn central_difference(expr: &Expr, x: f64) -> f64 {
    const DX: f64 = 1e-6;
    (expr.eval(x + DX) - expr.eval(x - DX)) / (2.0 * DX)
}

#[test]
fn parse_implicit_multiplication() {
    assert_eq!(parse("2x+3").unwrap(), Expr::binary(
        BinOpKind::Add,
        Expr::binary(BinOpKind::Mul, Expr::number(2.0), Expr::variable()),
        Expr::number(3.0),
    ));
}

#[test]
fn simplify_add_zero() {
    assert_eq!(simplify(&parse("x+0").unwrap()).unwrap(), Expr::variable());
}

#[test]
fn simplify_multiply_zero() {
    assert_eq!(simplify(&parse("0*sin(x)").unwrap()).unwrap(), Expr::number(0.0));
}

#[test]
fn derivative_of_square() {
    assert_eq!(simplified_derivative("x^2").to_string(), "2 * x");
}

#[test]
fn zero_to_negative_power() {
    let err = simplify(&parse("0^(-1)").unwrap()).unwrap_err();
    assert!(err.is::<ZeroToNegativePower>());
}

#[test]
fn render_nested_subtraction() {
    assert_eq!(parse("2-(3-x)").unwrap().to_string(), "2 - (3 - x)");
}

#[test]
fn derivative_shapes() {
    assert_eq!(simplified_derivative("3x + 5").to_string(), "3");
    assert_eq!(simplified_derivative("sin(x)").to_string(), "cos(x)");
    assert_eq!(simplified_derivative("exp(x)").to_string(), "exp(x)");
    assert_eq!(simplified_derivative("ln(x)").to_string(), "1 / x");
    assert_eq!(simplified_derivative("x^3").to_string(), "3 * x ^ 2");
    assert_eq!(simplified_derivative("7").to_string(), "0");
}

#[test]
fn derivative_matches_central_difference() {
    const TOL: f64 = 1e-4;
    for source in ["x^2", "sin(x)", "x*cos(x)", "1/x", "x^x"] {
        let expr = parse(source).unwrap();
        let simplified = simplified_derivative(source);
        for x in [0.4, 1.1, 2.5, 3.7] {
            let expected = central_difference(&expr, x);
            let actual = simplified.eval(x);
            assert!(
                (expected - actual).abs() <= TOL * expected.abs().max(1.0),
                "d/dx {} at {}: expected {}, got {} from `{}`",
                source, x, expected, actual, simplified,
            );
        }
    }
}

#[test]
fn simplified_derivative_evaluates() {
    let d = simplified_derivative("x*cos(x)");
    assert_float_relative_eq!(d.eval(1.0), 1f64.cos() - 1f64.sin());

    let d = simplified_derivative("x^x");
    assert_float_relative_eq!(d.eval(2.0), 4.0 * (2f64.ln() + 1.0));
}

#[test]
fn chain_rule_through_simplification() {
    let d = simplified_derivative("sin(x^2)");
    assert!(matches!(&d, Expr::Binary(binary) if binary.op == BinOpKind::Mul));
    assert_float_relative_eq!(d.eval(0.5), 0.25f64.cos());

    let d = simplified_derivative("log(x)");
    assert_float_relative_eq!(d.eval(3.0), 1.0 / (10f64.ln() * 3.0));
    assert!(matches!(&d, Expr::Binary(binary) if binary.op == BinOpKind::Div));
}

#[test]
fn errors_from_every_stage() {
    assert!(parse("").is_err());
    assert!(parse("x $ 2").is_err());
    assert!(parse("1..2").is_err());
    assert!(parse("sinn(x)").is_err());
    assert!(parse("(x + 1").is_err());
    assert!(simplify(&parse("x * 0^(2 - 5)").unwrap()).is_err());
}
