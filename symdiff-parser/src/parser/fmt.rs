//! Rendering of expressions as infix text, and as an indented tree for debugging.
//!
//! The infix form uses the fewest parentheses that still parse back into an equivalent
//! expression: an operand is parenthesized when it binds more loosely than its parent operator,
//! or equally loosely on the side that associativity would otherwise regroup.

use std::fmt::{Display, Formatter, Result};
use super::{
    ast::{binary::Binary, call::Call, expr::Expr, unary::Unary},
    token::op::BinOpKind,
    Associativity,
    Precedence,
};

/// The number of significant digits used to print numbers.
pub const SIGNIFICANT_DIGITS: usize = 10;

/// Printed in place of a number that has no finite value.
pub const PLACEHOLDER: &str = "<?>";

/// Formats a number with [`SIGNIFICANT_DIGITS`] significant digits in positional notation,
/// trimming trailing zeros. Negative zero is printed as `0`.
pub fn fmt_number(n: f64) -> String {
    if !n.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    // the exponent of the rounded value, which can differ from that of `n` itself
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, n.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return n.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return n.to_string();
    };
    let digits = mantissa.replace('.', "");

    // position of the decimal point within `digits`
    let point = exponent + 1;
    let mut result = String::new();
    if n < 0.0 {
        result.push('-');
    }

    if point <= 0 {
        result.push_str("0.");
        result.push_str(&"0".repeat(point.unsigned_abs() as usize));
        result.push_str(&digits);
    } else if point as usize >= digits.len() {
        result.push_str(&digits);
        result.push_str(&"0".repeat(point as usize - digits.len()));
    } else {
        let (int, frac) = digits.split_at(point as usize);
        result.push_str(int);
        result.push('.');
        result.push_str(frac);
    }

    trim_trailing(result)
}

/// Removes trailing zeros after the decimal point, and the point itself if nothing follows it.
fn trim_trailing(mut s: String) -> String {
    if s.contains('.') {
        let len = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(len);
    }
    s
}

/// Writes an operand, wrapped in parentheses if requested.
fn fmt_operand(f: &mut Formatter, operand: &Expr, paren: bool) -> Result {
    if paren {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Number(n) => write!(f, "{}", fmt_number(*n)),
            Self::Variable => write!(f, "x"),
            Self::Binary(binary) => binary.fmt(f),
            Self::Unary(unary) => unary.fmt(f),
            Self::Call(call) => call.fmt(f),
        }
    }
}

impl Display for Binary {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let precedence = self.op.precedence();

        let lhs = self.lhs.precedence();
        let lhs_paren = match self.op.associativity() {
            Associativity::Left => lhs < precedence,
            Associativity::Right => lhs <= precedence,
        };

        let rhs = self.rhs.precedence();
        let rhs_paren = match self.op {
            // a signed exponent needs parentheses, as in `2 ^ (-(x))`
            BinOpKind::Add | BinOpKind::Mul | BinOpKind::Exp => rhs < precedence,
            BinOpKind::Sub | BinOpKind::Div => rhs <= precedence,
        };

        fmt_operand(f, &self.lhs, lhs_paren)?;
        write!(f, " {} ", self.op)?;
        fmt_operand(f, &self.rhs, rhs_paren)
    }
}

impl Display for Unary {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}({})", self.op, self.operand)
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}({})", self.func, self.arg)
    }
}

/// A wrapper type that implements [`Display`] by printing an expression as an indented tree,
/// one node per line.
pub struct TreeFormatter<'a>(&'a Expr);

impl Expr {
    /// Wraps the expression in a [`TreeFormatter`].
    pub fn as_tree(&self) -> TreeFormatter<'_> {
        TreeFormatter(self)
    }
}

impl Display for TreeFormatter<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        fmt_tree(f, self.0, 0)
    }
}

fn fmt_tree(f: &mut Formatter, expr: &Expr, depth: usize) -> Result {
    let indent = "  ".repeat(depth);
    match expr {
        Expr::Number(n) => writeln!(f, "{}[NUM: {}]", indent, fmt_number(*n)),
        Expr::Variable => writeln!(f, "{}[VAR: x]", indent),
        Expr::Binary(binary) => {
            writeln!(f, "{}[OP: {}]", indent, binary.op)?;
            fmt_tree(f, &binary.lhs, depth + 1)?;
            fmt_tree(f, &binary.rhs, depth + 1)
        },
        Expr::Unary(unary) => {
            writeln!(f, "{}[UNARY: {}]", indent, unary.op)?;
            fmt_tree(f, &unary.operand, depth + 1)
        },
        Expr::Call(call) => {
            writeln!(f, "{}[FUNC: {}]", indent, call.func)?;
            fmt_tree(f, &call.arg, depth + 1)
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::parser::parse;

    fn reprint(input: &str) -> String {
        parse(input).unwrap().to_string()
    }

    #[test]
    fn fmt_display() {
        assert_eq!(reprint("2x+3"), "2 * x + 3");
        assert_eq!(reprint("sin(x)cos(x)"), "sin(x) * cos(x)");
    }

    #[test]
    fn fmt_parenthesized_right_operand() {
        assert_eq!(reprint("2-(3-x)"), "2 - (3 - x)");
        assert_eq!(reprint("x/(2*x)"), "x / (2 * x)");
        assert_eq!(reprint("x+(2+x)"), "x + 2 + x");
    }

    #[test]
    fn fmt_redundant_parens_dropped() {
        assert_eq!(reprint("(x/2)*x"), "x / 2 * x");
        assert_eq!(reprint("((x))"), "x");
    }

    #[test]
    fn fmt_powers() {
        assert_eq!(reprint("(x+1)^2"), "(x + 1) ^ 2");
        assert_eq!(reprint("2^3^x"), "2 ^ 3 ^ x");
        assert_eq!(reprint("(2^3)^x"), "(2 ^ 3) ^ x");
        assert_eq!(reprint("2^(-x)"), "2 ^ (-(x))");
    }

    #[test]
    fn fmt_unary() {
        assert_eq!(reprint("-x^2"), "-(x ^ 2)");
        assert_eq!(reprint("(-x)^2"), "(-(x)) ^ 2");
        assert_eq!(reprint("+x"), "+(x)");
        assert_eq!(reprint("x*-x"), "x * -(x)");
    }

    #[test]
    fn fmt_negative_numbers() {
        let square = Expr::binary(BinOpKind::Exp, Expr::number(-2.0), Expr::number(2.0));
        assert_eq!(square.to_string(), "(-2) ^ 2");

        let diff = Expr::binary(BinOpKind::Sub, Expr::variable(), Expr::number(-2.0));
        assert_eq!(diff.to_string(), "x - -2");

        let reciprocal = Expr::binary(BinOpKind::Exp, Expr::variable(), Expr::number(-3.0));
        assert_eq!(reciprocal.to_string(), "x ^ (-3)");
        assert_eq!(parse(&reciprocal.to_string()).unwrap().to_string(), "x ^ (-(3))");
    }

    #[test]
    fn fmt_numbers() {
        assert_eq!(fmt_number(2.0), "2");
        assert_eq!(fmt_number(0.1), "0.1");
        assert_eq!(fmt_number(1234.5), "1234.5");
        assert_eq!(fmt_number(1.0 / 3.0), "0.3333333333");
        assert_eq!(fmt_number(-2.5), "-2.5");
        assert_eq!(fmt_number(-0.0), "0");
        assert_eq!(fmt_number(1e-5), "0.00001");
        assert_eq!(fmt_number(1e10), "10000000000");
        assert_eq!(fmt_number(123456789012.0), "123456789000");
        assert_eq!(fmt_number(9.99999999999), "10");
        assert_eq!(fmt_number(f64::NAN), PLACEHOLDER);
    }

    #[test]
    fn fmt_tree_dump() {
        let tree = parse("2x + sin(-x)").unwrap().as_tree().to_string();
        assert_eq!(
            tree,
            "[OP: +]\n  [OP: *]\n    [NUM: 2]\n    [VAR: x]\n  [FUNC: sin]\n    [UNARY: -]\n      [VAR: x]\n",
        );
    }
}
