//! Exact rational arithmetic for constant folding.

use std::fmt::{self, Display, Formatter};
use symdiff_parser::parser::{ast::Expr, token::op::BinOpKind};

/// The largest magnitude at which every integer is exactly representable as an `f64`.
const MAX_EXACT_INTEGER: i64 = 1 << 53;

/// Greatest common divisor by Euclid's algorithm.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// A rational number in lowest terms, with a positive denominator.
///
/// Every operation is checked: one that overflows or divides by zero returns [`None`], in which
/// case the caller falls back to floating-point arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Creates a fraction reduced to lowest terms. Returns [`None`] if the denominator is zero.
    pub fn new(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }

        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
        let divisor = i64::try_from(divisor).ok()?;
        let (numerator, denominator) = (numerator / divisor, denominator / divisor);

        if denominator < 0 {
            Some(Self {
                numerator: numerator.checked_neg()?,
                denominator: denominator.checked_neg()?,
            })
        } else {
            Some(Self { numerator, denominator })
        }
    }

    /// Creates a fraction from an integer.
    pub fn integer(n: i64) -> Self {
        Self { numerator: n, denominator: 1 }
    }

    /// Converts a float to a fraction if it is an integer that `f64` represents exactly.
    pub fn from_f64(value: f64) -> Option<Self> {
        let exact = value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER as f64;
        exact.then(|| Self::integer(value as i64))
    }

    /// Returns true if the denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Returns true if both parts of the fraction can be stored exactly in an `f64`.
    pub fn fits_f64(&self) -> bool {
        self.numerator.abs() <= MAX_EXACT_INTEGER && self.denominator <= MAX_EXACT_INTEGER
    }

    /// Converts the fraction to an expression: a number if it is an integer, or a division of
    /// two integers otherwise.
    pub fn into_expr(self) -> Expr {
        if self.is_integer() {
            Expr::number(self.numerator as f64)
        } else {
            Expr::binary(
                BinOpKind::Div,
                Expr::number(self.numerator as f64),
                Expr::number(self.denominator as f64),
            )
        }
    }

    pub fn checked_neg(self) -> Option<Self> {
        Some(Self { numerator: self.numerator.checked_neg()?, ..self })
    }

    /// Returns the reciprocal of the fraction, or [`None`] if it is zero.
    pub fn checked_recip(self) -> Option<Self> {
        Self::new(self.denominator, self.numerator)
    }

    /// `a/b + c/d = (a*d + c*b) / (b*d)`
    pub fn checked_add(self, other: Self) -> Option<Self> {
        let numerator = self.numerator.checked_mul(other.denominator)?
            .checked_add(other.numerator.checked_mul(self.denominator)?)?;
        Self::new(numerator, self.denominator.checked_mul(other.denominator)?)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.checked_add(other.checked_neg()?)
    }

    /// Multiplies two fractions, cross-reducing first to keep the intermediate values small.
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        let a = Self::new(self.numerator, other.denominator)?;
        let b = Self::new(other.numerator, self.denominator)?;
        Self::new(
            a.numerator.checked_mul(b.numerator)?,
            a.denominator.checked_mul(b.denominator)?,
        )
    }

    pub fn checked_div(self, other: Self) -> Option<Self> {
        self.checked_mul(other.checked_recip()?)
    }

    /// Raises the fraction to an integer power. Returns [`None`] if the exponent is not an
    /// integer.
    pub fn checked_pow(self, exponent: Self) -> Option<Self> {
        if !exponent.is_integer() {
            return None;
        }

        let base = if exponent.numerator < 0 { self.checked_recip()? } else { self };
        let power = u32::try_from(exponent.numerator.unsigned_abs()).ok()?;
        Self::new(
            base.numerator.checked_pow(power)?,
            base.denominator.checked_pow(power)?,
        )
    }

    /// If the fraction is a (possibly negative) integer power of ten, returns that power.
    pub fn log10(self) -> Option<i64> {
        let (mut rest, inverted) = match (self.numerator, self.denominator) {
            (n, 1) if n > 0 => (n, false),
            (1, d) => (d, true),
            _ => return None,
        };

        let mut power = 0;
        while rest % 10 == 0 {
            rest /= 10;
            power += 1;
        }

        match (rest, inverted) {
            (1, false) => Some(power),
            (1, true) => Some(-power),
            _ => None,
        }
    }

    /// Applies a binary operator.
    pub fn checked_binary(self, op: BinOpKind, other: Self) -> Option<Self> {
        match op {
            BinOpKind::Add => self.checked_add(other),
            BinOpKind::Sub => self.checked_sub(other),
            BinOpKind::Mul => self.checked_mul(other),
            BinOpKind::Div => self.checked_div(other),
            BinOpKind::Exp => self.checked_pow(other),
        }
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn frac(numerator: i64, denominator: i64) -> Fraction {
        Fraction::new(numerator, denominator).unwrap()
    }

    #[test]
    fn normalized() {
        assert_eq!(frac(2, 4), frac(1, 2));
        assert_eq!(frac(3, -6), frac(-1, 2));
        assert_eq!(frac(0, -5), Fraction::integer(0));
        assert_eq!(frac(-3, -6).to_string(), "1/2");
        assert_eq!(Fraction::new(1, 0), None);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(frac(1, 3).checked_add(frac(1, 6)), Some(frac(1, 2)));
        assert_eq!(frac(1, 3).checked_sub(frac(1, 2)), Some(frac(-1, 6)));
        assert_eq!(frac(2, 3).checked_mul(frac(3, 4)), Some(frac(1, 2)));
        assert_eq!(frac(2, 3).checked_div(frac(4, 9)), Some(frac(3, 2)));
        assert_eq!(frac(2, 3).checked_div(Fraction::integer(0)), None);
    }

    #[test]
    fn powers() {
        assert_eq!(frac(2, 3).checked_pow(Fraction::integer(2)), Some(frac(4, 9)));
        assert_eq!(frac(2, 3).checked_pow(Fraction::integer(-3)), Some(frac(27, 8)));
        assert_eq!(Fraction::integer(5).checked_pow(Fraction::integer(0)), Some(Fraction::integer(1)));
        assert_eq!(Fraction::integer(2).checked_pow(frac(1, 2)), None);
        assert_eq!(Fraction::integer(0).checked_pow(Fraction::integer(-1)), None);
    }

    #[test]
    fn overflow_is_none() {
        let big = Fraction::integer(i64::MAX);
        assert_eq!(big.checked_add(Fraction::integer(1)), None);
        assert_eq!(big.checked_mul(Fraction::integer(2)), None);
        assert_eq!(Fraction::integer(10).checked_pow(Fraction::integer(40)), None);
        assert_eq!(Fraction::integer(i64::MIN).checked_neg(), None);
    }

    #[test]
    fn from_f64() {
        assert_eq!(Fraction::from_f64(-4.0), Some(Fraction::integer(-4)));
        assert_eq!(Fraction::from_f64(0.5), None);
        assert_eq!(Fraction::from_f64(1e300), None);
    }

    #[test]
    fn powers_of_ten() {
        assert_eq!(Fraction::integer(1000).log10(), Some(3));
        assert_eq!(Fraction::integer(1).log10(), Some(0));
        assert_eq!(frac(1, 100).log10(), Some(-2));
        assert_eq!(Fraction::integer(20).log10(), None);
        assert_eq!(Fraction::integer(-10).log10(), None);
    }
}
