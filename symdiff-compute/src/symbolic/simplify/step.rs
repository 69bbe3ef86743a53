use std::fmt::{self, Display, Formatter};

/// A rewrite applied while simplifying an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `a-b = a+(-b)`
    SubtractToAdd,

    /// An operation on constants was replaced by its value.
    FoldConstant,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a/1 = a`
    DivideOne,

    /// Two numeric literals separated by a chain of the same operation were combined.
    ///
    /// `2+(a+3) = 5+a`
    CombineLiterals,

    /// `a^1 = a`
    PowerOne,

    /// `a^0 = 1`
    PowerZero,

    /// `0^a = 0`
    ZeroBase,

    /// `1^a = 1`
    OneBase,

    /// `a^(-n) = 1/a^n`
    NegativeExponent,

    /// `+a = a`
    UnaryPlus,

    /// `-(-a) = a`
    DoubleNegation,

    /// `-(n+a) = (-n)+(-a)`
    DistributeNegation,

    /// `-(n*a) = (-n)*a`
    NegateFactor,

    /// `ln(exp(a)) = a`
    LnExp,

    /// `log(10^a) = a`
    LogPowerOfTen,
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let description = match self {
            Step::SubtractToAdd => "a - b = a + (-b)",
            Step::FoldConstant => "evaluate constant operation",
            Step::AddZero => "a + 0 = a",
            Step::MultiplyZero => "a * 0 = 0",
            Step::MultiplyOne => "a * 1 = a",
            Step::DivideOne => "a / 1 = a",
            Step::CombineLiterals => "combine numeric literals",
            Step::PowerOne => "a ^ 1 = a",
            Step::PowerZero => "a ^ 0 = 1",
            Step::ZeroBase => "0 ^ a = 0",
            Step::OneBase => "1 ^ a = 1",
            Step::NegativeExponent => "a ^ (-n) = 1 / a ^ n",
            Step::UnaryPlus => "+a = a",
            Step::DoubleNegation => "-(-a) = a",
            Step::DistributeNegation => "-(a + b) = -a + -b",
            Step::NegateFactor => "-(a * b) = (-a) * b",
            Step::LnExp => "ln(exp(a)) = a",
            Step::LogPowerOfTen => "log(10 ^ a) = a",
        };
        write!(f, "{}", description)
    }
}
