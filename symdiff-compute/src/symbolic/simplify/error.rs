use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::{ErrorKind, EXPR};
use symdiff_parser::parser::fmt::fmt_number;

/// Zero was raised to a negative power, which would divide by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("zero cannot be raised to a negative power (here, {})", fmt_number(self.exponent)),
    help = format!("{} is undefined when n < 0", "0 ^ n".fg(EXPR)),
)]
pub struct ZeroToNegativePower {
    /// The value of the exponent.
    pub exponent: f64,
}
