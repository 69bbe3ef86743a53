use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::{Error, ErrorKind, EXPR};

/// The point given after `@` depends on `x`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the point to evaluate at must be a constant",
    labels = ["this expression depends on `x`"],
    help = format!("write a constant after the {}, such as `x^2 @ 3`", "@".fg(EXPR)),
)]
pub struct NonConstantPoint;

/// Moves the spans of an error produced from a slice of the input, so that they point into the
/// whole input.
pub fn shift_spans(mut err: Error, offset: usize) -> Error {
    for span in &mut err.spans {
        span.start += offset;
        span.end += offset;
    }
    err
}
