use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::{ErrorKind, EXPR};
use crate::{parser::ast::call::Func, tokenizer::TokenKind};

/// The input was empty, or contained only whitespace.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    help = format!("try entering an {}, such as `x^2 + 1`", "expression".fg(EXPR)),
)]
pub struct EmptyInput;

/// A character that cannot begin any token was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unrecognized character `{}`", self.character),
    labels = ["this character"],
    help = "expressions may only contain numbers, `x`, function names, `+ - * / ^` and parentheses",
)]
pub struct UnrecognizedCharacter {
    /// The character that was found.
    pub character: char,
}

/// A number had more than one decimal point, or no digits at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("malformed number `{}`", self.lexeme),
    labels = ["this number"],
    help = "a number has at least one digit and at most one decimal point",
)]
pub struct MalformedNumber {
    /// The lexeme of the number.
    pub lexeme: String,
}

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of expression",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = "implicit multiplication is not allowed here; add a `*` between the operands",
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", self.expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", self.found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A name other than `x` was used that is not one of the supported functions.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown function `{}`", self.name),
    labels = ["this function"],
    help = match &self.suggestion {
        Some(suggestion) => format!("did you mean `{}`?", suggestion.fg(EXPR)),
        None => format!("the supported functions are: {}", Func::ALL.map(|f| f.name()).join(", ")),
    },
)]
pub struct UnknownFunction {
    /// The name that was used.
    pub name: String,

    /// The closest supported function name, if any is close enough.
    pub suggestion: Option<&'static str>,
}

/// A function name was not followed by an opening parenthesis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing parenthesis after `{}`", self.name),
    labels = ["expected `(` here"],
    help = format!("function arguments are written in parentheses: `{}(x)`", self.name),
)]
pub struct MissingFunctionParen {
    /// The name of the function.
    pub name: String,
}

/// A parenthesis was opened but never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed", "expected `)` here"],
    help = "add a closing parenthesis `)` to match",
)]
pub struct UnclosedParenthesis;
