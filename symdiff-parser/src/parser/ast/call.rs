use crate::{
    parser::{
        ast::expr::{parse_closing_paren, Expr},
        error::{kind, Error},
        Parse,
        Parser,
    },
    tokenizer::{Token, TokenKind},
};
use levenshtein::levenshtein;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest edit distance at which an unknown function name gets a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// A supported function of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    Sin,
    Cos,
    Tan,

    /// Natural logarithm.
    Ln,

    /// Base-10 logarithm.
    Log,

    Exp,
}

impl Func {
    /// Every supported function.
    pub const ALL: [Func; 6] = [Func::Sin, Func::Cos, Func::Tan, Func::Ln, Func::Log, Func::Exp];

    /// Returns the name used to call the function.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Ln => "ln",
            Func::Log => "log",
            Func::Exp => "exp",
        }
    }

    /// Looks up a function by its exact name.
    pub fn from_name(name: &str) -> Option<Func> {
        Func::ALL.into_iter().find(|func| func.name() == name)
    }

    /// Returns the name of the supported function closest to `name`, if it is within a small
    /// edit distance.
    pub fn closest(name: &str) -> Option<&'static str> {
        Func::ALL
            .into_iter()
            .map(|func| (func.name(), levenshtein(name, func.name())))
            .filter(|(_, distance)| *distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(_, distance)| *distance)
            .map(|(name, _)| name)
    }
}

impl Display for Func {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A function call, such as `sin(2x)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The function being called.
    pub func: Func,

    /// The argument of the call.
    pub arg: Box<Expr>,
}

/// Parses the rest of a function call whose name token has already been consumed.
pub(crate) fn parse_call(input: &mut Parser, name: Token) -> Result<Expr, Error> {
    let func = Func::from_name(name.lexeme).ok_or_else(|| {
        Error::new(vec![name.span.clone()], kind::UnknownFunction {
            name: name.lexeme.to_string(),
            suggestion: Func::closest(name.lexeme),
        })
    })?;

    let open = input.match_token(TokenKind::OpenParen).ok_or_else(|| {
        input.error(kind::MissingFunctionParen { name: name.lexeme.to_string() })
    })?;
    let arg = Expr::parse(input)?;
    parse_closing_paren(input, &open)?;

    Ok(Expr::call(func, arg))
}
