use logos::Logos;
use std::ops::Range;

/// The raw lexemes recognized by the scanner, before numbers are validated and whitespace is
/// dropped.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub(crate) enum RawKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[regex(r"[0-9.]+")]
    Number,

    #[token("x", priority = 3)]
    Variable,

    #[regex(r"[a-zA-Z]+")]
    Name,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r".", priority = 0)]
    Symbol,
}

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A numeric literal, such as `2`, `3.5` or `.5`.
    Number,

    /// The free variable `x`.
    Variable,

    /// Any other run of letters, which names a function.
    FunctionName,

    Add,
    Sub,
    Mul,
    Div,
    Exp,
    OpenParen,
    CloseParen,

    /// Marks the end of the input. Every token stream ends with exactly one of these.
    End,
}

impl TokenKind {
    /// Returns true if a factor ending with `self` directly followed by a factor starting with
    /// `next` is an implicit multiplication, such as `2x`, `x(x + 1)` or `(x)sin(x)`.
    pub fn implies_multiplication(self, next: TokenKind) -> bool {
        use TokenKind::*;
        matches!(
            (self, next),
            (Number, Variable)
                | (Number, FunctionName)
                | (Number, OpenParen)
                | (Variable, OpenParen)
                | (Variable, FunctionName)
                | (CloseParen, OpenParen)
                | (CloseParen, Number)
                | (CloseParen, Variable)
                | (CloseParen, FunctionName)
        )
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}
