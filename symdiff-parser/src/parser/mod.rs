pub mod ast;
pub mod error;
pub mod fmt;
pub mod token;

use ast::expr::Expr;
use error::{kind, Error};
use super::tokenizer::{tokenize, Token, TokenKind};
use std::ops::Range;
use symdiff_error::ErrorKind;

/// Parses the given source into an expression tree. All of the source must be consumed.
///
/// ```
/// use symdiff_parser::{parse, parser::ast::{Expr, Func}};
///
/// assert_eq!(parse("sin(x)").unwrap(), Expr::call(Func::Sin, Expr::variable()));
/// ```
pub fn parse(source: &str) -> Result<Expr, Error> {
    let mut parser = Parser::new(source)?;
    let expr = parser.try_parse_full::<Expr>()?;
    log::debug!("parsed `{}` into {} nodes", source, expr.node_count());
    Ok(expr)
}

/// A recursive-descent parser for expressions in `x`. This is the type to use to parse an
/// arbitrary piece of source code into an abstract syntax tree.
///
/// The parser never looks more than one token behind or ahead of the cursor.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing. The last token is always
    /// [`TokenKind::End`].
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Tokenizes the given source and creates a parser for it.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Ok(Self {
            tokens: tokenize(source)?,
            cursor: 0,
        })
    }

    /// Creates an error that points at the current token.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns the span of the current token.
    pub fn span(&self) -> Range<usize> {
        self.current_token().span.clone()
    }

    /// Returns the previous token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the beginning of the stream.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor.checked_sub(1)?)
    }

    /// Returns the current token. The cursor is not moved. At the end of the stream, this is the
    /// [`TokenKind::End`] token.
    pub fn current_token(&self) -> &Token<'source> {
        &self.tokens[self.cursor.min(self.tokens.len() - 1)]
    }

    /// Moves the cursor to the next token. The cursor never moves past the
    /// [`TokenKind::End`] token.
    pub fn advance(&mut self) {
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
    }

    /// Returns the current token, then advances the cursor.
    pub fn next_token(&mut self) -> Token<'source> {
        // cloning is cheap: only Range<_> is cloned
        let token = self.current_token().clone();
        self.advance();
        token
    }

    /// Consumes the current token if it is of the given kind.
    pub fn match_token(&mut self, kind: TokenKind) -> Option<Token<'source>> {
        if self.current_token().kind == kind {
            Some(self.next_token())
        } else {
            None
        }
    }

    /// Parses a value from the given stream of tokens. All the tokens must be consumed by the
    /// parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        if self.current_token().kind == TokenKind::End {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary / unary operation is left-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary / unary operation is right-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `a op (b op c)`. For unary
    /// operations, this means `op op a` is evaluated as `op (op a)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of unary signs (`+` and `-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of numbers, the variable and function calls, which never need parentheses.
    Primary,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::call::Func;
    use token::op::{BinOpKind, UnaryOpKind};

    fn x() -> Expr {
        Expr::variable()
    }

    fn num(n: f64) -> Expr {
        Expr::number(n)
    }

    fn bin(op: BinOpKind, lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(op, lhs, rhs)
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16").unwrap(), num(16.0));
    }

    #[test]
    fn literal_float() {
        assert_eq!(parse("3.14").unwrap(), num(3.14));
        assert_eq!(parse(".5").unwrap(), num(0.5));
        assert_eq!(parse("2.").unwrap(), num(2.0));
    }

    #[test]
    fn variable_with_whitespace() {
        assert_eq!(parse("  x\t").unwrap(), x());
    }

    #[test]
    fn implicit_multiplication_with_constant() {
        assert_eq!(
            parse("2x+3").unwrap(),
            bin(BinOpKind::Add, bin(BinOpKind::Mul, num(2.0), x()), num(3.0)),
        );
    }

    #[test]
    fn implicit_multiplication_pairs() {
        let sin_x = || Expr::call(Func::Sin, x());
        let cases = [
            ("2sin(x)", bin(BinOpKind::Mul, num(2.0), sin_x())),
            ("2(x)", bin(BinOpKind::Mul, num(2.0), x())),
            ("x(2)", bin(BinOpKind::Mul, x(), num(2.0))),
            ("x sin(x)", bin(BinOpKind::Mul, x(), sin_x())),
            ("(x)(2)", bin(BinOpKind::Mul, x(), num(2.0))),
            ("(x)2", bin(BinOpKind::Mul, x(), num(2.0))),
            ("(2)x", bin(BinOpKind::Mul, num(2.0), x())),
            ("(2)sin(x)", bin(BinOpKind::Mul, num(2.0), sin_x())),
        ];

        for (input, expected) in cases {
            assert_eq!(parse(input).unwrap(), expected, "{}", input);
        }
    }

    #[test]
    fn implicit_multiplication_binds_like_explicit() {
        assert_eq!(
            parse("2x^2").unwrap(),
            bin(BinOpKind::Mul, num(2.0), bin(BinOpKind::Exp, x(), num(2.0))),
        );
        assert_eq!(
            parse("1/2x").unwrap(),
            bin(BinOpKind::Mul, bin(BinOpKind::Div, num(1.0), num(2.0)), x()),
        );
    }

    #[test]
    fn no_implicit_multiplication_after_variable() {
        let err = parse("x 2").unwrap_err();
        assert!(err.is::<kind::ExpectedEof>());
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn adjacent_variables_are_not_multiplied() {
        let err = parse("x x").unwrap_err();
        assert!(err.is::<kind::ExpectedEof>());
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn letter_run_is_a_function_name() {
        let err = parse("xx").unwrap_err();
        assert_eq!(err.spans, vec![0..2]);
        assert!(err.is::<kind::UnknownFunction>());
    }

    #[test]
    fn binary_left_associativity() {
        assert_eq!(
            parse("x - 2 - 3").unwrap(),
            bin(BinOpKind::Sub, bin(BinOpKind::Sub, x(), num(2.0)), num(3.0)),
        );
        assert_eq!(
            parse("x / 2 * 3").unwrap(),
            bin(BinOpKind::Mul, bin(BinOpKind::Div, x(), num(2.0)), num(3.0)),
        );
    }

    #[test]
    fn binary_right_associativity() {
        assert_eq!(
            parse("2 ^ 3 ^ x").unwrap(),
            bin(BinOpKind::Exp, num(2.0), bin(BinOpKind::Exp, num(3.0), x())),
        );
    }

    #[test]
    fn unary_binds_looser_than_exponent() {
        assert_eq!(
            parse("-x^2").unwrap(),
            Expr::unary(UnaryOpKind::Neg, bin(BinOpKind::Exp, x(), num(2.0))),
        );
        assert_eq!(
            parse("2^(-x)").unwrap(),
            bin(BinOpKind::Exp, num(2.0), Expr::unary(UnaryOpKind::Neg, x())),
        );
    }

    #[test]
    fn sign_after_caret_is_rejected() {
        for (input, found, span) in [
            ("2^-x", TokenKind::Sub, 2..3),
            ("x^-2", TokenKind::Sub, 2..3),
            ("2^+x", TokenKind::Add, 2..3),
        ] {
            let err = parse(input).unwrap_err();
            assert_eq!(
                err.downcast_ref::<kind::UnexpectedToken>().map(|kind| kind.found),
                Some(found),
                "{}",
                input,
            );
            assert_eq!(err.spans, vec![span]);
        }
    }

    #[test]
    fn stacked_signs() {
        assert_eq!(
            parse("+-x").unwrap(),
            Expr::unary(UnaryOpKind::Pos, Expr::unary(UnaryOpKind::Neg, x())),
        );
    }

    #[test]
    fn parenthesized_subtraction() {
        assert_eq!(
            parse("2-(3-x)").unwrap(),
            bin(BinOpKind::Sub, num(2.0), bin(BinOpKind::Sub, num(3.0), x())),
        );
    }

    #[test]
    fn nested_calls() {
        assert_eq!(
            parse("ln(exp(x))").unwrap(),
            Expr::call(Func::Ln, Expr::call(Func::Exp, x())),
        );
    }

    #[test]
    fn unknown_function_with_suggestion() {
        let err = parse("2 * sinn(x)").unwrap_err();
        assert_eq!(err.spans, vec![4..8]);
        assert_eq!(
            err.downcast_ref::<kind::UnknownFunction>(),
            Some(&kind::UnknownFunction {
                name: "sinn".to_string(),
                suggestion: Some("sin"),
            }),
        );
    }

    #[test]
    fn unknown_function_without_suggestion() {
        let err = parse("hyperbola(x)").unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::UnknownFunction>().and_then(|kind| kind.suggestion),
            None,
        );
    }

    #[test]
    fn missing_function_paren() {
        let err = parse("sin x").unwrap_err();
        assert!(err.is::<kind::MissingFunctionParen>());
        assert_eq!(err.spans, vec![4..5]);
    }

    #[test]
    fn unclosed_parenthesis() {
        let err = parse("(x + 1").unwrap_err();
        assert!(err.is::<kind::UnclosedParenthesis>());
        assert_eq!(err.spans, vec![0..1, 6..6]);

        let err = parse("cos(x").unwrap_err();
        assert!(err.is::<kind::UnclosedParenthesis>());
    }

    #[test]
    fn unexpected_eof() {
        for input in ["x +", "2 *", "-", "x ^"] {
            let err = parse(input).unwrap_err();
            assert!(err.is::<kind::UnexpectedEof>(), "{}", input);
        }
    }

    #[test]
    fn unexpected_token() {
        let err = parse("x + * 2").unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::UnexpectedToken>().map(|kind| kind.found),
            Some(TokenKind::Mul),
        );

        let err = parse("sin()").unwrap_err();
        assert!(err.is::<kind::UnexpectedToken>());
    }

    #[test]
    fn trailing_close_paren() {
        let err = parse("x + 1)").unwrap_err();
        assert!(err.is::<kind::ExpectedEof>());
    }

    #[test]
    fn tokenizer_errors_propagate() {
        assert!(parse("").unwrap_err().is::<kind::EmptyInput>());
        assert!(parse("x # 1").unwrap_err().is::<kind::UnrecognizedCharacter>());
        assert!(parse("1..2").unwrap_err().is::<kind::MalformedNumber>());
    }
}
