pub mod token;

use crate::parser::error::{kind, Error};
use logos::Logos;
use token::RawKind;
pub use token::{Token, TokenKind};

/// Returns an owned array containing all of the tokens in the input, without whitespace and
/// terminated by a [`TokenKind::End`] token spanning the end of the input.
///
/// Blank input is rejected before scanning begins. A number lexeme with more than one decimal
/// point, or with no digits at all, is rejected, as is any character that cannot begin a token.
pub fn tokenize(input: &str) -> Result<Box<[Token]>, Error> {
    if input.trim().is_empty() {
        return Err(Error::new(vec![0..input.len()], kind::EmptyInput));
    }

    let mut lexer = RawKind::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let lexeme = lexer.slice();
        let kind = match result {
            Ok(RawKind::Whitespace) => continue,
            Ok(RawKind::Number) => {
                validate_number(lexeme).map_err(|err| Error::new(vec![span.clone()], err))?;
                TokenKind::Number
            },
            Ok(RawKind::Variable) => TokenKind::Variable,
            Ok(RawKind::Name) => TokenKind::FunctionName,
            Ok(RawKind::Add) => TokenKind::Add,
            Ok(RawKind::Sub) => TokenKind::Sub,
            Ok(RawKind::Mul) => TokenKind::Mul,
            Ok(RawKind::Div) => TokenKind::Div,
            Ok(RawKind::Exp) => TokenKind::Exp,
            Ok(RawKind::OpenParen) => TokenKind::OpenParen,
            Ok(RawKind::CloseParen) => TokenKind::CloseParen,
            Ok(RawKind::Symbol) | Err(()) => {
                return Err(Error::new(vec![span], kind::UnrecognizedCharacter {
                    character: lexeme.chars().next().unwrap_or_default(),
                }));
            },
        };

        tokens.push(Token { span, kind, lexeme });
    }

    tokens.push(Token {
        span: input.len()..input.len(),
        kind: TokenKind::End,
        lexeme: "",
    });

    log::trace!(
        "tokens: {}",
        tokens.iter().map(|token| format!("{:?}", token.kind)).collect::<Vec<_>>().join(" "),
    );
    Ok(tokens.into_boxed_slice())
}

/// Checks that a run of digits and decimal points forms a single number.
fn validate_number(lexeme: &str) -> Result<(), kind::MalformedNumber> {
    let points = lexeme.chars().filter(|&c| c == '.').count();
    let digits = lexeme.len() - points;
    if points > 1 || digits == 0 {
        Err(kind::MalformedNumber { lexeme: lexeme.to_string() })
    } else {
        Ok(())
    }
}
