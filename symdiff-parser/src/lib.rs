//! Tokenizer, parser and printer for expressions in the single free variable `x`.
//!
//! ```
//! use symdiff_parser::parse;
//!
//! let expr = parse("2x + 3").unwrap();
//! assert_eq!(expr.to_string(), "2 * x + 3");
//! ```

pub mod parser;
pub mod tokenizer;

pub use parser::{ast::Expr, parse, Parser};
