//! Differentiation, simplification and numeric evaluation of expressions produced by
//! [`symdiff_parser`].
//!
//! ```
//! use symdiff_compute::symbolic::{derivative, simplify};
//! use symdiff_parser::parse;
//!
//! let expr = parse("x^2").unwrap();
//! let derived = simplify(&derivative(&expr)).unwrap();
//! assert_eq!(derived.to_string(), "2 * x");
//! ```

pub mod numerical;
pub mod symbolic;
