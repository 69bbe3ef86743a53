//! Symbolic manipulation of expressions.
//!
//! # Differentiation
//!
//! [`derivative()`] applies the rules of differentiation structurally, producing a new tree and
//! leaving its input untouched. The result is correct but verbose: the product rule alone turns
//! `2x` into `2 * 1 + 0 * x`. It is meant to be passed through the simplifier afterwards.
//!
//! # Simplification
//!
//! [`simplify()`] rewrites an expression bottom-up until no rewrite applies. Each pass first
//! simplifies the children of a node, then replaces subtraction with addition of the negated
//! operand, then folds constants, then applies at most one local rule such as `x * 1 = x`. Every
//! rule strictly shrinks the tree or the number of numeric literals in it, so the process reaches
//! a fixed point.
//!
//! Constants are folded either as floating-point values or as exact fractions, depending on the
//! [`ConstantMode`] given in the [`SimplifyOptions`].
//!
//! ```
//! use symdiff_compute::symbolic::{simplify_to_fixed_point, ConstantMode, SimplifyOptions};
//! use symdiff_parser::parse;
//!
//! let expr = parse("1/3 + 1/6 + 0x").unwrap();
//! let exact = SimplifyOptions::default().mode(ConstantMode::Exact);
//! assert_eq!(simplify_to_fixed_point(expr, &exact).unwrap().to_string(), "1 / 2");
//! ```

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use simplify::{
    simplify,
    simplify_once,
    simplify_to_fixed_point,
    simplify_with_steps,
    ConstantMode,
    SimplifyOptions,
};
pub use step_collector::StepCollector;
