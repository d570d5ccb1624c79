//! Exact symbolic solving of linear and quadratic equations.
//!
//! The input is a parsed [`Equation`](algebot_parser::parser::equation::Equation). The
//! equation is first folded into dense polynomial coefficients over [`rug::Rational`]
//! ([`poly`]), then solved exactly ([`solve`]): rational roots stay rational, irrational
//! roots are kept as reduced radicals, and a negative discriminant produces a complex
//! conjugate pair. There is no floating-point approximation anywhere in the pipeline.
//!
//! Solving is degree-driven only: the classifier's linear/quadratic label never reaches this
//! crate. An empty result means the equation provably has no solution, which is distinct from
//! the error cases (non-polynomial shapes, degree three or higher).

pub mod error;
pub mod latex;
pub mod poly;
pub mod primitive;
pub mod solve;

pub use solve::{solve, Solution};
