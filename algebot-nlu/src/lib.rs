//! Query triage and equation extraction.
//!
//! This crate is the front half of the chatbot pipeline. Given a free-text query like
//! `"Please solve the linear equation: 4x - 8 = 0"`, it decides whether the query is in scope
//! at all ([`classify`]) and, if so, rewrites it into a canonical equation string
//! ([`normalize`]) that `algebot-parser` can consume.
//!
//! Both halves are pure text-to-text functions with no I/O and no shared state. The rewrite is
//! a strictly ordered sequence of lexical transformations; the order is load-bearing, since
//! each step operates on the previous step's output (for example, implicit-multiplication
//! repair must run before `=` becomes `==`, and the `x2` repair must run after `^` becomes
//! `**`).

pub mod classify;
pub mod normalize;

pub use classify::{classify, Classification};
pub use normalize::{normalize, CanonicalEquation};
