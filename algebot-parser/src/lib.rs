//! Parser for canonical equation strings.
//!
//! The input to this crate is the output of `algebot-nlu`'s normalizer: a string over the
//! restricted alphabet of symbol names, digits, `.`, `+ - * /`, `**`, and at most one `==`.
//! [`Equation::parse`] splits on the first `==` (or supplies an implicit `== 0`), parses each
//! side into an expression tree, and enforces the single-variable rule.
//!
//! Errors carry spans into the canonical string and render as [`ariadne`] reports via
//! [`algebot_error`]; no lexer or parser failure escapes as a panic.
//!
//! [`Equation::parse`]: parser::equation::Equation::parse

pub mod parser;
pub mod tokenizer;
