//! A scoped algebraic-equation chatbot.
//!
//! Wires the pipeline together: `algebot-nlu` decides whether a free-text query is in scope
//! and rewrites it into a canonical equation string, `algebot-parser` turns that string into a
//! structured equation, `algebot-solve` solves it exactly, and [`Chatbot::ask`] renders the
//! solutions as an answer sentence. Every failure along the way is recovered into a fixed
//! user-facing message; nothing a query can contain brings the process down.

pub mod chatbot;
pub mod error;

pub use chatbot::{Chatbot, SCOPE_MESSAGE};
