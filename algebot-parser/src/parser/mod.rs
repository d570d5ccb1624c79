pub mod ast;
pub mod equation;
pub mod error;
pub mod fmt;
pub mod op;

use crate::tokenizer::{tokenize_complete, Token};
use algebot_error::Error;
use error::kind;
use std::ops::Range;

/// A parser for one side of a canonical equation string.
///
/// The whole side is tokenized up front so the parser can backtrack when speculating (for
/// example, when peeking past an operand for a following operator).
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The span offset this parser was created with, used to point errors at the right region
    /// of the full canonical string when parsing a sliced-out side.
    offset: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Self::with_offset(source, 0)
    }

    /// Create a new parser for the given source, shifting all spans by `offset`.
    pub fn with_offset(source: &'source str, offset: usize) -> Result<Self, Error> {
        let tokens = tokenize_complete(source, offset)
            .map_err(|span| Error::new(vec![span], kind::UnknownToken))?;
        Ok(Self { tokens, cursor: 0, offset })
    }

    /// Creates an error that points at the current token, or the end of the source if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl algebot_error::ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens
            .last()
            .map_or(self.offset..self.offset, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source if the cursor is at the
    /// end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(Error::new(vec![self.eof_span()], kind::UnexpectedEof))
    }

    /// Speculatively parses a value from the given stream of tokens, automatically backtracking
    /// the cursor position if parsing fails.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        match T::parse(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Parses a value, requiring that the entire stream is consumed (ignoring trailing
    /// whitespace). The cursor is backtracked if parsing fails.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        let compute = |input: &mut Self| {
            let value = T::parse(input)?;
            match input.next_token() {
                Ok(token) => Err(Error::new(vec![token.span], kind::ExpectedEof {
                    found: token.kind,
                })),
                Err(_) => Ok(value),
            }
        };

        match compute(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}
