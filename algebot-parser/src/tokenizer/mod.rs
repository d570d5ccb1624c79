pub mod token;

use logos::Logos;
use std::ops::Range;
pub use token::{Token, TokenKind};

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows
/// the parser to backtrack freely.
///
/// Token spans are shifted by `offset`, so that a side of an equation that was sliced out of a
/// larger canonical string still reports spans into the full string.
///
/// Fails with the span of the first unrecognized character.
pub fn tokenize_complete(input: &str, offset: usize) -> Result<Box<[Token]>, Range<usize>> {
    let mut lexer = TokenKind::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span().start + offset..lexer.span().end + offset;
        match result {
            Ok(kind) => tokens.push(Token {
                span,
                kind,
                lexeme: lexer.slice(),
            }),
            Err(()) => return Err(span),
        }
    }

    Ok(tokens.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<const N: usize>(input: &str, expected: [(TokenKind, &str); N]) {
        let tokens = tokenize_complete(input, 0).unwrap();

        assert_eq!(tokens.len(), N);
        for (token, (expected_kind, expected_lexeme)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind, expected_kind);
            assert_eq!(token.lexeme, expected_lexeme);
        }
    }

    #[test]
    fn canonical_linear() {
        compare_tokens(
            "4*x-8==0",
            [
                (TokenKind::Int, "4"),
                (TokenKind::Mul, "*"),
                (TokenKind::Name, "x"),
                (TokenKind::Sub, "-"),
                (TokenKind::Int, "8"),
                (TokenKind::Eq, "=="),
                (TokenKind::Int, "0"),
            ],
        );
    }

    #[test]
    fn power_is_one_token() {
        compare_tokens(
            "x**2",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Exp, "**"),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn float_literal() {
        compare_tokens(
            "0.5*x",
            [
                (TokenKind::Float, "0.5"),
                (TokenKind::Mul, "*"),
                (TokenKind::Name, "x"),
            ],
        );
    }

    #[test]
    fn spans_are_offset() {
        let tokens = tokenize_complete("x+1", 10).unwrap();
        assert_eq!(tokens[0].span, 10..11);
        assert_eq!(tokens[2].span, 12..13);
    }

    #[test]
    fn unknown_character_fails_with_span() {
        assert_eq!(tokenize_complete("x?1", 0), Err(1..2));
    }

    #[test]
    fn lone_equals_is_an_error() {
        // the normalizer always doubles `=`, so a lone one can only come from a malformed string
        assert_eq!(tokenize_complete("x=1", 0), Err(1..2));
    }
}
