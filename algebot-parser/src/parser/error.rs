//! Error kinds raised while parsing a canonical equation string.
//!
//! Every kind here belongs to the "malformed expression" family: the orchestrator treats any
//! parse-stage [`Error`](algebot_error::Error) as a syntax problem in the user's equation.

pub mod kind {
    use algebot_error::{build_report, ErrorKind, EXPR};
    use ariadne::{Fmt, Report};
    use crate::tokenizer::TokenKind;
    use std::ops::Range;

    /// The end of the equation was reached unexpectedly.
    #[derive(Debug, Clone, PartialEq)]
    pub struct UnexpectedEof;

    impl ErrorKind for UnexpectedEof {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            build_report(
                src_id,
                spans,
                String::from("unexpected end of equation"),
                vec![format!("you might need to add another {} here", "term".fg(EXPR))],
                None,
            )
        }
    }

    /// The end of the equation was expected, but something else was found.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ExpectedEof {
        /// The token that was found instead.
        pub found: TokenKind,
    }

    impl ErrorKind for ExpectedEof {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            build_report(
                src_id,
                spans,
                String::from("expected end of equation"),
                vec![String::from("I could not understand the equation from here on")],
                Some(format!("found {:?}", self.found)),
            )
        }
    }

    /// An unexpected token was encountered.
    #[derive(Debug, Clone, PartialEq)]
    pub struct UnexpectedToken {
        /// The token(s) that were expected.
        pub expected: &'static [TokenKind],

        /// The token that was found.
        pub found: TokenKind,
    }

    impl ErrorKind for UnexpectedToken {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            build_report(
                src_id,
                spans,
                String::from("unexpected token"),
                vec![format!(
                    "expected one of: {}",
                    self.expected
                        .iter()
                        .map(|t| format!("{:?}", t))
                        .collect::<Vec<_>>()
                        .join(", "),
                )],
                Some(format!("found {:?}", self.found)),
            )
        }
    }

    /// A character that is not part of the canonical equation alphabet.
    #[derive(Debug, Clone, PartialEq)]
    pub struct UnknownToken;

    impl ErrorKind for UnknownToken {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            build_report(
                src_id,
                spans,
                String::from("unrecognized character in equation"),
                vec![String::from("here")],
                Some(format!(
                    "equations can only contain {}",
                    "numbers, a variable, and the operators + - * / ** ==".fg(EXPR),
                )),
            )
        }
    }

    /// One side of the equality is empty, as in `==5` or `x+1==`.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EmptyEquationSide {
        /// Whether the empty side is the left-hand side.
        pub left: bool,
    }

    impl ErrorKind for EmptyEquationSide {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            build_report(
                src_id,
                spans,
                format!(
                    "missing the {} side of the equation",
                    if self.left { "left" } else { "right" },
                ),
                vec![String::from("add an expression here")],
                None,
            )
        }
    }

    /// The equation references more than one distinct variable.
    #[derive(Debug, Clone, PartialEq)]
    pub struct MultipleVariables {
        /// The names of all distinct variables, in source order.
        pub names: Vec<String>,
    }

    impl ErrorKind for MultipleVariables {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            build_report(
                src_id,
                spans,
                format!(
                    "equation references {} variables: {}",
                    self.names.len(),
                    self.names.join(", "),
                ),
                self.names
                    .iter()
                    .map(|name| format!("variable `{}` used here", name))
                    .collect(),
                Some(format!("only {} variable can be solved for", "one".fg(EXPR))),
            )
        }
    }
}
