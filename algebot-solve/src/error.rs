//! Error kinds raised while extracting coefficients or solving.
//!
//! These form the "solve failure" family: the equation parsed, but it is not something this
//! solver can handle. The orchestrator surfaces them as an internal computation error.

pub mod kind {
    use algebot_error::{build_report, ErrorKind, EXPR};
    use ariadne::{Fmt, Report};
    use std::ops::Range;

    /// The divisor of a division contains the variable, so the equation is not a polynomial.
    #[derive(Debug, Clone, PartialEq)]
    pub struct NonConstantDivisor;

    impl ErrorKind for NonConstantDivisor {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            build_report(
                src_id,
                spans,
                String::from("cannot divide by an expression containing the variable"),
                vec![String::from("this divisor is not a constant")],
                None,
            )
        }
    }

    /// The divisor of a division is the constant zero.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DivisionByZero;

    impl ErrorKind for DivisionByZero {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            build_report(
                src_id,
                spans,
                String::from("division by zero"),
                vec![String::from("this divisor is zero")],
                None,
            )
        }
    }

    /// The exponent of a power contains the variable.
    #[derive(Debug, Clone, PartialEq)]
    pub struct NonConstantExponent;

    impl ErrorKind for NonConstantExponent {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            build_report(
                src_id,
                spans,
                String::from("cannot raise to an exponent containing the variable"),
                vec![String::from("this exponent is not a constant")],
                None,
            )
        }
    }

    /// The exponent of a power is not a small non-negative integer.
    #[derive(Debug, Clone, PartialEq)]
    pub struct InvalidExponent {
        /// The largest exponent the coefficient extraction accepts.
        pub max: u32,
    }

    impl ErrorKind for InvalidExponent {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            build_report(
                src_id,
                spans,
                String::from("unsupported exponent"),
                vec![String::from("here")],
                Some(format!(
                    "exponents must be {}",
                    format!("integers between 0 and {}", self.max).fg(EXPR),
                )),
            )
        }
    }

    /// The polynomial's degree is outside what the solver handles.
    #[derive(Debug, Clone, PartialEq)]
    pub struct UnsupportedDegree {
        /// The actual degree of the equation.
        pub degree: usize,
    }

    impl ErrorKind for UnsupportedDegree {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            build_report(
                src_id,
                spans,
                format!("cannot solve an equation of degree {}", self.degree),
                vec![String::from("this equation")],
                Some(format!(
                    "only {} equations are supported",
                    "linear and quadratic".fg(EXPR),
                )),
            )
        }
    }
}
