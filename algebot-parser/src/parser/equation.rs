//! The structured equation: an equality between two expression trees.

use crate::parser::{
    ast::{Expr, LitInt, Literal},
    error::kind,
    fmt::Latex,
    Parser,
};
use algebot_error::Error;
use std::fmt;

/// An equality between two expression trees over at most one variable.
///
/// This is the boundary between text and algebra: a successfully constructed `Equation` is
/// guaranteed to reference at most one distinct variable, so the solver can treat "the
/// variable" as unambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    /// The left-hand side of the equality.
    pub lhs: Expr,

    /// The right-hand side of the equality. For a bare expression with no `==`, this is a
    /// synthesized literal zero.
    pub rhs: Expr,
}

impl Equation {
    /// Parses a canonical equation string into an [`Equation`].
    ///
    /// If the string contains `==`, it is split on the **first** occurrence and each side is
    /// parsed independently; both sides must be non-empty. Otherwise the whole string is
    /// parsed as a single expression equated to zero.
    pub fn parse(canonical: &str) -> Result<Self, Error> {
        let equation = match canonical.find("==") {
            Some(idx) => {
                let left_src = &canonical[..idx];
                let right_src = &canonical[idx + 2..];

                if left_src.trim().is_empty() {
                    return Err(Error::new(
                        vec![0..idx + 2],
                        kind::EmptyEquationSide { left: true },
                    ));
                }
                if right_src.trim().is_empty() {
                    return Err(Error::new(
                        vec![idx..canonical.len()],
                        kind::EmptyEquationSide { left: false },
                    ));
                }

                let lhs = Parser::new(left_src)?.try_parse_full::<Expr>()?;
                let rhs = Parser::with_offset(right_src, idx + 2)?.try_parse_full::<Expr>()?;
                Self { lhs, rhs }
            },
            None => {
                let lhs = Parser::new(canonical)?.try_parse_full::<Expr>()?;
                // a bare expression is read as `expr == 0`; the synthesized zero points at the
                // end of the string
                let rhs = Expr::Literal(Literal::Integer(LitInt {
                    value: String::from("0"),
                    span: canonical.len()..canonical.len(),
                }));
                Self { lhs, rhs }
            },
        };

        let mut symbols = Vec::new();
        equation.lhs.collect_symbols(&mut symbols);
        equation.rhs.collect_symbols(&mut symbols);

        if symbols.len() > 1 {
            let (names, spans): (Vec<_>, Vec<_>) = symbols
                .into_iter()
                .map(|(name, span)| (name.to_owned(), span))
                .unzip();
            return Err(Error::new(spans, kind::MultipleVariables { names }));
        }

        Ok(equation)
    }

    /// Returns the name of the equation's variable, or [`None`] for a constant equation such
    /// as `3 == 3`.
    pub fn variable(&self) -> Option<&str> {
        let mut symbols = Vec::new();
        self.lhs.collect_symbols(&mut symbols);
        self.rhs.collect_symbols(&mut symbols);
        symbols.first().map(|(name, _)| *name)
    }
}

impl fmt::Display for Equation {
    /// Prints the equation in its canonical form, spacing the equality for readability.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} == {}", self.lhs, self.rhs)
    }
}

impl Latex for Equation {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.lhs.fmt_latex(f)?;
        write!(f, " = ")?;
        self.rhs.fmt_latex(f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn split_on_equality() {
        let eq = Equation::parse("4*x-8==0").unwrap();
        assert_eq!(eq.lhs.span(), 0..5);
        assert_eq!(eq.rhs.span(), 7..8);
        assert_eq!(eq.variable(), Some("x"));
    }

    #[test]
    fn bare_expression_gets_implicit_zero() {
        let eq = Equation::parse("x**2-5*x+6").unwrap();
        assert_eq!(eq.rhs, Expr::Literal(Literal::Integer(LitInt {
            value: String::from("0"),
            span: 10..10,
        })));
    }

    #[test]
    fn splits_on_first_equality_only() {
        // the right side `2==3` then fails to parse as a single expression
        Equation::parse("1==2==3").unwrap_err();
    }

    #[test]
    fn empty_left_side_fails() {
        Equation::parse("==5").unwrap_err();
    }

    #[test]
    fn empty_right_side_fails() {
        Equation::parse("x+1==").unwrap_err();
    }

    #[test]
    fn right_side_errors_point_into_full_string() {
        let err = Equation::parse("x==5+").unwrap_err();
        // the missing operand is at the very end of the full canonical string
        assert_eq!(err.spans, vec![5..5]);
    }

    #[test]
    fn multiple_variables_are_rejected() {
        let err = Equation::parse("x+y==0").unwrap_err();
        assert_eq!(err.spans, vec![0..1, 2..3]);
    }

    #[test]
    fn constant_equation_has_no_variable() {
        let eq = Equation::parse("3==3").unwrap();
        assert_eq!(eq.variable(), None);
    }

    #[test]
    fn same_variable_twice_is_fine() {
        let eq = Equation::parse("x*x-4==0").unwrap();
        assert_eq!(eq.variable(), Some("x"));
    }
}
