use crate::parser::ast::Expr;
use std::fmt::{Display, Formatter, Result};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Formats a power as LaTeX, always bracing the exponent. The base prints bare: exponentiation
/// binds tightest in the grammar, so any base the parser can produce is a single literal.
pub fn fmt_pow(f: &mut Formatter, base: &Expr, exponent: &Expr) -> Result {
    base.fmt_latex(f)?;
    write!(f, "^{{")?;
    exponent.fmt_latex(f)?;
    write!(f, "}}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::parser::{ast::Expr, equation::Equation, fmt::Latex, Parser};

    /// Parses the input as a full expression, panicking on failure.
    fn parse_expr(input: &str) -> Expr {
        Parser::new(input).unwrap().try_parse_full::<Expr>().unwrap()
    }

    #[test]
    fn fmt_display() {
        assert_eq!(parse_expr("4*x-8").to_string(), "4*x-8");
    }

    #[test]
    fn fmt_display_roundtrips_negation() {
        assert_eq!(parse_expr("x+-3").to_string(), "x+-3");
        assert_eq!(parse_expr("-x**2").to_string(), "-x**2");
    }

    #[test]
    fn fmt_display_equation() {
        let eq = Equation::parse("x**2+2*x-3==0").unwrap();
        assert_eq!(eq.to_string(), "x**2+2*x-3 == 0");
    }

    #[test]
    fn fmt_display_implicit_zero() {
        let eq = Equation::parse("4*x-8").unwrap();
        assert_eq!(eq.to_string(), "4*x-8 == 0");
    }

    #[test]
    fn fmt_latex() {
        let expr = parse_expr("x**2+2*x-3");
        assert_eq!(expr.as_display().to_string(), "x^{2} + 2 \\cdot x - 3");
    }

    #[test]
    fn fmt_latex_division() {
        let expr = parse_expr("x/2");
        assert_eq!(expr.as_display().to_string(), "\\frac{x}{2}");
    }

    #[test]
    fn fmt_latex_negation() {
        let expr = parse_expr("-x**2");
        assert_eq!(expr.as_display().to_string(), "-x^{2}");
    }

    #[test]
    fn fmt_latex_equation() {
        let eq = Equation::parse("4*x-8==0").unwrap();
        assert_eq!(eq.as_display().to_string(), "4 \\cdot x - 8 = 0");
    }
}
