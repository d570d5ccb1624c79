//! Exact root finding for polynomials of degree at most two.

use crate::{error::kind, poly::Poly, primitive::{int, rat}};
use algebot_error::Error;
use algebot_parser::parser::equation::Equation;
use rug::{Integer, Rational};
use std::cmp::Ordering;

/// One exact solution of an equation.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// An exact rational value, such as `5` or `-3/4`.
    Rational(Rational),

    /// The value `base + coeff * sqrt(radicand)`.
    ///
    /// The radicand is never zero and never a perfect square; square factors are pulled out
    /// into `coeff` (so `sqrt(8)` is stored as `2 * sqrt(2)`). A negative radicand encodes a
    /// complex value: `sqrt(-d)` reads as `sqrt(d) * i`.
    Root {
        /// The rational part of the value.
        base: Rational,

        /// The signed multiplier of the radical part.
        coeff: Rational,

        /// The integer under the square root. Negative for complex values.
        radicand: Integer,
    },
}

/// Solves the equation exactly, returning all solutions.
///
/// An empty result means the equation provably has no solution (a constant equation, whether
/// identity or contradiction, solves to nothing). Degree one yields one rational root; degree
/// two yields the quadratic-formula roots, with the minus branch first, collapsing to a single
/// root when the discriminant is zero. Degree three or higher is a solve failure.
///
/// The classifier's linear/quadratic label plays no part here: only the actual degree of the
/// folded polynomial decides how the equation is solved.
pub fn solve(equation: &Equation) -> Result<Vec<Solution>, Error> {
    let poly = Poly::from_equation(equation)?;

    match poly.degree() {
        0 => Ok(Vec::new()),
        1 => {
            let root = -poly.coefficient(0) / poly.coefficient(1);
            Ok(vec![Solution::Rational(root)])
        },
        2 => Ok(solve_quadratic(
            poly.coefficient(2),
            poly.coefficient(1),
            poly.coefficient(0),
        )),
        degree => {
            let span = equation.lhs.span().start..equation.rhs.span().end;
            Err(Error::new(vec![span], kind::UnsupportedDegree { degree }))
        },
    }
}

/// Solves `a*x**2 + b*x + c == 0` with `a` nonzero, keeping every root exact.
fn solve_quadratic(a: Rational, b: Rational, c: Rational) -> Vec<Solution> {
    let two_a = rat(2) * a.clone();
    let base = -b.clone() / two_a.clone();
    let disc = b.clone() * b - rat(4) * a * c;

    if disc.cmp0() == Ordering::Equal {
        // a zero discriminant collapses both branches into one double root
        return vec![Solution::Rational(base)];
    }

    // sqrt(p/q) = sqrt(p*q)/q, so only one integer square root is needed
    let negative = disc.cmp0() == Ordering::Less;
    let n = Integer::from(disc.numer() * disc.denom()).abs();
    let (outside, radicand) = extract_square(n);

    // the full radical term of the formula: sqrt(|disc|) / (2a), signed by `a`
    let term = Rational::from((outside, disc.denom().clone())) / two_a;

    if radicand == 1 && !negative {
        // the discriminant is a perfect rational square; both roots are rational
        return vec![
            Solution::Rational(base.clone() - term.clone()),
            Solution::Rational(base + term),
        ];
    }

    let radicand = if negative { -radicand } else { radicand };
    vec![
        Solution::Root {
            base: base.clone(),
            coeff: -term.clone(),
            radicand: radicand.clone(),
        },
        Solution::Root {
            base,
            coeff: term,
            radicand,
        },
    ]
}

/// Splits `n > 0` into `(s, d)` with `n == s*s*d`, pulling square factors out of `d`.
///
/// Trial division stops at a fixed bound, so a radicand with a large square prime factor may
/// stay unreduced; it is still correct, just not minimal.
fn extract_square(mut n: Integer) -> (Integer, Integer) {
    if n.is_perfect_square() {
        return (n.sqrt(), int(1));
    }

    let mut outside = int(1);
    for f in 2u32..=1000 {
        let square = int(f) * int(f);
        if square > n {
            break;
        }
        while n.is_divisible(&square) {
            n /= &square;
            outside *= f;
        }
    }

    if n.is_perfect_square() {
        outside *= Integer::from(n.sqrt_ref());
        n = int(1);
    }

    (outside, n)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parses and solves a canonical equation string.
    fn roots(canonical: &str) -> Result<Vec<Solution>, Error> {
        solve(&Equation::parse(canonical).unwrap())
    }

    #[test]
    fn linear() {
        assert_eq!(roots("2*x+5==15").unwrap(), vec![Solution::Rational(rat(5))]);
    }

    #[test]
    fn linear_fractional_root() {
        assert_eq!(roots("3*x==1").unwrap(), vec![Solution::Rational(rat((1, 3)))]);
    }

    #[test]
    fn quadratic_two_rational_roots() {
        assert_eq!(roots("x**2-5*x+6").unwrap(), vec![
            Solution::Rational(rat(2)),
            Solution::Rational(rat(3)),
        ]);
    }

    #[test]
    fn quadratic_fractional_roots() {
        // 2x^2 + 5x - 3 factors as (2x - 1)(x + 3)
        assert_eq!(roots("2*x**2+5*x-3==0").unwrap(), vec![
            Solution::Rational(rat(-3)),
            Solution::Rational(rat((1, 2))),
        ]);
    }

    #[test]
    fn quadratic_double_root() {
        assert_eq!(roots("x**2-2*x+1==0").unwrap(), vec![Solution::Rational(rat(1))]);
    }

    #[test]
    fn quadratic_irrational_roots() {
        assert_eq!(roots("x**2-2==0").unwrap(), vec![
            Solution::Root { base: rat(0), coeff: rat(-1), radicand: int(2) },
            Solution::Root { base: rat(0), coeff: rat(1), radicand: int(2) },
        ]);
    }

    #[test]
    fn radicand_is_reduced() {
        // disc = 8: sqrt(8) = 2*sqrt(2), and the 2 cancels against 2a
        assert_eq!(roots("x**2-2*x-1==0").unwrap(), vec![
            Solution::Root { base: rat(1), coeff: rat(-1), radicand: int(2) },
            Solution::Root { base: rat(1), coeff: rat(1), radicand: int(2) },
        ]);
    }

    #[test]
    fn quadratic_complex_roots() {
        // matches the conventional ordering: -i before i
        assert_eq!(roots("x**2+1==0").unwrap(), vec![
            Solution::Root { base: rat(0), coeff: rat(-1), radicand: int(-1) },
            Solution::Root { base: rat(0), coeff: rat(1), radicand: int(-1) },
        ]);
    }

    #[test]
    fn quadratic_complex_with_real_part() {
        // x^2 - 2x + 5: roots 1 +- 2i
        assert_eq!(roots("x**2-2*x+5==0").unwrap(), vec![
            Solution::Root { base: rat(1), coeff: rat(-2), radicand: int(-1) },
            Solution::Root { base: rat(1), coeff: rat(2), radicand: int(-1) },
        ]);
    }

    #[test]
    fn constant_equation_has_no_solutions() {
        assert_eq!(roots("3==3").unwrap(), Vec::new());
        assert_eq!(roots("5==0").unwrap(), Vec::new());
    }

    #[test]
    fn vanishing_leading_term_solves_as_linear() {
        // x^2 cancels, leaving 2x - 6
        assert_eq!(roots("x**2+2*x==x**2+6").unwrap(), vec![Solution::Rational(rat(3))]);
    }

    #[test]
    fn cubic_is_unsupported() {
        roots("x**3-1==0").unwrap_err();
    }

    #[test]
    fn extract_square_cases() {
        assert_eq!(extract_square(int(1)), (int(1), int(1)));
        assert_eq!(extract_square(int(4)), (int(2), int(1)));
        assert_eq!(extract_square(int(8)), (int(2), int(2)));
        assert_eq!(extract_square(int(12)), (int(2), int(3)));
        assert_eq!(extract_square(int(7)), (int(1), int(7)));
    }
}
