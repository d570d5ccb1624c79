//! LaTeX typesetting of solutions.
//!
//! This is the presentation boundary: it must be total over every value [`solve`] can
//! produce, including complex ones, so the response formatter never has a value it cannot
//! print.
//!
//! [`solve`]: crate::solve::solve

use crate::solve::Solution;
use algebot_parser::parser::fmt::Latex;
use rug::{Integer, Rational};
use std::cmp::Ordering;
use std::fmt::{Formatter, Result};

impl Latex for Solution {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Solution::Rational(value) => fmt_rational(f, value),
            Solution::Root { base, coeff, radicand } => {
                let mut leading = true;

                if *base != 0 {
                    fmt_rational(f, base)?;
                    leading = false;
                }

                match (coeff.cmp0(), leading) {
                    (Ordering::Less, true) => write!(f, "-")?,
                    (Ordering::Less, false) => write!(f, " - ")?,
                    (_, false) => write!(f, " + ")?,
                    (_, true) => (),
                }

                let magnitude = coeff.clone().abs();
                if magnitude != 1 {
                    fmt_rational(f, &magnitude)?;
                    write!(f, " ")?;
                }

                fmt_radical(f, radicand, magnitude == 1)
            },
        }
    }
}

/// Writes a rational as an integer or as `\frac{p}{q}` with the sign in front.
fn fmt_rational(f: &mut Formatter, value: &Rational) -> Result {
    if value.is_integer() {
        write!(f, "{}", value.numer())
    } else {
        if value.cmp0() == Ordering::Less {
            write!(f, "-")?;
        }
        write!(
            f,
            "\\frac{{{}}}{{{}}}",
            value.numer().clone().abs(),
            value.denom(),
        )
    }
}

/// Writes the radical part for the given radicand: `\sqrt{d}`, `i`, or `\sqrt{d} i`.
///
/// When the whole radical part is the bare imaginary unit and nothing was written before it,
/// `alone` keeps the output as `i` rather than `1 i`.
fn fmt_radical(f: &mut Formatter, radicand: &Integer, alone: bool) -> Result {
    let magnitude = radicand.clone().abs();
    let imaginary = radicand.cmp0() == Ordering::Less;

    if magnitude != 1 {
        write!(f, "\\sqrt{{{}}}", magnitude)?;
        if imaginary {
            write!(f, " i")?;
        }
        Ok(())
    } else if imaginary {
        write!(f, "i")
    } else if alone {
        // a radicand of 1 with a unit coefficient never leaves the solver, but stay total
        write!(f, "1")
    } else {
        Ok(())
    }
}
