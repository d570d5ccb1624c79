//! Functions to construct [`Integer`]s and [`Rational`]s from various types.

use rug::{ops::Pow, Integer, Rational};

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given value.
pub fn rat<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Creates an [`Integer`] from a string of decimal digits, as produced by the tokenizer.
pub fn int_from_str(s: &str) -> Integer {
    Integer::from_str_radix(s, 10).unwrap()
}

/// Creates a [`Rational`] from a decimal literal such as `3.14`, `.5`, or `3.`.
///
/// The literal is read exactly: `0.1` becomes `1/10`, not the nearest float.
pub fn rational_from_decimal(s: &str) -> Rational {
    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));

    let mut digits = String::with_capacity(whole.len() + frac.len());
    digits.push_str(whole);
    digits.push_str(frac);

    let numer = if digits.is_empty() { Integer::new() } else { int_from_str(&digits) };
    let denom = int(10).pow(frac.len() as u32);
    Rational::from((numer, denom))
}
