//! Lexical rewriting of a raw query into a canonical equation string.

use std::fmt;

/// Conversational filler removed from queries before the symbol-level cleanup.
///
/// Matched as raw substrings in this exact order, not as whole words. This is aggressive on
/// purpose and has a known hazard: removing `a` or `an` also deletes those letters inside
/// other tokens (`"tan"` becomes `"t"`). Queries that survive classification rarely contain
/// such tokens, and the downstream parser rejects whatever garbage remains.
const STOP_WORDS: &[&str] = &[
    "please",
    "solve",
    "the",
    "linear",
    "equation",
    "find",
    "roots",
    "of",
    "what is the solution to",
    "value of x in",
    "a",
    "an",
];

/// A normalized equation string ready for structured parsing.
///
/// The string contains only symbol names, digits, `.`, the four arithmetic operators, `**` for
/// power, and at most one `==`. Either the `==` splits two non-empty sides, or the whole
/// string is a bare expression to be read as `expr == 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalEquation(String);

impl CanonicalEquation {
    /// Returns the canonical string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalEquation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rewrites a raw query into a [`CanonicalEquation`], or [`None`] if nothing equation-like
/// survives the rewrite.
///
/// Only call this for queries that did not classify as [`Other`]; an `Other` query is already
/// out of scope and normalizing it would be wasted work.
///
/// The pipeline is strictly ordered; each step consumes the previous step's output:
///
/// 1. lowercase and trim
/// 2. remove the stop-word substrings ([`STOP_WORDS`])
/// 3. drop every character that is not alphanumeric, `_`, or one of `=*/+-.^`
/// 4. insert `*` between a digit and a following letter (`4x` → `4*x`)
/// 5. replace `=` with `==`, unless the query already uses `==`
/// 6. replace `^` with `**`
/// 7. drop any remaining whitespace
/// 8. repair a leftover `x2` into `x**2`
///
/// [`Other`]: crate::Classification::Other
pub fn normalize(query: &str) -> Option<CanonicalEquation> {
    let mut eq = query.trim().to_lowercase();

    for word in STOP_WORDS {
        eq = eq.replace(word, "");
    }

    eq.retain(|c| c.is_alphanumeric() || c == '_' || "=*/+-.^".contains(c));

    eq = insert_implicit_mul(&eq);

    // an input that already uses `==` as its equality marker must not be doubled into `====`
    if !eq.contains("==") {
        eq = eq.replace('=', "==");
    }

    eq = eq.replace('^', "**");
    eq.retain(|c| !c.is_whitespace());

    // a power can survive as `x2` when the caret was lost to step 3 (malformed input) or was
    // never written at all; the classifier has no such blind spot, so repair it here
    if eq.contains("x2") {
        eq = eq.replace("x2", "x**2");
    }

    if eq.is_empty() || eq == "==" {
        None
    } else {
        Some(CanonicalEquation(eq))
    }
}

/// Inserts an explicit `*` between every digit immediately followed by an ASCII letter.
fn insert_implicit_mul(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if c.is_ascii_alphabetic() && prev.is_some_and(|p| p.is_ascii_digit()) {
            out.push('*');
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn normalize_str(query: &str) -> Option<String> {
        normalize(query).map(|eq| eq.as_str().to_owned())
    }

    #[test]
    fn spoken_linear_query() {
        assert_eq!(
            normalize_str("Please solve the linear equation: 4x - 8 = 0").as_deref(),
            Some("4*x-8==0"),
        );
    }

    #[test]
    fn spoken_quadratic_query() {
        assert_eq!(
            normalize_str("Find the roots of x^2 + 2x - 3 = 0").as_deref(),
            Some("x**2+2*x-3==0"),
        );
    }

    #[test]
    fn already_canonical_input_is_untouched() {
        assert_eq!(normalize_str("2*x + 5 == 15").as_deref(), Some("2*x+5==15"));
    }

    #[test]
    fn double_equals_is_not_doubled_again() {
        // `==` in the input must not become `====`
        assert_eq!(normalize_str("x + 1 == 2").as_deref(), Some("x+1==2"));
    }

    #[test]
    fn bare_expression_passes_through() {
        assert_eq!(normalize_str("x**2 - 5*x + 6").as_deref(), Some("x**2-5*x+6"));
    }

    #[test]
    fn power_written_without_caret_is_repaired() {
        assert_eq!(normalize_str("x2 + 2x = 3").as_deref(), Some("x**2+2*x==3"));
    }

    #[test]
    fn parens_are_dropped() {
        // grouping is unsupported: parentheses are stripped, silently losing structure
        assert_eq!(normalize_str("(x + 1) = 2").as_deref(), Some("x+1==2"));
    }

    #[test]
    fn empty_after_rewrite_is_rejected() {
        assert_eq!(normalize_str("please solve the equation"), None);
        assert_eq!(normalize_str("="), None);
    }

    #[test]
    fn lone_equality_is_rejected() {
        assert_eq!(normalize_str("what is the solution to ="), None);
    }

    #[test]
    fn stop_words_match_inside_tokens() {
        // substring removal corrupts embedded letters; legacy behavior, kept as-is
        assert_eq!(normalize_str("tan(x) = 1").as_deref(), Some("tnx==1"));
    }

    #[test]
    fn deterministic_single_pass() {
        let query = "Please solve the linear equation: 4x - 8 = 0";
        assert_eq!(normalize_str(query), normalize_str(query));
    }
}
