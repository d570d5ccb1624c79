//! Surface-pattern triage of incoming queries.

/// The kind of equation a query appears to contain.
///
/// This label is a display-level hint derived from surface patterns, not from the actual
/// polynomial degree: a quadratic written as `x*x` is labelled [`Linear`], and the solver still
/// handles it because solving never branches on this value. The label's only binding use is
/// the scope gate: [`Other`] short-circuits the pipeline to the scope-rejection response.
///
/// [`Linear`]: Classification::Linear
/// [`Other`]: Classification::Other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The query looks like a first-degree equation, such as `4x - 8 = 0`.
    Linear,

    /// The query contains a squared term, such as `x^2 + 2x - 3 = 0`.
    Quadratic,

    /// The query does not look like an equation at all.
    Other,
}

/// Classifies a raw query by surface pattern. First match wins, case-insensitive:
///
/// 1. contains `**2` or `x^2` → [`Classification::Quadratic`]
/// 2. contains `x` or `=` → [`Classification::Linear`]
/// 3. otherwise → [`Classification::Other`]
///
/// Always returns a value; there is no error path.
pub fn classify(query: &str) -> Classification {
    let clean = query.trim().to_lowercase();

    if clean.contains("**2") || clean.contains("x^2") {
        Classification::Quadratic
    } else if clean.contains('x') || clean.contains('=') {
        Classification::Linear
    } else {
        Classification::Other
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn quadratic_caret() {
        assert_eq!(classify("x^2 + 2x - 3 = 0"), Classification::Quadratic);
    }

    #[test]
    fn quadratic_double_star() {
        assert_eq!(classify("solve x**2 - 4 = 0 please"), Classification::Quadratic);
    }

    #[test]
    fn linear() {
        assert_eq!(classify("4x - 8 = 0"), Classification::Linear);
    }

    #[test]
    fn linear_by_equals_only() {
        assert_eq!(classify("3 + 4 = 7"), Classification::Linear);
    }

    #[test]
    fn other() {
        assert_eq!(classify("history of pi"), Classification::Other);
    }

    #[test]
    fn squared_without_markers_is_linear() {
        // known limitation: degree is judged by surface pattern only
        assert_eq!(classify("x*x - 4 = 0"), Classification::Linear);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(classify("X^2 = 9"), Classification::Quadratic);
    }
}
