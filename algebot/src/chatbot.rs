//! The orchestrator: classify, normalize, parse, solve, format.

use crate::error::Error;
use algebot_nlu::{classify, normalize, Classification};
use algebot_parser::parser::{equation::Equation, fmt::Latex};
use algebot_solve::{solve, Solution};

/// The fixed response for queries outside the linear/quadratic single-variable scope.
pub const SCOPE_MESSAGE: &str = "I am currently a specialized algebraic solver. \
    I can only solve single-variable linear and quadratic equations. \
    Please phrase your question as a clear equation (e.g., 'x^2 + 5x = 6').";

/// The chatbot: accepts free-text math queries and answers with solved equations.
///
/// Each query is processed start to finish with no state carried between requests, so one bot
/// can serve any number of queries.
pub struct Chatbot;

impl Chatbot {
    /// Creates a new chatbot.
    pub fn new() -> Self {
        Self
    }

    /// Processes one query end to end and returns the answer text.
    ///
    /// Every failure is recovered here: out-of-scope queries get the scope message, parse
    /// failures a syntax message, solver failures an internal-error message. Diagnostics for
    /// the failing equation go to stderr; the returned string is always a complete answer.
    pub fn ask(&self, query: &str) -> String {
        if classify(query) == Classification::Other {
            return SCOPE_MESSAGE.to_owned();
        }

        // the classifier saw something equation-like, but the rewrite can still come up empty
        let Some(canonical) = normalize(query) else {
            return SCOPE_MESSAGE.to_owned();
        };

        match solve_canonical(canonical.as_str()) {
            Ok((equation, solutions)) => {
                // a constant equation has no variable to name, but it also has no solutions,
                // so the fallback name never reaches the answer text
                format_solutions(equation.variable().unwrap_or("x"), &solutions)
            },
            Err(err) => {
                err.report_to_stderr(canonical.as_str());
                match err {
                    Error::Parse(_) => format!(
                        "I encountered a syntax error while trying to parse your equation. \
                        Ensure your input is correctly formatted (e.g., 4*x**2 + 2*x == 0). {}",
                        SCOPE_MESSAGE,
                    ),
                    Error::Solve(_) => String::from(
                        "An internal computation error occurred. \
                        The problem is likely ill-posed or outside the precise scope.",
                    ),
                }
            },
        }
    }
}

impl Default for Chatbot {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses and solves a canonical equation string, tagging errors with the stage they came
/// from.
fn solve_canonical(canonical: &str) -> Result<(Equation, Vec<Solution>), Error> {
    let equation = Equation::parse(canonical).map_err(Error::Parse)?;
    match solve(&equation) {
        Ok(solutions) => Ok((equation, solutions)),
        Err(err) => {
            // the parsed reading can differ from what the user typed (implicit `== 0`,
            // normalizer rewrites); echo it so the diagnostic below has context
            eprintln!("equation read as: {equation}");
            Err(Error::Solve(err))
        },
    }
}

/// Converts a solution list into a readable sentence, typesetting each value as LaTeX.
fn format_solutions(variable: &str, solutions: &[Solution]) -> String {
    match solutions {
        [] => String::from("This equation has no solution."),
        [only] => format!(
            "The single solution for ${variable}$ is: ${}$.",
            only.as_display(),
        ),
        [first, second] => format!(
            "The solutions for ${variable}$ are: ${}$ and ${}$.",
            first.as_display(),
            second.as_display(),
        ),
        many => {
            let parts = many
                .iter()
                .map(|solution| format!("${}$", solution.as_display()))
                .collect::<Vec<_>>();
            format!("The solutions for ${variable}$ are: {}.", parts.join(", "))
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use algebot_solve::primitive::{int, rat};

    #[test]
    fn no_solutions() {
        assert_eq!(format_solutions("x", &[]), "This equation has no solution.");
    }

    #[test]
    fn one_solution() {
        assert_eq!(
            format_solutions("x", &[Solution::Rational(rat(5))]),
            "The single solution for $x$ is: $5$.",
        );
    }

    #[test]
    fn two_solutions_joined_with_and() {
        assert_eq!(
            format_solutions("x", &[Solution::Rational(rat(2)), Solution::Rational(rat(3))]),
            "The solutions for $x$ are: $2$ and $3$.",
        );
    }

    #[test]
    fn many_solutions_joined_with_commas() {
        let solutions = [
            Solution::Rational(rat(1)),
            Solution::Rational(rat(2)),
            Solution::Rational(rat(3)),
        ];
        assert_eq!(
            format_solutions("x", &solutions),
            "The solutions for $x$ are: $1$, $2$, $3$.",
        );
    }

    #[test]
    fn complex_solutions_format() {
        let solutions = [
            Solution::Root { base: rat(0), coeff: rat(-1), radicand: int(-1) },
            Solution::Root { base: rat(0), coeff: rat(1), radicand: int(-1) },
        ];
        assert_eq!(
            format_solutions("x", &solutions),
            "The solutions for $x$ are: $-i$ and $i$.",
        );
    }

    #[test]
    fn sentence_names_the_given_variable() {
        assert_eq!(
            format_solutions("y", &[Solution::Rational(rat(4))]),
            "The single solution for $y$ is: $4$.",
        );
    }
}
