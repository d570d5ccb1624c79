//! End-to-end tests driving the whole pipeline through [`Chatbot::ask`].

use algebot::{Chatbot, SCOPE_MESSAGE};
use pretty_assertions::assert_eq;

#[test]
fn already_canonical_linear_equation() {
    let chatbot = Chatbot::new();
    assert_eq!(
        chatbot.ask("2*x + 5 == 15"),
        "The single solution for $x$ is: $5$.",
    );
}

#[test]
fn bare_quadratic_expression_gets_implicit_zero() {
    let chatbot = Chatbot::new();
    let answer = chatbot.ask("x**2 - 5*x + 6");

    // two roots joined with "and", in whichever order the solver produced them
    assert!(answer.contains(" and "), "expected an and-joined sentence: {answer}");
    assert!(answer.contains("$2$"), "expected root 2 in: {answer}");
    assert!(answer.contains("$3$"), "expected root 3 in: {answer}");
}

#[test]
fn complex_roots_are_typeset() {
    let chatbot = Chatbot::new();
    assert_eq!(
        chatbot.ask("x**2 + 1 == 0"),
        "The solutions for $x$ are: $-i$ and $i$.",
    );
}

#[test]
fn spoken_linear_query() {
    let chatbot = Chatbot::new();
    assert_eq!(
        chatbot.ask("Please solve the linear equation: 4x - 8 = 0"),
        "The single solution for $x$ is: $2$.",
    );
}

#[test]
fn spoken_quadratic_query() {
    let chatbot = Chatbot::new();
    let answer = chatbot.ask("Find the roots of x^2 + 2x - 3 = 0");

    assert!(answer.contains("$-3$"), "expected root -3 in: {answer}");
    assert!(answer.contains("$1$"), "expected root 1 in: {answer}");
}

#[test]
fn answers_name_the_equations_variable() {
    let chatbot = Chatbot::new();
    assert_eq!(
        chatbot.ask("3*y == 12"),
        "The single solution for $y$ is: $4$.",
    );
}

#[test]
fn non_math_query_is_rejected() {
    let chatbot = Chatbot::new();
    assert_eq!(chatbot.ask("What is the history of the number pi?"), SCOPE_MESSAGE);
}

#[test]
fn query_that_normalizes_to_nothing_is_rejected() {
    // classifies as linear because of the `=`, but nothing survives normalization
    let chatbot = Chatbot::new();
    assert_eq!(chatbot.ask("="), SCOPE_MESSAGE);
}

#[test]
fn malformed_equation_gets_syntax_message() {
    let chatbot = Chatbot::new();
    let answer = chatbot.ask("4*x - = 0");

    assert!(answer.contains("syntax error"), "expected a syntax message: {answer}");
    assert!(answer.contains(SCOPE_MESSAGE), "expected the scope reminder: {answer}");
}

#[test]
fn unsupported_degree_gets_internal_error_message() {
    let chatbot = Chatbot::new();
    assert_eq!(
        chatbot.ask("x**3 - 1 == 0"),
        "An internal computation error occurred. \
        The problem is likely ill-posed or outside the precise scope.",
    );
}

#[test]
fn no_solution_message() {
    let chatbot = Chatbot::new();
    assert_eq!(chatbot.ask("x - x == 5"), "This equation has no solution.");
}

#[test]
fn equation_with_no_solution_is_distinct_from_failure() {
    let chatbot = Chatbot::new();
    // 0 == 0 also solves to the empty set rather than erroring
    assert_eq!(chatbot.ask("3 == 3"), "This equation has no solution.");
}
