//! The expression tree for one side of an equation.
//!
//! Canonical equation strings only ever contain literals, negation, and the five binary
//! operators, so the tree is deliberately small. Every node keeps the region of the canonical
//! string it was parsed from, which downstream stages reuse to point their own errors (such as
//! an unsupported exponent) back at the offending text.

use crate::parser::{
    error::kind,
    fmt::{fmt_pow, Latex},
    op::{Associativity, BinOp, BinOpKind, Precedence},
    Parse,
    Parser,
};
use crate::tokenizer::TokenKind;
use algebot_error::Error;
use std::{fmt, ops::Range};

/// An integer literal, represented as a [`String`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitInt {
    /// The value of the integer literal as a string.
    pub value: String,

    /// The region of the canonical string that this literal was parsed from.
    pub span: Range<usize>,
}

/// A floating-point literal, represented as a [`String`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitFloat {
    /// The value of the floating-point literal as a string.
    pub value: String,

    /// The region of the canonical string that this literal was parsed from.
    pub span: Range<usize>,
}

/// A symbol literal, naming the equation's variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the canonical string that this literal was parsed from.
    pub span: Range<usize>,
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// An integer, such as `2` or `144`.
    Integer(LitInt),

    /// A floating-point number, such as `3.14` or `0.5`.
    Float(LitFloat),

    /// A symbol, such as `x`.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Integer(int) => int.span.clone(),
            Literal::Float(float) => float.span.clone(),
            Literal::Symbol(sym) => sym.span.clone(),
        }
    }
}

/// A negated expression, such as `-3` or `-x**2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unary {
    /// The negated operand.
    pub operand: Box<Expr>,

    /// The region of the canonical string that this expression was parsed from, including the
    /// minus sign.
    pub span: Range<usize>,
}

/// A binary expression, such as `2*x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the canonical string that this expression was parsed from.
    pub span: Range<usize>,
}

/// One side of a canonical equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A unary operation; always negation.
    Unary(Unary),

    /// A binary operation, such as `2*x` or `x**2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Unary(unary) => unary.span.clone(),
            Expr::Binary(binary) => binary.span.clone(),
        }
    }

    /// Walks the expression and records the first occurrence of each distinct symbol, in
    /// source order.
    pub fn collect_symbols<'a>(&'a self, found: &mut Vec<(&'a str, Range<usize>)>) {
        match self {
            Expr::Literal(Literal::Symbol(sym)) => {
                if !found.iter().any(|(name, _)| *name == sym.name) {
                    found.push((&sym.name, sym.span.clone()));
                }
            },
            Expr::Literal(_) => (),
            Expr::Unary(unary) => unary.operand.collect_symbols(found),
            Expr::Binary(binary) => {
                binary.lhs.collect_symbols(found);
                binary.rhs.collect_symbols(found);
            },
        }
    }

    /// Parses a primary operand: a literal, or a negation of an operand.
    fn parse_operand(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Int => Ok(Expr::Literal(Literal::Integer(LitInt {
                value: token.lexeme.to_owned(),
                span: token.span,
            }))),
            TokenKind::Float => Ok(Expr::Literal(Literal::Float(LitFloat {
                value: token.lexeme.to_owned(),
                span: token.span,
            }))),
            TokenKind::Name => Ok(Expr::Literal(Literal::Symbol(LitSym {
                name: token.lexeme.to_owned(),
                span: token.span,
            }))),
            TokenKind::Sub => {
                let operand = Self::parse_precedence(input, Precedence::Neg)?;
                let span = token.span.start..operand.span().end;
                Ok(Expr::Unary(Unary {
                    operand: Box::new(operand),
                    span,
                }))
            },
            _ => Err(Error::new(vec![token.span.clone()], kind::UnexpectedToken {
                expected: &[
                    TokenKind::Int,
                    TokenKind::Float,
                    TokenKind::Name,
                    TokenKind::Sub,
                ],
                found: token.kind,
            })),
        }
    }

    /// Precedence-climbing parse: parses an operand, then folds in every following operator
    /// whose precedence is at least `min`.
    fn parse_precedence(input: &mut Parser, min: Precedence) -> Result<Self, Error> {
        let mut lhs = Self::parse_operand(input)?;

        loop {
            // peek ahead for an operator by cloning the stream; only commit to the clone once
            // the operator is strong enough to bind at this level
            let mut ahead = input.clone();
            let Ok(op) = ahead.try_parse::<BinOp>() else { break };
            if op.precedence() < min {
                break;
            }
            *input = ahead;

            let next_min = match op.associativity() {
                Associativity::Left => op.precedence().next(),
                Associativity::Right => op.precedence(),
            };
            let rhs = Self::parse_precedence(input, next_min)?;

            let span = lhs.span().start..rhs.span().end;
            lhs = Expr::Binary(Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
                span,
            });
        }

        Ok(lhs)
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        Self::parse_precedence(input, Precedence::Any)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Integer(int) => write!(f, "{}", int.value),
            Literal::Float(float) => write!(f, "{}", float.value),
            Literal::Symbol(sym) => write!(f, "{}", sym.name),
        }
    }
}

impl fmt::Display for Expr {
    /// Prints the expression back in its canonical form. The grammar has no grouping, so the
    /// tree needs no parentheses: any shape the parser can produce already reads back with the
    /// same precedence it was parsed with.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Unary(unary) => write!(f, "-{}", unary.operand),
            Expr::Binary(binary) => {
                write!(f, "{}{}{}", binary.lhs, binary.op.kind.symbol(), binary.rhs)
            },
        }
    }
}

impl Latex for Literal {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // literal lexemes are plain digits, `.`, or letters, all valid LaTeX as-is
        fmt::Display::fmt(self, f)
    }
}

impl Latex for Expr {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt_latex(f),
            Expr::Unary(unary) => {
                write!(f, "-")?;
                unary.operand.fmt_latex(f)
            },
            Expr::Binary(binary) => match binary.op.kind {
                BinOpKind::Add => {
                    binary.lhs.fmt_latex(f)?;
                    write!(f, " + ")?;
                    binary.rhs.fmt_latex(f)
                },
                BinOpKind::Sub => {
                    binary.lhs.fmt_latex(f)?;
                    write!(f, " - ")?;
                    binary.rhs.fmt_latex(f)
                },
                BinOpKind::Mul => {
                    binary.lhs.fmt_latex(f)?;
                    write!(f, " \\cdot ")?;
                    binary.rhs.fmt_latex(f)
                },
                BinOpKind::Div => {
                    write!(f, "\\frac{{")?;
                    binary.lhs.fmt_latex(f)?;
                    write!(f, "}}{{")?;
                    binary.rhs.fmt_latex(f)?;
                    write!(f, "}}")
                },
                BinOpKind::Exp => fmt_pow(f, &binary.lhs, &binary.rhs),
            },
        }
    }
}
