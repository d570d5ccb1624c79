//! Folding an equation into dense polynomial coefficients.

use crate::{
    error::kind,
    primitive::{int_from_str, rat, rational_from_decimal},
};
use algebot_error::Error;
use algebot_parser::parser::{
    ast::{Expr, Literal},
    equation::Equation,
    op::BinOpKind,
};
use rug::Rational;
use std::cmp::Ordering;

/// The largest exponent accepted during coefficient extraction. Anything above degree two
/// fails at solve time anyway; the cap keeps a pathological `x**999999999` from allocating an
/// enormous coefficient vector first.
pub const MAX_EXPONENT: u32 = 64;

/// A dense polynomial over the equation's single variable, with exact rational coefficients
/// indexed by power.
#[derive(Debug, Clone, PartialEq)]
pub struct Poly {
    coeffs: Vec<Rational>,
}

impl Poly {
    /// The constant polynomial with the given value.
    fn constant(value: Rational) -> Self {
        Self { coeffs: vec![value] }
    }

    /// The polynomial `x`.
    fn variable() -> Self {
        Self { coeffs: vec![rat(0), rat(1)] }
    }

    /// Returns the coefficient of the given power of the variable, which is zero beyond the
    /// stored length.
    pub fn coefficient(&self, power: usize) -> Rational {
        self.coeffs.get(power).cloned().unwrap_or_default()
    }

    /// Returns the degree of the polynomial. The zero polynomial has degree zero.
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|c| *c != 0).unwrap_or(0)
    }

    /// Folds an equation into the polynomial `lhs - rhs`, whose roots are the equation's
    /// solutions.
    pub fn from_equation(equation: &Equation) -> Result<Self, Error> {
        let lhs = Self::from_expr(&equation.lhs)?;
        let rhs = Self::from_expr(&equation.rhs)?;
        Ok(lhs.add(rhs.neg()))
    }

    /// Folds one expression tree into a polynomial.
    ///
    /// Supported shapes are literals, the variable, `+ - *`, division by a nonzero constant,
    /// and powers with a constant integer exponent between 0 and [`MAX_EXPONENT`]. Anything
    /// else fails with a solve-family error pointing at the offending subexpression.
    fn from_expr(expr: &Expr) -> Result<Self, Error> {
        match expr {
            Expr::Literal(Literal::Integer(int)) => {
                Ok(Self::constant(rat(int_from_str(&int.value))))
            },
            Expr::Literal(Literal::Float(float)) => {
                Ok(Self::constant(rational_from_decimal(&float.value)))
            },
            Expr::Literal(Literal::Symbol(_)) => Ok(Self::variable()),
            Expr::Unary(unary) => Ok(Self::from_expr(&unary.operand)?.neg()),
            Expr::Binary(binary) => {
                let lhs = Self::from_expr(&binary.lhs)?;
                match binary.op.kind {
                    BinOpKind::Add => Ok(lhs.add(Self::from_expr(&binary.rhs)?)),
                    BinOpKind::Sub => Ok(lhs.add(Self::from_expr(&binary.rhs)?.neg())),
                    BinOpKind::Mul => Ok(lhs.mul(&Self::from_expr(&binary.rhs)?)),
                    BinOpKind::Div => {
                        let rhs = Self::from_expr(&binary.rhs)?;
                        if rhs.degree() > 0 {
                            return Err(Error::new(
                                vec![binary.rhs.span()],
                                kind::NonConstantDivisor,
                            ));
                        }

                        let divisor = rhs.coefficient(0);
                        if divisor == 0 {
                            return Err(Error::new(vec![binary.rhs.span()], kind::DivisionByZero));
                        }
                        Ok(lhs.scale_by_inverse(&divisor))
                    },
                    BinOpKind::Exp => {
                        let rhs = Self::from_expr(&binary.rhs)?;
                        if rhs.degree() > 0 {
                            return Err(Error::new(
                                vec![binary.rhs.span()],
                                kind::NonConstantExponent,
                            ));
                        }

                        let value = rhs.coefficient(0);
                        let exponent = if value.is_integer() && value.cmp0() != Ordering::Less {
                            value.numer().to_u32().filter(|&e| e <= MAX_EXPONENT)
                        } else {
                            None
                        };
                        match exponent {
                            Some(exponent) => Ok(lhs.pow(exponent)),
                            None => Err(Error::new(
                                vec![binary.rhs.span()],
                                kind::InvalidExponent { max: MAX_EXPONENT },
                            )),
                        }
                    },
                }
            },
        }
    }

    fn neg(mut self) -> Self {
        for c in &mut self.coeffs {
            *c *= -1;
        }
        self
    }

    fn add(mut self, other: Self) -> Self {
        if other.coeffs.len() > self.coeffs.len() {
            self.coeffs.resize(other.coeffs.len(), Rational::new());
        }
        for (i, c) in other.coeffs.into_iter().enumerate() {
            self.coeffs[i] += c;
        }
        self
    }

    fn mul(self, other: &Self) -> Self {
        let mut coeffs = vec![Rational::new(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if *a == 0 {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += Rational::from(a * b);
            }
        }
        Self { coeffs }
    }

    fn scale_by_inverse(mut self, divisor: &Rational) -> Self {
        for c in &mut self.coeffs {
            *c /= divisor;
        }
        self
    }

    fn pow(self, exponent: u32) -> Self {
        let mut result = Self::constant(rat(1));
        for _ in 0..exponent {
            result = result.mul(&self);
        }
        result
    }
}
