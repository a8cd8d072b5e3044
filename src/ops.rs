//! Arithmetic operators for values and expressions.
//!
//! Every combination of [`UncertainValue`], [`Expression`], and `f64`
//! operands builds a lazy [`Expression`]; nothing is sampled here.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::expression::{BinaryOp, Expression, UnaryFn};
use crate::value::UncertainValue;

impl<R: Into<Expression>> Add<R> for Expression {
    type Output = Expression;

    fn add(self, rhs: R) -> Expression {
        self.binary(rhs.into(), BinaryOp::Add)
    }
}

impl<R: Into<Expression>> Sub<R> for Expression {
    type Output = Expression;

    fn sub(self, rhs: R) -> Expression {
        self.binary(rhs.into(), BinaryOp::Sub)
    }
}

impl<R: Into<Expression>> Mul<R> for Expression {
    type Output = Expression;

    fn mul(self, rhs: R) -> Expression {
        self.binary(rhs.into(), BinaryOp::Mul)
    }
}

impl<R: Into<Expression>> Div<R> for Expression {
    type Output = Expression;

    fn div(self, rhs: R) -> Expression {
        self.binary(rhs.into(), BinaryOp::Div)
    }
}

impl<R: Into<Expression>> Add<R> for UncertainValue {
    type Output = Expression;

    fn add(self, rhs: R) -> Expression {
        Expression::from(self).binary(rhs.into(), BinaryOp::Add)
    }
}

impl<R: Into<Expression>> Sub<R> for UncertainValue {
    type Output = Expression;

    fn sub(self, rhs: R) -> Expression {
        Expression::from(self).binary(rhs.into(), BinaryOp::Sub)
    }
}

impl<R: Into<Expression>> Mul<R> for UncertainValue {
    type Output = Expression;

    fn mul(self, rhs: R) -> Expression {
        Expression::from(self).binary(rhs.into(), BinaryOp::Mul)
    }
}

impl<R: Into<Expression>> Div<R> for UncertainValue {
    type Output = Expression;

    fn div(self, rhs: R) -> Expression {
        Expression::from(self).binary(rhs.into(), BinaryOp::Div)
    }
}

impl Add<Expression> for f64 {
    type Output = Expression;

    fn add(self, rhs: Expression) -> Expression {
        Expression::constant(self).binary(rhs, BinaryOp::Add)
    }
}

impl Sub<Expression> for f64 {
    type Output = Expression;

    fn sub(self, rhs: Expression) -> Expression {
        Expression::constant(self).binary(rhs, BinaryOp::Sub)
    }
}

impl Mul<Expression> for f64 {
    type Output = Expression;

    fn mul(self, rhs: Expression) -> Expression {
        Expression::constant(self).binary(rhs, BinaryOp::Mul)
    }
}

impl Div<Expression> for f64 {
    type Output = Expression;

    fn div(self, rhs: Expression) -> Expression {
        Expression::constant(self).binary(rhs, BinaryOp::Div)
    }
}

impl Add<UncertainValue> for f64 {
    type Output = Expression;

    fn add(self, rhs: UncertainValue) -> Expression {
        self + Expression::from(rhs)
    }
}

impl Sub<UncertainValue> for f64 {
    type Output = Expression;

    fn sub(self, rhs: UncertainValue) -> Expression {
        self - Expression::from(rhs)
    }
}

impl Mul<UncertainValue> for f64 {
    type Output = Expression;

    fn mul(self, rhs: UncertainValue) -> Expression {
        self * Expression::from(rhs)
    }
}

impl Div<UncertainValue> for f64 {
    type Output = Expression;

    fn div(self, rhs: UncertainValue) -> Expression {
        self / Expression::from(rhs)
    }
}

impl Neg for Expression {
    type Output = Expression;

    fn neg(self) -> Expression {
        self.unary(UnaryFn::Neg)
    }
}

impl Neg for UncertainValue {
    type Output = Expression;

    fn neg(self) -> Expression {
        Expression::from(self).unary(UnaryFn::Neg)
    }
}

impl UncertainValue {
    /// Square root of this value, as a lazy expression.
    #[must_use]
    pub fn sqrt(self) -> Expression {
        self.expr().sqrt()
    }

    /// Natural logarithm of this value, as a lazy expression.
    #[must_use]
    pub fn ln(self) -> Expression {
        self.expr().ln()
    }

    /// Exponential of this value, as a lazy expression.
    #[must_use]
    pub fn exp(self) -> Expression {
        self.expr().exp()
    }

    /// Absolute value, as a lazy expression.
    #[must_use]
    pub fn abs(self) -> Expression {
        self.expr().abs()
    }

    /// Sine of this value, as a lazy expression.
    #[must_use]
    pub fn sin(self) -> Expression {
        self.expr().sin()
    }

    /// Cosine of this value, as a lazy expression.
    #[must_use]
    pub fn cos(self) -> Expression {
        self.expr().cos()
    }

    /// Tangent of this value, as a lazy expression.
    #[must_use]
    pub fn tan(self) -> Expression {
        self.expr().tan()
    }

    /// This value raised to a fixed scalar power, as a lazy expression.
    #[must_use]
    pub fn powf(self, exponent: f64) -> Expression {
        self.expr().powf(exponent)
    }
}
