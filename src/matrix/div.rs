//! Quotients: `/` and `/=` with a matrix or a scalar.

use crate::{Element, error::Result};

use super::{base::Matrix, operation::BinaryOp};

impl<T: Element> Matrix<T> {
    /// Elementwise quotient with a matrix of the same shape.
    pub fn try_div(&self, other: &Matrix<T>) -> Result<Self> {
        self.elementwise(BinaryOp::Divide, other)
    }

    /// In-place elementwise quotient. Nothing is written on a shape mismatch.
    pub fn try_div_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        self.elementwise_assign(BinaryOp::Divide, other)
    }

    /// Integer elements divided by zero panic, as a plain `/` does.
    pub fn div_scalar(&self, value: T) -> Self {
        self.broadcast(BinaryOp::Divide, value)
    }

    pub fn div_assign_scalar(&mut self, value: T) {
        self.broadcast_assign(BinaryOp::Divide, value)
    }
}

impl_arithmetic!(
    Div, div, DivAssign, div_assign,
    matrix: try_div, try_div_assign,
    scalar: div_scalar, div_assign_scalar
);
