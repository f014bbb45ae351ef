//! Products: `*` and `*=` with a matrix or a scalar.
//!
//! A matrix right-hand side multiplies elementwise (Hadamard product), not
//! as a matrix product.

use crate::{Element, error::Result};

use super::{base::Matrix, operation::BinaryOp};

impl<T: Element> Matrix<T> {
    /// Elementwise product with a matrix of the same shape.
    pub fn try_mul(&self, other: &Matrix<T>) -> Result<Self> {
        self.elementwise(BinaryOp::Multiply, other)
    }

    pub fn try_mul_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        self.elementwise_assign(BinaryOp::Multiply, other)
    }

    pub fn mul_scalar(&self, value: T) -> Self {
        self.broadcast(BinaryOp::Multiply, value)
    }

    pub fn mul_assign_scalar(&mut self, value: T) {
        self.broadcast_assign(BinaryOp::Multiply, value)
    }
}

impl_arithmetic!(
    Mul, mul, MulAssign, mul_assign,
    matrix: try_mul, try_mul_assign,
    scalar: mul_scalar, mul_assign_scalar
);
