//! Sums: `+` and `+=` with a matrix or a scalar.

use crate::{Element, error::Result};

use super::{base::Matrix, operation::BinaryOp};

impl<T: Element> Matrix<T> {
    /// Elementwise sum with a matrix of the same shape.
    pub fn try_add(&self, other: &Matrix<T>) -> Result<Self> {
        self.elementwise(BinaryOp::Add, other)
    }

    /// In-place elementwise sum. Nothing is written on a shape mismatch.
    pub fn try_add_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        self.elementwise_assign(BinaryOp::Add, other)
    }

    pub fn add_scalar(&self, value: T) -> Self {
        self.broadcast(BinaryOp::Add, value)
    }

    pub fn add_assign_scalar(&mut self, value: T) {
        self.broadcast_assign(BinaryOp::Add, value)
    }
}

impl_arithmetic!(
    Add, add, AddAssign, add_assign,
    matrix: try_add, try_add_assign,
    scalar: add_scalar, add_assign_scalar
);
