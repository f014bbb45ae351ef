//! Differences: `-` and `-=` with a matrix or a scalar.

use crate::{Element, error::Result};

use super::{base::Matrix, operation::BinaryOp};

impl<T: Element> Matrix<T> {
    /// `self - other`, element by element.
    pub fn try_sub(&self, other: &Matrix<T>) -> Result<Self> {
        self.elementwise(BinaryOp::Subtract, other)
    }

    /// In-place elementwise difference. Nothing is written on a shape mismatch.
    pub fn try_sub_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        self.elementwise_assign(BinaryOp::Subtract, other)
    }

    pub fn sub_scalar(&self, value: T) -> Self {
        self.broadcast(BinaryOp::Subtract, value)
    }

    pub fn sub_assign_scalar(&mut self, value: T) {
        self.broadcast_assign(BinaryOp::Subtract, value)
    }
}

impl_arithmetic!(
    Sub, sub, SubAssign, sub_assign,
    matrix: try_sub, try_sub_assign,
    scalar: sub_scalar, sub_assign_scalar
);
