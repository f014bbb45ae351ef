//! Deferred operations that a [`Matrix`](super::Matrix) is built from.
//!
//! An [`Operation`] borrows its inputs and computes result elements on
//! demand through [`Operation::element_at`]. Nothing is allocated until
//! [`Matrix::from_operation`](super::Matrix::from_operation) pulls every
//! element into a freshly sized buffer, so each arithmetic step costs one
//! allocation and one linear pass whatever its kind.
//!
//! The variants cannot be built by hand outside this crate; use the
//! constructors, which reject mismatched operands before any element is read.

use crate::{
    Element,
    error::{Error, Result},
    shape::Shape,
};

/// Read-only view of a column-major buffer together with its shape.
#[derive(Clone, Copy, Debug)]
pub struct View<'a, T> {
    data: &'a [T],
    shape: Shape,
}

impl<'a, T> View<'a, T> {
    /// Fails with [`Error::ShapeMismatch`] when `data` does not hold
    /// exactly `shape.size()` elements.
    pub fn new(data: &'a [T], shape: Shape) -> Result<Self> {
        match shape.checked_size() {
            Some(size) if size == data.len() => Ok(Self { data, shape }),
            size => Err(Error::shape_mismatch(size.unwrap_or(usize::MAX), data.len())),
        }
    }

    /// Caller guarantees `data.len() == shape.size()`.
    pub(crate) fn new_unchecked(data: &'a [T], shape: Shape) -> Self {
        debug_assert_eq!(data.len(), shape.size());
        Self { data, shape }
    }

    pub fn data(&self) -> &'a [T] {
        self.data
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }
}

/// Right-hand side of an arithmetic operation.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a, T> {
    /// One value applied at every index.
    Scalar(T),
    /// A buffer as long as the source, read at the same index.
    Elementwise(&'a [T]),
}

impl<T: Copy> Operand<'_, T> {
    #[inline]
    fn resolve(&self, index: usize) -> T {
        match self {
            Operand::Scalar(value) => *value,
            Operand::Elementwise(values) => values[index],
        }
    }
}

/// The four arithmetic kinds shared by the deferred and in-place paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    #[inline]
    pub fn apply<T: Element>(self, lhs: T, rhs: T) -> T {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
            BinaryOp::Multiply => lhs * rhs,
            BinaryOp::Divide => lhs / rhs,
        }
    }

    #[inline]
    pub fn apply_assign<T: Element>(self, lhs: &mut T, rhs: T) {
        match self {
            BinaryOp::Add => *lhs += rhs,
            BinaryOp::Subtract => *lhs -= rhs,
            BinaryOp::Multiply => *lhs *= rhs,
            BinaryOp::Divide => *lhs /= rhs,
        }
    }
}

/// A pending computation producing a matrix element by element.
#[derive(Debug)]
pub enum Operation<'a, T> {
    /// Copies the source unchanged.
    #[non_exhaustive]
    Identity { source: View<'a, T> },
    #[non_exhaustive]
    Add {
        source: View<'a, T>,
        operand: Operand<'a, T>,
    },
    #[non_exhaustive]
    Subtract {
        source: View<'a, T>,
        operand: Operand<'a, T>,
    },
    #[non_exhaustive]
    Multiply {
        source: View<'a, T>,
        operand: Operand<'a, T>,
    },
    #[non_exhaustive]
    Divide {
        source: View<'a, T>,
        operand: Operand<'a, T>,
    },
    /// Reads the source with rows and columns exchanged.
    #[non_exhaustive]
    Transpose { source: View<'a, T> },
}

impl<'a, T: Element> Operation<'a, T> {
    pub fn identity(source: View<'a, T>) -> Self {
        Operation::Identity { source }
    }

    pub fn transpose(source: View<'a, T>) -> Self {
        Operation::Transpose { source }
    }

    /// `op(source[i], value)` at every index.
    pub fn scalar(op: BinaryOp, source: View<'a, T>, value: T) -> Self {
        Self::binary(op, source, Operand::Scalar(value))
    }

    /// `op(source[i], other[i])` at every index.
    ///
    /// Fails with [`Error::ShapeMismatch`] carrying both element counts when
    /// the two shapes differ, which includes equal counts in different
    /// shapes (2 x 3 against 3 x 2).
    pub fn elementwise(op: BinaryOp, source: View<'a, T>, other: View<'a, T>) -> Result<Self> {
        if source.shape != other.shape {
            log::debug!("{op:?} operand of shape {} against {}", other.shape, source.shape);
            return Err(Error::shape_mismatch(source.data.len(), other.data.len()));
        }
        Ok(Self::binary(op, source, Operand::Elementwise(other.data)))
    }

    fn binary(op: BinaryOp, source: View<'a, T>, operand: Operand<'a, T>) -> Self {
        match op {
            BinaryOp::Add => Operation::Add { source, operand },
            BinaryOp::Subtract => Operation::Subtract { source, operand },
            BinaryOp::Multiply => Operation::Multiply { source, operand },
            BinaryOp::Divide => Operation::Divide { source, operand },
        }
    }

    /// Shape of the matrix this operation produces.
    pub fn result_shape(&self) -> Shape {
        match self {
            Operation::Transpose { source } => source.shape.swapped(),
            _ => self.source().shape,
        }
    }

    /// Number of elements this operation produces.
    pub fn len(&self) -> usize {
        self.result_shape().size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Identity { .. } => "identity",
            Operation::Add { .. } => "add",
            Operation::Subtract { .. } => "subtract",
            Operation::Multiply { .. } => "multiply",
            Operation::Divide { .. } => "divide",
            Operation::Transpose { .. } => "transpose",
        }
    }

    fn source(&self) -> &View<'a, T> {
        match self {
            Operation::Identity { source }
            | Operation::Add { source, .. }
            | Operation::Subtract { source, .. }
            | Operation::Multiply { source, .. }
            | Operation::Divide { source, .. }
            | Operation::Transpose { source } => source,
        }
    }

    /// Result element at a column-major flat index of [`result_shape`](Self::result_shape).
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    #[inline]
    pub fn element_at(&self, index: usize) -> T {
        match self {
            Operation::Identity { source } => source.data[index],
            Operation::Add { source, operand } => {
                BinaryOp::Add.apply(source.data[index], operand.resolve(index))
            }
            Operation::Subtract { source, operand } => {
                BinaryOp::Subtract.apply(source.data[index], operand.resolve(index))
            }
            Operation::Multiply { source, operand } => {
                BinaryOp::Multiply.apply(source.data[index], operand.resolve(index))
            }
            Operation::Divide { source, operand } => {
                BinaryOp::Divide.apply(source.data[index], operand.resolve(index))
            }
            Operation::Transpose { source } => {
                // (row, column) in the result is (column, row) in the source
                let (row, column) = source.shape.swapped().coords(index);
                source.data[source.shape.flat_index(column, row)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BinaryOp, Operation, View};
    use crate::{error::Error, shape::Shape};

    #[test]
    fn scalar_is_broadcast() {
        let data = [1, 2, 3, 4];
        let view = View::new(&data, Shape::new(2, 2)).unwrap();
        let op = Operation::scalar(BinaryOp::Multiply, view, 10);
        let out: Vec<i32> = (0..op.len()).map(|i| op.element_at(i)).collect();
        assert_eq!(out, vec![10, 20, 30, 40]);
        assert_eq!(op.name(), "multiply");
    }

    #[test]
    fn elementwise_reads_same_index() {
        let a = [10.0, 20.0, 30.0];
        let b = [1.0, 2.0, 3.0];
        let shape = Shape::new(3, 1);
        let op = Operation::elementwise(
            BinaryOp::Subtract,
            View::new(&a, shape).unwrap(),
            View::new(&b, shape).unwrap(),
        )
        .unwrap();
        assert_eq!(op.element_at(0), 9.0);
        assert_eq!(op.element_at(2), 27.0);
    }

    #[test]
    fn mismatched_operand_is_rejected() {
        let a = [1, 2, 3, 4];
        let b = [1, 2, 3, 4, 5, 6];
        let err = Operation::elementwise(
            BinaryOp::Add,
            View::new(&a, Shape::new(2, 2)).unwrap(),
            View::new(&b, Shape::new(2, 3)).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { expected: 4, actual: 6 });
    }

    #[test]
    fn transposed_shape_is_rejected_with_equal_sizes() {
        let a = [1, 2, 3, 4, 5, 6];
        let err = Operation::elementwise(
            BinaryOp::Multiply,
            View::new(&a, Shape::new(2, 3)).unwrap(),
            View::new(&a, Shape::new(3, 2)).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { expected: 6, actual: 6 });
    }

    #[test]
    fn view_checks_length() {
        let data = [1, 2, 3];
        assert!(View::new(&data, Shape::new(2, 2)).is_err());
        let err = View::new(&data, Shape::new(1 << (usize::BITS - 1), 2)).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { expected: usize::MAX, actual: 3 });
    }

    #[test]
    fn transpose_remaps_indices() {
        // 2 x 3, column-major: [[1, 3, 5], [2, 4, 6]]
        let data = [1, 2, 3, 4, 5, 6];
        let op = Operation::transpose(View::new(&data, Shape::new(2, 3)).unwrap());
        assert_eq!(op.result_shape(), Shape::new(3, 2));
        let out: Vec<i32> = (0..op.len()).map(|i| op.element_at(i)).collect();
        // 3 x 2, column-major: [[1, 2], [3, 4], [5, 6]]
        assert_eq!(out, vec![1, 3, 5, 2, 4, 6]);
    }

    #[test]
    fn identity_copies() {
        let data = [7u8, 8, 9];
        let op = Operation::identity(View::new(&data, Shape::new(1, 3)).unwrap());
        assert_eq!(op.result_shape(), Shape::new(1, 3));
        assert_eq!(op.element_at(1), 8);
    }
}
