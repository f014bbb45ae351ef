//! Errors for matrix construction and access

use thiserror::Error;

/// Precondition failures raised by [`crate::Matrix`] operations.
///
/// Every check runs before any element is written or computed, so a call
/// that returns one of these leaves its receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Two element counts that must agree did not, or two shapes with the
    /// same count differed (`expected == actual` in that case). A shape too
    /// large to address reports `expected: usize::MAX`.
    #[error("size mismatch: size1: {expected} & size2: {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    /// A flat index, row or column was outside the matrix.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn shape_mismatch(expected: usize, actual: usize) -> Self {
        log::debug!("rejecting operation: expected {expected} elements, got {actual}");
        Error::ShapeMismatch { expected, actual }
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        log::debug!("rejecting access: index {index} with length {len}");
        Error::IndexOutOfRange { index, len }
    }
}
