//! The dense matrix type: storage, shape queries and in-place mutation.

use num_traits::AsPrimitive;

use crate::{
    Element,
    error::{Error, Result},
    shape::Shape,
};

use super::operation::{BinaryOp, Operation, View};

/// Dense matrix stored column by column.
///
/// The element at `(row, column)` lives at flat index
/// `row + column * row_count()`. The buffer always holds exactly
/// `row_count() * column_count()` elements and is never shared between two
/// matrices.
///
/// # Example
///
/// ```
/// use geometry::Matrix;
///
/// // 2 x 2, written column by column: [[1, 3], [2, 4]]
/// let a: Matrix<i32> = Matrix::from_values(2, 2, vec![1, 2, 3, 4]).unwrap();
/// let b = &a * 2;
/// assert_eq!(b.get_row(0).unwrap(), vec![2, 6]);
/// assert_eq!((&a + &b).at(3).unwrap(), 12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    elements: Vec<T>,
    shape: Shape,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            shape: Shape::EMPTY,
        }
    }
}

impl<T: Element> Matrix<T> {
    /// A `rows x columns` matrix of zeros. Either dimension may be zero.
    ///
    /// # Panics
    ///
    /// If `rows * columns` overflows `usize`, like `Vec` on a capacity
    /// overflow.
    pub fn new(rows: usize, columns: usize) -> Self {
        let shape = Shape::new(rows, columns);
        let Some(size) = shape.checked_size() else {
            panic!("capacity overflow: cannot allocate a {shape} matrix");
        };
        Self {
            elements: vec![T::zero(); size],
            shape,
        }
    }

    /// A `rows x columns` matrix holding `values` in column-major order.
    ///
    /// A shape whose size overflows `usize` is reported as a mismatch
    /// against an expected size of `usize::MAX`.
    pub fn from_values(rows: usize, columns: usize, values: impl Into<Vec<T>>) -> Result<Self> {
        let shape = Shape::new(rows, columns);
        let elements = values.into();
        match shape.checked_size() {
            Some(size) if size == elements.len() => Ok(Self { elements, shape }),
            size => Err(Error::shape_mismatch(size.unwrap_or(usize::MAX), elements.len())),
        }
    }

    /// Materializes `operation` into a new matrix.
    ///
    /// The buffer is allocated once, at the operation's result size, and
    /// filled front to back with [`Operation::element_at`].
    pub fn from_operation(operation: Operation<'_, T>) -> Self {
        let shape = operation.result_shape();
        log::trace!("materializing {} into a {} matrix", operation.name(), shape);
        let elements = (0..shape.size()).map(|i| operation.element_at(i)).collect();
        Self { elements, shape }
    }

    /// Borrowed view used to build operations over this matrix.
    pub fn view(&self) -> View<'_, T> {
        View::new_unchecked(&self.elements, self.shape)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn row_count(&self) -> usize {
        self.shape.rows
    }

    pub fn column_count(&self) -> usize {
        self.shape.columns
    }

    /// `row_count() * column_count()`; zero when either dimension is zero.
    pub fn total_size(&self) -> usize {
        self.shape.size()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_same_shape(&self, other: &Matrix<T>) -> bool {
        self.shape == other.shape
    }

    /// All elements, column-major.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// All elements, column-major, for in-place edits. The length is fixed.
    pub fn elements_mut(&mut self) -> &mut [T] {
        &mut self.elements
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// True when every element is zero, including when there are none.
    pub fn is_zero(&self) -> bool {
        self.elements.iter().all(|e| e.is_zero())
    }

    pub fn flat_index(&self, row: usize, column: usize) -> usize {
        self.shape.flat_index(row, column)
    }

    pub fn coords(&self, flat: usize) -> (usize, usize) {
        self.shape.coords(flat)
    }

    /// Element at a flat index.
    pub fn at(&self, index: usize) -> Result<T> {
        self.elements
            .get(index)
            .copied()
            .ok_or_else(|| Error::out_of_range(index, self.elements.len()))
    }

    /// Element at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Result<T> {
        if row >= self.shape.rows {
            return Err(Error::out_of_range(row, self.shape.rows));
        }
        if column >= self.shape.columns {
            return Err(Error::out_of_range(column, self.shape.columns));
        }
        Ok(self.elements[self.shape.flat_index(row, column)])
    }

    /// Copy of row `row`, `column_count()` long.
    pub fn get_row(&self, row: usize) -> Result<Vec<T>> {
        if row >= self.shape.rows {
            return Err(Error::out_of_range(row, self.shape.rows));
        }
        Ok((0..self.shape.columns)
            .map(|column| self.elements[self.shape.flat_index(row, column)])
            .collect())
    }

    /// Copy of column `column`, `row_count()` long.
    pub fn get_column(&self, column: usize) -> Result<Vec<T>> {
        if column >= self.shape.columns {
            return Err(Error::out_of_range(column, self.shape.columns));
        }
        let start = self.shape.flat_index(0, column);
        Ok(self.elements[start..start + self.shape.rows].to_vec())
    }

    /// Overwrites every element, keeping the shape.
    pub fn set_values(&mut self, values: &[T]) -> Result<()> {
        if values.len() != self.elements.len() {
            return Err(Error::shape_mismatch(self.elements.len(), values.len()));
        }
        self.elements.copy_from_slice(values);
        Ok(())
    }

    /// Sets every element to zero.
    pub fn clear(&mut self) {
        self.elements.fill(T::zero());
    }

    /// Drops every element and shrinks the shape to `0 x 0`.
    pub fn reset(&mut self) {
        self.elements.clear();
        self.shape = Shape::EMPTY;
    }

    /// Reinterprets the buffer as `rows x columns` without moving elements.
    pub fn reshape(&mut self, rows: usize, columns: usize) -> Result<()> {
        let shape = Shape::new(rows, columns);
        match shape.checked_size() {
            Some(size) if size == self.elements.len() => {
                self.shape = shape;
                Ok(())
            }
            size => Err(Error::shape_mismatch(self.elements.len(), size.unwrap_or(usize::MAX))),
        }
    }

    /// Converts every element with an `as` cast, keeping the shape.
    ///
    /// Rounding and truncation are exactly those of `value as U`.
    pub fn cast<U>(&self) -> Matrix<U>
    where
        T: AsPrimitive<U>,
        U: Element + 'static,
    {
        Matrix {
            elements: self.elements.iter().map(|e| e.as_()).collect(),
            shape: self.shape,
        }
    }

    /// Replaces this matrix with a cast copy of `other`, adopting its shape.
    pub fn assign_from<U>(&mut self, other: &Matrix<U>)
    where
        U: Element + AsPrimitive<T>,
        T: 'static,
    {
        self.elements.clear();
        self.elements.extend(other.elements.iter().map(|e| e.as_()));
        self.shape = other.shape;
    }

    pub(crate) fn broadcast(&self, op: BinaryOp, value: T) -> Self {
        Self::from_operation(Operation::scalar(op, self.view(), value))
    }

    pub(crate) fn elementwise(&self, op: BinaryOp, other: &Matrix<T>) -> Result<Self> {
        Operation::elementwise(op, self.view(), other.view()).map(Self::from_operation)
    }

    pub(crate) fn broadcast_assign(&mut self, op: BinaryOp, value: T) {
        for e in self.elements.iter_mut() {
            op.apply_assign(e, value);
        }
    }

    pub(crate) fn elementwise_assign(&mut self, op: BinaryOp, other: &Matrix<T>) -> Result<()> {
        if !self.is_same_shape(other) {
            return Err(Error::shape_mismatch(self.len(), other.len()));
        }
        for (e, &o) in self.elements.iter_mut().zip(other.elements.iter()) {
            op.apply_assign(e, o);
        }
        Ok(())
    }
}

impl<'a, T: Element> From<Operation<'a, T>> for Matrix<T> {
    fn from(operation: Operation<'a, T>) -> Self {
        Matrix::from_operation(operation)
    }
}

impl<T: Element + AsPrimitive<U>, U: Element + 'static> From<&Matrix<T>> for Matrix<U> {
    fn from(other: &Matrix<T>) -> Self {
        other.cast()
    }
}

impl<T> IntoIterator for Matrix<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Matrix, Shape};

    fn fixture() -> Matrix<i32> {
        Matrix::from_values(3, 4, vec![11, 21, 31, 12, 22, 32, 13, 23, 33, 14, 24, 34]).unwrap()
    }

    #[test]
    fn new_is_zero_filled() {
        let m: Matrix<f64> = Matrix::new(2, 3);
        assert_eq!(m.len(), 6);
        assert_eq!(m.shape(), Shape::new(2, 3));
        assert!(m.is_zero());
    }

    #[test]
    fn empty_matrices() {
        let m: Matrix<i32> = Matrix::default();
        assert_eq!(m.shape(), Shape::EMPTY);
        assert_eq!(m.total_size(), 0);
        assert!(m.is_empty());
        assert!(m.is_zero());

        let m: Matrix<i32> = Matrix::new(0, 4);
        assert_eq!(m.total_size(), 0);
        assert_eq!(m.column_count(), 4);
    }

    #[test]
    fn literal_values_must_fit() {
        let err = Matrix::from_values(2, 2, vec![1, 2, 3]).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { expected: 4, actual: 3 });
    }

    #[test]
    fn rows_and_columns() {
        let m = fixture();
        assert_eq!(m.get_row(0).unwrap(), vec![11, 12, 13, 14]);
        assert_eq!(m.get_row(2).unwrap(), vec![31, 32, 33, 34]);
        assert_eq!(m.get_column(0).unwrap(), vec![11, 21, 31]);
        assert_eq!(m.get_column(3).unwrap(), vec![14, 24, 34]);
        assert_eq!(m.get(1, 2).unwrap(), 23);
        assert!(matches!(m.get_row(3), Err(Error::IndexOutOfRange { index: 3, len: 3 })));
        assert!(matches!(m.get_column(4), Err(Error::IndexOutOfRange { index: 4, len: 4 })));
    }

    #[test]
    fn bounds_checked_at() {
        let m = fixture();
        assert_eq!(m.at(0).unwrap(), 11);
        assert_eq!(m.at(11).unwrap(), 34);
        assert_eq!(m.at(12), Err(Error::IndexOutOfRange { index: 12, len: 12 }));
    }

    #[test]
    fn set_clear_reset() {
        let mut m = fixture();
        m.clear();
        assert!(m.is_zero());
        assert_eq!(m.shape(), Shape::new(3, 4));

        let values: Vec<i32> = (51..63).collect();
        m.set_values(&values).unwrap();
        assert!(!m.is_zero());
        assert_eq!(m.elements(), values.as_slice());

        let err = m.set_values(&values[..10]).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { expected: 12, actual: 10 });
        assert_eq!(m.elements(), values.as_slice());

        m.reset();
        assert_eq!(m.shape(), Shape::EMPTY);
        assert!(m.is_empty());
    }

    #[test]
    fn reshape_keeps_elements() {
        let mut m = fixture();
        m.reshape(4, 3).unwrap();
        assert_eq!(m.get_column(0).unwrap(), vec![11, 21, 31, 12]);
        assert!(m.reshape(5, 3).is_err());
        assert_eq!(m.shape(), Shape::new(4, 3));
    }

    #[test]
    fn overflowing_shapes_are_rejected() {
        let huge = 1 << (usize::BITS - 1);
        let err = Matrix::<i32>::from_values(huge, 2, vec![]).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { expected: usize::MAX, actual: 0 });

        let mut m: Matrix<i32> = Matrix::default();
        let err = m.reshape(huge, 2).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { expected: 0, actual: usize::MAX });
        assert_eq!(m.shape(), Shape::EMPTY);
        assert_eq!(m.len(), m.total_size());
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn overflowing_new_panics() {
        let _ = Matrix::<u8>::new(usize::MAX, 2);
    }

    #[test]
    fn casts_like_as() {
        let m = Matrix::from_values(1, 1, vec![7]).unwrap();
        let f: Matrix<f32> = m.cast();
        assert_eq!(f.at(0).unwrap(), 7.0);

        let g = Matrix::from_values(1, 3, vec![2.9f64, -2.9, 300.0]).unwrap();
        let i: Matrix<u8> = Matrix::from(&g);
        assert_eq!(i.elements(), &[2, 0, 255]);
    }

    #[test]
    fn assign_from_adopts_shape() {
        let mut target: Matrix<f64> = Matrix::new(2, 2);
        target.assign_from(&fixture());
        assert_eq!(target.shape(), Shape::new(3, 4));
        assert_eq!(target.at(5).unwrap(), 32.0);
    }

    #[test]
    fn clone_is_independent() {
        let a = fixture();
        let mut b = a.clone();
        b.clear();
        assert!(!a.is_zero());
        assert!(b.is_zero());
    }

    #[test]
    fn iterates_column_major() {
        let m = fixture();
        let firsts: Vec<i32> = m.iter().take(3).copied().collect();
        assert_eq!(firsts, vec![11, 21, 31]);
        let sum: i32 = (&m).into_iter().sum();
        assert_eq!(sum, m.into_vec().iter().sum::<i32>());
    }
}
