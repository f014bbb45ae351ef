//! Transposition through a deferred index remap.

use crate::Element;

use super::{base::Matrix, operation::Operation};

impl<T: Element> Matrix<T> {
    /// New `column_count() x row_count()` matrix with rows and columns
    /// exchanged. Transposing twice gives back an equal matrix.
    pub fn transpose(&self) -> Self {
        Self::from_operation(Operation::transpose(self.view()))
    }
}

/// Free-function form of [`Matrix::transpose`].
pub fn transpose<T: Element>(matrix: &Matrix<T>) -> Matrix<T> {
    matrix.transpose()
}

#[cfg(test)]
mod tests {
    use super::transpose;
    use crate::{Matrix, Shape};

    #[test]
    fn rows_become_columns() {
        let m = Matrix::from_values(3, 4, vec![11, 21, 31, 12, 22, 32, 13, 23, 33, 14, 24, 34]).unwrap();
        let t = transpose(&m);
        assert_eq!(t.shape(), Shape::new(4, 3));
        for i in 0..m.row_count() {
            assert_eq!(t.get_column(i).unwrap(), m.get_row(i).unwrap());
        }
        assert_eq!(t.get_row(0).unwrap(), vec![11, 21, 31]);
    }

    #[test]
    fn round_trip() {
        let m = Matrix::from_values(2, 5, (0..10).map(|v| v as f64 * 0.5).collect::<Vec<_>>()).unwrap();
        assert_eq!(transpose(&transpose(&m)), m);
    }

    #[test]
    fn degenerate_shapes() {
        let row = Matrix::from_values(1, 3, vec![1, 2, 3]).unwrap();
        let column = row.transpose();
        assert_eq!(column.shape(), Shape::new(3, 1));
        assert_eq!(column.elements(), row.elements());

        let empty: Matrix<i32> = Matrix::new(0, 3);
        assert_eq!(empty.transpose().shape(), Shape::new(3, 0));
        assert!(Matrix::<u8>::default().transpose().is_empty());
    }
}
