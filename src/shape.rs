//! Two-dimensional shapes and the column-major index convention.
//!
//! A flat index and a `(row, column)` pair are related by
//! `flat = row + column * rows`. Every extraction, transpose and operation
//! in the crate goes through [`Shape::flat_index`] and [`Shape::coords`].

use std::fmt;

/// Number of rows and columns of a matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    pub const EMPTY: Shape = Shape { rows: 0, columns: 0 };

    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Total number of elements. A zero dimension gives zero.
    ///
    /// Only use this on shapes already known to fit in memory, such as the
    /// shape of an existing matrix; see [`checked_size`](Self::checked_size).
    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    /// Total number of elements, or `None` when `rows * columns` overflows.
    pub fn checked_size(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// The shape with rows and columns exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            rows: self.columns,
            columns: self.rows,
        }
    }

    /// Column-major flat offset of `(row, column)`.
    pub fn flat_index(&self, row: usize, column: usize) -> usize {
        row + column * self.rows
    }

    /// Inverse of [`flat_index`](Self::flat_index).
    ///
    /// A shape with a zero dimension has no valid coordinates; it maps
    /// `flat` to `(flat, 0)` instead of dividing by zero.
    pub fn coords(&self, flat: usize) -> (usize, usize) {
        if self.rows == 0 || self.columns == 0 {
            return (flat, 0);
        }
        (flat % self.rows, (flat / self.rows) % self.columns)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, columns): (usize, usize)) -> Self {
        Self { rows, columns }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} X {}", self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::Shape;

    #[test]
    fn flat_index_and_coords_agree() {
        let s = Shape::new(3, 4);
        for flat in 0..s.size() {
            let (r, c) = s.coords(flat);
            assert!(r < 3 && c < 4);
            assert_eq!(s.flat_index(r, c), flat);
        }
        // column-major: walking down a column is contiguous
        assert_eq!(s.flat_index(1, 0), 1);
        assert_eq!(s.flat_index(0, 1), 3);
    }

    #[test]
    fn empty_dimensions() {
        assert_eq!(Shape::EMPTY.size(), 0);
        assert_eq!(Shape::new(0, 5).size(), 0);
        assert_eq!(Shape::new(4, 0).coords(2), (2, 0));
        assert_eq!(Shape::new(0, 4).coords(2), (2, 0));
    }

    #[test]
    fn overflowing_size() {
        assert_eq!(Shape::new(1 << (usize::BITS - 1), 2).checked_size(), None);
        assert_eq!(Shape::new(usize::MAX, 1).checked_size(), Some(usize::MAX));
        assert_eq!(Shape::new(3, 4).checked_size(), Some(12));
    }

    #[test]
    fn swapped_shape() {
        assert_eq!(Shape::new(2, 7).swapped(), Shape::new(7, 2));
        assert_eq!(Shape::new(2, 7).to_string(), "2 X 7");
    }
}
