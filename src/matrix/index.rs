//! Panicking `[]` access by flat index or by `(row, column)`.

use std::ops::{Index, IndexMut};

use crate::Element;

use super::base::Matrix;

impl<T: Element> Index<usize> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        &self.elements()[index]
    }
}

impl<T: Element> IndexMut<usize> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements_mut()[index]
    }
}

impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, column): (usize, usize)) -> &T {
        check_coords(self, row, column);
        &self.elements()[self.flat_index(row, column)]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        check_coords(self, row, column);
        let flat = self.flat_index(row, column);
        &mut self[flat]
    }
}

// A row past the end could still land inside the buffer, so check each axis.
#[track_caller]
fn check_coords<T: Element>(m: &Matrix<T>, row: usize, column: usize) {
    assert!(
        row < m.row_count() && column < m.column_count(),
        "index ({row}, {column}) out of range for a {} matrix",
        m.shape()
    );
}
