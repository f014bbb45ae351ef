//! Text rendering of matrices, one row per line.
//!
//! Rendering only goes through [`Matrix::row_count`],
//! [`Matrix::column_count`] and [`Matrix::get_row`].

use std::fmt;

use bon::Builder;

use crate::{Element, matrix::Matrix};

#[derive(Builder, Clone, Debug)]
/// How [`Matrix::display_with`] lays out a matrix
pub struct FormatOptions {
    /// Text placed between two elements of a row. Default: a single space.
    #[builder(default = String::from(" "), into)]
    pub separator: String,
    /// Digits after the decimal point for float elements. Ignored by
    /// integers. Default: the element's own `Display`.
    pub precision: Option<usize>,
    /// Print a `"{rows} X {columns} matrix:"` line first. Default: true.
    #[builder(default = true)]
    pub header: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Borrowing adapter returned by [`Matrix::display_with`].
pub struct MatrixDisplay<'a, T> {
    matrix: &'a Matrix<T>,
    options: &'a FormatOptions,
}

impl<T: Element> Matrix<T> {
    pub fn display_with<'a>(&'a self, options: &'a FormatOptions) -> MatrixDisplay<'a, T> {
        MatrixDisplay {
            matrix: self,
            options,
        }
    }
}

impl<T: Element + fmt::Display> fmt::Display for MatrixDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.matrix;
        if self.options.header {
            writeln!(f, "{} X {} matrix:", m.row_count(), m.column_count())?;
        }
        for row in 0..m.row_count() {
            let values = m.get_row(row).map_err(|_| fmt::Error)?;
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    f.write_str(&self.options.separator)?;
                }
                match self.options.precision {
                    Some(precision) => write!(f, "{value:.precision$}")?,
                    None => write!(f, "{value}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Element + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&FormatOptions::default()), f)
    }
}
