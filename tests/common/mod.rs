#![allow(dead_code)]

use geometry::prelude::*;

/// Routes `log` output through the test harness.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 3 x 4 matrix whose element at (r, c) is `10 * (r + 1) + (c + 1)`.
pub fn grid() -> Matrix<i32> {
    Matrix::from_values(3, 4, vec![11, 21, 31, 12, 22, 32, 13, 23, 33, 14, 24, 34]).unwrap()
}

/// Matrices of assorted shapes, the empty ones included.
pub fn samples() -> Vec<Matrix<f64>> {
    let mut out = vec![Matrix::default(), Matrix::new(0, 3), Matrix::new(2, 0)];
    for (rows, columns) in [(1, 1), (1, 5), (4, 1), (2, 3), (3, 3), (5, 2)] {
        let values: Vec<f64> = (0..rows * columns).map(|v| v as f64 * 1.25 - 3.0).collect();
        out.push(Matrix::from_values(rows, columns, values).unwrap());
    }
    out
}

/// Same shape as `m`, never zero, so it is safe to divide by.
pub fn partner(m: &Matrix<f64>) -> Matrix<f64> {
    let values: Vec<f64> = (0..m.len()).map(|v| v as f64 + 2.0).collect();
    Matrix::from_values(m.row_count(), m.column_count(), values).unwrap()
}
