//! # Example: Type Conversion
//!
//! Build an integer matrix, convert it to floats, and divide. The
//! conversion behaves exactly like an `as` cast on each element.

use geometry::prelude::*;

fn main() -> Result<(), Error> {
    let counts = Matrix::from_values(2, 2, vec![7, 1, 2, 9])?;
    let mut ratios: Matrix<f32> = counts.cast();
    ratios /= 4.0;

    let options = FormatOptions::builder().precision(3).build();
    print!("{}", ratios.display_with(&options));

    // Back to bytes: fractions are truncated.
    let bytes: Matrix<u8> = ratios.cast();
    print!("{bytes}");

    let mut doubles: Matrix<f64> = Matrix::default();
    doubles.assign_from(&bytes);
    println!("{} after assignment", doubles.shape());

    Ok(())
}
