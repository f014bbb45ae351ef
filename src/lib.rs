//! Dense, column-major matrices whose arithmetic is computed lazily.
//!
//! Every operator builds an [`Operation`] that borrows its inputs, and the
//! result [`Matrix`] pulls its elements from it in a single pass over one
//! freshly allocated buffer. Shapes are checked when the operation is
//! built, before anything is computed.
//!
//! ```
//! use geometry::prelude::*;
//!
//! let x = Matrix::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
//! let y = transpose(&(&x * 2.0));
//! assert_eq!(y.get_row(0)?, vec![2.0, 4.0]);
//! assert!(x.try_add(&Matrix::new(3, 4)).is_err());
//! # Ok::<(), geometry::Error>(())
//! ```

mod display;
mod element;
mod error;
mod shape;

pub mod matrix;
pub mod prelude;

#[cfg(feature = "python")]
mod python;

pub use display::{FormatOptions, MatrixDisplay};
pub use element::Element;
pub use error::{Error, Result};
pub use matrix::{BinaryOp, Matrix, Operand, Operation, View, transpose};
pub use shape::Shape;
