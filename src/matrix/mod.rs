//! Matrix types, operations, and utilities.

#[macro_use]
mod macros;

mod add;
mod base;
mod div;
mod index;
mod mul;
mod operation;
mod sub;
mod transpose;

pub use base::Matrix;
pub use operation::{BinaryOp, Operand, Operation, View};
pub use transpose::transpose;
