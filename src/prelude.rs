//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use geometry::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core types: `Matrix`, `Shape`, `Element`.
//! - Errors: `Error`.
//! - Transposition: `transpose`.
//! - Formatting: `FormatOptions`.
//!

pub use crate::{
    element::Element,
    error::Error,
    display::FormatOptions,
    matrix::{Matrix, transpose},
    shape::Shape,
};
