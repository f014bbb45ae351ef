//! Element types a matrix can hold.

use std::fmt::Debug;

use num_traits::NumAssign;

/// Numeric element stored in a [`crate::Matrix`].
///
/// Anything `Copy` with the four arithmetic operators (and their compound
/// forms) and a zero qualifies: all primitive integers and floats do.
/// Division follows the type's own rules, so an integral element divided by
/// zero panics exactly as a plain `/` would.
pub trait Element: Copy + Debug + NumAssign {}

impl<T> Element for T where T: Copy + Debug + NumAssign {}
