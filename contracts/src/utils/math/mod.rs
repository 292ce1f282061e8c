//! Standard math utilities missing in `alloy_primitives`.
pub mod alloy;

pub use alloy::{Math, Rounding};
