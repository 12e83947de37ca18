//! Packed string columns and batch argument sources.
//!
//! A [`StrColumn`] stores many byte strings back to back in one growable
//! buffer, delimited by a cumulative offsets vector. [`StrInput`] and
//! [`IntInput`] describe how a batched function argument is supplied: one
//! constant shared by every row, or one value per row.

pub mod column;
pub mod input;

pub use column::StrColumn;
pub use input::{IntInput, StrInput};
