//! Constant-or-varying argument sources for batched calls.

use crate::column::StrColumn;

/// A batched string argument: one constant shared by every row, or a column
/// with one value per row.
///
/// The shape is decided once per call, not per row.
#[derive(Debug, Clone, Copy)]
pub enum StrInput<'a> {
    /// The same bytes for every row.
    Constant(&'a [u8]),
    /// One value per row.
    Column(&'a StrColumn),
}

impl<'a> StrInput<'a> {
    /// The value for row `i`.
    pub fn at(&self, i: usize) -> &'a [u8] {
        match self {
            StrInput::Constant(bytes) => bytes,
            StrInput::Column(col) => col.value(i),
        }
    }

    /// The constant bytes, if this input is constant.
    pub fn as_constant(&self) -> Option<&'a [u8]> {
        match self {
            StrInput::Constant(bytes) => Some(bytes),
            StrInput::Column(_) => None,
        }
    }
}

impl<'a> From<&'a str> for StrInput<'a> {
    fn from(s: &'a str) -> Self {
        StrInput::Constant(s.as_bytes())
    }
}

impl<'a> From<&'a StrColumn> for StrInput<'a> {
    fn from(col: &'a StrColumn) -> Self {
        StrInput::Column(col)
    }
}

/// A batched integer argument: one constant shared by every row, or a slice
/// with one value per row.
#[derive(Debug, Clone, Copy)]
pub enum IntInput<'a> {
    /// The same integer for every row.
    Constant(i64),
    /// One value per row.
    Column(&'a [i64]),
}

impl<'a> IntInput<'a> {
    /// The value for row `i`.
    pub fn at(&self, i: usize) -> i64 {
        match self {
            IntInput::Constant(v) => *v,
            IntInput::Column(values) => values[i],
        }
    }

    /// The constant value, if this input is constant.
    pub fn as_constant(&self) -> Option<i64> {
        match self {
            IntInput::Constant(v) => Some(*v),
            IntInput::Column(_) => None,
        }
    }
}

impl From<i64> for IntInput<'_> {
    fn from(v: i64) -> Self {
        IntInput::Constant(v)
    }
}

impl<'a> From<&'a [i64]> for IntInput<'a> {
    fn from(values: &'a [i64]) -> Self {
        IntInput::Column(values)
    }
}
