#[cfg(feature = "std")]
use thiserror::Error;

/// Which coordinate of a `(row, col)` pair was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Col,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Col => f.write_str("col"),
        }
    }
}

/// Errors returned by the checked accessors of [`PackedGrid`](crate::PackedGrid).
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The coordinate on `axis` is greater than the grid dimension `max`.
    #[cfg_attr(feature = "std", error("{axis} is out of range. max: {max}; is: {value}"))]
    CoordinateOutOfRange { axis: Axis, value: usize, max: usize },

    /// The coordinate passed the dimension check but addresses a word past
    /// the end of the storage.
    #[cfg_attr(
        feature = "std",
        error("word {word} is out of range for storage of {len} words")
    )]
    StorageOutOfRange { word: usize, len: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::CoordinateOutOfRange { axis, value, max } => {
                write!(f, "{} is out of range. max: {}; is: {}", axis, max, value)
            }
            GridError::StorageOutOfRange { word, len } => {
                write!(f, "word {} is out of range for storage of {} words", word, len)
            }
        }
    }
}
