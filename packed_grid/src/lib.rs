//! # packed_grid
//!
//! A `no_std` compatible fixed-size 2D bitmap.
//!
//! ```rust
//! use packed_grid::PackedGrid;
//!
//! // 64 x 64 cells packed into 64-bit words
//! let mut grid = PackedGrid::<64, 64, u64>::new();
//! for i in 0..grid.rows() {
//!     grid.mark(i, i)?;
//! }
//!
//! assert!(grid.get(10, 10)?);
//! assert!(!grid.get(10, 11)?);
//! # Ok::<(), packed_grid::GridError>(())
//! ```
//!
//! ## Memory Savings Example
//!
//! ```rust
//! use packed_grid::PackedGrid;
//!
//! // Vec<bool>: 1024 × 768 cells × 1 byte = 786432 bytes
//! // PackedGrid: 1024 × 768 bits = 98304 bytes
//! let grid = PackedGrid::<1024, 768, u32>::new();
//! assert_eq!(grid.as_bytes().len(), 98_304);
//! ```
//!
//! ## Features
//!
//! - `std` (default): `GridError` implements `std::error::Error`.
//! - `unchecked`: `get`/`set` skip the row/column validation. Storage bounds
//!   are still enforced; use the `*_unchecked` methods to skip those too.
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::{Axis, GridError};

mod bit_ops;

pub mod grid;
pub mod index;
pub mod word;

pub use grid::PackedGrid;
pub use index::{BitIndex, Coord};
pub use word::Word;
