//! Fixed-dimension bit grid packed into unsigned words.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use packed_grid::PackedGrid;
//!
//! let mut grid = PackedGrid::<4, 4, u32>::new();
//! grid.mark(1, 2)?;
//!
//! assert!(grid.get(1, 2)?);
//! assert!(!grid.get(2, 1)?);
//! assert!(grid[(1, 2)]);
//! # Ok::<(), packed_grid::GridError>(())
//! ```
//!
//! ## Raw words
//!
//! ```rust
//! use packed_grid::PackedGrid;
//!
//! let mut grid = PackedGrid::<2, 8, u8>::new();
//! grid.mark(0, 0)?;
//! grid.mark(1, 7)?;
//!
//! // Row 0 fills word 0, row 1 fills word 1, lowest bit first.
//! assert_eq!(grid.data(), &[0b0000_0001, 0b1000_0000]);
//! # Ok::<(), packed_grid::GridError>(())
//! ```
//!
use crate::bit_ops;
use crate::index::{self, Coord};
use crate::{GridError, Word};

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec};

type Result<T> = core::result::Result<T, GridError>;

/// A `ROWS` × `COLS` grid of bits stored row-major in words of type `W`.
///
/// Cell `(row, col)` lives at flat index `row * COLS + col`, in word
/// `flat / W::BITS` at bit `flat % W::BITS` (least significant bit first).
///
/// Zero dimensions are rejected at compile time:
///
/// ```compile_fail
/// let _grid = packed_grid::PackedGrid::<0, 4, u8>::new();
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PackedGrid<const ROWS: usize, const COLS: usize, W: Word = usize> {
    words: Box<[W]>,
}

impl<const ROWS: usize, const COLS: usize, W: Word> PackedGrid<ROWS, COLS, W> {
    /// Word count reported by [`size`](Self::size): `max(1, floor(ROWS * COLS / W::BITS))`.
    pub const SIZE: usize = index::reported_word_count(ROWS * COLS, W::BITS);

    /// Words actually allocated: `max(1, ceil(ROWS * COLS / W::BITS))`.
    pub const STORAGE_LEN: usize = index::storage_word_count(ROWS * COLS, W::BITS);

    /// Creates a grid with every bit cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_grid::PackedGrid;
    ///
    /// let grid = PackedGrid::<16, 16, u32>::new();
    /// assert_eq!(grid.rows(), 16);
    /// assert_eq!(grid.size(), 8);
    /// ```
    pub fn new() -> Self {
        const {
            assert!(
                ROWS > 0 && COLS > 0,
                "Number of rows and columns must be greater than 0."
            )
        };
        Self {
            words: vec![W::ZERO; Self::STORAGE_LEN].into_boxed_slice(),
        }
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        ROWS
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        COLS
    }

    /// Number of words as `max(1, floor(ROWS * COLS / W::BITS))`.
    ///
    /// The floor division matches the historical sizing of this grid and is
    /// one word short of [`storage_len`](Self::storage_len) whenever
    /// `ROWS * COLS` is not a multiple of `W::BITS`.
    ///
    /// ```
    /// use packed_grid::PackedGrid;
    ///
    /// let grid = PackedGrid::<3, 3, u8>::new();
    /// assert_eq!(grid.size(), 1);
    /// assert_eq!(grid.storage_len(), 2);
    /// ```
    #[inline]
    pub const fn size(&self) -> usize {
        Self::SIZE
    }

    /// Number of words backing the grid, equal to `self.data().len()`.
    #[inline]
    pub const fn storage_len(&self) -> usize {
        Self::STORAGE_LEN
    }

    /// Rejects coordinates greater than the grid dimensions.
    ///
    /// `row == ROWS` and `col == COLS` pass: they address the following
    /// row's cells or the padding bits of the last word.
    #[cfg(not(feature = "unchecked"))]
    #[inline]
    fn check_coordinate(row: usize, col: usize) -> Result<()> {
        use crate::Axis;

        if row > ROWS {
            return Err(GridError::CoordinateOutOfRange {
                axis: Axis::Row,
                value: row,
                max: ROWS,
            });
        }
        if col > COLS {
            return Err(GridError::CoordinateOutOfRange {
                axis: Axis::Col,
                value: col,
                max: COLS,
            });
        }
        Ok(())
    }

    #[inline]
    fn locate_unchecked(row: usize, col: usize) -> (usize, usize) {
        Coord::new(row, col).to_bit_index(COLS).locate(W::BITS)
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> Result<(usize, usize)> {
        #[cfg(not(feature = "unchecked"))]
        Self::check_coordinate(row, col)?;

        let len = self.words.len();
        let Some(flat) = Coord::new(row, col).checked_bit_index(COLS) else {
            return Err(GridError::StorageOutOfRange {
                word: usize::MAX,
                len,
            });
        };
        let (word, shift) = flat.locate(W::BITS);
        if word >= len {
            return Err(GridError::StorageOutOfRange { word, len });
        }
        Ok((word, shift))
    }

    /// Writes `value` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`GridError::CoordinateOutOfRange`] if `row > ROWS` or `col > COLS`
    ///   (not raised when the `unchecked` feature is enabled).
    /// - [`GridError::StorageOutOfRange`] if the coordinate lands past the
    ///   last storage word. A flat index that overflows `usize` reports
    ///   `word: usize::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_grid::PackedGrid;
    ///
    /// let mut grid = PackedGrid::<8, 8, u8>::new();
    /// grid.set(3, 4, true)?;
    /// assert!(grid.get(3, 4)?);
    /// grid.set(3, 4, false)?;
    /// assert!(!grid.get(3, 4)?);
    /// # Ok::<(), packed_grid::GridError>(())
    /// ```
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        let (word, shift) = self.locate(row, col)?;
        bit_ops::write_bit(&mut self.words[word], shift, value);
        Ok(())
    }

    /// Sets `(row, col)` to `true`.
    #[inline]
    pub fn mark(&mut self, row: usize, col: usize) -> Result<()> {
        self.set(row, col, true)
    }

    /// Sets `(row, col)` to `false`.
    #[inline]
    pub fn unset(&mut self, row: usize, col: usize) -> Result<()> {
        self.set(row, col, false)
    }

    /// Reads the bit at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Same as [`set`](Self::set).
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        let (word, shift) = self.locate(row, col)?;
        Ok(bit_ops::read_bit(self.words[word], shift))
    }

    /// Reads the bit at `(row, col)` without any bounds check.
    ///
    /// # Safety
    ///
    /// `(row * COLS + col) / W::BITS` must be less than
    /// [`storage_len`](Self::storage_len). Every `row < ROWS`, `col < COLS`
    /// satisfies this; anything else is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> bool {
        let (word, shift) = Self::locate_unchecked(row, col);
        // SAFETY: the caller guarantees `word` is within the storage.
        let word = unsafe { *self.words.get_unchecked(word) };
        bit_ops::read_bit(word, shift)
    }

    /// Writes `value` at `(row, col)` without any bounds check.
    ///
    /// # Safety
    ///
    /// Same contract as [`get_unchecked`](Self::get_unchecked).
    #[inline]
    pub unsafe fn set_unchecked(&mut self, row: usize, col: usize, value: bool) {
        let (word, shift) = Self::locate_unchecked(row, col);
        // SAFETY: the caller guarantees `word` is within the storage.
        let word = unsafe { self.words.get_unchecked_mut(word) };
        bit_ops::write_bit(word, shift, value);
    }

    /// # Safety
    ///
    /// Same contract as [`get_unchecked`](Self::get_unchecked).
    #[inline]
    pub unsafe fn mark_unchecked(&mut self, row: usize, col: usize) {
        unsafe { self.set_unchecked(row, col, true) }
    }

    /// # Safety
    ///
    /// Same contract as [`get_unchecked`](Self::get_unchecked).
    #[inline]
    pub unsafe fn unset_unchecked(&mut self, row: usize, col: usize) {
        unsafe { self.set_unchecked(row, col, false) }
    }

    /// Clears every bit, padding included.
    pub fn clear(&mut self) {
        self.words.fill(W::ZERO);
    }

    /// The packed words, lowest flat index first.
    #[inline]
    pub fn data(&self) -> &[W] {
        &self.words
    }

    /// The packed words as native-endian bytes.
    ///
    /// ```
    /// use packed_grid::PackedGrid;
    ///
    /// let grid = PackedGrid::<10, 10, u32>::new();
    /// assert_eq!(grid.as_bytes().len(), grid.storage_len() * 4);
    /// ```
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.words)
    }
}

impl<const ROWS: usize, const COLS: usize, W: Word> Default for PackedGrid<ROWS, COLS, W> {
    fn default() -> Self {
        Self::new()
    }
}

/// `grid[(row, col)]` reads a cell like [`PackedGrid::get`].
///
/// # Panics
///
/// Panics where `get` would return an error.
impl<const ROWS: usize, const COLS: usize, W: Word> core::ops::Index<(usize, usize)>
    for PackedGrid<ROWS, COLS, W>
{
    type Output = bool;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match self.get(row, col) {
            Ok(true) => &true,
            Ok(false) => &false,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<const ROWS: usize, const COLS: usize, W: Word> core::fmt::Debug for PackedGrid<ROWS, COLS, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PackedGrid")
            .field("rows", &ROWS)
            .field("cols", &COLS)
            .field("word", &core::any::type_name::<W>())
            .field("words", &self.words)
            .finish()
    }
}
