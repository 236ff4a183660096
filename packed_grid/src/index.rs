//! Row-major addressing from grid coordinates down to word and bit offsets.

/// A `(row, col)` position in a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Flat row-major index of this coordinate in a grid `cols` wide.
    #[inline]
    pub const fn to_bit_index(self, cols: usize) -> BitIndex {
        BitIndex(self.row * cols + self.col)
    }

    /// Like [`to_bit_index`](Self::to_bit_index), but `None` if the flat
    /// index does not fit in a `usize`.
    #[inline]
    pub const fn checked_bit_index(self, cols: usize) -> Option<BitIndex> {
        match self.row.checked_mul(cols) {
            Some(start) => match start.checked_add(self.col) {
                Some(flat) => Some(BitIndex(flat)),
                None => None,
            },
            None => None,
        }
    }
}

impl From<(usize, usize)> for Coord {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitIndex(pub usize);

impl BitIndex {
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Splits the flat index into `(word, shift)` for `word_bits`-wide words.
    #[inline]
    pub const fn locate(self, word_bits: usize) -> (usize, usize) {
        (self.0 / word_bits, self.0 % word_bits)
    }
}

/// `max(1, floor(bits / word_bits))`: the word count reported by
/// [`PackedGrid::size`](crate::PackedGrid::size).
///
/// Floor division under-counts by one word whenever `bits` is not a multiple
/// of `word_bits`; the grid allocates [`storage_word_count`] words instead.
pub const fn reported_word_count(bits: usize, word_bits: usize) -> usize {
    let words = bits / word_bits;
    if words == 0 { 1 } else { words }
}

/// `max(1, ceil(bits / word_bits))`: the words needed to hold `bits` bits.
pub const fn storage_word_count(bits: usize, word_bits: usize) -> usize {
    let words = bits.div_ceil(word_bits);
    if words == 0 { 1 } else { words }
}
