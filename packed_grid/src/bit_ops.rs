use crate::Word;

#[inline(always)]
fn mask<W: Word>(shift: usize) -> W {
    W::ONE << shift
}

/// Reads bit `shift` of `word`.
#[inline(always)]
pub(crate) fn read_bit<W: Word>(word: W, shift: usize) -> bool {
    word & mask::<W>(shift) != W::ZERO
}

/// Sets or clears bit `shift` of `word`, leaving the other bits untouched.
#[inline(always)]
pub(crate) fn write_bit<W: Word>(word: &mut W, shift: usize, value: bool) {
    if value {
        *word |= mask::<W>(shift);
    } else {
        *word &= !mask::<W>(shift);
    }
}
