//! Unsigned integer storage units.

use bytemuck::Pod;
use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Shl};

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer type bits can be packed into.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize` only; the
/// trait is sealed so signed and floating-point types can never be used as
/// grid storage.
pub trait Word:
    sealed::Sealed
    + Pod
    + Eq
    + Hash
    + Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + Not<Output = Self>
    + Shl<usize, Output = Self>
{
    /// Width of the word in bits.
    const BITS: usize;
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Word for $t {
                const BITS: usize = <$t>::BITS as usize;
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128, usize);
