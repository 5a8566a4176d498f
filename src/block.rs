//! The storage unit of a [`DynamicBitset`](crate::DynamicBitset).

use core::{
    fmt,
    hash::Hash,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr},
};

use crate::macros::impl_block;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer type usable as a packed block of bits.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `usize`. The trait is sealed:
/// signed integers and `bool` cannot be used as blocks.
///
/// Bit `i` of a block is the bit with value `1 << i`; bits are numbered from
/// the least significant end.
pub trait Block:
    sealed::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Binary
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Number of bits in one block.
    const BITS: usize;
    /// The block with no bit set.
    const ZERO: Self;
    /// The block with only bit 0 set.
    const ONE: Self;
    /// The block with every bit set.
    const ONES: Self;

    /// Number of set bits.
    fn count_ones(self) -> usize;

    /// Position of the lowest set bit, or `BITS` for a zero block.
    fn trailing_zeros(self) -> usize;

    /// Number of zero bits above the highest set bit.
    fn leading_zeros(self) -> usize;

    /// Widens the block to 128 bits.
    fn to_u128(self) -> u128;

    /// Keeps the low `BITS` bits of `value`.
    fn from_u128_truncated(value: u128) -> Self;

    /// Returns `true` if at least one bit is set.
    #[inline(always)]
    fn any(self) -> bool {
        self != Self::ZERO
    }
}

impl_block!(u8, u16, u32, u64, usize);
