//! Mutable proxy for a single bit.

use core::{
    fmt,
    ops::{BitAndAssign, BitOrAssign, BitXorAssign, SubAssign},
};

use crate::block::Block;

/// A handle to one bit of a [`DynamicBitset`](crate::DynamicBitset).
///
/// Obtained from [`DynamicBitset::bit_mut`](crate::DynamicBitset::bit_mut).
/// Every operation acts on the referenced bit only; the other bits of its
/// block are never touched.
///
/// The compound operators take a `bool` right-hand side:
///
/// | operator | effect                     |
/// |----------|----------------------------|
/// | `&=`     | bit = bit AND rhs          |
/// | `\|=`    | bit = bit OR rhs           |
/// | `^=`     | bit = bit XOR rhs          |
/// | `-=`     | bit = bit AND NOT rhs      |
pub struct BitRef<'a, B: Block> {
    block: &'a mut B,
    mask: B,
}

impl<'a, B: Block> BitRef<'a, B> {
    #[inline]
    pub(crate) fn new(block: &'a mut B, mask: B) -> Self {
        Self { block, mask }
    }

    /// Reads the bit.
    #[must_use]
    #[inline]
    pub fn get(&self) -> bool {
        *self.block & self.mask != B::ZERO
    }

    /// Writes the bit.
    #[inline]
    pub fn set(&mut self, value: bool) -> &mut Self {
        if value {
            *self.block |= self.mask;
        } else {
            *self.block &= !self.mask;
        }
        self
    }

    /// Clears the bit.
    #[inline]
    pub fn reset(&mut self) -> &mut Self {
        self.set(false)
    }

    /// Inverts the bit.
    #[inline]
    pub fn flip(&mut self) -> &mut Self {
        *self.block ^= self.mask;
        self
    }

    /// Writes the bit and returns its previous value.
    #[inline]
    pub fn replace(&mut self, value: bool) -> bool {
        let prev = self.get();
        self.set(value);
        prev
    }
}

impl<B: Block> BitAndAssign<bool> for BitRef<'_, B> {
    #[inline]
    fn bitand_assign(&mut self, rhs: bool) {
        if !rhs {
            self.reset();
        }
    }
}

impl<B: Block> BitOrAssign<bool> for BitRef<'_, B> {
    #[inline]
    fn bitor_assign(&mut self, rhs: bool) {
        if rhs {
            self.set(true);
        }
    }
}

impl<B: Block> BitXorAssign<bool> for BitRef<'_, B> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: bool) {
        if rhs {
            self.flip();
        }
    }
}

impl<B: Block> SubAssign<bool> for BitRef<'_, B> {
    #[inline]
    fn sub_assign(&mut self, rhs: bool) {
        if rhs {
            self.reset();
        }
    }
}

impl<B: Block> From<BitRef<'_, B>> for bool {
    #[inline]
    fn from(bit: BitRef<'_, B>) -> Self {
        bit.get()
    }
}

impl<B: Block> fmt::Debug for BitRef<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::DynamicBitset;
    use alloc::string::ToString;

    #[test]
    fn test_compound_assignment() {
        let mut bits = DynamicBitset::<u8>::with_len(8);
        {
            let mut bit = bits.bit_mut(3);
            bit |= true;
            assert!(bit.get());
            bit &= true;
            assert!(bit.get());
            bit ^= true;
            assert!(!bit.get());
            bit ^= true;
            bit -= false;
            assert!(bit.get());
            bit -= true;
            assert!(!bit.get());
        }
        assert!(bits.none());
    }

    #[test]
    fn test_proxy_leaves_neighbours() {
        let mut bits: DynamicBitset<u8> = "10101010".parse().unwrap();
        let mut bit = bits.bit_mut(2);
        assert!(!bit.replace(true));
        bit.flip().flip();
        assert!(bool::from(bit));
        assert_eq!(bits.to_string(), "10101110");
    }
}
