//! Iterator implementations for `DynamicBitset`.

use core::iter::{FromIterator, FusedIterator};

use crate::{DynamicBitset, block::Block, storage::bitpos};

impl<B: Block> DynamicBitset<B> {
    /// Returns an iterator over every bit value, from position 0 upwards.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let bits: DynamicBitset<u8> = "110".parse().unwrap();
    /// let values: Vec<bool> = bits.iter().collect();
    /// assert_eq!(values, [false, true, true]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, B> {
        Iter {
            bits: self,
            front: 0,
            back: self.num_bits,
        }
    }

    /// Returns an iterator over the positions of the set bits, in ascending
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let mut bits = DynamicBitset::<u32>::with_len(100);
    /// bits.set(5, true).set(64, true).set(99, true);
    ///
    /// let ones: Vec<_> = bits.ones().collect();
    /// assert_eq!(ones, vec![5, 64, 99]);
    ///
    /// let rev: Vec<_> = bits.ones().rev().collect();
    /// assert_eq!(rev, vec![99, 64, 5]);
    /// ```
    #[must_use]
    pub fn ones(&self) -> Ones<'_, B> {
        Ones {
            bits: self,
            pos: 0,
            rpos: self.num_bits,
        }
    }
}

/// An iterator over the bit values of a [`DynamicBitset`].
///
/// This struct is created by [`DynamicBitset::iter`].
#[derive(Clone)]
pub struct Iter<'a, B: Block> {
    bits: &'a DynamicBitset<B>,
    front: usize,
    back: usize,
}

impl<B: Block> Iterator for Iter<'_, B> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        let bit = self.bits.unchecked_test(self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<bool> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<B: Block> DoubleEndedIterator for Iter<'_, B> {
    #[inline]
    fn next_back(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.bits.unchecked_test(self.back))
    }
}

impl<B: Block> ExactSizeIterator for Iter<'_, B> {}

impl<B: Block> FusedIterator for Iter<'_, B> {}

/// An iterator over the positions of the set bits of a [`DynamicBitset`].
///
/// Double-ended; blocks without set bits are skipped whole. Created by
/// [`DynamicBitset::ones`].
#[derive(Clone)]
pub struct Ones<'a, B: Block> {
    bits: &'a DynamicBitset<B>,
    pos: usize,  // next candidate (forward)
    rpos: usize, // one past the last candidate (reverse)
}

impl<B: Block> Iterator for Ones<'_, B> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.pos >= self.rpos {
            return None;
        }
        match self.bits.find_first_from(self.pos) {
            Some(found) if found < self.rpos => {
                self.pos = found + 1;
                Some(found)
            }
            _ => {
                self.pos = self.rpos;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<B: Block> ExactSizeIterator for Ones<'_, B> {
    fn len(&self) -> usize {
        if self.pos >= self.rpos {
            return 0;
        }
        self.bits.count_range(self.pos, self.rpos - self.pos)
    }
}

impl<B: Block> FusedIterator for Ones<'_, B> {}

impl<B: Block> DoubleEndedIterator for Ones<'_, B> {
    fn next_back(&mut self) -> Option<usize> {
        let blocks = self.bits.as_blocks();

        while self.rpos > self.pos {
            let (wi, bi) = bitpos::<B>(self.rpos - 1);

            // Only consider bits up to and including bi
            let masked = blocks[wi] & (B::ONES >> (B::BITS - 1 - bi));
            if !masked.any() {
                self.rpos = wi * B::BITS;
                continue;
            }

            let found = wi * B::BITS + (B::BITS - 1 - masked.leading_zeros());
            if found < self.pos {
                self.rpos = self.pos;
                return None;
            }
            self.rpos = found;
            return Some(found);
        }

        None
    }
}

impl<'a, B: Block> IntoIterator for &'a DynamicBitset<B> {
    type IntoIter = Iter<'a, B>;
    type Item = bool;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<B: Block> FromIterator<bool> for DynamicBitset<B> {
    /// Collects bit values, the first becoming position 0.
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = Self::new();
        bits.extend(iter);
        bits
    }
}

impl<B: Block> Extend<bool> for DynamicBitset<B> {
    /// Appends bit values at the most significant end.
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(self.num_bits.saturating_add(iter.size_hint().0));
        for bit in iter {
            self.push_back(bit);
        }
    }
}
