//! Implementations of set operations for `DynamicBitset`.
//!
//! A bit vector doubles as a set of positions: position `i` is a member when
//! bit `i` is set. The combining operations require both operands to have the
//! same length.

use crate::{DynamicBitset, block::Block};

impl<B: Block> DynamicBitset<B> {
    #[inline(always)]
    #[track_caller]
    fn assert_same_len(&self, other: &Self) {
        assert_eq!(
            self.num_bits, other.num_bits,
            "bit vectors must have the same length"
        );
    }

    #[inline(always)]
    #[track_caller]
    fn zip_blocks(&mut self, other: &Self, op: impl Fn(B, B) -> B) {
        self.assert_same_len(other);
        for (dst, &src) in self.blocks.iter_mut().zip(&other.blocks) {
            *dst = op(*dst, src);
        }
    }

    /// Sets each bit of `self` to `self[i] | other[i]`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let mut a: DynamicBitset<u8> = "1100".parse().unwrap();
    /// let b: DynamicBitset<u8> = "1010".parse().unwrap();
    ///
    /// a.union_with(&b);
    /// assert_eq!(a.to_string(), "1110");
    /// ```
    #[track_caller]
    pub fn union_with(&mut self, other: &Self) {
        self.zip_blocks(other, |a, b| a | b);
    }

    /// Creates a new bit vector that is the union of this one and `other`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    #[track_caller]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Sets each bit of `self` to `self[i] & other[i]`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[track_caller]
    pub fn intersection_with(&mut self, other: &Self) {
        self.zip_blocks(other, |a, b| a & b);
    }

    /// Creates a new bit vector that is the intersection of this one and
    /// `other`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    #[track_caller]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersection_with(other);
        result
    }

    /// Sets each bit of `self` to `self[i] & !other[i]`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let mut a: DynamicBitset<u8> = "1100".parse().unwrap();
    /// let b: DynamicBitset<u8> = "1010".parse().unwrap();
    ///
    /// a.difference_with(&b);
    /// assert_eq!(a.to_string(), "0100");
    /// ```
    #[track_caller]
    pub fn difference_with(&mut self, other: &Self) {
        self.zip_blocks(other, |a, b| a & !b);
    }

    /// Creates a new bit vector holding the bits of `self` that are not set
    /// in `other`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    #[track_caller]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.difference_with(other);
        result
    }

    /// Sets each bit of `self` to `self[i] ^ other[i]`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[track_caller]
    pub fn symmetric_difference_with(&mut self, other: &Self) {
        self.zip_blocks(other, |a, b| a ^ b);
    }

    /// Creates a new bit vector that is the symmetric difference of this one
    /// and `other`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    #[track_caller]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.symmetric_difference_with(other);
        result
    }

    /// Returns `true` if every bit set in `self` is also set in `other`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let a: DynamicBitset<u8> = "0100".parse().unwrap();
    /// let b: DynamicBitset<u8> = "0110".parse().unwrap();
    ///
    /// assert!(a.is_subset_of(&b));
    /// assert!(!b.is_subset_of(&a));
    /// assert!(a.is_subset_of(&a));
    /// ```
    #[must_use]
    #[track_caller]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.assert_same_len(other);
        self.blocks
            .iter()
            .zip(&other.blocks)
            .all(|(&a, &b)| a & !b == B::ZERO)
    }

    /// Returns `true` if `self` is a subset of `other` and the two differ.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    #[track_caller]
    pub fn is_proper_subset_of(&self, other: &Self) -> bool {
        self.assert_same_len(other);
        let mut proper = false;
        for (&a, &b) in self.blocks.iter().zip(&other.blocks) {
            if a & !b != B::ZERO {
                return false;
            }
            if a != b {
                proper = true;
            }
        }
        proper
    }

    /// Returns `true` if some position is set in both vectors.
    ///
    /// The lengths may differ; only the common blocks are compared, and the
    /// bits above the shorter length are zero there.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let a: DynamicBitset<u8> = "1001".parse().unwrap();
    /// let b: DynamicBitset<u8> = "100000001".parse().unwrap();
    ///
    /// assert!(a.intersects(&b));
    /// assert!(!a.intersects(&DynamicBitset::with_len(30)));
    /// ```
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.blocks
            .iter()
            .zip(&other.blocks)
            .any(|(&a, &b)| (a & b).any())
    }
}
