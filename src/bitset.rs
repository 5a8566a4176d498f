//! `DynamicBitset` struct and core implementation.

use alloc::{vec, vec::Vec};
use core::mem;

use crate::{
    BitsetError,
    block::Block,
    reference::BitRef,
    storage::{bit_index, bit_mask, bit_mask_range, bitpos, block_index, blocks_for, low_mask},
};

/// A resizable sequence of bits stored in packed blocks.
///
/// # Overview
///
/// Bit `i` lives in block `i / B::BITS` at bit `i % B::BITS`. The vector has
/// a logical length ([`len`](Self::len)); every position below it is
/// addressable, and the bits of the last block above it are always zero.
/// Any operation that could disturb those bits (flipping every block,
/// shifting, loading raw blocks) clears them before returning.
///
/// The block type defaults to `u64`. Smaller blocks are useful when the
/// block sequence itself is exchanged with other code.
///
/// # Examples
///
/// ```
/// use dyn_bitset::DynamicBitset;
///
/// let mut bits = DynamicBitset::<u64>::with_len(10);
/// bits.set_all();
/// bits.reset_range(3, 4);
///
/// assert_eq!(bits.count(), 6);
/// assert_eq!(bits.find_next(2), Some(7));
/// assert_eq!(bits.to_string(), "1110000111");
/// ```
pub struct DynamicBitset<B: Block = u64> {
    pub(crate) blocks: Vec<B>,
    pub(crate) num_bits: usize,
}

impl<B: Block> DynamicBitset<B> {
    /// Number of bits held by one block.
    pub const BITS_PER_BLOCK: usize = B::BITS;

    /// Creates an empty bit vector without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            blocks: Vec::new(),
            num_bits: 0,
        }
    }

    /// Creates a bit vector of `num_bits` zero bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let bits = DynamicBitset::<u8>::with_len(12);
    /// assert_eq!(bits.len(), 12);
    /// assert_eq!(bits.num_blocks(), 2);
    /// assert!(bits.none());
    /// ```
    #[must_use]
    pub fn with_len(num_bits: usize) -> Self {
        Self {
            blocks: vec![B::ZERO; blocks_for::<B>(num_bits)],
            num_bits,
        }
    }

    /// Creates a bit vector holding exactly the given blocks.
    ///
    /// The length is the number of blocks times [`BITS_PER_BLOCK`]. Block `k`
    /// supplies bits `[k * BITS_PER_BLOCK, (k + 1) * BITS_PER_BLOCK)`.
    ///
    /// [`BITS_PER_BLOCK`]: Self::BITS_PER_BLOCK
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let bits = DynamicBitset::from_blocks([0b0000_0101u8, 0x80]);
    /// assert_eq!(bits.len(), 16);
    /// assert!(bits.test(0));
    /// assert!(bits.test(2));
    /// assert!(bits.test(15));
    /// ```
    #[must_use]
    pub fn from_blocks<I: IntoIterator<Item = B>>(blocks: I) -> Self {
        let blocks: Vec<B> = blocks.into_iter().collect();
        let num_bits = blocks.len() * B::BITS;
        Self { blocks, num_bits }
    }

    // ========================================================================
    // Block Store
    // ========================================================================

    /// Returns the number of bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.num_bits
    }

    /// Returns `true` if the vector holds no bits.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.num_bits == 0
    }

    /// Returns the number of blocks in use.
    #[must_use]
    #[inline]
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the largest length a bit vector of this block type can reach.
    #[must_use]
    pub fn max_len() -> usize {
        let max_blocks = isize::MAX as usize / mem::size_of::<B>();
        max_blocks.saturating_mul(B::BITS)
    }

    /// Returns the number of bits the vector can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.blocks.capacity().saturating_mul(B::BITS)
    }

    /// Returns the underlying blocks, least significant block first.
    #[must_use]
    #[inline]
    pub fn as_blocks(&self) -> &[B] {
        &self.blocks
    }

    /// Ensures capacity for at least `num_bits` bits in total.
    ///
    /// Never changes the length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let mut bits = DynamicBitset::<u32>::new();
    /// bits.reserve(100);
    /// assert!(bits.capacity() >= 100);
    /// assert_eq!(bits.len(), 0);
    /// ```
    #[cold]
    pub fn reserve(&mut self, num_bits: usize) {
        let additional = blocks_for::<B>(num_bits).saturating_sub(self.blocks.len());
        if additional > 0 {
            log::trace!("reserving {additional} blocks for {num_bits} bits");
            self.blocks.reserve(additional);
        }
    }

    /// Like [`reserve`](Self::reserve), but reports allocation failure.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::Alloc`] and leaves the vector unchanged if the
    /// allocator cannot provide the storage.
    #[cold]
    pub fn try_reserve(&mut self, num_bits: usize) -> Result<(), BitsetError> {
        let additional = blocks_for::<B>(num_bits).saturating_sub(self.blocks.len());
        if additional > 0 {
            log::trace!("trying to reserve {additional} blocks for {num_bits} bits");
            self.blocks.try_reserve(additional)?;
        }
        Ok(())
    }

    /// Releases unused capacity. Never changes the length.
    pub fn shrink_to_fit(&mut self) {
        if self.blocks.capacity() > self.blocks.len() {
            log::trace!(
                "shrinking block storage from {} to {} blocks",
                self.blocks.capacity(),
                self.blocks.len()
            );
            self.blocks.shrink_to_fit();
        }
    }

    /// Changes the length to `num_bits`.
    ///
    /// Growing sets every new bit (positions `[len, num_bits)`) to `value`.
    /// Shrinking drops the bits at and above `num_bits`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let mut bits = DynamicBitset::<u8>::with_len(3);
    /// bits.resize(10, true);
    /// assert_eq!(bits.to_string(), "1111111000");
    ///
    /// bits.resize(5, false);
    /// assert_eq!(bits.to_string(), "11000");
    /// ```
    pub fn resize(&mut self, num_bits: usize, value: bool) {
        let old_blocks = self.blocks.len();
        let required = blocks_for::<B>(num_bits);
        let fill = if value { B::ONES } else { B::ZERO };

        if required != old_blocks {
            self.blocks.resize(required, fill);
        }

        // The old unused bits of the previous last block are now exposed.
        if value && num_bits > self.num_bits {
            let extra = bit_index::<B>(self.num_bits);
            if extra != 0 {
                self.blocks[old_blocks - 1] |= fill << extra;
            }
        }

        self.num_bits = num_bits;
        self.zero_unused_bits();
    }

    /// Like [`resize`](Self::resize), but reports allocation failure.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::Alloc`] and leaves the vector unchanged if the
    /// allocator cannot provide the storage.
    pub fn try_resize(&mut self, num_bits: usize, value: bool) -> Result<(), BitsetError> {
        self.try_reserve(num_bits)?;
        self.resize(num_bits, value);
        Ok(())
    }

    /// Removes every bit; the length becomes zero.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.num_bits = 0;
    }

    /// Appends a bit at the most significant end.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let mut bits = DynamicBitset::<u8>::new();
    /// bits.push_back(true);
    /// bits.push_back(false);
    /// bits.push_back(true);
    /// assert_eq!(bits.to_string(), "101");
    /// ```
    pub fn push_back(&mut self, bit: bool) {
        if bit_index::<B>(self.num_bits) == 0 {
            self.blocks.push(B::ZERO);
        }
        let pos = self.num_bits;
        self.num_bits += 1;
        if bit {
            self.blocks[block_index::<B>(pos)] |= bit_mask::<B>(pos);
        }
    }

    /// Like [`push_back`](Self::push_back), but reports allocation failure.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::Alloc`] and leaves the vector unchanged if the
    /// allocator cannot provide the storage.
    pub fn try_push_back(&mut self, bit: bool) -> Result<(), BitsetError> {
        if bit_index::<B>(self.num_bits) == 0 {
            self.blocks.try_reserve(1)?;
        }
        self.push_back(bit);
        Ok(())
    }

    /// Removes the most significant bit and returns it, or [`None`] if the
    /// vector is empty.
    pub fn pop_back(&mut self) -> Option<bool> {
        let last = self.num_bits.checked_sub(1)?;
        let bit = self.unchecked_test(last);
        if bit_index::<B>(last) == 0 {
            self.blocks.pop();
        }
        self.num_bits = last;
        self.zero_unused_bits();
        Some(bit)
    }

    /// Appends a whole block at the most significant end.
    ///
    /// The block's bit 0 becomes position `len()`. The length grows by
    /// [`BITS_PER_BLOCK`](Self::BITS_PER_BLOCK).
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let mut bits: DynamicBitset<u8> = "11".parse().unwrap();
    /// bits.append_block(0b1000_0001);
    /// assert_eq!(bits.len(), 10);
    /// assert_eq!(bits.to_string(), "1000000111");
    /// ```
    pub fn append_block(&mut self, block: B) {
        let extra = bit_index::<B>(self.num_bits);
        match self.blocks.last_mut() {
            Some(last) if extra != 0 => {
                *last |= block << extra;
                self.blocks.push(block >> (B::BITS - extra));
            }
            _ => self.blocks.push(block),
        }
        self.num_bits += B::BITS;
    }

    /// Appends a sequence of blocks at the most significant end.
    pub fn append_blocks<I: IntoIterator<Item = B>>(&mut self, blocks: I) {
        if bit_index::<B>(self.num_bits) == 0 {
            let before = self.blocks.len();
            self.blocks.extend(blocks);
            self.num_bits += (self.blocks.len() - before) * B::BITS;
        } else {
            for block in blocks {
                self.append_block(block);
            }
        }
    }

    /// Appends a sequence of blocks, either completely or not at all.
    ///
    /// The blocks are staged in a temporary buffer and the storage is
    /// reserved before the vector is touched.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::Alloc`] and leaves the vector unchanged if the
    /// allocator cannot provide the storage.
    pub fn try_append_blocks<I: IntoIterator<Item = B>>(
        &mut self,
        blocks: I,
    ) -> Result<(), BitsetError> {
        let iter = blocks.into_iter();
        let mut staged = Vec::new();
        staged.try_reserve(iter.size_hint().0)?;
        for block in iter {
            if staged.len() == staged.capacity() {
                staged.try_reserve(1)?;
            }
            staged.push(block);
        }

        self.blocks.try_reserve(staged.len())?;
        self.append_blocks(staged);
        Ok(())
    }

    /// Exchanges the contents of two bit vectors.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves the contents out, leaving `self` empty.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    // ========================================================================
    // Single Bit Access
    // ========================================================================

    #[inline(always)]
    pub(crate) fn unchecked_test(&self, pos: usize) -> bool {
        let (idx, _) = bitpos::<B>(pos);
        self.blocks[idx] & bit_mask::<B>(pos) != B::ZERO
    }

    #[inline(always)]
    #[track_caller]
    fn check_pos(&self, pos: usize) {
        assert!(
            pos < self.num_bits,
            "bit position {pos} is out of bounds for size {}",
            self.num_bits
        );
    }

    /// Returns the bit at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len()`.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn test(&self, pos: usize) -> bool {
        self.check_pos(pos);
        self.unchecked_test(pos)
    }

    /// Returns the bit at `pos`, or [`None`] if `pos >= len()`.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: usize) -> Option<bool> {
        (pos < self.num_bits).then(|| self.unchecked_test(pos))
    }

    /// Sets the bit at `pos` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len()`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, pos: usize, value: bool) -> &mut Self {
        self.check_pos(pos);
        let (idx, _) = bitpos::<B>(pos);
        let mask = bit_mask::<B>(pos);
        if value {
            self.blocks[idx] |= mask;
        } else {
            self.blocks[idx] &= !mask;
        }
        self
    }

    /// Clears the bit at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len()`.
    #[inline]
    #[track_caller]
    pub fn reset(&mut self, pos: usize) -> &mut Self {
        self.set(pos, false)
    }

    /// Inverts the bit at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len()`.
    #[inline]
    #[track_caller]
    pub fn flip(&mut self, pos: usize) -> &mut Self {
        self.check_pos(pos);
        self.blocks[block_index::<B>(pos)] ^= bit_mask::<B>(pos);
        self
    }

    /// Sets the bit at `pos` to `value` and returns its previous value.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let mut bits = DynamicBitset::<u16>::with_len(20);
    /// assert!(!bits.test_set(12, true));
    /// assert!(bits.test_set(12, false));
    /// assert!(!bits.test(12));
    /// ```
    #[track_caller]
    pub fn test_set(&mut self, pos: usize, value: bool) -> bool {
        let prev = self.test(pos);
        if prev != value {
            self.flip(pos);
        }
        prev
    }

    /// Returns a proxy for the bit at `pos` that can read and modify it.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let mut bits = DynamicBitset::<u8>::with_len(4);
    /// let mut bit = bits.bit_mut(2);
    /// bit.set(true);
    /// bit |= false;
    /// assert!(bit.get());
    /// assert_eq!(bits.to_string(), "0100");
    /// ```
    #[track_caller]
    pub fn bit_mut(&mut self, pos: usize) -> BitRef<'_, B> {
        self.check_pos(pos);
        let mask = bit_mask::<B>(pos);
        BitRef::new(&mut self.blocks[block_index::<B>(pos)], mask)
    }

    // ========================================================================
    // Range Operations
    // ========================================================================

    #[inline]
    fn check_range(&self, pos: usize, len: usize) -> Result<(), BitsetError> {
        match pos.checked_add(len) {
            Some(end) if end <= self.num_bits => Ok(()),
            _ => Err(BitsetError::OutOfRange {
                pos,
                len,
                size: self.num_bits,
            }),
        }
    }

    /// Applies an operation to `[pos, pos + len)`.
    ///
    /// `partial` receives a block and the mask of the affected bits; `full`
    /// transforms a block whose bits are all affected. The range must be
    /// inside the vector.
    #[inline(always)]
    fn range_operation(
        &mut self,
        pos: usize,
        len: usize,
        partial: impl Fn(B, B) -> B,
        full: impl Fn(B) -> B,
    ) {
        if len == 0 {
            return;
        }

        let (first_block, first_bit) = bitpos::<B>(pos);
        let (last_block, last_bit) = bitpos::<B>(pos + len - 1);

        if first_block == last_block {
            let mask = bit_mask_range::<B>(first_bit, last_bit);
            self.blocks[first_block] = partial(self.blocks[first_block], mask);
            return;
        }

        // Partial first block
        let mut full_start = first_block;
        if first_bit != 0 {
            let mask = bit_mask_range::<B>(first_bit, B::BITS - 1);
            self.blocks[first_block] = partial(self.blocks[first_block], mask);
            full_start += 1;
        }

        // Partial last block
        let mut full_end = last_block + 1;
        if last_bit != B::BITS - 1 {
            let mask = bit_mask_range::<B>(0, last_bit);
            self.blocks[last_block] = partial(self.blocks[last_block], mask);
            full_end -= 1;
        }

        for block in &mut self.blocks[full_start..full_end] {
            *block = full(*block);
        }
    }

    /// Sets every bit in `[pos, pos + len)` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `pos + len > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let mut bits = DynamicBitset::<u8>::with_len(20);
    /// bits.set_range(5, 12, true);
    /// assert_eq!(bits.count(), 12);
    /// assert_eq!(bits.find_first(), Some(5));
    /// ```
    #[track_caller]
    pub fn set_range(&mut self, pos: usize, len: usize, value: bool) -> &mut Self {
        if let Err(err) = self.try_set_range(pos, len, value) {
            panic!("{err}");
        }
        self
    }

    /// Clears every bit in `[pos, pos + len)`.
    ///
    /// # Panics
    ///
    /// Panics if `pos + len > len()`.
    #[track_caller]
    pub fn reset_range(&mut self, pos: usize, len: usize) -> &mut Self {
        self.set_range(pos, len, false)
    }

    /// Inverts every bit in `[pos, pos + len)`.
    ///
    /// # Panics
    ///
    /// Panics if `pos + len > len()`.
    #[track_caller]
    pub fn flip_range(&mut self, pos: usize, len: usize) -> &mut Self {
        if let Err(err) = self.try_flip_range(pos, len) {
            panic!("{err}");
        }
        self
    }

    /// Sets every bit in `[pos, pos + len)` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] if `pos + len > len()`; the vector
    /// is not modified.
    pub fn try_set_range(&mut self, pos: usize, len: usize, value: bool) -> Result<(), BitsetError> {
        self.check_range(pos, len)?;
        if value {
            self.range_operation(pos, len, |b, m| b | m, |_| B::ONES);
        } else {
            self.range_operation(pos, len, |b, m| b & !m, |_| B::ZERO);
        }
        Ok(())
    }

    /// Clears every bit in `[pos, pos + len)`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] if `pos + len > len()`; the vector
    /// is not modified.
    pub fn try_reset_range(&mut self, pos: usize, len: usize) -> Result<(), BitsetError> {
        self.try_set_range(pos, len, false)
    }

    /// Inverts every bit in `[pos, pos + len)`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] if `pos + len > len()`; the vector
    /// is not modified.
    pub fn try_flip_range(&mut self, pos: usize, len: usize) -> Result<(), BitsetError> {
        self.check_range(pos, len)?;
        self.range_operation(pos, len, |b, m| b ^ m, |b| !b);
        Ok(())
    }

    /// Sets every bit.
    pub fn set_all(&mut self) -> &mut Self {
        self.blocks.fill(B::ONES);
        self.zero_unused_bits();
        self
    }

    /// Clears every bit.
    pub fn reset_all(&mut self) -> &mut Self {
        self.blocks.fill(B::ZERO);
        self
    }

    /// Inverts every bit.
    pub fn flip_all(&mut self) -> &mut Self {
        for block in &mut self.blocks {
            *block = !*block;
        }
        self.zero_unused_bits();
        self
    }

    // ========================================================================
    // Counting
    // ========================================================================

    /// Returns the number of set bits.
    #[must_use]
    pub fn count(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones()).sum()
    }

    /// Returns the number of set bits in `[pos, pos + len)`.
    ///
    /// # Panics
    ///
    /// Panics if `pos + len > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let bits: DynamicBitset<u8> = "1111000011110000".parse().unwrap();
    /// assert_eq!(bits.count_range(2, 8), 4);
    /// assert_eq!(bits.count_range(0, 0), 0);
    /// ```
    #[must_use]
    #[track_caller]
    pub fn count_range(&self, pos: usize, len: usize) -> usize {
        if let Err(err) = self.check_range(pos, len) {
            panic!("{err}");
        }
        if len == 0 {
            return 0;
        }

        let (first_block, first_bit) = bitpos::<B>(pos);
        let (last_block, last_bit) = bitpos::<B>(pos + len - 1);

        if first_block == last_block {
            let mask = bit_mask_range::<B>(first_bit, last_bit);
            return (self.blocks[first_block] & mask).count_ones();
        }

        let head = self.blocks[first_block] & bit_mask_range::<B>(first_bit, B::BITS - 1);
        let tail = self.blocks[last_block] & bit_mask_range::<B>(0, last_bit);
        let middle: usize = self.blocks[first_block + 1..last_block]
            .iter()
            .map(|b| b.count_ones())
            .sum();
        head.count_ones() + middle + tail.count_ones()
    }

    /// Returns `true` if every bit is set. An empty vector returns `true`.
    #[must_use]
    pub fn all(&self) -> bool {
        let Some((last, rest)) = self.blocks.split_last() else {
            return true;
        };
        if rest.iter().any(|&b| b != B::ONES) {
            return false;
        }
        match bit_index::<B>(self.num_bits) {
            0 => *last == B::ONES,
            extra => *last == low_mask::<B>(extra),
        }
    }

    /// Returns `true` if at least one bit is set.
    #[must_use]
    pub fn any(&self) -> bool {
        self.blocks.iter().any(|b| b.any())
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    pub fn none(&self) -> bool {
        !self.any()
    }

    // ========================================================================
    // Bit Scanning
    // ========================================================================

    /// Lowest set bit in the blocks starting at `first_block`.
    #[inline]
    fn find_from_block(&self, first_block: usize) -> Option<usize> {
        let blocks = self.blocks.get(first_block..)?;
        let (offset, block) = blocks.iter().enumerate().find(|(_, b)| b.any())?;
        Some((first_block + offset) * B::BITS + block.trailing_zeros())
    }

    /// Returns the position of the lowest set bit, or [`None`] if no bit is
    /// set.
    ///
    /// Blocks without set bits are skipped with one comparison each.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let mut bits = DynamicBitset::<u8>::with_len(40);
    /// assert_eq!(bits.find_first(), None);
    /// bits.set(33, true);
    /// assert_eq!(bits.find_first(), Some(33));
    /// ```
    #[must_use]
    pub fn find_first(&self) -> Option<usize> {
        self.find_from_block(0)
    }

    /// Returns the lowest set bit at or after `pos`.
    #[must_use]
    pub fn find_first_from(&self, pos: usize) -> Option<usize> {
        if pos >= self.num_bits {
            return None;
        }
        let (idx, bit) = bitpos::<B>(pos);
        let block = self.blocks[idx] & (B::ONES << bit);
        if block.any() {
            return Some(idx * B::BITS + block.trailing_zeros());
        }
        self.find_from_block(idx + 1)
    }

    /// Returns the lowest set bit strictly after `pos`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let bits: DynamicBitset<u8> = "1000100001".parse().unwrap();
    /// assert_eq!(bits.find_next(0), Some(5));
    /// assert_eq!(bits.find_next(5), Some(9));
    /// assert_eq!(bits.find_next(9), None);
    /// ```
    #[must_use]
    pub fn find_next(&self, pos: usize) -> Option<usize> {
        self.find_first_from(pos.checked_add(1)?)
    }

    /// Returns the position of the highest set bit, or [`None`] if no bit is
    /// set.
    #[must_use]
    pub fn find_last(&self) -> Option<usize> {
        let (idx, block) = self.blocks.iter().enumerate().rev().find(|(_, b)| b.any())?;
        Some(idx * B::BITS + (B::BITS - 1 - block.leading_zeros()))
    }

    // ========================================================================
    // Shift Operations
    // ========================================================================

    /// Moves every bit `n` positions towards the most significant end.
    ///
    /// Bits pushed past the end are lost; vacated positions become zero.
    pub(crate) fn shift_up(&mut self, n: usize) {
        if n >= self.num_bits {
            self.reset_all();
            return;
        }
        if n == 0 {
            return;
        }

        let (div, r) = bitpos::<B>(n);
        let last = self.blocks.len() - 1;
        let blocks = &mut self.blocks;

        if r == 0 {
            blocks.copy_within(0..=last - div, div);
        } else {
            let rs = B::BITS - r;
            for i in (1..=last - div).rev() {
                blocks[i + div] = (blocks[i] << r) | (blocks[i - 1] >> rs);
            }
            blocks[div] = blocks[0] << r;
        }
        blocks[..div].fill(B::ZERO);

        self.zero_unused_bits();
    }

    /// Moves every bit `n` positions towards the least significant end.
    ///
    /// Bits pushed below position 0 are lost; vacated positions become zero.
    pub(crate) fn shift_down(&mut self, n: usize) {
        if n >= self.num_bits {
            self.reset_all();
            return;
        }
        if n == 0 {
            return;
        }

        let (div, r) = bitpos::<B>(n);
        let last = self.blocks.len() - 1;
        let blocks = &mut self.blocks;

        if r == 0 {
            blocks.copy_within(div..=last, 0);
        } else {
            let ls = B::BITS - r;
            for i in div..last {
                blocks[i - div] = (blocks[i] >> r) | (blocks[i + 1] << ls);
            }
            blocks[last - div] = blocks[last] >> r;
        }
        blocks[last + 1 - div..].fill(B::ZERO);
    }

    // ========================================================================
    // Invariants
    // ========================================================================

    /// Clears the bits of the last block at and above `len()`.
    #[inline]
    pub(crate) fn zero_unused_bits(&mut self) {
        let extra = bit_index::<B>(self.num_bits);
        if extra != 0
            && let Some(last) = self.blocks.last_mut()
        {
            *last &= low_mask::<B>(extra);
        }
    }

    /// Returns `true` if the storage agrees with the length and every unused
    /// bit is zero.
    #[must_use]
    pub fn check_invariants(&self) -> bool {
        if self.blocks.len() != blocks_for::<B>(self.num_bits) {
            return false;
        }
        let extra = bit_index::<B>(self.num_bits);
        match self.blocks.last() {
            Some(&last) if extra != 0 => last & !low_mask::<B>(extra) == B::ZERO,
            _ => true,
        }
    }
}
