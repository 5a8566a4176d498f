//! Bit addressing within the block buffer, and the streaming bit appender.

use alloc::vec::Vec;

use crate::{BitsetError, DynamicBitset, block::Block};

/// Index of the block holding bit `pos`.
#[inline(always)]
pub fn block_index<B: Block>(pos: usize) -> usize {
    pos / B::BITS
}

/// Position of bit `pos` inside its block.
#[inline(always)]
pub fn bit_index<B: Block>(pos: usize) -> usize {
    pos % B::BITS
}

/// Converts a bit position to (block index, bit position within block).
#[inline(always)]
pub(crate) fn bitpos<B: Block>(pos: usize) -> (usize, usize) {
    (block_index::<B>(pos), bit_index::<B>(pos))
}

/// Single-bit mask selecting bit `pos` inside its block.
#[inline(always)]
pub fn bit_mask<B: Block>(pos: usize) -> B {
    B::ONE << bit_index::<B>(pos)
}

/// Mask with bits `[first, last]` set, both ends inclusive.
///
/// Both positions are bit indices within one block, with `first <= last`.
#[inline(always)]
pub fn bit_mask_range<B: Block>(first: usize, last: usize) -> B {
    debug_assert!(first <= last && last < B::BITS);
    (B::ONES << first) & (B::ONES >> (B::BITS - 1 - last))
}

/// Mask with the low `n` bits set, for `0 < n <= BITS`.
#[inline(always)]
pub(crate) fn low_mask<B: Block>(n: usize) -> B {
    debug_assert!(n > 0 && n <= B::BITS);
    B::ONES >> (B::BITS - n)
}

/// Number of blocks needed to hold `num_bits` bits.
#[inline(always)]
pub fn blocks_for<B: Block>(num_bits: usize) -> usize {
    num_bits.div_ceil(B::BITS)
}

/// Appends bits at the least significant end of a bit vector.
///
/// Prepending to block storage costs a full pass per bit. The appender
/// instead fills a private buffer from the most significant end of each block
/// and realigns it once, in [`finish`](Self::finish). The first bit pushed
/// ends up as the most significant of the new bits, matching the textual
/// form.
///
/// The target is only modified by `finish`. Dropping an unfinished appender
/// leaves the target untouched.
///
/// # Examples
///
/// ```
/// use dyn_bitset::{BitAppender, DynamicBitset};
///
/// let mut bits = DynamicBitset::<u8>::new();
/// let mut appender = BitAppender::new(&mut bits);
/// for c in "1101".chars() {
///     appender.push(c == '1');
/// }
/// assert_eq!(appender.finish(), 4);
/// assert_eq!(bits.to_string(), "1101");
/// ```
pub struct BitAppender<'a, B: Block> {
    target: &'a mut DynamicBitset<B>,
    blocks: Vec<B>,
    count: usize,
    mask: B,
}

impl<'a, B: Block> BitAppender<'a, B> {
    /// Creates an appender writing below the current bits of `target`.
    pub fn new(target: &'a mut DynamicBitset<B>) -> Self {
        Self {
            target,
            blocks: Vec::new(),
            count: 0,
            mask: B::ZERO,
        }
    }

    /// Appends one bit below every bit appended so far.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        if self.mask == B::ZERO {
            self.blocks.push(B::ZERO);
            self.mask = B::ONE << (B::BITS - 1);
        }
        if bit && let Some(current) = self.blocks.last_mut() {
            *current |= self.mask;
        }
        self.mask = self.mask >> 1;
        self.count += 1;
    }

    /// Like [`push`](Self::push), but reports allocation failure.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::Alloc`] if the buffer cannot grow; the bits
    /// pushed so far are kept.
    pub fn try_push(&mut self, bit: bool) -> Result<(), BitsetError> {
        if self.mask == B::ZERO {
            self.blocks.try_reserve(1)?;
        }
        self.push(bit);
        Ok(())
    }

    /// Number of bits appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if no bit was appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Realigns the buffered bits and commits them to the target.
    ///
    /// The buffered bits become positions `[0, n)` of the target and its
    /// previous bits move up by `n`. Returns `n`.
    pub fn finish(self) -> usize {
        let Self {
            target,
            mut blocks,
            count,
            ..
        } = self;

        // The first bit sits at the top of block 0; reversing the blocks
        // moves it to the top of the whole buffer.
        blocks.reverse();
        let num_bits = blocks.len() * B::BITS;
        let mut bits = DynamicBitset {
            blocks,
            num_bits,
        };
        let offset = bit_index::<B>(count);
        if offset != 0 {
            bits >>= B::BITS - offset;
        }
        bits.resize(count, false);

        if !target.is_empty() {
            let total = count + target.len();
            bits.append_blocks(target.as_blocks().iter().copied());
            bits.resize(total, false);
        }
        log::trace!("bit appender committed {count} bits");
        *target = bits;
        count
    }
}
