//! Conversions between bit vectors and integers, strings, block ranges and
//! byte streams.

use crate::{
    BitsetError, DynamicBitset, ParseBitsetError,
    block::Block,
    macros::impl_try_from_bitset,
    storage::{bit_index, blocks_for},
};

impl<B: Block> DynamicBitset<B> {
    /// Creates a bit vector of `num_bits` bits holding the low bits of
    /// `value`.
    ///
    /// Bit `i` of the result is bit `i` of `value`; bits of `value` at or
    /// above `num_bits` are dropped and positions at or above 64 are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let bits = DynamicBitset::<u8>::with_value(4, 13);
    /// assert_eq!(bits.to_string(), "1101");
    ///
    /// let truncated = DynamicBitset::<u8>::with_value(3, 13);
    /// assert_eq!(truncated.to_string(), "101");
    /// ```
    #[must_use]
    pub fn with_value(num_bits: usize, value: u64) -> Self {
        let mut bits = Self::with_len(num_bits);
        let mut rest = u128::from(value);
        if num_bits < 64 {
            rest &= (1u128 << num_bits) - 1;
        }
        for block in &mut bits.blocks {
            if rest == 0 {
                break;
            }
            *block = B::from_u128_truncated(rest);
            rest = rest.checked_shr(B::BITS as u32).unwrap_or(0);
        }
        bits
    }

    /// Parses `s[pos..pos + n]`, clamped to the end of `s`, as a string of
    /// `'0'` and `'1'` characters.
    ///
    /// The last character of the substring becomes bit 0. With `num_bits`
    /// given, the result has exactly that length: a longer substring is cut to
    /// its first `num_bits` characters and a shorter one leaves the high bits
    /// zero. Without it, the length is the substring length.
    ///
    /// # Errors
    ///
    /// - [`ParseBitsetError::StartOutOfRange`] if `pos > s.len()`.
    /// - [`ParseBitsetError::InvalidChar`] if a character of the consumed
    ///   substring is neither `'0'` nor `'1'`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let bits = DynamicBitset::<u8>::from_str_range("xx0110yy", 2, 4, None).unwrap();
    /// assert_eq!(bits.to_string(), "0110");
    ///
    /// let wide = DynamicBitset::<u8>::from_str_range("11", 0, usize::MAX, Some(6)).unwrap();
    /// assert_eq!(wide.to_string(), "000011");
    ///
    /// let cut = DynamicBitset::<u8>::from_str_range("1100", 0, usize::MAX, Some(2)).unwrap();
    /// assert_eq!(cut.to_string(), "11");
    /// ```
    pub fn from_str_range(
        s: &str,
        pos: usize,
        n: usize,
        num_bits: Option<usize>,
    ) -> Result<Self, ParseBitsetError> {
        let bytes = s.as_bytes();
        if pos > bytes.len() {
            return Err(ParseBitsetError::StartOutOfRange {
                pos,
                len: bytes.len(),
            });
        }

        let available = n.min(bytes.len() - pos);
        let size = num_bits.unwrap_or(available);
        let used = size.min(available);

        let mut bits = Self::with_len(size);
        for (offset, &byte) in bytes[pos..pos + used].iter().enumerate() {
            match byte {
                b'0' => {}
                b'1' => {
                    bits.set(used - 1 - offset, true);
                }
                _ => {
                    let at = pos + offset;
                    return Err(ParseBitsetError::InvalidChar {
                        ch: s
                            .get(at..)
                            .and_then(|rest| rest.chars().next())
                            .unwrap_or(char::REPLACEMENT_CHARACTER),
                        pos: at,
                    });
                }
            }
        }
        Ok(bits)
    }

    /// Converts to an integer of `target_bits` bits (at most 128), bit `i`
    /// becoming bit `i`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::Overflow`] if a bit at or above `target_bits`
    /// is set. Zero bits above the width are allowed.
    pub(crate) fn to_u128_checked(&self, target_bits: usize) -> Result<u128, BitsetError> {
        debug_assert!(target_bits <= 128);
        if let Some(highest_set) = self.find_last()
            && highest_set >= target_bits
        {
            return Err(BitsetError::Overflow {
                target_bits,
                highest_set,
            });
        }

        let mut value = 0u128;
        for (i, block) in self.blocks.iter().enumerate() {
            let shift = i * B::BITS;
            if shift >= 128 {
                break;
            }
            value |= block.to_u128() << shift;
        }
        Ok(value)
    }

    /// Converts to a `u64`, bit `i` becoming bit `i`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::Overflow`] if a bit at position 64 or higher is
    /// set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::{BitsetError, DynamicBitset};
    /// let bits: DynamicBitset<u16> = "1101".parse().unwrap();
    /// assert_eq!(bits.to_u64(), Ok(13));
    ///
    /// let mut wide = DynamicBitset::<u16>::with_len(80);
    /// wide.set(70, true);
    /// assert!(matches!(wide.to_u64(), Err(BitsetError::Overflow { .. })));
    /// ```
    pub fn to_u64(&self) -> Result<u64, BitsetError> {
        u64::try_from(self)
    }

    /// Replaces the contents with bits read from a stream.
    ///
    /// Leading ASCII whitespace is skipped, then up to `max_len` characters
    /// `'0'`/`'1'` are consumed. The first character read becomes the most
    /// significant bit. Reading stops before the first other byte, which is
    /// left in the stream.
    ///
    /// # Errors
    ///
    /// Returns an [`io::ErrorKind::InvalidData`](std::io::ErrorKind) error if
    /// no digit could be read, leaving the vector empty. I/O errors from the
    /// reader are passed through; the bits read before the error are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynamicBitset;
    /// let mut input = "  1101 rest".as_bytes();
    /// let mut bits = DynamicBitset::<u8>::new();
    /// bits.read_from(&mut input, usize::MAX).unwrap();
    /// assert_eq!(bits.to_string(), "1101");
    /// assert_eq!(input, b" rest");
    /// ```
    #[cfg(feature = "std")]
    pub fn read_from<R: std::io::BufRead>(
        &mut self,
        reader: &mut R,
        max_len: usize,
    ) -> std::io::Result<usize> {
        use crate::storage::BitAppender;
        use std::io;

        self.clear();

        // Skip whitespace
        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if buf.is_empty() {
                break;
            }
            let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            let done = skip < buf.len();
            reader.consume(skip);
            if done {
                break;
            }
        }

        let mut appender = BitAppender::new(self);
        let mut result = Ok(());
        while appender.len() < max_len {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    result = Err(err);
                    break;
                }
            };
            if buf.is_empty() {
                break;
            }

            let room = max_len - appender.len();
            let digits = buf
                .iter()
                .take(room)
                .take_while(|&&b| b == b'0' || b == b'1')
                .count();
            for &byte in &buf[..digits] {
                appender.push(byte == b'1');
            }
            let stop = digits < buf.len();
            reader.consume(digits);
            if stop {
                break;
            }
        }
        let count = appender.finish();

        result?;
        if count == 0 && max_len > 0 {
            log::debug!("no binary digit found in input stream");
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "expected a binary digit",
            ));
        }
        Ok(count)
    }
}

/// Copies the blocks of `bits` into the front of `out`, least significant
/// block first.
///
/// Elements of `out` past the vector's blocks are left untouched.
///
/// # Errors
///
/// Returns [`BitsetError::BlockRangeTooShort`] if `out` is shorter than
/// [`num_blocks`](DynamicBitset::num_blocks); `out` is not modified.
///
/// # Examples
///
/// ```
/// use dyn_bitset::{DynamicBitset, to_block_range};
///
/// let bits: DynamicBitset<u8> = "1000000011".parse().unwrap();
/// let mut out = [0xaa; 3];
/// to_block_range(&bits, &mut out).unwrap();
/// assert_eq!(out, [0b11, 0b10, 0xaa]);
/// ```
pub fn to_block_range<B: Block>(bits: &DynamicBitset<B>, out: &mut [B]) -> Result<(), BitsetError> {
    let needed = bits.num_blocks();
    let Some(dest) = out.get_mut(..needed) else {
        return Err(BitsetError::BlockRangeTooShort {
            needed,
            available: out.len(),
        });
    };
    dest.copy_from_slice(bits.as_blocks());
    Ok(())
}

/// Overwrites the blocks of `bits` from `blocks`, least significant block
/// first, without changing its length.
///
/// Surplus input blocks are ignored; blocks not covered by the input become
/// zero. Bits of the input that land above `len()` are discarded.
///
/// # Examples
///
/// ```
/// use dyn_bitset::{DynamicBitset, from_block_range};
///
/// let mut bits = DynamicBitset::<u8>::with_len(12);
/// from_block_range(&[0xff, 0xff, 0xff], &mut bits);
/// assert_eq!(bits.count(), 12);
/// ```
pub fn from_block_range<B: Block>(blocks: &[B], bits: &mut DynamicBitset<B>) {
    debug_assert_eq!(bits.blocks.len(), blocks_for::<B>(bits.num_bits));
    let copied = blocks.len().min(bits.blocks.len());
    bits.blocks[..copied].copy_from_slice(&blocks[..copied]);
    bits.blocks[copied..].fill(B::ZERO);
    if bit_index::<B>(bits.num_bits) != 0 {
        bits.zero_unused_bits();
    }
}

impl_try_from_bitset!(u8, u16, u32, u64, u128, usize);
