//! Error types reported by [`DynamicBitset`](crate::DynamicBitset).

use alloc::collections::TryReserveError;

use thiserror::Error;

/// Errors returned by the fallible operations of a bit vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitsetError {
    /// A position or a `[pos, pos + len)` range lies outside the vector.
    #[error("range starting at {pos} with length {len} is out of bounds for size {size}")]
    OutOfRange {
        /// First position of the offending range.
        pos: usize,
        /// Length of the offending range.
        len: usize,
        /// Size of the vector (or string) that was addressed.
        size: usize,
    },

    /// A numeric conversion found a set bit the target cannot represent.
    #[error("bit {highest_set} is set but the target integer has only {target_bits} bits")]
    Overflow {
        /// Width of the target integer in bits.
        target_bits: usize,
        /// Position of the highest set bit.
        highest_set: usize,
    },

    /// The destination of a block copy cannot hold every block.
    #[error("block range holds {available} blocks but {needed} are required")]
    BlockRangeTooShort {
        /// Number of blocks of the vector.
        needed: usize,
        /// Length of the destination.
        available: usize,
    },

    /// The allocator could not provide the requested storage.
    #[error("failed to allocate block storage")]
    Alloc(#[from] TryReserveError),
}

/// Errors that can occur when parsing a string of `'0'` and `'1'` characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBitsetError {
    /// A character other than `'0'` or `'1'` was found.
    #[error("invalid character '{ch}' at position {pos} in binary string")]
    InvalidChar {
        /// The invalid character.
        ch: char,
        /// Byte offset of the character in the input.
        pos: usize,
    },

    /// The requested substring starts past the end of the input.
    #[error("substring start {pos} is past the end of a string of length {len}")]
    StartOutOfRange {
        /// Requested start offset.
        pos: usize,
        /// Length of the input string.
        len: usize,
    },
}
