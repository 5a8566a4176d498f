//! A resizable bit vector stored as packed unsigned blocks.
//!
//! This crate provides [`DynamicBitset`], a sequence of bits whose length is
//! chosen at run time and can change afterwards. Bits live in a contiguous
//! buffer of blocks of a caller-chosen unsigned type ([`Block`]); bit `i` is
//! bit `i % BITS` of block `i / BITS`.
//!
//! # Features
//!
//! - **Resizing** with a fill value, plus `push_back`/`pop_back` and whole
//!   block appends
//! - **Range operations** (set, reset, flip, count) that handle partial edge
//!   blocks and then work a block at a time
//! - **Scanning** for set bits with whole-block skipping
//! - **Set algebra** (union, intersection, difference, symmetric difference,
//!   subset tests) and the matching operators
//! - **Shifts** that keep the length fixed
//! - **Conversions** to and from integers, binary strings, block ranges and
//!   byte streams
//! - **Serialization support** via serde (optional)
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use dyn_bitset::DynamicBitset;
//!
//! // Parse the textual form: the last character is bit 0.
//! let bits: DynamicBitset<u8> = "1101".parse()?;
//! assert_eq!(bits, DynamicBitset::with_value(4, 13));
//!
//! // Range operations and scanning
//! let mut bits = DynamicBitset::<u64>::with_len(10);
//! bits.set_all();
//! bits.reset_range(3, 4);
//! assert_eq!(bits.count(), 6);
//! assert_eq!(bits.find_next(2), Some(7));
//!
//! // Shifts never change the length
//! let mut bits: DynamicBitset<u16> = "0011".parse()?;
//! bits <<= 1;
//! assert_eq!(bits.to_string(), "0110");
//! # Ok::<(), dyn_bitset::ParseBitsetError>(())
//! ```
//!
//! # Invariant
//!
//! Bits of the last block at or above [`len`](DynamicBitset::len) are always
//! zero. Counting, scanning, comparison and hashing rely on it, and every
//! mutating operation restores it before returning.
//!
//! # Errors
//!
//! Indexing past the end panics, like slice indexing. Checked forms return
//! [`Option`] or [`BitsetError`]; parsing reports [`ParseBitsetError`].

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod bitset;
mod block;
mod convert;
mod error;
mod iter;
mod macros;
mod reference;
mod set_ops;
pub mod storage;
mod traits;

#[cfg(feature = "serde")]
pub mod serde;

// Re-exports
pub use bitset::DynamicBitset;
pub use block::Block;
pub use convert::{from_block_range, to_block_range};
pub use error::{BitsetError, ParseBitsetError};
pub use iter::{Iter, Ones};
pub use reference::BitRef;
pub use storage::BitAppender;
