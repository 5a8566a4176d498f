//! Serde implementations for `DynamicBitset`.
//!
//! The default representation is the pair `(len, blocks)`, with the blocks
//! least significant first. The [`bit_string`] module offers the textual form
//! instead, for use with `#[serde(with = "...")]`.

use core::{fmt, marker::PhantomData};

use alloc::vec::Vec;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
};

use crate::{DynamicBitset, block::Block, storage::blocks_for};

impl<B: Block + Serialize> Serialize for DynamicBitset<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.num_bits)?;
        tuple.serialize_element(self.as_blocks())?;
        tuple.end()
    }
}

impl<'de, B: Block + Deserialize<'de>> Deserialize<'de> for DynamicBitset<B> {
    /// Deserializes the `(len, blocks)` pair.
    ///
    /// # Errors
    ///
    /// Fails if the block count does not match the length, or if a bit at or
    /// above the length is set.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BitsetVisitor<B>(PhantomData<B>);

        impl<'de, B: Block + Deserialize<'de>> Visitor<'de> for BitsetVisitor<B> {
            type Value = DynamicBitset<B>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a bit count followed by a sequence of blocks")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let num_bits: usize = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let blocks: Vec<B> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;

                let expected = blocks_for::<B>(num_bits);
                if blocks.len() != expected {
                    return Err(de::Error::invalid_length(
                        blocks.len(),
                        &"one block per started group of bits",
                    ));
                }

                let bits = DynamicBitset { blocks, num_bits };
                if !bits.check_invariants() {
                    return Err(de::Error::invalid_value(
                        de::Unexpected::Other("set bit past the end"),
                        &"a last block with clear unused bits",
                    ));
                }
                Ok(bits)
            }
        }

        deserializer.deserialize_tuple(2, BitsetVisitor(PhantomData))
    }
}

/// Serialize and deserialize a [`DynamicBitset`] as its string of `'0'` and
/// `'1'` characters, highest position first.
pub mod bit_string {
    use super::*;

    /// Serialize the bit vector as a binary string.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails to write the string.
    pub fn serialize<B, S>(b: &DynamicBitset<B>, serializer: S) -> Result<S::Ok, S::Error>
    where
        B: Block,
        S: Serializer,
    {
        serializer.collect_str(b)
    }

    /// Deserialize a bit vector from a binary string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string contains a character other than `'0'`
    /// or `'1'`.
    pub fn deserialize<'de, B, D>(deserializer: D) -> Result<DynamicBitset<B>, D::Error>
    where
        B: Block,
        D: Deserializer<'de>,
    {
        struct BitStringVisitor<B>(PhantomData<B>);

        impl<B: Block> Visitor<'_> for BitStringVisitor<B> {
            type Value = DynamicBitset<B>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string of binary digits")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(BitStringVisitor(PhantomData))
    }
}
