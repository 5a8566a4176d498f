//! Trait implementations for `DynamicBitset`.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, Not, Shl,
        ShlAssign, Shr, ShrAssign, Sub, SubAssign,
    },
    str::FromStr,
};

use crate::{DynamicBitset, ParseBitsetError, block::Block};

impl<B: Block> Default for DynamicBitset<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Block> Clone for DynamicBitset<B> {
    fn clone(&self) -> Self {
        Self {
            blocks: self.blocks.clone(),
            num_bits: self.num_bits,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.blocks.clone_from(&source.blocks);
        self.num_bits = source.num_bits;
    }
}

impl<B: Block> AsRef<[B]> for DynamicBitset<B> {
    fn as_ref(&self) -> &[B] {
        self.as_blocks()
    }
}

impl<B: Block> fmt::Display for DynamicBitset<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter().rev() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl<B: Block> fmt::Binary for DynamicBitset<B> {
    /// Formats every bit, the highest position first.
    ///
    /// Unlike integer formatting, leading zeros are kept: the output always
    /// has [`len`](DynamicBitset::len) digits. The alternate flag adds a `0b`
    /// prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_bitset::DynamicBitset;
    /// let bits = DynamicBitset::<u8>::with_value(6, 5);
    /// assert_eq!(format!("{bits:b}"), "000101");
    /// assert_eq!(format!("{bits:#b}"), "0b000101");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        fmt::Display::fmt(self, f)
    }
}

impl<B: Block> fmt::Debug for DynamicBitset<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicBitset")
            .field("len", &self.num_bits)
            .field("bits", &format_args!("{self}"))
            .finish()
    }
}

impl<B: Block> FromStr for DynamicBitset<B> {
    type Err = ParseBitsetError;

    /// Parses a string of `'0'` and `'1'` characters, the last character
    /// becoming bit 0.
    ///
    /// The length of the result is the length of the string; an empty string
    /// gives an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBitsetError::InvalidChar`] for any other character.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_bitset::DynamicBitset;
    ///
    /// let bits: DynamicBitset = "0101".parse()?;
    /// assert!(bits.test(0));
    /// assert!(!bits.test(1));
    /// assert!(bits.test(2));
    /// assert_eq!(bits.len(), 4);
    ///
    /// # Ok::<(), dyn_bitset::ParseBitsetError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_range(s, 0, usize::MAX, None)
    }
}

impl<B: Block> PartialEq for DynamicBitset<B> {
    fn eq(&self, other: &Self) -> bool {
        self.num_bits == other.num_bits && self.blocks == other.blocks
    }
}

impl<B: Block> Eq for DynamicBitset<B> {}

impl<B: Block> PartialOrd for DynamicBitset<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: Block> Ord for DynamicBitset<B> {
    /// Compares the textual forms lexicographically.
    ///
    /// Vectors of equal length compare as unsigned numbers. Otherwise the
    /// bits are compared from each vector's highest position down, and if the
    /// shorter one runs out first it is the lesser.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_bitset::DynamicBitset;
    /// let a: DynamicBitset<u8> = "0110".parse().unwrap();
    /// let b: DynamicBitset<u8> = "1000".parse().unwrap();
    /// let c: DynamicBitset<u8> = "011".parse().unwrap();
    /// assert!(a < b);
    /// assert!(c < a);
    /// ```
    fn cmp(&self, other: &Self) -> Ordering {
        if self.num_bits == other.num_bits {
            self.blocks.iter().rev().cmp(other.blocks.iter().rev())
        } else {
            self.iter().rev().cmp(other.iter().rev())
        }
    }
}

impl<B: Block> Hash for DynamicBitset<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.num_bits.hash(state);
        self.blocks.hash(state);
    }
}

impl<B: Block> Index<usize> for DynamicBitset<B> {
    type Output = bool;

    /// # Panics
    ///
    /// Panics if `pos >= len()`.
    #[track_caller]
    fn index(&self, pos: usize) -> &bool {
        if self.test(pos) { &true } else { &false }
    }
}

// ============================================================================
// Bitwise Operator Implementations
// ============================================================================

macro_rules! impl_binary_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $method:ident) => {
        impl<B: Block> $Op for DynamicBitset<B> {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn $op(mut self, rhs: Self) -> Self::Output {
                self.$method(&rhs);
                self
            }
        }

        impl<B: Block> $Op<&DynamicBitset<B>> for DynamicBitset<B> {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn $op(mut self, rhs: &Self) -> Self::Output {
                self.$method(rhs);
                self
            }
        }

        impl<B: Block> $Op for &DynamicBitset<B> {
            type Output = DynamicBitset<B>;

            #[inline]
            #[track_caller]
            fn $op(self, rhs: Self) -> Self::Output {
                let mut result = self.clone();
                result.$method(rhs);
                result
            }
        }

        impl<B: Block> $OpAssign for DynamicBitset<B> {
            #[inline]
            #[track_caller]
            fn $op_assign(&mut self, rhs: Self) {
                self.$method(&rhs);
            }
        }

        impl<B: Block> $OpAssign<&Self> for DynamicBitset<B> {
            #[inline]
            #[track_caller]
            fn $op_assign(&mut self, rhs: &Self) {
                self.$method(rhs);
            }
        }
    };
}

impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, intersection_with);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, union_with);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, symmetric_difference_with);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, difference_with);

impl<B: Block> Not for DynamicBitset<B> {
    type Output = Self;

    /// Returns the vector with every bit inverted.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_bitset::DynamicBitset;
    ///
    /// let a: DynamicBitset<u8> = "0010110".parse().unwrap();
    /// assert_eq!((!a).to_string(), "1101001");
    /// ```
    #[inline]
    fn not(mut self) -> Self::Output {
        self.flip_all();
        self
    }
}

impl<B: Block> Not for &DynamicBitset<B> {
    type Output = DynamicBitset<B>;

    #[inline]
    fn not(self) -> Self::Output {
        self.clone().not()
    }
}

// ============================================================================
// Shift Operator Implementations
// ============================================================================

impl<B: Block> ShlAssign<usize> for DynamicBitset<B> {
    /// Moves every bit `n` positions towards the most significant end.
    ///
    /// The length is unchanged. Bits moved past the end are dropped and
    /// vacated low positions become zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_bitset::DynamicBitset;
    ///
    /// let mut bits: DynamicBitset<u8> = "0000100011".parse().unwrap();
    /// bits <<= 3;
    /// assert_eq!(bits.to_string(), "0100011000");
    /// ```
    #[inline]
    fn shl_assign(&mut self, n: usize) {
        self.shift_up(n);
    }
}

impl<B: Block> ShrAssign<usize> for DynamicBitset<B> {
    /// Moves every bit `n` positions towards the least significant end.
    ///
    /// The length is unchanged. Bits moved below position 0 are dropped and
    /// vacated high positions become zero.
    #[inline]
    fn shr_assign(&mut self, n: usize) {
        self.shift_down(n);
    }
}

impl<B: Block> Shl<usize> for DynamicBitset<B> {
    type Output = Self;

    #[inline]
    fn shl(mut self, n: usize) -> Self::Output {
        self <<= n;
        self
    }
}

impl<B: Block> Shl<usize> for &DynamicBitset<B> {
    type Output = DynamicBitset<B>;

    #[inline]
    fn shl(self, n: usize) -> Self::Output {
        self.clone() << n
    }
}

impl<B: Block> Shr<usize> for DynamicBitset<B> {
    type Output = Self;

    #[inline]
    fn shr(mut self, n: usize) -> Self::Output {
        self >>= n;
        self
    }
}

impl<B: Block> Shr<usize> for &DynamicBitset<B> {
    type Output = DynamicBitset<B>;

    #[inline]
    fn shr(self, n: usize) -> Self::Output {
        self.clone() >> n
    }
}
