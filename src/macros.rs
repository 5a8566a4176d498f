macro_rules! impl_block {
    ($($t:ty),* $(,)?) => {$(
        impl $crate::block::sealed::Sealed for $t {}

        impl $crate::block::Block for $t {
            const BITS: usize = <$t>::BITS as usize;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const ONES: Self = <$t>::MAX;

            #[inline(always)]
            fn count_ones(self) -> usize {
                <$t>::count_ones(self) as usize
            }

            #[inline(always)]
            fn trailing_zeros(self) -> usize {
                <$t>::trailing_zeros(self) as usize
            }

            #[inline(always)]
            fn leading_zeros(self) -> usize {
                <$t>::leading_zeros(self) as usize
            }

            #[inline(always)]
            fn to_u128(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn from_u128_truncated(value: u128) -> Self {
                value as $t
            }
        }
    )*};
}

macro_rules! impl_try_from_bitset {
    ($($t:ty),* $(,)?) => {$(
        impl<B: $crate::Block> TryFrom<&$crate::DynamicBitset<B>> for $t {
            type Error = $crate::BitsetError;

            /// Converts the bit vector to an integer, bit `i` becoming bit `i`.
            ///
            /// # Errors
            ///
            /// Returns [`BitsetError::Overflow`](crate::BitsetError::Overflow)
            /// if a bit at or above the integer's width is set.
            fn try_from(bits: &$crate::DynamicBitset<B>) -> Result<Self, Self::Error> {
                bits.to_u128_checked(<$t>::BITS as usize).map(|v| v as $t)
            }
        }
    )*};
}

pub(crate) use impl_block;
pub(crate) use impl_try_from_bitset;
