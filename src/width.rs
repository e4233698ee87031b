//! Integer widths supported by the codec.
//!
//! Each width fixes the padded encoding length `W` (the smallest digit count
//! such that `66^W` exceeds the width's maximum) and the max string used for
//! range checks during decoding.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::BASE;

/// Padded encoding length for `u32` values.
pub const ENCODED_LENGTH_32: usize = encoded_length(u32::MAX as u64);

/// Padded encoding length for `u64` values.
pub const ENCODED_LENGTH_64: usize = encoded_length(u64::MAX);

/// Padded encoding of `u32::MAX`.
pub const MAX_STRING_32: &str = "1QLCp1";

/// Padded encoding of `u64::MAX`.
pub const MAX_STRING_64: &str = "9lH9ebONzYD";

const _: () = {
    assert!(ENCODED_LENGTH_32 == 6);
    assert!(ENCODED_LENGTH_64 == 11);
    assert!(MAX_STRING_32.len() == ENCODED_LENGTH_32);
    assert!(MAX_STRING_64.len() == ENCODED_LENGTH_64);
};

const fn encoded_length(max: u64) -> usize {
    let mut digits = 0;
    let mut rest = max;
    while rest > 0 {
        rest /= BASE as u64;
        digits += 1;
    }
    digits
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// An unsigned integer type with a k-hhc encoding.
///
/// Implemented for `u32` and `u64` only.
pub trait HhcInt:
    Copy + Eq + Ord + fmt::Debug + fmt::Display + FromStr + sealed::Sealed + 'static
{
    /// Bit width of the integer type.
    const BITS: u32;

    /// Length of a padded encoding.
    const ENCODED_LENGTH: usize;

    /// Padded encoding of the type's maximum value.
    const MAX_STRING: &'static str;

    /// A buffer that holds exactly one padded encoding.
    type Buffer: AsRef<[u8]> + AsMut<[u8]> + Copy + Default + fmt::Debug;

    #[doc(hidden)]
    const ZERO: Self;

    #[doc(hidden)]
    const ONE: Self;

    /// Splits off the least significant base-66 digit: `(self / 66, self % 66)`.
    #[doc(hidden)]
    fn split_digit(self) -> (Self, u8);

    /// `self + digit * exponent`, wrapping on overflow.
    #[doc(hidden)]
    fn add_digit(self, digit: u8, exponent: Self) -> Self;

    /// `self * 66`, wrapping on overflow.
    #[doc(hidden)]
    fn scale(self) -> Self;
}

macro_rules! impl_hhc_int {
    ($ty:ty, $len:expr, $max:expr) => {
        impl HhcInt for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ENCODED_LENGTH: usize = $len;
            const MAX_STRING: &'static str = $max;

            type Buffer = [u8; $len];

            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn split_digit(self) -> (Self, u8) {
                (self / BASE as $ty, (self % BASE as $ty) as u8)
            }

            #[inline]
            fn add_digit(self, digit: u8, exponent: Self) -> Self {
                self.wrapping_add(<$ty>::from(digit).wrapping_mul(exponent))
            }

            #[inline]
            fn scale(self) -> Self {
                self.wrapping_mul(BASE as $ty)
            }
        }
    };
}

impl_hhc_int!(u32, ENCODED_LENGTH_32, MAX_STRING_32);
impl_hhc_int!(u64, ENCODED_LENGTH_64, MAX_STRING_64);
