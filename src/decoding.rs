use crate::alphabet::{PADDING, digit_of_unchecked};
use crate::errors::DecodeError;
use crate::validate::{in_bounds, scan, validate};
use crate::width::HhcInt;

/// Decodes a padded encoding without validating it.
///
/// The caller must guarantee that every byte of `candidate` is an alphabet
/// symbol and that the encoded value fits in `T` (that is, `candidate` does
/// not compare above `T::MAX_STRING`). Anything else yields an unspecified
/// value. The precondition is asserted in debug builds only; use [`decode`]
/// for untrusted input.
///
/// ```
/// assert_eq!(k_hhc::decode_unchecked::<u32>(b"1QLCp1"), u32::MAX);
/// ```
pub fn decode_unchecked<T: HhcInt>(candidate: &T::Buffer) -> T {
    let digits = candidate.as_ref();
    debug_assert_eq!(
        validate(digits),
        T::ENCODED_LENGTH,
        "decode_unchecked called with bytes outside the alphabet"
    );
    debug_assert!(
        in_bounds(digits, T::MAX_STRING.as_bytes()),
        "decode_unchecked called with a value above {}",
        T::MAX_STRING
    );

    let mut output = T::ZERO;
    let mut exponent = T::ONE;
    for &byte in digits.iter().rev() {
        output = output.add_digit(digit_of_unchecked(byte), exponent);
        exponent = exponent.scale();
    }
    output
}

/// Decodes a padded or unpadded encoding into a `T`.
///
/// Input shorter than `T::ENCODED_LENGTH` is treated as left-padded with the
/// padding digit, so `"."` and `"-----."` both decode to 1.
///
/// # Errors
///
/// - [`DecodeError::Empty`] for an empty string
/// - [`DecodeError::InvalidCharacter`] for a byte outside the alphabet
/// - [`DecodeError::TooLong`] for more than `T::ENCODED_LENGTH` digits
/// - [`DecodeError::OutOfRange`] when the value exceeds `T`'s maximum
///
/// ```
/// assert_eq!(k_hhc::decode::<u32>(".TNv"), Ok(424242));
/// assert!(k_hhc::decode::<u32>("1QLCp2").is_err());
/// ```
pub fn decode<T: HhcInt>(candidate: &str) -> Result<T, DecodeError> {
    decode_bytes(candidate.as_bytes())
}

/// Byte-slice form of [`decode`].
pub fn decode_bytes<T: HhcInt>(candidate: &[u8]) -> Result<T, DecodeError> {
    let len = scan(candidate)?;
    if len > T::ENCODED_LENGTH {
        return Err(DecodeError::TooLong {
            len,
            max: T::ENCODED_LENGTH,
        });
    }

    let mut buffer = T::Buffer::default();
    let digits = buffer.as_mut();
    let pad = T::ENCODED_LENGTH - len;
    digits[..pad].fill(PADDING);
    digits[pad..].copy_from_slice(candidate);

    // Compare at full width so byte order matches numeric order
    if !in_bounds(digits, T::MAX_STRING.as_bytes()) {
        return Err(DecodeError::OutOfRange { bits: T::BITS });
    }

    Ok(decode_unchecked::<T>(&buffer))
}
