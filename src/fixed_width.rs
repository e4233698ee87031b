//! Width-specific entry points.
//!
//! Thin non-generic wrappers over the generic codec, for callers that work
//! with a single width and prefer plain function names.

use crate::decoding::{decode, decode_unchecked};
use crate::encoding::{encode_padded, encode_unpadded};
use crate::errors::DecodeError;
use crate::validate::in_bounds;
use crate::width::{ENCODED_LENGTH_32, ENCODED_LENGTH_64, MAX_STRING_32, MAX_STRING_64};

pub fn encode_padded_32(value: u32, buf: &mut [u8; ENCODED_LENGTH_32]) -> &str {
    encode_padded(value, buf)
}

pub fn encode_padded_64(value: u64, buf: &mut [u8; ENCODED_LENGTH_64]) -> &str {
    encode_padded(value, buf)
}

pub fn encode_unpadded_32(value: u32, buf: &mut [u8; ENCODED_LENGTH_32]) -> &str {
    encode_unpadded(value, buf)
}

pub fn encode_unpadded_64(value: u64, buf: &mut [u8; ENCODED_LENGTH_64]) -> &str {
    encode_unpadded(value, buf)
}

pub fn decode_32(candidate: &str) -> Result<u32, DecodeError> {
    decode(candidate)
}

pub fn decode_64(candidate: &str) -> Result<u64, DecodeError> {
    decode(candidate)
}

/// See [`decode_unchecked`] for the caller contract.
pub fn decode_unchecked_32(candidate: &[u8; ENCODED_LENGTH_32]) -> u32 {
    decode_unchecked::<u32>(candidate)
}

/// See [`decode_unchecked`] for the caller contract.
pub fn decode_unchecked_64(candidate: &[u8; ENCODED_LENGTH_64]) -> u64 {
    decode_unchecked::<u64>(candidate)
}

/// [`in_bounds`] against the padded encoding of `u32::MAX`.
pub fn in_bounds_32(candidate: &[u8]) -> bool {
    in_bounds(candidate, MAX_STRING_32.as_bytes())
}

/// [`in_bounds`] against the padded encoding of `u64::MAX`.
pub fn in_bounds_64(candidate: &[u8]) -> bool {
    in_bounds(candidate, MAX_STRING_64.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrappers_agree_with_generic_api() {
        let mut buf32 = [0u8; ENCODED_LENGTH_32];
        let mut buf64 = [0u8; ENCODED_LENGTH_64];

        assert_eq!(encode_padded_32(424242, &mut buf32), "--.TNv");
        assert_eq!(decode_unchecked_32(&buf32), 424242);
        assert_eq!(encode_unpadded_32(424242, &mut buf32), ".TNv");

        assert_eq!(encode_padded_64(9_876_543_210, &mut buf64), "-----5tVfK4");
        assert_eq!(decode_unchecked_64(&buf64), 9_876_543_210);
        assert_eq!(encode_unpadded_64(9_876_543_210, &mut buf64), "5tVfK4");

        assert_eq!(decode_32(".TNv"), Ok(424242));
        assert_eq!(decode_64("5tVfK4"), Ok(9_876_543_210));
    }

    #[test]
    fn test_bounds_wrappers() {
        assert!(in_bounds_32(b"1QLCp1"));
        assert!(!in_bounds_32(b"1QLCp2"));
        assert!(in_bounds_64(b"9lH9ebONzYD"));
        assert!(!in_bounds_64(b"9lH9ebONzYE"));
    }
}
