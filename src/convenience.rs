//! Convenience functions that trade the caller-owned buffer for an owned
//! `String`, plus decoding of the unpadded display form.

use crate::alphabet::PADDING;
use crate::decoding::{decode, decode_bytes};
use crate::encoding::{encode_padded, encode_unpadded};
use crate::errors::DecodeError;
use crate::width::HhcInt;

/// Encodes `value` into a newly allocated padded string.
///
/// ```
/// assert_eq!(k_hhc::to_padded_string(u32::MAX), "1QLCp1");
/// ```
pub fn to_padded_string<T: HhcInt>(value: T) -> String {
    let mut buf = T::Buffer::default();
    encode_padded(value, &mut buf).to_string()
}

/// Encodes `value` into a newly allocated unpadded string. Zero encodes as
/// the empty string.
pub fn to_unpadded_string<T: HhcInt>(value: T) -> String {
    let mut buf = T::Buffer::default();
    encode_unpadded(value, &mut buf).to_string()
}

/// Decodes the unpadded display form, where zero is the empty string.
///
/// Identical to [`decode`] except that `""` decodes to 0 instead of failing,
/// so `decode_display(to_unpadded_string(v)) == Ok(v)` for every `v`.
///
/// ```
/// assert_eq!(k_hhc::decode_display::<u64>(""), Ok(0));
/// assert_eq!(k_hhc::decode_display::<u64>("."), Ok(1));
/// ```
pub fn decode_display<T: HhcInt>(candidate: &str) -> Result<T, DecodeError> {
    if candidate.is_empty() {
        const ZERO: [u8; 1] = [PADDING];
        return decode_bytes(&ZERO);
    }
    decode(candidate)
}
