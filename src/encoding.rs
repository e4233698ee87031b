use crate::alphabet::{PADDING, char_of};
use crate::width::HhcInt;

/// Encodes `value` as a fixed-width string, most significant digit first.
///
/// Every value of `T` fits in `T::ENCODED_LENGTH` digits, so the whole buffer
/// is always written. Smaller values are left-filled with the padding digit.
///
/// # Example
///
/// ```
/// let mut buf = [0u8; 6];
/// assert_eq!(k_hhc::encode_padded(424242u32, &mut buf), "--.TNv");
/// ```
pub fn encode_padded<T: HhcInt>(value: T, buf: &mut T::Buffer) -> &str {
    let out = buf.as_mut();
    let mut rest = value;
    for slot in out.iter_mut().rev() {
        let (quotient, digit) = rest.split_digit();
        *slot = char_of(digit);
        rest = quotient;
    }
    ascii_str(out)
}

/// Encodes `value` without leading padding digits.
///
/// The significant digits are moved to the start of `buf` and returned.
/// Zero has no significant digits and encodes as the empty string, which the
/// safe decoder rejects; use [`crate::decode_display`] to decode this form.
///
/// # Example
///
/// ```
/// let mut buf = [0u8; 11];
/// assert_eq!(k_hhc::encode_unpadded(424242u64, &mut buf), ".TNv");
/// assert_eq!(k_hhc::encode_unpadded(0u64, &mut buf), "");
/// ```
pub fn encode_unpadded<T: HhcInt>(value: T, buf: &mut T::Buffer) -> &str {
    encode_padded(value, buf);
    let out = buf.as_mut();
    let len = unpad(out);
    ascii_str(&out[..len])
}

/// Strips leading padding digits in place.
///
/// Shifts the remaining bytes to the front of `buf`, fills the freed tail
/// with zero bytes and returns the new length.
pub fn unpad(buf: &mut [u8]) -> usize {
    let start = buf
        .iter()
        .position(|&b| b != PADDING)
        .unwrap_or(buf.len());
    if start == 0 {
        return buf.len();
    }
    let len = buf.len() - start;
    buf.copy_within(start.., 0);
    buf[len..].fill(0);
    len
}

fn ascii_str(bytes: &[u8]) -> &str {
    debug_assert!(bytes.is_ascii());
    // SAFETY: callers only pass bytes written by `char_of`, which are ASCII
    unsafe { std::str::from_utf8_unchecked(bytes) }
}
