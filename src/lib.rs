//! Order-preserving base-66 encoding for `u32` and `u64`.
//!
//! Integers become short strings over a fixed 66-symbol alphabet
//! (`-.0-9A-Z_a-z~`). Padded encodings have a fixed width per integer type
//! (6 digits for `u32`, 11 for `u64`) and sort byte-wise in the same order as
//! the values they encode.
//!
//! ```
//! let mut buf = [0u8; 6];
//! let encoded = k_hhc::encode_padded(424242u32, &mut buf);
//! assert_eq!(encoded, "--.TNv");
//! assert_eq!(k_hhc::decode::<u32>(encoded), Ok(424242));
//!
//! // Unpadded input is accepted as well
//! assert_eq!(k_hhc::decode::<u32>(".TNv"), Ok(424242));
//! ```
//!
//! The codec never allocates and keeps no mutable state, so every function is
//! safe to call from any number of threads.

mod alphabet;
mod convenience;
mod decoding;
mod encoding;
mod errors;
mod fixed_width;
pub mod prelude;
mod validate;
mod width;

pub use alphabet::{ALPHABET, BASE, MAX_SYMBOL, MIN_SYMBOL, PADDING, char_of, digit_of, is_symbol};
pub use convenience::{decode_display, to_padded_string, to_unpadded_string};
pub use decoding::{decode, decode_bytes, decode_unchecked};
pub use encoding::{encode_padded, encode_unpadded, unpad};
pub use errors::{DecodeError, ErrorKind};
pub use fixed_width::{
    decode_32, decode_64, decode_unchecked_32, decode_unchecked_64, encode_padded_32,
    encode_padded_64, encode_unpadded_32, encode_unpadded_64, in_bounds_32, in_bounds_64,
};
pub use validate::{in_bounds, validate};
pub use width::{ENCODED_LENGTH_32, ENCODED_LENGTH_64, HhcInt, MAX_STRING_32, MAX_STRING_64};

#[cfg(test)]
mod tests;
