//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use k_hhc::prelude::*;
//!
//! let encoded = to_padded_string(1000u32);
//! assert_eq!(decode::<u32>(&encoded), Ok(1000));
//! ```

pub use crate::{
    // Errors
    DecodeError,
    ErrorKind,
    // Widths
    HhcInt,
    // Core encoding/decoding
    decode,
    decode_display,
    encode_padded,
    encode_unpadded,
    // Owned output
    to_padded_string,
    to_unpadded_string,
};
