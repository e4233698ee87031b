//! Input checks used by the safe decoder.
//!
//! Neither function fails: [`validate`] reports a length (0 for invalid input)
//! and [`in_bounds`] a boolean. Turning those into errors is the decoder's job.

use crate::alphabet::is_symbol;
use crate::errors::DecodeError;

/// Checks that every byte of `candidate` is an alphabet symbol.
///
/// Returns the number of bytes checked, or 0 if the input is empty or holds
/// any other byte. Stops at the first rejected byte.
///
/// ```
/// assert_eq!(k_hhc::validate(b"A0.-~_"), 6);
/// assert_eq!(k_hhc::validate(b"A0.-~_!"), 0);
/// assert_eq!(k_hhc::validate(b""), 0);
/// ```
pub fn validate(candidate: &[u8]) -> usize {
    scan(candidate).unwrap_or(0)
}

/// Like [`validate`], but reports why the input was rejected.
pub(crate) fn scan(candidate: &[u8]) -> Result<usize, DecodeError> {
    if candidate.is_empty() {
        return Err(DecodeError::Empty);
    }
    match candidate.iter().position(|&b| !is_symbol(b)) {
        Some(position) => Err(DecodeError::InvalidCharacter {
            byte: candidate[position],
            position,
        }),
        None => Ok(candidate.len()),
    }
}

/// Lexicographically compares `candidate` against `max`.
///
/// Scans while bytes of `max` remain: a smaller byte in `candidate` means in
/// range, a larger one means out of range, equal bytes advance both. Running
/// out of `candidate` first, or matching all of `max`, counts as in range.
///
/// The answer is only numeric when both inputs have the same length. Pad the
/// candidate to the width's encoded length before comparing.
///
/// ```
/// assert!(k_hhc::in_bounds(b"1QLCp1", b"1QLCp1"));
/// assert!(!k_hhc::in_bounds(b"1QLCp2", b"1QLCp1"));
/// ```
pub fn in_bounds(candidate: &[u8], max: &[u8]) -> bool {
    for (i, &limit) in max.iter().enumerate() {
        let Some(&byte) = candidate.get(i) else {
            return true;
        };
        if byte < limit {
            return true;
        }
        if byte > limit {
            return false;
        }
    }
    true
}
