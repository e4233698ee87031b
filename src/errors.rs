use std::fmt;

/// Broad category of a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: empty, a byte outside the alphabet, or longer than
    /// the target width's encoding.
    InvalidArgument,
    /// Well-formed input whose value does not fit in the target width.
    OutOfRange,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// Errors that can occur during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input string is empty
    #[error("cannot decode empty input")]
    Empty,

    /// The input contains a byte that is not an alphabet symbol
    #[error("invalid character {:?} at position {position}", char::from(*byte))]
    InvalidCharacter { byte: u8, position: usize },

    /// The input has more digits than the target width's padded encoding
    #[error("input is {len} characters, at most {max} allowed")]
    TooLong { len: usize, max: usize },

    /// The input is well formed but encodes a value above the width's maximum
    #[error("value does not fit in {bits} bits")]
    OutOfRange { bits: u32 },
}

impl DecodeError {
    /// Collapses the error into one of the two reported kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Empty
            | DecodeError::InvalidCharacter { .. }
            | DecodeError::TooLong { .. } => ErrorKind::InvalidArgument,
            DecodeError::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}
