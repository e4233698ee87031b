/// Number of symbols in the alphabet, and therefore the radix of every encoding.
pub const BASE: usize = 66;

/// The k-hhc alphabet, ordered by digit value.
///
/// Symbols are strictly increasing by code point, so comparing two encodings
/// of equal length byte by byte gives the same answer as comparing the
/// integers they encode.
pub const ALPHABET: &str = "-.0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz~";

const SYMBOLS: &[u8] = ALPHABET.as_bytes();

/// The padding digit (value 0) used to left-fill fixed-width encodings.
pub const PADDING: u8 = SYMBOLS[0];

/// Lowest code point in the alphabet.
pub const MIN_SYMBOL: u8 = SYMBOLS[0];

/// Highest code point in the alphabet.
pub const MAX_SYMBOL: u8 = SYMBOLS[BASE - 1];

const _: () = {
    assert!(SYMBOLS.len() == BASE, "alphabet must contain exactly BASE symbols");
    let mut i = 1;
    while i < BASE {
        assert!(
            SYMBOLS[i - 1] < SYMBOLS[i],
            "alphabet must be strictly increasing by code point"
        );
        i += 1;
    }
};

/// Inverse table entry for bytes outside the alphabet.
const NOT_A_DIGIT: u8 = u8::MAX;

static INVERSE: [u8; 256] = build_inverse();

const fn build_inverse() -> [u8; 256] {
    let mut table = [NOT_A_DIGIT; 256];
    let mut digit = 0;
    while digit < BASE {
        table[SYMBOLS[digit] as usize] = digit as u8;
        digit += 1;
    }
    table
}

/// Returns the alphabet symbol for a digit value.
///
/// # Panics
///
/// Panics if `digit` is not below [`BASE`].
#[inline]
pub const fn char_of(digit: u8) -> u8 {
    SYMBOLS[digit as usize]
}

/// Returns the digit value of an alphabet symbol, or `None` for any other byte.
#[inline]
pub fn digit_of(byte: u8) -> Option<u8> {
    match INVERSE[byte as usize] {
        NOT_A_DIGIT => None,
        digit => Some(digit),
    }
}

/// Returns `true` if `byte` is one of the 66 alphabet symbols.
#[inline]
pub fn is_symbol(byte: u8) -> bool {
    INVERSE[byte as usize] != NOT_A_DIGIT
}

/// Raw inverse lookup. Bytes outside the alphabet yield a value above `BASE`,
/// so only call this on input that has already been validated.
#[inline]
pub(crate) fn digit_of_unchecked(byte: u8) -> u8 {
    INVERSE[byte as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_digit_maps_back() {
        for digit in 0..BASE as u8 {
            assert_eq!(digit_of(char_of(digit)), Some(digit));
        }
    }

    #[test]
    fn test_padding_and_extremes() {
        assert_eq!(PADDING, b'-');
        assert_eq!(MIN_SYMBOL, b'-');
        assert_eq!(MAX_SYMBOL, b'~');
        assert_eq!(char_of(1), b'.');
        assert_eq!(char_of(65), b'~');
    }

    #[test]
    fn test_gap_bytes_are_not_symbols() {
        // Inside the [MIN_SYMBOL, MAX_SYMBOL] span but not assigned a digit
        for byte in b"/:;<=>?@[\\]^`{|}" {
            assert!(!is_symbol(*byte), "{:?} should not be a symbol", *byte as char);
            assert_eq!(digit_of(*byte), None);
        }
    }

    #[test]
    fn test_symbol_count() {
        let count = (0..=u8::MAX).filter(|&b| is_symbol(b)).count();
        assert_eq!(count, BASE);
    }

    #[test]
    #[should_panic]
    fn test_char_of_rejects_out_of_range_digit() {
        let _ = char_of(BASE as u8);
    }
}
