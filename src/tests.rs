use crate::{
    DecodeError, ENCODED_LENGTH_32, ENCODED_LENGTH_64, ErrorKind, HhcInt, MAX_STRING_32,
    MAX_STRING_64, decode, decode_display, decode_unchecked, encode_padded, encode_unpadded,
    in_bounds, to_padded_string, validate,
};

fn roundtrip_padded<T: HhcInt>(value: T) -> T {
    let mut buf = T::Buffer::default();
    let encoded = encode_padded(value, &mut buf);
    assert_eq!(encoded.len(), T::ENCODED_LENGTH);
    decode::<T>(encoded).unwrap()
}

#[test]
fn test_scenarios_from_the_wire_format() {
    let mut buf32 = [0u8; ENCODED_LENGTH_32];
    let mut buf64 = [0u8; ENCODED_LENGTH_64];

    assert_eq!(encode_padded(0u32, &mut buf32), "------");
    assert_eq!(encode_padded(4_294_967_295u32, &mut buf32), "1QLCp1");
    assert_eq!(encode_padded(18_446_744_073_709_551_615u64, &mut buf64), "9lH9ebONzYD");

    assert_eq!(decode::<u32>("------"), Ok(0));
    assert_eq!(decode::<u32>("."), Ok(1));
    assert_eq!(decode::<u32>("-"), Ok(0));

    assert_eq!(encode_unpadded(0u32, &mut buf32), "");
    assert_eq!(encode_unpadded(1u32, &mut buf32), ".");
}

#[test]
fn test_max_strings_are_encodings_of_max() {
    assert_eq!(to_padded_string(u32::MAX), MAX_STRING_32);
    assert_eq!(to_padded_string(u64::MAX), MAX_STRING_64);
    assert_eq!(decode::<u32>(MAX_STRING_32), Ok(u32::MAX));
    assert_eq!(decode::<u64>(MAX_STRING_64), Ok(u64::MAX));
}

#[test]
fn test_roundtrip_32_first_million() {
    let mut buf = [0u8; ENCODED_LENGTH_32];
    for value in 0..1_000_000u32 {
        encode_padded(value, &mut buf);
        assert_eq!(decode_unchecked::<u32>(&buf), value);
    }
}

#[test]
fn test_roundtrip_32_boundaries() {
    for value in [0, 1, 65, 66, 67, 66 * 66, u32::MAX / 2, u32::MAX - 1, u32::MAX] {
        assert_eq!(roundtrip_padded(value), value);
    }
}

#[test]
fn test_roundtrip_64_boundaries() {
    let mut values = vec![0u64, 1, u32::MAX as u64, u32::MAX as u64 + 1, u64::MAX - 1, u64::MAX];
    // Powers of the base and their neighbours exercise every digit position
    let mut power = 1u64;
    while let Some(next) = power.checked_mul(66) {
        values.extend([power - 1, power, power + 1]);
        power = next;
    }
    for bit in 0..64 {
        values.push(1u64 << bit);
    }

    for value in values {
        assert_eq!(roundtrip_padded(value), value, "value {}", value);
    }
}

#[test]
fn test_roundtrip_unpadded_with_zero_substitution() {
    let mut buf = [0u8; ENCODED_LENGTH_64];
    for value in [0u64, 1, 100, 1_000_000, 9_876_543_210, u64::MAX] {
        let unpadded = encode_unpadded(value, &mut buf);
        let decodable = if unpadded.is_empty() { "-" } else { unpadded };
        assert_eq!(decode::<u64>(decodable), Ok(value));
    }
}

#[test]
fn test_unpadded_roundtrip_for_every_leading_digit() {
    // Short encodings whose first byte sorts above the max string's first byte
    for digit in 0..66u32 {
        let mut buf = [0u8; ENCODED_LENGTH_32];
        let unpadded = encode_unpadded(digit, &mut buf).to_string();
        assert_eq!(decode_display::<u32>(&unpadded), Ok(digit));
    }
}

#[test]
fn test_padded_order_matches_numeric_order() {
    let values = [0u32, 1, 2, 65, 66, 67, 4355, 4356, 1_000_000, u32::MAX - 1, u32::MAX];
    let encoded: Vec<String> = values.iter().map(|&v| to_padded_string(v)).collect();
    let mut sorted = encoded.clone();
    sorted.sort();
    assert_eq!(encoded, sorted);
}

#[test]
fn test_validate_properties() {
    assert_eq!(validate(b""), 0);
    assert_eq!(validate(b"abc,"), 0);
    assert_eq!(validate(b"abc\x7f"), 0);
    assert_eq!(validate(crate::ALPHABET.as_bytes()), crate::BASE);
}

#[test]
fn test_in_bounds_properties() {
    let max = MAX_STRING_64.as_bytes();
    assert!(in_bounds(max, max));

    let mut above = max.to_vec();
    *above.last_mut().unwrap() += 1;
    assert!(!in_bounds(&above, max));

    let mut below = max.to_vec();
    *below.last_mut().unwrap() -= 1;
    assert!(in_bounds(&below, max));

    for len in 0..max.len() {
        assert!(in_bounds(&max[..len], max));
    }
}

#[test]
fn test_error_kinds_at_the_boundary() {
    assert_eq!(decode::<u32>("").unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(decode::<u32>("ab cd").unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(decode::<u32>("-------").unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(decode::<u32>("1QLCp2").unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(
        decode::<u64>("9lH9ebONzYE"),
        Err(DecodeError::OutOfRange { bits: 64 })
    );
}
