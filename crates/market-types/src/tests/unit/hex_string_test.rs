use crate::{decode, encode, DecodeError};

// --- Round trips ---

#[test]
fn round_trip_ascii() {
    let text = "Phantom Blade #42";
    assert_eq!(decode(&encode(text)).unwrap(), text);
}

#[test]
fn round_trip_multibyte_utf8() {
    let text = "金の龍 🐉";
    assert_eq!(decode(&encode(text)).unwrap(), text);
}

#[test]
fn decode_known_payload() {
    // "NFT" = 0x4e 0x46 0x54
    assert_eq!(decode("0x4e4654").unwrap(), "NFT");
}

#[test]
fn uppercase_hex_digits_accepted() {
    assert_eq!(decode("0x4E4654").unwrap(), "NFT");
}

#[test]
fn empty_payload_decodes_to_empty_string() {
    assert_eq!(decode("0x").unwrap(), "");
}

// --- Malformed input ---

#[test]
fn missing_prefix_fails() {
    assert_eq!(decode("4e4654").unwrap_err(), DecodeError::MissingPrefix);
}

#[test]
fn odd_length_fails_instead_of_truncating() {
    assert_eq!(decode("0x4e465").unwrap_err(), DecodeError::OddLength);
}

#[test]
fn non_hex_digit_fails() {
    assert!(matches!(
        decode("0x4e46zz").unwrap_err(),
        DecodeError::InvalidHex(_)
    ));
}

#[test]
fn invalid_utf8_fails() {
    // 0xff is never valid UTF-8
    assert_eq!(decode("0xff").unwrap_err(), DecodeError::InvalidUtf8);
}
