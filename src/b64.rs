//! This module contains base64 functionality, tolerant of both the standard and URL-safe
//! alphabets when decoding.

use crate::encoding::Encoding;
use crate::error::*;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// STANDARD_ENGINE encodes with the standard alphabet and includes padding.
const STANDARD_ENGINE: GeneralPurpose = base64::engine::general_purpose::STANDARD;

/// URL_SAFE_ENGINE encodes to a url-safe value with no padding.
const URL_SAFE_ENGINE: GeneralPurpose = base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// DECODE_ENGINE decodes the standard alphabet after padding has been restored, and accepts
/// non-zero trailing bits in the final symbol as browsers do.
const DECODE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &base64::alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Encode bytes as Base64.  With `url_safe`, `+` and `/` are replaced by `-` and `_` and the
/// `=` padding is omitted.
pub fn encode_base64(bytes: &[u8], url_safe: bool) -> String {
    if url_safe {
        URL_SAFE_ENGINE.encode(bytes)
    } else {
        STANDARD_ENGINE.encode(bytes)
    }
}

/// Decode Base64 in either alphabet, with or without padding.
///
/// Padding is re-derived from the input length, so a string whose length is one more than a
/// multiple of four can never be valid and is rejected before decoding.  Whitespace is not
/// stripped.
pub fn decode_base64(input: &str) -> Result<Vec<u8>> {
    let mut normalized: String = input
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();

    match normalized.len() % 4 {
        1 => return Err(Error::InvalidBase64Length(normalized.len())),
        2 => normalized.push_str("=="),
        3 => normalized.push('='),
        _ => {}
    }

    DECODE_ENGINE.decode(&normalized).map_err(|e| match e {
        base64::DecodeError::InvalidByte(position, byte) => Error::InvalidCharacter {
            encoding: Encoding::Base64,
            character: input
                .get(position..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(byte as char),
            position,
        },
        e => e.into(),
    })
}
