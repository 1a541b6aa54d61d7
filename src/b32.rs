//! RFC 4648 Base32, alphabet `A-Z2-7`.

use crate::encoding::Encoding;
use crate::error::*;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

const INVALID: u8 = 0xff;

/// Map from (uppercase) ASCII character to 5-bit value, `INVALID` elsewhere.
const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encode bytes as Base32, without `=` padding.  A trailing group of fewer than 5 bits is
/// zero-filled into one final character.
pub fn encode_base32(bytes: &[u8]) -> String {
    let mut output = String::with_capacity((bytes.len() * 8 + 4) / 5);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            output.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
        // only the unconsumed low bits need to be kept
        buffer &= (1 << bits) - 1;
    }

    if bits > 0 {
        output.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }

    output
}

/// Encode bytes as Base32, padded with `=` to a multiple of 8 characters as RFC 4648
/// specifies.
pub fn encode_base32_padded(bytes: &[u8]) -> String {
    let mut output = encode_base32(bytes);
    while output.len() % 8 != 0 {
        output.push('=');
    }
    output
}

/// Decode Base32.  Whitespace and `=` are ignored wherever they appear and lowercase letters
/// are accepted.  Any bits left over after the last full byte are discarded.
pub fn decode_base32(input: &str) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(input.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for (position, c) in input.char_indices() {
        if c == '=' || c.is_whitespace() {
            continue;
        }
        let value = lookup(c.to_ascii_uppercase()).ok_or(Error::InvalidCharacter {
            encoding: Encoding::Base32,
            character: c,
            position,
        })?;

        buffer = (buffer << 5) | u32::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            output.push((buffer >> bits) as u8);
        }
        buffer &= (1 << bits) - 1;
    }

    Ok(output)
}

fn lookup(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}
