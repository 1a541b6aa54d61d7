//! Base58 with the Bitcoin alphabet, which omits `0`, `O`, `I` and `l`.
//!
//! 58 is not a power of two, so the input cannot be split into fixed-width bit groups.  Both
//! directions instead treat the input as one big-endian number and convert its radix by
//! repeated multiply-and-carry over a digit vector.  Leading zero bytes carry no numeric
//! value, so each one is written as a leading `'1'` (the zero digit) and restored on decode.

use crate::encoding::Encoding;
use crate::error::*;
use std::iter;

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const ZERO: char = '1';

const INVALID: u8 = 0xff;

const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encode bytes as Base58.
pub fn encode_base58(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    // base-58 digits, least significant first; log(256)/log(58) < 1.37
    let mut digits: Vec<u8> = Vec::with_capacity((bytes.len() - zeros) * 137 / 100 + 1);
    for &byte in &bytes[zeros..] {
        let mut carry = u32::from(byte);
        for digit in digits.iter_mut() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    iter::repeat(ZERO)
        .take(zeros)
        .chain(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char))
        .collect()
}

/// Decode Base58.  The empty string decodes to no bytes.
pub fn decode_base58(input: &str) -> Result<Vec<u8>> {
    let zeros = input.chars().take_while(|&c| c == ZERO).count();

    // bytes, least significant first
    let mut bytes: Vec<u8> = Vec::with_capacity((input.len() - zeros) * 733 / 1000 + 1);
    // leading '1's are one byte each, so the char count is also a byte offset
    for (position, c) in input[zeros..].char_indices() {
        let mut carry = u32::from(lookup(c).ok_or(Error::InvalidCharacter {
            encoding: Encoding::Base58,
            character: c,
            position: position + zeros,
        })?);
        for byte in bytes.iter_mut() {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut output = vec![0u8; zeros];
    output.extend(bytes.iter().rev());
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
