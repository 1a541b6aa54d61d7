use crate::encoding::Encoding;
use crate::error::*;

/// How [`decode_hex_with`] treats input with an odd number of hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexMode {
    /// Drop the final, unpaired digit.
    Lenient,
    /// Fail with [`Error::OddHexLength`].
    Strict,
}

impl Default for HexMode {
    fn default() -> Self {
        HexMode::Lenient
    }
}

/// Encode bytes as lowercase hexadecimal, two digits per byte with no separators.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode hexadecimal in [`HexMode::Lenient`] mode.
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    decode_hex_with(input, HexMode::Lenient)
}

/// Decode hexadecimal.  Whitespace and `-` separators are ignored and either case is accepted.
/// Positions in errors refer to the input with separators removed.
pub fn decode_hex_with(input: &str, mode: HexMode) -> Result<Vec<u8>> {
    let mut digits: String = input
        .chars()
        .filter(|&c| c != '-' && !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if let Some((position, character)) = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(Error::InvalidCharacter {
            encoding: Encoding::Hex,
            character,
            position,
        });
    }

    if digits.len() % 2 != 0 {
        match mode {
            HexMode::Strict => return Err(Error::OddHexLength(digits.len())),
            HexMode::Lenient => {
                digits.pop();
            }
        }
    }

    hex::decode(&digits).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => Error::InvalidCharacter {
            encoding: Encoding::Hex,
            character: c,
            position: index,
        },
        _ => Error::OddHexLength(digits.len()),
    })
}
