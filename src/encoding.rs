use crate::error::*;
use crate::{b16, b32, b58, b64};
use std::fmt;
use std::str::FromStr;

/// A binary-to-text encoding supported by this crate.
///
/// This allows a codec to be chosen at runtime, for example from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Standard Base64 with `=` padding
    Base64,
    /// URL-safe Base64 without padding
    Base64Url,
    Base32,
    Base58,
    Hex,
}

impl Encoding {
    pub const ALL: [Encoding; 5] = [
        Encoding::Base64,
        Encoding::Base64Url,
        Encoding::Base32,
        Encoding::Base58,
        Encoding::Hex,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Encoding::Base64 => "Base64",
            Encoding::Base64Url => "Base64URL",
            Encoding::Base32 => "Base32",
            Encoding::Base58 => "Base58",
            Encoding::Hex => "Hex",
        }
    }

    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Base64 => b64::encode_base64(bytes, false),
            Encoding::Base64Url => b64::encode_base64(bytes, true),
            Encoding::Base32 => b32::encode_base32(bytes),
            Encoding::Base58 => b58::encode_base58(bytes),
            Encoding::Hex => b16::encode_hex(bytes),
        }
    }

    /// Decode `input`.  Both Base64 variants accept either alphabet.
    pub fn decode(self, input: &str) -> Result<Vec<u8>> {
        match self {
            Encoding::Base64 | Encoding::Base64Url => b64::decode_base64(input),
            Encoding::Base32 => b32::decode_base32(input),
            Encoding::Base58 => b58::decode_base58(input),
            Encoding::Hex => b16::decode_hex(input),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = Error;
    fn from_str(s: &str) -> Result<Encoding> {
        match s.to_ascii_lowercase().as_str() {
            "base64" => Ok(Encoding::Base64),
            "base64url" | "base64-url" => Ok(Encoding::Base64Url),
            "base32" => Ok(Encoding::Base32),
            "base58" => Ok(Encoding::Base58),
            "hex" | "base16" => Ok(Encoding::Hex),
            _ => Err(Error::UnknownEncoding(s.to_string())),
        }
    }
}

/// Decode `input` with one encoding and re-encode the bytes with another.
pub fn transcode(input: &str, from: Encoding, to: Encoding) -> Result<String> {
    Ok(to.encode(&from.decode(input)?))
}
