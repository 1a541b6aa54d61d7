//! The `bintext` crate provides binary-to-text codecs, and HMAC-signed JSON Web Token framing
//! built on top of them.
//!
//! The codecs operate on raw byte sequences: Base64 (standard and URL-safe), Base32 (RFC 4648
//! alphabet), Base58 (Bitcoin alphabet) and lowercase hexadecimal.  Every decoder accepts what
//! the matching encoder produces, so `decode(encode(bytes)) == bytes` for all inputs, and every
//! decoder rejects characters outside its alphabet with an error naming the character.
//!
//! # Examples
//!
//! ## Codecs
//!
//! ```
//! use bintext::{bytes_to_text, decode_base58, decode_base64, encode_base58, encode_base64,
//!               text_to_bytes};
//!
//! let encoded = encode_base64(&text_to_bytes("hello"), false);
//! assert_eq!(encoded, "aGVsbG8=");
//! assert_eq!(bytes_to_text(&decode_base64(&encoded).unwrap()), "hello");
//!
//! // leading zero bytes are preserved as leading '1's
//! assert_eq!(encode_base58(&[0, 0, 0x61]), "112g");
//! assert_eq!(decode_base58("112g").unwrap(), vec![0, 0, 0x61]);
//! ```
//!
//! ## Selecting a codec by name
//!
//! ```
//! use bintext::Encoding;
//!
//! let hex: Encoding = "hex".parse().unwrap();
//! assert_eq!(hex.encode(b"\x0a\xff"), "0aff");
//! assert_eq!(bintext::transcode("0aff", hex, Encoding::Base64).unwrap(), "Cv8=");
//! ```
//!
//! ## JSON Web Tokens
//!
//! ```
//! use bintext::{decode_jwt_segments, sign_jwt, Algorithm, Verification};
//! use serde_json::json;
//!
//! let header = json!({"alg": "HS256", "typ": "JWT"});
//! let payload = json!({"sub": "1"});
//! let token = sign_jwt(&header, &payload, "s", Algorithm::HS256).unwrap();
//!
//! let decoded = decode_jwt_segments(&token).unwrap();
//! assert_eq!(decoded.payload()["sub"], "1");
//! assert_eq!(decoded.verify("s", Algorithm::HS256).unwrap(), Verification::Valid);
//! assert_eq!(decoded.verify("t", Algorithm::HS256).unwrap(), Verification::Invalid);
//! ```
//!
//! # Features
//!
//! HMAC operations are delegated to a [`crypto::Cryptographer`].  The `use_ring` feature (the
//! default) installs one backed by `ring`, and `use_openssl` one backed by OpenSSL.  Building
//! with neither requires a call to [`crypto::set_cryptographer`] before signing or verifying.

mod b16;
mod b32;
mod b58;
mod b64;
pub mod crypto;
mod encoding;
mod error;
mod jwt;
mod key;
mod text;

pub use crate::b16::{decode_hex, decode_hex_with, encode_hex, HexMode};
pub use crate::b32::{decode_base32, encode_base32, encode_base32_padded};
pub use crate::b58::{decode_base58, encode_base58};
pub use crate::b64::{decode_base64, encode_base64};
pub use crate::encoding::{transcode, Encoding};
pub use crate::error::*;
pub use crate::jwt::{
    decode_jwt_segments, sign_jwt, verify_jwt_signature, Algorithm, DecodedToken, Expiration,
    Verification,
};
pub use crate::key::Key;
pub use crate::text::{bytes_to_text, text_to_bytes};

/// The digest algorithms an HMAC key can be built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

pub const SHA256: DigestAlgorithm = DigestAlgorithm::Sha256;
pub const SHA384: DigestAlgorithm = DigestAlgorithm::Sha384;
pub const SHA512: DigestAlgorithm = DigestAlgorithm::Sha512;
