use crate::crypto::CryptoError;
use crate::encoding::Encoding;
use failure::Fail;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Fail, Debug)]
pub enum Error {
    #[fail(
        display = "Invalid Base64 length: {} characters cannot be padded to a multiple of 4",
        _0
    )]
    InvalidBase64Length(usize),

    #[fail(display = "Base64 Decode error: {}", _0)]
    Base64(#[fail(cause)] base64::DecodeError),

    #[fail(
        display = "Invalid {} character {:?} at offset {}",
        encoding, character, position
    )]
    InvalidCharacter {
        encoding: Encoding,
        character: char,
        position: usize,
    },

    #[fail(display = "Odd-length hex input: {} digits", _0)]
    OddHexLength(usize),

    #[fail(display = "{}", _0)]
    InvalidToken(#[fail(cause)] InvalidToken),

    #[fail(display = "Unknown encoding: {}", _0)]
    UnknownEncoding(String),

    #[fail(display = "Unsupported JWT algorithm: {}", _0)]
    UnsupportedAlgorithm(String),

    #[fail(display = "JSON error: {}", _0)]
    Json(#[fail(cause)] serde_json::Error),

    #[fail(display = "{}", _0)]
    Crypto(#[fail(cause)] CryptoError),
}

#[derive(Fail, Debug, PartialEq)]
pub enum InvalidToken {
    #[fail(display = "Token must have at least header and payload segments")]
    MissingPayload,
    #[fail(display = "Token has more than three segments")]
    TooManySegments,
    #[fail(display = "Token header is not Base64URL-encoded JSON")]
    Header,
    #[fail(display = "Token payload is not Base64URL-encoded JSON")]
    Payload,
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Error::Base64(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<CryptoError> for Error {
    fn from(e: CryptoError) -> Self {
        Error::Crypto(e)
    }
}

impl From<InvalidToken> for Error {
    fn from(e: InvalidToken) -> Self {
        Error::InvalidToken(e)
    }
}
