//! JSON Web Token framing with HMAC signatures.
//!
//! A token is three dot-separated Base64URL segments: the header JSON, the payload JSON, and
//! the raw MAC.  The MAC is computed over the first two segments, joined with `.`, exactly as
//! they appear in the token text.
//!
//! Verification here is intended for inspecting and debugging tokens.  It compares MACs in
//! constant time, but performs none of the claim checks (`nbf`, `aud`, `iss`, ..) an
//! authentication boundary would need.

use crate::b64::{decode_base64, encode_base64};
use crate::error::*;
use crate::key::Key;
use crate::text::bytes_to_text;
use crate::DigestAlgorithm;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// The HMAC signature algorithms a token can be signed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    HS256,
    HS384,
    HS512,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }

    /// The digest underlying this algorithm's HMAC.
    pub fn digest(self) -> DigestAlgorithm {
        match self {
            Algorithm::HS256 => DigestAlgorithm::Sha256,
            Algorithm::HS384 => DigestAlgorithm::Sha384,
            Algorithm::HS512 => DigestAlgorithm::Sha512,
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::HS256
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;
    fn from_str(s: &str) -> Result<Algorithm> {
        match s {
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// The outcome of checking a token's signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Valid,
    Invalid,
    /// The header's `alg` claim names an algorithm this crate cannot verify.
    Unsupported(String),
}

/// The state of a token's `exp` claim, relative to some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expiration {
    /// The payload has no numeric `exp` claim.
    NotSet,
    Expired { exp: f64 },
    Active { exp: f64 },
}

/// A token split into its segments, with the header and payload decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    header: Value,
    payload: Value,
    signature_segment: String,
    signing_input: String,
}

impl DecodedToken {
    /// Get the decoded header JSON.
    pub fn header(&self) -> &Value {
        &self.header
    }

    /// Get the decoded payload JSON.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Get the still-encoded signature segment; empty for an unsigned token.
    pub fn signature_segment(&self) -> &str {
        &self.signature_segment
    }

    /// Get the header and payload segments joined with `.`, the text the signature covers.
    pub fn signing_input(&self) -> &str {
        &self.signing_input
    }

    pub fn is_signed(&self) -> bool {
        !self.signature_segment.is_empty()
    }

    /// Get the header's `alg` claim, if it is a string.
    pub fn algorithm_claim(&self) -> Option<&str> {
        self.header.get("alg").and_then(Value::as_str)
    }

    pub fn header_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.header)?)
    }

    pub fn payload_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.payload)?)
    }

    /// Verify the signature with `secret`.
    ///
    /// The algorithm named in the header's `alg` claim is used when present; `fallback` is
    /// used only when the header has no string `alg` claim.  An `alg` naming anything other
    /// than HS256, HS384 or HS512 yields `Verification::Unsupported`.
    pub fn verify<S>(&self, secret: S, fallback: Algorithm) -> Result<Verification>
    where
        S: AsRef<[u8]>,
    {
        let algorithm = match self.algorithm_claim() {
            Some(alg) => match alg.parse::<Algorithm>() {
                Ok(algorithm) => algorithm,
                Err(_) => {
                    log::debug!("token header names unsupported algorithm {:?}", alg);
                    return Ok(Verification::Unsupported(alg.to_string()));
                }
            },
            None => {
                log::trace!("token header has no alg claim; verifying with {}", fallback);
                fallback
            }
        };

        let valid = verify_jwt_signature(
            &self.signing_input,
            &self.signature_segment,
            secret,
            algorithm,
        )?;
        Ok(if valid {
            Verification::Valid
        } else {
            Verification::Invalid
        })
    }

    /// Compare the payload's `exp` claim (Unix seconds) against `now`.
    pub fn expiration(&self, now: SystemTime) -> Expiration {
        let exp = match self.payload.get("exp").and_then(Value::as_f64) {
            Some(exp) => exp,
            None => return Expiration::NotSet,
        };
        let now = now
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or_default();
        if exp < now {
            Expiration::Expired { exp }
        } else {
            Expiration::Active { exp }
        }
    }
}

const SEPARATOR: char = '.';

impl FromStr for DecodedToken {
    type Err = Error;
    fn from_str(token: &str) -> Result<DecodedToken> {
        let parts: Vec<&str> = token.trim().split(SEPARATOR).collect();
        if parts.len() < 2 {
            return Err(InvalidToken::MissingPayload.into());
        }
        if parts.len() > 3 {
            return Err(InvalidToken::TooManySegments.into());
        }

        let header = decode_json_segment(parts[0]).ok_or(InvalidToken::Header)?;
        let payload = decode_json_segment(parts[1]).ok_or(InvalidToken::Payload)?;

        Ok(DecodedToken {
            header,
            payload,
            signature_segment: parts.get(2).copied().unwrap_or_default().to_string(),
            signing_input: format!("{}{}{}", parts[0], SEPARATOR, parts[1]),
        })
    }
}

fn decode_json_segment(segment: &str) -> Option<Value> {
    let bytes = decode_base64(segment).ok()?;
    serde_json::from_str(&bytes_to_text(&bytes)).ok()
}

/// Split a token into its segments and decode the header and payload.
pub fn decode_jwt_segments(token: &str) -> Result<DecodedToken> {
    DecodedToken::from_str(token)
}

/// Sign a header and payload, producing a complete three-segment token.
///
/// Both are serialized to compact JSON, keeping the key order of `serde_json::Value` objects.
/// The `alg` claim of `header` is not consulted or rewritten.
pub fn sign_jwt<H, P, S>(
    header: &H,
    payload: &P,
    secret: S,
    algorithm: Algorithm,
) -> Result<String>
where
    H: Serialize + ?Sized,
    P: Serialize + ?Sized,
    S: AsRef<[u8]>,
{
    let header = encode_base64(serde_json::to_string(header)?.as_bytes(), true);
    let payload = encode_base64(serde_json::to_string(payload)?.as_bytes(), true);
    let signing_input = format!("{}{}{}", header, SEPARATOR, payload);

    let key = Key::new(secret, algorithm.digest())?;
    let signature = key.sign(signing_input.as_bytes())?;

    Ok(format!(
        "{}{}{}",
        signing_input,
        SEPARATOR,
        encode_base64(&signature, true)
    ))
}

/// Check `signature_segment` (Base64URL) against the HMAC of `signing_input`.
///
/// A signature segment that is not valid Base64 is an error rather than a mismatch.
pub fn verify_jwt_signature<S>(
    signing_input: &str,
    signature_segment: &str,
    secret: S,
    algorithm: Algorithm,
) -> Result<bool>
where
    S: AsRef<[u8]>,
{
    let signature = decode_base64(signature_segment)?;
    let key = Key::new(secret, algorithm.digest())?;
    key.verify(signing_input.as_bytes(), &signature)
}

#[cfg(all(test, any(feature = "use_ring", feature = "use_openssl")))]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;

    const JWT_IO_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                                eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
                                SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";
    const JWT_IO_SECRET: &str = "your-256-bit-secret";

    fn token_with(header: Value, payload: Value) -> DecodedToken {
        let token = sign_jwt(&header, &payload, "s", Algorithm::HS256).unwrap();
        decode_jwt_segments(&token).unwrap()
    }

    #[test]
    fn test_sign_known_token() {
        let token = sign_jwt(
            &json!({"alg": "HS256", "typ": "JWT"}),
            &json!({"sub": "1234567890", "name": "John Doe", "iat": 1516239022}),
            JWT_IO_SECRET,
            Algorithm::HS256,
        )
        .unwrap();
        assert_eq!(token, JWT_IO_TOKEN);
    }

    #[test]
    fn test_decode_known_token() {
        let decoded = decode_jwt_segments(JWT_IO_TOKEN).unwrap();
        assert_eq!(decoded.header(), &json!({"alg": "HS256", "typ": "JWT"}));
        assert_eq!(decoded.payload()["name"], "John Doe");
        assert_eq!(
            decoded.signature_segment(),
            "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c"
        );
        assert_eq!(
            decoded.signing_input(),
            "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
             eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ"
        );
        assert_eq!(decoded.algorithm_claim(), Some("HS256"));
        assert!(decoded.is_signed());
    }

    #[test]
    fn test_verify_known_token() {
        let decoded = decode_jwt_segments(JWT_IO_TOKEN).unwrap();
        assert!(verify_jwt_signature(
            decoded.signing_input(),
            decoded.signature_segment(),
            JWT_IO_SECRET,
            Algorithm::HS256
        )
        .unwrap());
        assert!(!verify_jwt_signature(
            decoded.signing_input(),
            decoded.signature_segment(),
            JWT_IO_SECRET,
            Algorithm::HS384
        )
        .unwrap());
    }

    #[test]
    fn test_sign_verify_other_algorithms() {
        for algorithm in &[Algorithm::HS384, Algorithm::HS512] {
            let header = json!({"alg": algorithm.as_str()});
            let token = sign_jwt(&header, &json!({"sub": "1"}), "s", *algorithm).unwrap();
            let decoded = decode_jwt_segments(&token).unwrap();
            assert_eq!(
                decoded.verify("s", Algorithm::HS256).unwrap(),
                Verification::Valid
            );
            assert_eq!(
                decoded.verify("t", Algorithm::HS256).unwrap(),
                Verification::Invalid
            );
        }
    }

    #[test]
    fn test_verify_falls_back_without_alg() {
        let token = sign_jwt(&json!({"typ": "JWT"}), &json!({}), "s", Algorithm::HS512).unwrap();
        let decoded = decode_jwt_segments(&token).unwrap();
        assert_eq!(
            decoded.verify("s", Algorithm::HS512).unwrap(),
            Verification::Valid
        );
        assert_eq!(
            decoded.verify("s", Algorithm::HS256).unwrap(),
            Verification::Invalid
        );
    }

    #[test]
    fn test_verify_unsupported_alg() {
        let decoded = token_with(json!({"alg": "RS256"}), json!({}));
        assert_eq!(
            decoded.verify("s", Algorithm::HS256).unwrap(),
            Verification::Unsupported("RS256".to_string())
        );
        let decoded = token_with(json!({"alg": "none"}), json!({}));
        assert_eq!(
            decoded.verify("s", Algorithm::HS256).unwrap(),
            Verification::Unsupported("none".to_string())
        );
    }

    #[test]
    fn test_decode_missing_payload() {
        for token in &["", "eyJhbGciOiJIUzI1NiJ9"] {
            match decode_jwt_segments(token) {
                Err(Error::InvalidToken(InvalidToken::MissingPayload)) => {}
                r => panic!("unexpected result {:?}", r),
            }
        }
        let err = decode_jwt_segments("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Token must have at least header and payload segments"
        );
    }

    #[test]
    fn test_decode_too_many_segments() {
        match decode_jwt_segments("e30.e30.e30.e30") {
            Err(Error::InvalidToken(InvalidToken::TooManySegments)) => {}
            r => panic!("unexpected result {:?}", r),
        }
    }

    #[test]
    fn test_decode_bad_segments() {
        match decode_jwt_segments("e30.!!!") {
            Err(Error::InvalidToken(InvalidToken::Payload)) => {}
            r => panic!("unexpected result {:?}", r),
        }
        // "bm90IGpzb24" is "not json"
        match decode_jwt_segments("bm90IGpzb24.e30") {
            Err(Error::InvalidToken(InvalidToken::Header)) => {}
            r => panic!("unexpected result {:?}", r),
        }
    }

    #[test]
    fn test_decode_unsigned() {
        let decoded = decode_jwt_segments("e30.e30").unwrap();
        assert_eq!(decoded.header(), &json!({}));
        assert_eq!(decoded.signature_segment(), "");
        assert_eq!(decoded.signing_input(), "e30.e30");
        assert!(!decoded.is_signed());
        assert_eq!(
            decoded.verify("s", Algorithm::HS256).unwrap(),
            Verification::Invalid
        );
    }

    #[test]
    fn test_decode_trims_whitespace() {
        let decoded = decode_jwt_segments("  e30.e30.  \n").unwrap();
        assert_eq!(decoded.signing_input(), "e30.e30");
    }

    #[test]
    fn test_verify_garbage_signature_is_error() {
        assert!(verify_jwt_signature("e30.e30", "a", "s", Algorithm::HS256).is_err());
    }

    #[test]
    fn test_expiration() {
        let now = UNIX_EPOCH + Duration::new(1_000, 0);
        let decoded = token_with(json!({"alg": "HS256"}), json!({"exp": 999}));
        assert_eq!(decoded.expiration(now), Expiration::Expired { exp: 999.0 });
        let decoded = token_with(json!({"alg": "HS256"}), json!({"exp": 1000}));
        assert_eq!(decoded.expiration(now), Expiration::Active { exp: 1000.0 });
        let decoded = token_with(json!({"alg": "HS256"}), json!({"exp": 1500.5}));
        assert_eq!(decoded.expiration(now), Expiration::Active { exp: 1500.5 });
    }

    #[test]
    fn test_expiration_not_set() {
        let now = UNIX_EPOCH + Duration::new(1_000, 0);
        let decoded = token_with(json!({"alg": "HS256"}), json!({"sub": "1"}));
        assert_eq!(decoded.expiration(now), Expiration::NotSet);
        let decoded = token_with(json!({"alg": "HS256"}), json!({"exp": "tomorrow"}));
        assert_eq!(decoded.expiration(now), Expiration::NotSet);
    }

    #[test]
    fn test_pretty() {
        let decoded = decode_jwt_segments("eyJhbGciOiJIUzI1NiJ9.e30").unwrap();
        assert_eq!(decoded.header_pretty().unwrap(), "{\n  \"alg\": \"HS256\"\n}");
        assert_eq!(decoded.payload_pretty().unwrap(), "{}");
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("HS384".parse::<Algorithm>().unwrap(), Algorithm::HS384);
        match "hs256".parse::<Algorithm>() {
            Err(Error::UnsupportedAlgorithm(name)) => assert_eq!(name, "hs256"),
            r => panic!("unexpected result {:?}", r),
        }
        assert_eq!(Algorithm::default().to_string(), "HS256");
    }
}
