//! `bintext` must perform HMAC operations in order to sign and verify JWTs.
//! These are provided by a "cryptographer" which can be selected at compile
//! time with the `use_ring` (default) or `use_openssl` features, or installed
//! at runtime with [`set_cryptographer`] when neither backend is compiled in.

use crate::DigestAlgorithm;
use failure::Fail;

pub(crate) mod holder;
pub use holder::{set_boxed_cryptographer, set_cryptographer, SetCryptographerError};

#[cfg(feature = "use_ring")]
mod ring;

#[cfg(all(feature = "use_openssl", not(feature = "use_ring")))]
mod openssl;

#[derive(Fail, Debug)]
pub enum CryptoError {
    /// No backend feature was enabled and no cryptographer was installed.
    #[fail(display = "No cryptographer is available for HMAC operations")]
    Unavailable,

    /// Backend-specific failure.
    #[fail(display = "{}", _0)]
    Other(failure::Error),
}

/// A keyed MAC, ready to sign data.
pub trait HmacKey: Send + Sync + 'static {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// The set of operations a cryptographic backend must provide.
pub trait Cryptographer: Send + Sync + 'static {
    /// Create an HMAC key for `algorithm`, using `key` as raw key material.
    fn new_key(
        &self,
        algorithm: DigestAlgorithm,
        key: &[u8],
    ) -> Result<Box<dyn HmacKey>, CryptoError>;

    /// Compare two byte slices without leaking timing information about the
    /// position of the first difference.  Slices of unequal length compare
    /// unequal.
    fn constant_time_compare(&self, a: &[u8], b: &[u8]) -> bool;
}
