use super::{CryptoError, Cryptographer};
use failure::Fail;
use once_cell::sync::OnceCell;

static CRYPTOGRAPHER: OnceCell<&'static dyn Cryptographer> = OnceCell::new();

#[derive(Debug, Fail)]
#[fail(display = "Cryptographer already initialized")]
pub struct SetCryptographerError(());

/// Sets the global object that will be used for cryptographic operations.
///
/// This is a convenience wrapper over [`set_cryptographer`],
/// but takes a `Box<dyn Cryptographer>` instead.
pub fn set_boxed_cryptographer(c: Box<dyn Cryptographer>) -> Result<(), SetCryptographerError> {
    set_cryptographer(Box::leak(c))
}

/// Sets the global object that will be used for cryptographic operations.
///
/// This function may only be called once in the lifetime of a program, and
/// must be called before the first signature is computed if a backend
/// feature is enabled; otherwise that backend is installed automatically.
///
/// Any calls into this crate that perform cryptography with no cryptographer
/// installed and no backend feature enabled fail with
/// [`CryptoError::Unavailable`].
pub fn set_cryptographer(c: &'static dyn Cryptographer) -> Result<(), SetCryptographerError> {
    CRYPTOGRAPHER.set(c).map_err(|_| SetCryptographerError(()))
}

pub(crate) fn get_cryptographer() -> Result<&'static dyn Cryptographer, CryptoError> {
    if let Some(c) = CRYPTOGRAPHER.get() {
        return Ok(*c);
    }
    autoinit_crypto();
    CRYPTOGRAPHER.get().copied().ok_or(CryptoError::Unavailable)
}

#[cfg(feature = "use_ring")]
#[inline]
fn autoinit_crypto() {
    if set_cryptographer(&super::ring::RingCryptographer).is_ok() {
        log::debug!("installed ring cryptographer");
    }
}

#[cfg(all(feature = "use_openssl", not(feature = "use_ring")))]
#[inline]
fn autoinit_crypto() {
    if set_cryptographer(&super::openssl::OpensslCryptographer).is_ok() {
        log::debug!("installed openssl cryptographer");
    }
}

#[cfg(not(any(feature = "use_openssl", feature = "use_ring")))]
#[inline]
fn autoinit_crypto() {}
