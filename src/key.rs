use crate::crypto::{self, HmacKey};
use crate::error::*;
use crate::DigestAlgorithm;
use std::fmt;

/// An HMAC key.
///
/// While any sequence of bytes can be specified as a key, note that each digest algorithm has
/// a suggested key length, and that passwords should *not* be used as keys.  Keys of other
/// lengths are handled according to HMAC's rules (hashed if long, zero-padded if short).
pub struct Key {
    algorithm: DigestAlgorithm,
    key: Box<dyn HmacKey>,
}

impl Key {
    pub fn new<B>(key: B, algorithm: DigestAlgorithm) -> Result<Key>
    where
        B: AsRef<[u8]>,
    {
        let key = crypto::holder::get_cryptographer()?.new_key(algorithm, key.as_ref())?;
        Ok(Key { algorithm, key })
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Compute the MAC of `data`.
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(self.key.sign(data)?)
    }

    /// Check that `mac` is the MAC of `data`, comparing in constant time.
    pub fn verify(&self, data: &[u8], mac: &[u8]) -> Result<bool> {
        let expected = self.sign(data)?;
        Ok(crypto::holder::get_cryptographer()?.constant_time_compare(&expected, mac))
    }
}

// the key material is never printed
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Key")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
