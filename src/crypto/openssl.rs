use super::{CryptoError, Cryptographer, HmacKey};
use crate::DigestAlgorithm;
use openssl::error::ErrorStack;
use openssl::hash::MessageDigest;
use openssl::pkey::{PKey, Private};
use openssl::sign::Signer;

impl From<ErrorStack> for CryptoError {
    fn from(e: ErrorStack) -> Self {
        CryptoError::Other(e.into())
    }
}

pub struct OpensslCryptographer;

struct OpensslHmacKey {
    key: PKey<Private>,
    digest: MessageDigest,
}

impl HmacKey for OpensslHmacKey {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut signer = Signer::new(self.digest, &self.key)?;
        signer.update(data)?;
        Ok(signer.sign_to_vec()?)
    }
}

impl Cryptographer for OpensslCryptographer {
    fn new_key(
        &self,
        algorithm: DigestAlgorithm,
        key: &[u8],
    ) -> Result<Box<dyn HmacKey>, CryptoError> {
        let digest = match algorithm {
            DigestAlgorithm::Sha256 => MessageDigest::sha256(),
            DigestAlgorithm::Sha384 => MessageDigest::sha384(),
            DigestAlgorithm::Sha512 => MessageDigest::sha512(),
        };
        Ok(Box::new(OpensslHmacKey {
            key: PKey::hmac(key)?,
            digest,
        }))
    }

    fn constant_time_compare(&self, a: &[u8], b: &[u8]) -> bool {
        // openssl::memcmp::eq panics on a length mismatch
        a.len() == b.len() && openssl::memcmp::eq(a, b)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hmac_sha256_rfc4231() {
        let key = OpensslCryptographer
            .new_key(DigestAlgorithm::Sha256, b"Jefe")
            .unwrap();
        let mac = key.sign(b"what do ya want for nothing?").unwrap();
        assert_eq!(
            hex::encode(mac),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_constant_time_compare_lengths() {
        assert!(!OpensslCryptographer.constant_time_compare(b"abc", b"abcd"));
    }
}
