use super::{CryptoError, Cryptographer, HmacKey};
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

struct OpensslHmacKey(PKey<Private>);

impl HmacKey for OpensslHmacKey {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut signer = Signer::new(MessageDigest::sha256(), &self.0)?;
        signer.update(data)?;
        Ok(signer.sign_to_vec()?)
    }
}

impl Cryptographer for OpensslCryptographer {
    fn new_key(&self, key: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError> {
        let pkey = PKey::hmac(key).map_err(|_| CryptoError::InvalidKey)?;
        Ok(Box::new(OpensslHmacKey(pkey)))
    }

    fn constant_time_compare(&self, a: &[u8], b: &[u8]) -> bool {
        // openssl::memcmp::eq panics on length mismatch
        a.len() == b.len() && openssl::memcmp::eq(a, b)
    }
}
