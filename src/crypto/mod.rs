//! `hawk-header` must calculate HMAC-SHA256 values and compare them without leaking timing
//! information.  The actual implementation is provided by a `Cryptographer`, which can be
//! selected with the `use_ring` (the default) or `use_openssl` features, or installed at
//! runtime with [`set_cryptographer`].

use failure::Fail;

#[cfg(feature = "use_openssl")]
mod openssl;
#[cfg(feature = "use_ring")]
mod ring;

mod holder;
pub(crate) use holder::get_cryptographer;
pub use holder::{set_boxed_cryptographer, set_cryptographer, SetCryptographerError};

#[derive(Debug, Fail)]
pub enum CryptoError {
    /// The backend could not create an HMAC key from the given secret.
    #[fail(display = "HMAC key could not be created")]
    InvalidKey,

    /// Some other backend error.
    #[fail(display = "{}", _0)]
    Other(#[fail(cause)] failure::Error),
}

/// A keyed HMAC-SHA256 signer.
pub trait HmacKey: Send + Sync + 'static {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// An object implementing the cryptographic operations used by this crate.
pub trait Cryptographer: Send + Sync + 'static {
    fn new_key(&self, key: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError>;

    /// Compare two byte strings in constant time.  Values of differing lengths compare unequal
    /// immediately.
    fn constant_time_compare(&self, a: &[u8], b: &[u8]) -> bool;
}
