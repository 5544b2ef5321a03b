use crate::crypto::{self, HmacKey};
use crate::error::*;

/// Hawk key: the shared secret, ready for HMAC-SHA256.
///
/// Any sequence of bytes can be used as a key, including an empty one.  Such keys produce
/// valid, if useless, MACs.
pub struct Key(Box<dyn HmacKey>);

impl Key {
    pub fn new<B>(key: B) -> Result<Key>
    where
        B: AsRef<[u8]>,
    {
        Ok(Key(crypto::get_cryptographer().new_key(key.as_ref())?))
    }

    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(self.0.sign(data)?)
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("Key(..)")
    }
}

/// Hawk credentials: an ID and a key associated with that ID.  The ID is only carried in the
/// header; resolving an ID to its key on the verifying side is up to the caller.
#[derive(Debug)]
pub struct Credentials {
    pub id: String,
    pub key: Key,
}

impl Credentials {
    pub fn new<S, B>(id: S, key: B) -> Result<Credentials>
    where
        S: Into<String>,
        B: AsRef<[u8]>,
    {
        Ok(Credentials {
            id: id.into(),
            key: Key::new(key)?,
        })
    }
}
