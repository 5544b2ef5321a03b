use crate::credentials::Key;
use crate::error::*;
use crate::util;
use std::ops::Deref;

/// The MAC of a Hawk signing string.
///
/// In the header, a MAC is carried as standard base64 with padding.  MACs compare in
/// constant time.
#[derive(Debug, Clone)]
pub struct Mac(Vec<u8>);

impl Mac {
    /// Calculate the HMAC-SHA256 of the given signing string.
    pub fn new(key: &Key, signing_string: &[u8]) -> Result<Mac> {
        Ok(Mac(key.sign(signing_string)?))
    }

    pub fn to_base64(&self) -> String {
        base64::encode_config(&self.0, base64::STANDARD)
    }
}

impl Deref for Mac {
    type Target = Vec<u8>;
    fn deref(&self) -> &Vec<u8> {
        &self.0
    }
}

impl AsRef<[u8]> for Mac {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl PartialEq for Mac {
    fn eq(&self, other: &Mac) -> bool {
        util::timing_safe_eq(&self.0, &other.0)
    }
}
