use crate::crypto::CryptoError;
use failure::Fail;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Fail, Debug)]
pub enum Error {
    #[fail(display = "Malformed Hawk header: {}", _0)]
    MalformedHeader(String),

    #[fail(display = "Hawk header timestamp is in the future")]
    Expired,

    #[fail(display = "Invalid Hawk MAC")]
    InvalidMac,

    #[fail(display = "Invalid Hawk header component: {}", _0)]
    InvalidComponent(String),

    #[fail(display = "{}", _0)]
    Crypto(#[fail(cause)] CryptoError),
}

impl Error {
    pub(crate) fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::MalformedHeader(msg.into())
    }
}

impl From<CryptoError> for Error {
    fn from(e: CryptoError) -> Self {
        Error::Crypto(e)
    }
}
