use super::Cryptographer;
use failure::Fail;
use once_cell::sync::OnceCell;

/// The backend used to sign and compare MACs; fixed for the life of the process once any
/// header has been produced or verified.
static BACKEND: OnceCell<&'static dyn Cryptographer> = OnceCell::new();

#[derive(Debug, Fail)]
#[fail(display = "Cryptographer already initialized")]
pub struct SetCryptographerError(());

/// Install the cryptographer used for all MAC operations.
///
/// This succeeds at most once, and only before the first header is signed or verified; after
/// that the backend selected by the crate features is already in place.
pub fn set_cryptographer(c: &'static dyn Cryptographer) -> Result<(), SetCryptographerError> {
    BACKEND.set(c).map_err(|_| SetCryptographerError(()))
}

/// Like [`set_cryptographer`], for a boxed backend.  The box is leaked, since the backend lives
/// as long as the process does.
pub fn set_boxed_cryptographer(c: Box<dyn Cryptographer>) -> Result<(), SetCryptographerError> {
    set_cryptographer(Box::leak(c))
}

pub(crate) fn get_cryptographer() -> &'static dyn Cryptographer {
    *BACKEND.get_or_init(builtin)
}

#[cfg(feature = "use_ring")]
fn builtin() -> &'static dyn Cryptographer {
    &super::ring::RingCryptographer
}

#[cfg(all(feature = "use_openssl", not(feature = "use_ring")))]
fn builtin() -> &'static dyn Cryptographer {
    &super::openssl::OpensslCryptographer
}

#[cfg(not(any(feature = "use_openssl", feature = "use_ring")))]
fn builtin() -> &'static dyn Cryptographer {
    panic!("no `hawk-header` cryptographer: enable `use_ring` or `use_openssl`, or call `set_cryptographer`")
}
