//! The `hawk-header` crate generates and verifies compact Hawk `Authorization` headers.
//!
//! A header carries an id, a timestamp with two fractional digits, an optional nonce, and an
//! HMAC-SHA256 MAC over a canonical description of the request:
//!
//! ```text
//! Hawk id="dh37fgj492je", ts="1353832234.00", nonce="ajRoM2cy", mac="mPsne3sh...QeA="
//! ```
//!
//! Payload hashes and `ext` data are not supported; their lines in the signing string are
//! always empty.
//!
//! # Examples
//!
//! ## Client
//!
//! ```
//! use url::Url;
//!
//! let url = Url::parse("https://example.com/resource?a=1").unwrap();
//! let header = hawk_header::encode_header("dh37fgj492je", "tok", "GET", &url, Some(&b"j4h3g2"[..]))
//!     .unwrap();
//! assert!(header.starts_with("Hawk id=\"dh37fgj492je\", ts=\""));
//! assert!(header.contains("nonce=\"ajRoM2cy\""));
//! ```
//!
//! ## Server
//!
//! The server looks up the secret for the header's `id` itself, then verifies:
//!
//! ```
//! use hawk_header::{Error, Header};
//! use std::str::FromStr;
//! use std::time::{Duration, SystemTime};
//! use url::Url;
//!
//! let url = Url::parse("https://example.com/resource?a=1").unwrap();
//! let signed = SystemTime::now();
//! let header = hawk_header::encode_header_at("me", "tok", "GET", &url, None, signed).unwrap();
//!
//! let id = Header::from_str(&header).unwrap().id;
//! assert_eq!(id, "me");
//!
//! hawk_header::verify_header_at(&header, "tok", "GET", &url, signed).unwrap();
//! match hawk_header::verify_header_at(&header, "wrong", "GET", &url, signed) {
//!     Err(Error::InvalidMac) => {}
//!     _ => panic!("expected a MAC mismatch"),
//! }
//! let before = signed - Duration::from_secs(3600);
//! match hawk_header::verify_header_at(&header, "tok", "GET", &url, before) {
//!     Err(Error::Expired) => {}
//!     _ => panic!("expected an expired header"),
//! }
//! ```

mod credentials;
pub use crate::credentials::{Credentials, Key};

mod error;
pub use crate::error::*;

mod header;
pub use crate::header::Header;

mod mac;
pub use crate::mac::Mac;

mod params;
pub use crate::params::{MacParams, HAWK_VERSION};

mod request;
pub use crate::request::{
    encode_header, encode_header_at, verify_header, verify_header_at, Request,
};

pub mod crypto;

pub mod util;
pub use crate::util::{decistamp, timing_safe_eq};
