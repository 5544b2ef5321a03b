use crate::credentials::{Credentials, Key};
use crate::error::*;
use crate::header::Header;
use crate::mac::Mac;
use crate::params::MacParams;
use crate::util;
use log::{debug, trace};
use std::str::FromStr;
use std::time::SystemTime;
use url::Url;

/// Request represents a single HTTP request, as far as Hawk is concerned.
///
/// A request is used either to create a header (client) or to validate one (server).  The
/// parameters may be left partially unset; unset parameters take their defaults as described
/// for [`MacParams`].
///
/// # Examples
///
/// ```
/// use hawk_header::{Credentials, Request};
/// use url::Url;
///
/// let credentials = Credentials::new("me", "tok").unwrap();
/// let url = Url::parse("https://example.com/resource").unwrap();
/// let header = Request::from_url("GET", &url)
///     .make_header_full(&credentials, std::time::SystemTime::now(), Some(&b"nonny"[..]))
///     .unwrap();
/// assert!(header.to_string().starts_with("Hawk id=\"me\""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Request {
    params: MacParams,
    trailer: String,
}

impl Request {
    pub fn new(params: MacParams) -> Self {
        Request {
            params,
            trailer: String::new(),
        }
    }

    /// Create a request for the given method and URL.
    pub fn from_url<S>(method: S, url: &Url) -> Self
    where
        S: Into<String>,
    {
        Request::new(MacParams::from_url(method, url))
    }

    /// Set a string appended to the end of the signing string.  Both sides of the exchange
    /// must agree on the trailer.
    pub fn with_trailer<S>(mut self, trailer: S) -> Self
    where
        S: Into<String>,
    {
        self.trailer = trailer.into();
        self
    }

    pub fn params(&self) -> &MacParams {
        &self.params
    }

    /// Create a new Header for this request.  The method is upper-cased, as it is when
    /// validating; all other parameters are used exactly as given.  An unset timestamp
    /// defaults to the current time.
    pub fn make_header(&self, credentials: &Credentials) -> Result<Header> {
        let mut params = self.params.clone();
        params.method = params.method.map(|m| m.to_uppercase());
        let resolved = params.resolve();
        let mac = Mac::new(&credentials.key, &resolved.signing_string(&self.trailer))?;
        let nonce = self
            .params
            .nonce
            .as_ref()
            .map(|n| base64::encode_config(n, base64::STANDARD));

        let header = Header::new(
            credentials.id.clone(),
            resolved.timestamp().to_string(),
            nonce,
            mac.to_base64(),
        )?;
        trace!("Generated Hawk header: {}", header);
        Ok(header)
    }

    /// Similar to `make_header`, but setting the timestamp from `ts` and including the given
    /// raw nonce, if any.
    pub fn make_header_full(
        &self,
        credentials: &Credentials,
        ts: SystemTime,
        nonce: Option<&[u8]>,
    ) -> Result<Header> {
        let mut params = self.params.clone();
        params.timestamp = Some(util::decistamp(util::epoch_secs(ts)));
        if let Some(nonce) = nonce {
            params.nonce = Some(nonce.to_vec());
        }
        Request {
            params,
            trailer: self.trailer.clone(),
        }
        .make_header(credentials)
    }

    /// Validate the given header against this request, as of `now`.
    ///
    /// The header's timestamp and nonce replace those of the request, and the request method is
    /// upper-cased.  A timestamp later than `now` is rejected as `Expired`; a MAC that does not
    /// match is rejected as `InvalidMac`.  Timestamps are compared at the hundredth-of-a-second
    /// resolution of the header format.
    pub fn validate_header(&self, header: &Header, key: &Key, now: SystemTime) -> Result<()> {
        let ts = header.ts_secs()?;

        let mut params = self.params.clone();
        params.timestamp = Some(header.ts.clone());
        if let Some(nonce) = header.nonce_bytes()? {
            params.nonce = Some(nonce);
        }
        params.method = params.method.map(|m| m.to_uppercase());

        let mac = Mac::new(key, &params.signing_string(&self.trailer))?;

        if util::hundredths(ts) > util::hundredths(util::epoch_secs(now)) {
            debug!(
                "Rejecting Hawk header for {:?}: timestamp {} is in the future",
                header.id, header.ts
            );
            return Err(Error::Expired);
        }

        if !util::timing_safe_eq(mac.to_base64(), &header.mac) {
            debug!("Rejecting Hawk header for {:?}: MAC mismatch", header.id);
            return Err(Error::InvalidMac);
        }

        Ok(())
    }
}

/// Generate a complete Hawk `Authorization` header value for a request, timestamped now.
///
/// The nonce, if given, is signed as-is and carried base64-encoded in the header.
pub fn encode_header<B>(
    id: &str,
    secret: B,
    method: &str,
    url: &Url,
    nonce: Option<&[u8]>,
) -> Result<String>
where
    B: AsRef<[u8]>,
{
    encode_header_at(id, secret, method, url, nonce, SystemTime::now())
}

/// Like `encode_header`, with an explicit timestamp.
pub fn encode_header_at<B>(
    id: &str,
    secret: B,
    method: &str,
    url: &Url,
    nonce: Option<&[u8]>,
    ts: SystemTime,
) -> Result<String>
where
    B: AsRef<[u8]>,
{
    let credentials = Credentials::new(id, secret)?;
    let header = Request::from_url(method, url).make_header_full(&credentials, ts, nonce)?;
    Ok(header.to_string())
}

/// Verify a Hawk `Authorization` header value against a request, as of the current time.
///
/// The header's `id` is not consulted; the caller is responsible for finding the `secret` that
/// belongs to it.
pub fn verify_header<B>(header: &str, secret: B, method: &str, url: &Url) -> Result<()>
where
    B: AsRef<[u8]>,
{
    verify_header_at(header, secret, method, url, SystemTime::now())
}

/// Like `verify_header`, with an explicit verification time.
pub fn verify_header_at<B>(
    header: &str,
    secret: B,
    method: &str,
    url: &Url,
    now: SystemTime,
) -> Result<()>
where
    B: AsRef<[u8]>,
{
    let header = Header::from_str(header)?;
    let key = Key::new(secret)?;
    Request::from_url(method, url).validate_header(&header, &key, now)
}
