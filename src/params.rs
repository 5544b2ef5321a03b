use crate::util;
use log::trace;
use url::Url;

/// Version of the Hawk header format produced and accepted by this crate.
pub const HAWK_VERSION: u32 = 1;

const DEFAULT_METHOD: &str = "GET";
const DEFAULT_PORT: u16 = 80;
const HTTPS_PORT: u16 = 443;

/// The request parameters covered by a Hawk MAC.
///
/// Every field is optional; fields that are not set take their defaults when the signing
/// string is built: the current time for `timestamp`, `GET` for `method`, an empty `path`
/// and `host`, and port 80.  An unset nonce is left out of the signing string entirely.
///
/// # Examples
///
/// ```
/// use hawk_header::MacParams;
/// let base = MacParams::new().host("example.com").port(443);
/// let params = base.clone().method("POST").path("/api/users");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacParams {
    pub timestamp: Option<String>,
    pub nonce: Option<Vec<u8>>,
    pub method: Option<String>,
    pub path: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// MacParams with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedParams {
    timestamp: String,
    nonce: Option<Vec<u8>>,
    method: String,
    path: String,
    host: String,
    port: u16,
}

impl MacParams {
    pub fn new() -> Self {
        MacParams::default()
    }

    /// Derive the method, host, port, and path from a URL.
    ///
    /// The port is the URL's explicit port if it has one, otherwise 443 for `https` and 80 for
    /// anything else.  The path includes the query and fragment, if present.
    pub fn from_url<S>(method: S, url: &Url) -> Self
    where
        S: Into<String>,
    {
        let port = url.port().unwrap_or_else(|| {
            if url.scheme() == "https" {
                HTTPS_PORT
            } else {
                DEFAULT_PORT
            }
        });

        let mut path = url.path().to_string();
        if let Some(query) = url.query() {
            path.push('?');
            path.push_str(query);
        }
        if let Some(fragment) = url.fragment() {
            path.push('#');
            path.push_str(fragment);
        }

        MacParams {
            timestamp: None,
            nonce: None,
            method: Some(method.into()),
            path: Some(path),
            host: url.host_str().map(|h| h.to_string()),
            port: Some(port),
        }
    }

    /// Set the timestamp, already formatted with `util::decistamp`.
    pub fn timestamp<S: Into<String>>(mut self, timestamp: S) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Set the nonce.  This is the raw value, not its base64 encoding.
    pub fn nonce<B: Into<Vec<u8>>>(mut self, nonce: B) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub fn method<S: Into<String>>(mut self, method: S) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn path<S: Into<String>>(mut self, path: S) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Overlay the fields set in `self` onto the defaults.
    pub(crate) fn resolve(&self) -> ResolvedParams {
        ResolvedParams {
            timestamp: match self.timestamp {
                Some(ref ts) => ts.clone(),
                None => util::decistamp(util::now_secs()),
            },
            nonce: self.nonce.clone(),
            method: self
                .method
                .clone()
                .unwrap_or_else(|| DEFAULT_METHOD.to_string()),
            path: self.path.clone().unwrap_or_default(),
            host: self.host.clone().unwrap_or_default(),
            port: self.port.unwrap_or(DEFAULT_PORT),
        }
    }

    /// Build the string that is signed with the shared key.
    ///
    /// The `trailer` forms the last line, after the (empty) payload-hash and ext lines.  Every
    /// line, including the trailer's, ends with `\n`.
    pub fn signing_string(&self, trailer: &str) -> Vec<u8> {
        self.resolve().signing_string(trailer)
    }
}

impl ResolvedParams {
    pub(crate) fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub(crate) fn signing_string(&self, trailer: &str) -> Vec<u8> {
        let port = self.port.to_string();
        let mut fields: Vec<&[u8]> = vec![self.timestamp.as_bytes()];
        if let Some(ref nonce) = self.nonce {
            fields.push(nonce);
        }
        fields.push(self.method.as_bytes());
        fields.push(self.path.as_bytes());
        fields.push(self.host.as_bytes());
        fields.push(port.as_bytes());

        let mut buffer: Vec<u8> = format!("hawk.{}.header\n", HAWK_VERSION).into_bytes();
        buffer.extend_from_slice(&fields.join(&b'\n'));
        buffer.push(b'\n');
        // payload hash
        buffer.push(b'\n');
        // ext
        buffer.push(b'\n');
        buffer.extend_from_slice(trailer.as_bytes());
        buffer.push(b'\n');

        trace!(
            "Hawk signing string: {:?}",
            String::from_utf8_lossy(&buffer)
        );
        buffer
    }
}
