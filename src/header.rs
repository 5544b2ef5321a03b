use crate::error::*;
use std::fmt;
use std::str::FromStr;

const SCHEME: &str = "Hawk ";
const SEPARATOR: &str = ", ";

/// Representation of a Hawk `Authorization` header value, including the `Hawk ` scheme.
///
/// All values are kept in their wire form: `nonce` and `mac` are base64 strings and `ts` is the
/// decimal timestamp exactly as it appears in the header.
///
/// Only two shapes are produced and accepted:
///
/// ```text
/// Hawk id="..", ts="..", mac=".."
/// Hawk id="..", ts="..", nonce="..", mac=".."
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Header {
    pub id: String,
    pub ts: String,
    pub nonce: Option<String>,
    pub mac: String,
}

impl Header {
    /// Create a new Header from its wire-form components.
    ///
    /// None of the components can contain the character `"` or the field separator `, `; such
    /// components produce an `InvalidComponent` error.
    pub fn new<S>(id: S, ts: S, nonce: Option<S>, mac: S) -> Result<Header>
    where
        S: Into<String>,
    {
        Ok(Header {
            id: Header::check_component(id)?,
            ts: Header::check_component(ts)?,
            nonce: match nonce {
                Some(nonce) => Some(Header::check_component(nonce)?),
                None => None,
            },
            mac: Header::check_component(mac)?,
        })
    }

    /// Check a header component for validity.
    fn check_component<S>(value: S) -> Result<String>
    where
        S: Into<String>,
    {
        let value = value.into();
        if value.contains('"') {
            return Err(Error::InvalidComponent(format!(
                "Hawk header components cannot contain `\"`: {}",
                value
            )));
        }
        if value.contains(SEPARATOR) {
            return Err(Error::InvalidComponent(format!(
                "Hawk header components cannot contain `{}`: {}",
                SEPARATOR, value
            )));
        }
        Ok(value)
    }

    /// The number of comma-separated fields in this header's wire form.
    pub fn field_count(&self) -> usize {
        if self.nonce.is_some() {
            4
        } else {
            3
        }
    }

    /// Decode the nonce from its base64 wire form into the raw value that was signed.
    pub fn nonce_bytes(&self) -> Result<Option<Vec<u8>>> {
        match self.nonce {
            Some(ref nonce) => base64::decode_config(nonce, base64::STANDARD)
                .map(Some)
                .map_err(|e| Error::malformed(format!("invalid nonce `{}`: {}", nonce, e))),
            None => Ok(None),
        }
    }

    /// Parse the timestamp as fractional seconds since the epoch.
    pub fn ts_secs(&self) -> Result<f64> {
        match f64::from_str(&self.ts) {
            Ok(secs) if secs.is_finite() => Ok(secs),
            _ => Err(Error::malformed(format!("invalid timestamp `{}`", self.ts))),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}id=\"{}\", ts=\"{}\", ", SCHEME, self.id, self.ts)?;
        if let Some(ref nonce) = self.nonce {
            write!(f, "nonce=\"{}\", ", nonce)?;
        }
        write!(f, "mac=\"{}\"", self.mac)
    }
}

/// Extract the value of a single `name="value"` field.
fn field<'a>(segment: &'a str, name: &str) -> Result<&'a str> {
    let unexpected = || {
        Error::malformed(format!(
            "expected `{}=\"..\"`, got `{}`",
            name, segment
        ))
    };

    let rest = match segment.get(..name.len()) {
        Some(prefix) if prefix == name => &segment[name.len()..],
        _ => return Err(unexpected()),
    };
    if !rest.starts_with("=\"") || !rest.ends_with('"') || rest.len() < 3 {
        return Err(unexpected());
    }
    let value = &rest[2..rest.len() - 1];
    // Hawk does not allow escaped quotes, so neither do we
    if value.contains('"') {
        return Err(unexpected());
    }
    Ok(value)
}

impl FromStr for Header {
    type Err = Error;
    fn from_str(s: &str) -> Result<Header> {
        let s = s.trim();

        // Check that it starts with "Hawk " (space not optional)
        match s.get(..SCHEME.len()) {
            Some(scheme) if scheme.eq_ignore_ascii_case(SCHEME) => {}
            _ => return Err(Error::malformed("missing `Hawk` scheme")),
        };

        let segments: Vec<&str> = s[SCHEME.len()..].split(SEPARATOR).collect();
        if segments.len() < 2 {
            return Err(Error::malformed("too few fields"));
        }

        let (id, ts, nonce, mac) = match segments.len() {
            3 => (
                field(segments[0], "id")?,
                field(segments[1], "ts")?,
                None,
                field(segments[2], "mac")?,
            ),
            4 => (
                field(segments[0], "id")?,
                field(segments[1], "ts")?,
                Some(field(segments[2], "nonce")?),
                field(segments[3], "mac")?,
            ),
            n => {
                return Err(Error::malformed(format!(
                    "expected 3 or 4 fields, got {}",
                    n
                )))
            }
        };

        Header::new(id, ts, nonce, mac)
    }
}

#[cfg(test)]
mod test {
    use super::Header;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn assert_malformed(s: &str) {
        match Header::from_str(s) {
            Err(Error::MalformedHeader(_)) => {}
            other => panic!("expected MalformedHeader for {:?}, got {:?}", s, other),
        }
    }

    #[test]
    fn illegal_id() {
        assert!(Header::new("abc\"def", "1234.00", None, "mac").is_err());
    }

    #[test]
    fn illegal_nonce() {
        assert!(Header::new("abcdef", "1234.00", Some("non\"ce"), "mac").is_err());
    }

    #[test]
    fn illegal_mac() {
        assert!(Header::new("abcdef", "1234.00", None, "m\"ac").is_err());
    }

    #[test]
    fn illegal_separator() {
        match Header::new("a, b", "1700000000.00", None, "mac") {
            Err(Error::InvalidComponent(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(Header::new("a", "1700000000.00", Some("n, once"), "mac").is_err());
    }

    #[test]
    fn comma_without_space_round_trips() {
        let s = Header::new("a,b", "1700000000.00", None, "mac").unwrap();
        assert_eq!(Header::from_str(&s.to_string()).unwrap(), s);
    }

    #[test]
    fn from_str_with_nonce() {
        let s = Header::from_str(
            "Hawk id=\"dh37fgj492je\", ts=\"1353832234.00\", nonce=\"ajRoM2cy\", \
             mac=\"6R4rV5iE+NPoym+WwjeHzjAGXUtLNIxmo1vpMofpLAE=\"",
        )
        .unwrap();
        assert_eq!(s.id, "dh37fgj492je");
        assert_eq!(s.ts, "1353832234.00");
        assert_eq!(s.nonce, Some("ajRoM2cy".to_string()));
        assert_eq!(s.mac, "6R4rV5iE+NPoym+WwjeHzjAGXUtLNIxmo1vpMofpLAE=");
        assert_eq!(s.field_count(), 4);
        assert_eq!(s.nonce_bytes().unwrap(), Some(b"j4h3g2".to_vec()));
    }

    #[test]
    fn from_str_without_nonce() {
        let s = Header::from_str(
            "Hawk id=\"xyz\", ts=\"1353832234.50\", \
             mac=\"6R4rV5iE+NPoym+WwjeHzjAGXUtLNIxmo1vpMofpLAE=\"",
        )
        .unwrap();
        assert_eq!(s.id, "xyz");
        assert_eq!(s.ts, "1353832234.50");
        assert_eq!(s.nonce, None);
        assert_eq!(s.field_count(), 3);
        assert_eq!(s.ts_secs().unwrap(), 1353832234.5);
    }

    #[test]
    fn from_str_surrounding_whitespace() {
        let s = Header::from_str("  Hawk id=\"a\", ts=\"1.00\", mac=\"m\"\r\n").unwrap();
        assert_eq!(s.id, "a");
        assert_eq!(s.mac, "m");
    }

    #[test]
    fn from_str_empty_values() {
        let s = Header::from_str("Hawk id=\"\", ts=\"1.00\", mac=\"\"").unwrap();
        assert_eq!(s.id, "");
        assert_eq!(s.mac, "");
    }

    #[test]
    fn from_str_too_few() {
        assert_malformed("Hawk id=\"x\"");
        assert_malformed("Hawk ");
        assert_malformed("");
    }

    #[test]
    fn from_str_two_fields() {
        assert_malformed("Hawk id=\"x\", ts=\"1.00\"");
    }

    #[test]
    fn from_str_too_many() {
        assert_malformed(
            "Hawk id=\"x\", ts=\"1.00\", nonce=\"abc\", ext=\"e\", mac=\"m\"",
        );
    }

    #[test]
    fn from_str_wrong_scheme() {
        assert_malformed("Basic id=\"x\", ts=\"1.00\", mac=\"m\"");
    }

    #[test]
    fn from_str_out_of_order() {
        assert_malformed("Hawk ts=\"1.00\", id=\"x\", mac=\"m\"");
        assert_malformed("Hawk id=\"x\", ts=\"1.00\", mac=\"m\", nonce=\"abc\"");
    }

    #[test]
    fn from_str_bad_quoting() {
        assert_malformed("Hawk id=x, ts=\"1.00\", mac=\"m\"");
        assert_malformed("Hawk id=\"x, ts=\"1.00\", mac=\"m\"");
        assert_malformed("Hawk id=\"x\", ts=\"1.00\", mac=\"m");
        assert_malformed("Hawk id=\"x\", ts=\"1.00\", mac=\"");
    }

    #[test]
    fn from_str_unknown_field() {
        assert_malformed("Hawk id=\"x\", ts=\"1.00\", ext=\"m\"");
    }

    #[test]
    fn nonce_bytes_invalid() {
        let s = Header::from_str("Hawk id=\"x\", ts=\"1.00\", nonce=\"!!\", mac=\"m\"").unwrap();
        match s.nonce_bytes() {
            Err(Error::MalformedHeader(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn ts_secs_invalid() {
        for ts in &["abc", "", "NaN", "inf"] {
            let h = Header::new("x", *ts, None, "m").unwrap();
            assert!(h.ts_secs().is_err(), "{} should not parse", ts);
        }
    }

    #[test]
    fn to_str_minimal() {
        let s = Header::new(
            "dh37fgj492je",
            "1353832234.00",
            None,
            "CCO2lSpvIcATFl4rdrBBRVYEnLhVa/nyrMhC0Tk/JlM=",
        )
        .unwrap();
        assert_eq!(
            format!("{}", s),
            "Hawk id=\"dh37fgj492je\", ts=\"1353832234.00\", \
             mac=\"CCO2lSpvIcATFl4rdrBBRVYEnLhVa/nyrMhC0Tk/JlM=\""
        );
    }

    #[test]
    fn to_str_nonce() {
        let s = Header::new(
            "dh37fgj492je",
            "1353832234.00",
            Some("ajRoM2cy"),
            "CCO2lSpvIcATFl4rdrBBRVYEnLhVa/nyrMhC0Tk/JlM=",
        )
        .unwrap();
        assert_eq!(
            format!("{}", s),
            "Hawk id=\"dh37fgj492je\", ts=\"1353832234.00\", nonce=\"ajRoM2cy\", \
             mac=\"CCO2lSpvIcATFl4rdrBBRVYEnLhVa/nyrMhC0Tk/JlM=\""
        );
    }

    #[test]
    fn round_trip() {
        let s = Header::new(
            "dh37fgj492je",
            "1353832234.00",
            Some("ajRoM2cy"),
            "CCO2lSpvIcATFl4rdrBBRVYEnLhVa/nyrMhC0Tk/JlM=",
        )
        .unwrap();
        let s2 = Header::from_str(&s.to_string()).unwrap();
        assert_eq!(s2, s);
    }
}
