//! Cache keys for inbound requests.
//!
//! The key is the lowercase hex MD5 digest of the identity fields concatenated
//! in the order scheme, method, destination, path, query, body, with no
//! separators. Headers are never part of the key. The algorithm and encoding
//! are part of the persisted format: keys written by one process must be found
//! by the next.

use std::fmt;

use crate::model::RequestDetails;

/// Hex digest identifying a request, used verbatim as the store key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub hex: String,
}

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Store key bytes (the UTF-8 hex text).
    pub fn as_key(&self) -> &[u8] {
        self.hex.as_bytes()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

pub fn md5_hex(raw: &[u8]) -> String {
    format!("{:x}", md5::compute(raw))
}

/// Computes the cache key for a request.
pub fn fingerprint(request: &RequestDetails) -> Fingerprint {
    let raw = request.identity_fields().concat();
    Fingerprint {
        hex: md5_hex(raw.as_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_is_md5_of_empty_string() {
        let fp = fingerprint(&RequestDetails::default());
        assert_eq!(fp.as_str(), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(fp.as_key(), b"d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_fingerprint_stability() {
        let req = RequestDetails::new("http", "GET", "example.com", "/api", "a=1", "");
        let fp1 = fingerprint(&req);
        let fp2 = fingerprint(&req.clone());
        assert_eq!(fp1, fp2);
        assert_eq!(fp1.hex.len(), 32);
        assert!(fp1.hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_known_vector() {
        let req = RequestDetails::new("http", "GET", "example.com", "/", "", "");
        assert_eq!(fingerprint(&req).hex, md5_hex(b"httpGETexample.com/"));
        assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_headers_do_not_change_fingerprint() {
        let plain = RequestDetails::new("https", "POST", "api.test", "/v1", "", "{}");
        let with_headers = plain
            .clone()
            .with_header("Authorization", "Bearer abc")
            .with_header("Accept", "application/json");
        assert_eq!(fingerprint(&plain), fingerprint(&with_headers));
    }

    #[test]
    fn test_each_identity_field_contributes() {
        let base = RequestDetails::new("http", "GET", "host", "/p", "q", "b");
        let base_fp = fingerprint(&base);

        let variants = [
            RequestDetails { scheme: "https".into(), ..base.clone() },
            RequestDetails { method: "PUT".into(), ..base.clone() },
            RequestDetails { destination: "other".into(), ..base.clone() },
            RequestDetails { path: "/x".into(), ..base.clone() },
            RequestDetails { query: "z".into(), ..base.clone() },
            RequestDetails { body: "c".into(), ..base.clone() },
        ];
        for variant in &variants {
            assert_ne!(fingerprint(variant), base_fp, "{variant:?}");
        }
    }

    #[test]
    fn test_concatenation_has_no_separators() {
        // Moving a character across a field boundary yields the same raw bytes.
        let a = RequestDetails::new("http", "GET", "", "", "", "");
        let b = RequestDetails::new("httpG", "ET", "", "", "", "");
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }
}
