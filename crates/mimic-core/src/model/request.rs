use serde::{Deserialize, Serialize};

use super::Headers;

/// An inbound request as seen by the proxy.
///
/// `scheme`, `method`, `destination`, `path`, `query` and `body` form the
/// request identity that is fingerprinted. `headers` travel with the request
/// but never contribute to the fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestDetails {
    pub scheme: String,
    pub method: String,
    pub destination: String,
    pub path: String,
    pub query: String,
    pub body: String,
    #[serde(skip_serializing_if = "Headers::is_empty")]
    pub headers: Headers,
}

impl RequestDetails {
    pub fn new(
        scheme: impl Into<String>,
        method: impl Into<String>,
        destination: impl Into<String>,
        path: impl Into<String>,
        query: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            method: method.into(),
            destination: destination.into(),
            path: path.into(),
            query: query.into(),
            body: body.into(),
            headers: Headers::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Identity fields in fingerprint order.
    pub fn identity_fields(&self) -> [&str; 6] {
        [
            self.scheme.as_str(),
            self.method.as_str(),
            self.destination.as_str(),
            self.path.as_str(),
            self.query.as_str(),
            self.body.as_str(),
        ]
    }
}
