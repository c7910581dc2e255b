use serde::{Deserialize, Serialize};

use super::Headers;

/// Canned response paired with a request template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseDetails {
    pub status: u16,
    pub body: String,
    /// Body is base64 text (binary payload recorded by the proxy).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub encoded_body: bool,
    #[serde(skip_serializing_if = "Headers::is_empty")]
    pub headers: Headers,
}

impl ResponseDetails {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
