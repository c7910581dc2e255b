use serde::{Deserialize, Serialize};

use super::{Headers, RequestDetails};

/// How one request field is compared against a template.
///
/// A template field holding `None` matches any value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldMatcher {
    ExactMatch(String),
    RegexMatch(String),
}

impl FieldMatcher {
    pub fn exact(value: impl Into<String>) -> Self {
        FieldMatcher::ExactMatch(value.into())
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        FieldMatcher::RegexMatch(pattern.into())
    }

    /// The literal value when this is an exact-equality matcher.
    pub fn as_exact(&self) -> Option<&str> {
        match self {
            FieldMatcher::ExactMatch(value) => Some(value),
            FieldMatcher::RegexMatch(_) => None,
        }
    }
}

/// One matchable rule: per-field matchers plus expected headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<FieldMatcher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<FieldMatcher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<FieldMatcher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<FieldMatcher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<FieldMatcher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<FieldMatcher>,
    #[serde(skip_serializing_if = "Headers::is_empty")]
    pub headers: Headers,
}

fn exact_literal(field: &Option<FieldMatcher>) -> Option<&str> {
    field.as_ref().and_then(FieldMatcher::as_exact)
}

impl RequestTemplate {
    /// True when every identity field is pinned by an exact matcher, so the
    /// only request this template can match is known ahead of time.
    ///
    /// Headers play no part here.
    pub fn is_fully_exact(&self) -> bool {
        [
            &self.destination,
            &self.method,
            &self.path,
            &self.query,
            &self.scheme,
            &self.body,
        ]
        .into_iter()
        .all(|field| exact_literal(field).is_some())
    }

    /// The single request a fully exact template matches, without headers.
    pub fn exact_request(&self) -> Option<RequestDetails> {
        Some(RequestDetails::new(
            exact_literal(&self.scheme)?,
            exact_literal(&self.method)?,
            exact_literal(&self.destination)?,
            exact_literal(&self.path)?,
            exact_literal(&self.query)?,
            exact_literal(&self.body)?,
        ))
    }

    pub fn has_headers(&self) -> bool {
        !self.headers.is_empty()
    }
}
