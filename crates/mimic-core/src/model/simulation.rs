use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{RequestTemplate, ResponseDetails};

/// A request template and the response served when it matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestTemplateResponsePair {
    pub request_template: RequestTemplate,
    pub response: ResponseDetails,
}

impl RequestTemplateResponsePair {
    pub fn new(request_template: RequestTemplate, response: ResponseDetails) -> Self {
        Self {
            request_template,
            response,
        }
    }
}

/// Ordered set of template/response pairs loaded into the proxy at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Simulation {
    pub templates: Vec<RequestTemplateResponsePair>,
}

impl Simulation {
    pub fn new(templates: Vec<RequestTemplateResponsePair>) -> Self {
        Self { templates }
    }

    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("failed to parse simulation JSON")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read simulation file {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("in {}", path.display()))
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
