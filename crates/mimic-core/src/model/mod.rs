//! Domain types shared by the cache and the proxy's matching pipeline.

pub mod request;
pub mod response;
pub mod simulation;
pub mod template;

use std::collections::BTreeMap;

pub use request::RequestDetails;
pub use response::ResponseDetails;
pub use simulation::{RequestTemplateResponsePair, Simulation};
pub use template::{FieldMatcher, RequestTemplate};

/// Header name to ordered values. Ordered by name so serialized entries are stable.
pub type Headers = BTreeMap<String, Vec<String>>;
