use serde_json::Value;

use super::method::HttpMethod;

/// A validated call ready to go on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestInput {
    pub method: HttpMethod,
    pub url: String,
    pub body: Value,
}
