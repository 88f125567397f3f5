use serde::{Deserialize, Serialize};

use crate::http::method::HttpMethod;
use crate::http::response::HttpResponse;

/// Pass/fail state of a test that has been run at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestResult {
    Success,
    Failure,
}

/// One planned HTTP call.
///
/// `input` holds pretty-printed JSON text and is only parsed when the test is
/// executed or exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub base_url: String,
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
    pub input: String,
    pub result: Option<TestResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl TestCase {
    pub fn new(
        base_url: impl Into<String>,
        endpoint: impl Into<String>,
        method: Option<HttpMethod>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: endpoint.into(),
            method,
            input: input.into(),
            result: None,
            detail: None,
        }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }
}

/// What a single execution produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(HttpResponse),
    Failure(String),
}

impl Outcome {
    pub fn result(&self) -> TestResult {
        match self {
            Outcome::Success(_) => TestResult::Success,
            Outcome::Failure(_) => TestResult::Failure,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Outcome::Success(response) => {
                format!(
                    "{} | {} ms | {} bytes",
                    response.status_line(),
                    response.duration_ms,
                    response.size_bytes
                )
            }
            Outcome::Failure(reason) => reason.clone(),
        }
    }
}
