use std::time::Instant;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::ExecuteError;
use crate::testing::{Outcome, TestCase};

use super::request::RequestInput;
use super::response::HttpResponse;

/// Which responses count as a passing test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Only 2xx responses pass; anything else is recorded as a failure.
    #[default]
    Successful,
    /// Any response that arrives passes, whatever its status.
    AnyResponse,
}

/// Validate a test case into a wire-ready request without touching the
/// network.
pub fn prepare(case: &TestCase) -> Result<RequestInput, ExecuteError> {
    let method = case.method.ok_or(ExecuteError::MissingMethod)?;
    let body: Value = serde_json::from_str(&case.input)?;
    let url = case.url();
    reqwest::Url::parse(&url).map_err(|e| ExecuteError::InvalidUrl {
        url: url.clone(),
        message: e.to_string(),
    })?;

    Ok(RequestInput { method, url, body })
}

pub async fn send_request(
    request: RequestInput,
    policy: StatusPolicy,
) -> Result<HttpResponse, ExecuteError> {
    let client = reqwest::Client::new();
    let mut req_builder = client.request(request.method.into(), &request.url);
    if !request.body.is_null() {
        req_builder = req_builder.json(&request.body);
    }

    let started = Instant::now();
    let response = req_builder.send().await?;
    let elapsed = started.elapsed().as_millis();

    let status = response.status();
    let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
    if policy == StatusPolicy::Successful && !status.is_success() {
        return Err(ExecuteError::Status {
            status: status.as_u16(),
            reason,
        });
    }

    let bytes = response.bytes().await?;
    Ok(HttpResponse {
        status: status.as_u16(),
        reason,
        duration_ms: elapsed,
        size_bytes: bytes.len(),
        body: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Run one test and fold every error into a failed outcome.
///
/// The outcome is also written to the diagnostic log.
pub async fn execute(index: usize, case: TestCase, policy: StatusPolicy) -> Outcome {
    let label = format!(
        "{} {}",
        case.method.map(|m| m.as_str()).unwrap_or("<none>"),
        case.url()
    );

    let result = match prepare(&case) {
        Ok(request) => send_request(request, policy).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(response) => {
            info!(
                test = index + 1,
                status = response.status,
                duration_ms = response.duration_ms as u64,
                body = %response.body,
                "test passed: {label}"
            );
            Outcome::Success(response)
        }
        Err(err) => {
            warn!(test = index + 1, error = %err, "test failed: {label}");
            Outcome::Failure(err.to_string())
        }
    }
}
