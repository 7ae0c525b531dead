//! Status handling for Gemini responses.
//!
//! Gemini reports failures as a Google RPC envelope:
//!
//! ```json
//! {"error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED",
//!            "details": [{"@type": "type.googleapis.com/google.rpc.RetryInfo", "retryDelay": "17s"}]}}
//! ```
//!
//! The `message` becomes [`AiError::Api`]'s message so callers see the
//! provider's wording instead of raw JSON.

use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::Deserialize;

use crate::error::AiError;

const RETRY_INFO_TYPE: &str = "type.googleapis.com/google.rpc.RetryInfo";
const DEFAULT_RETRY_SECS: u64 = 60;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: RpcStatus,
}

#[derive(Deserialize)]
struct RpcStatus {
    #[serde(default)]
    message: String,
    #[serde(default)]
    details: Vec<RpcDetail>,
}

#[derive(Deserialize)]
struct RpcDetail {
    #[serde(rename = "@type", default)]
    kind: String,
    #[serde(rename = "retryDelay")]
    retry_delay: Option<String>,
}

/// Pass a successful response through; map anything else to an [`AiError`].
///
/// - 429 → [`AiError::RateLimited`]. The delay comes from `Retry-After`, then
///   from the body's `RetryInfo.retryDelay`, then defaults to 60 s. Nothing
///   here retries.
/// - other non-2xx → [`AiError::Api`] carrying `error.message` from the body,
///   or the raw body when it is not a Gemini error envelope.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let header_delay = retry_after_header(resp.headers());
    let body = resp.text().await.unwrap_or_default();
    let envelope = serde_json::from_str::<ErrorEnvelope>(&body).ok();

    if status.as_u16() == 429 {
        let retry_after_secs = header_delay
            .or_else(|| envelope.as_ref().and_then(retry_info_delay))
            .unwrap_or(DEFAULT_RETRY_SECS);
        return Err(AiError::RateLimited { retry_after_secs });
    }

    let message = match envelope {
        Some(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
        _ => body,
    };
    Err(AiError::Api {
        status: status.as_u16(),
        message,
    })
}

fn retry_after_header(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
}

/// `retryDelay` is a protobuf Duration string such as `"17s"` or `"1.5s"`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn retry_info_delay(envelope: &ErrorEnvelope) -> Option<u64> {
    envelope
        .error
        .details
        .iter()
        .filter(|detail| detail.kind == RETRY_INFO_TYPE)
        .find_map(|detail| detail.retry_delay.as_deref())
        .and_then(|delay| delay.strip_suffix('s'))
        .and_then(|secs| secs.parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .map(|secs| secs.ceil() as u64)
}
