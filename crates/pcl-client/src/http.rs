//! Response envelope handling.
//!
//! Every backend response is a JSON object. A call succeeded only when the
//! status is 2xx **and** the body carries `success: true`; otherwise the
//! user-facing message is `error`, then `details`, then the caller's fallback.

use serde_json::{Map, Value};

use crate::error::ClientError;

/// Read and check an enveloped response, returning the JSON object.
///
/// - **401** without an `error` field (token missing, expired, or refused)
///   → [`ClientError::Unauthorized`].
/// - **Non-success status** → [`ClientError::Api`].
/// - **2xx without `success: true`** → [`ClientError::Rejected`].
pub async fn read_envelope(
    resp: reqwest::Response,
    fallback: &str,
) -> Result<Map<String, Value>, ClientError> {
    let status = resp.status();
    let text = resp.text().await?;
    let body = serde_json::from_str::<Value>(&text).ok();
    let object = body.as_ref().and_then(Value::as_object);

    if status.as_u16() == 401 && object.is_none_or(|o| !o.contains_key("error")) {
        return Err(ClientError::Unauthorized);
    }
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(object, fallback),
        });
    }

    let Some(object) = object else {
        return Err(ClientError::Parse(format!(
            "expected a JSON object, got: {}",
            truncate(&text, 120)
        )));
    };
    if object.get("success").and_then(Value::as_bool) != Some(true) {
        return Err(ClientError::Rejected(error_message(Some(object), fallback)));
    }
    Ok(object.clone())
}

/// Read the response of a public enquiry endpoint. Any 2xx counts as
/// accepted, with or without an envelope; the body is returned when it is a
/// JSON object.
///
/// # Errors
///
/// Returns [`ClientError::Api`] for a non-success status.
pub async fn read_acknowledgement(
    resp: reqwest::Response,
    fallback: &str,
) -> Result<Map<String, Value>, ClientError> {
    let status = resp.status();
    let text = resp.text().await?;
    let body = serde_json::from_str::<Value>(&text).ok();
    let object = body.as_ref().and_then(Value::as_object);
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(object, fallback),
        });
    }
    Ok(object.cloned().unwrap_or_default())
}

/// `error`, then `details`, then `fallback`.
fn error_message(body: Option<&Map<String, Value>>, fallback: &str) -> String {
    body.and_then(|b| {
        ["error", "details"].iter().find_map(|key| {
            b.get(*key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
    })
    .unwrap_or(fallback)
    .to_string()
}

fn truncate(text: &str, max: usize) -> &str {
    text.char_indices().nth(max).map_or(text, |(i, _)| &text[..i])
}
