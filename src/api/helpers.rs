//! Response builders for Lambda proxy integrations.
//!
//! API Gateway turns `{ statusCode, headers, body }` into the HTTP response;
//! `body` must be a string, so JSON payloads are serialized here.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

use crate::core::models::GenerationResponse;

/// Returns a response with the given status code and a serialized JSON body.
#[must_use]
pub fn json_response<T: Serialize>(status_code: u16, body: &T) -> Value {
    let body = serde_json::to_string(body).unwrap_or_else(|e| {
        error!("Failed to serialize response body: {}", e);
        "{}".to_string()
    });

    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body
    })
}

/// Returns a 200 OK response carrying a successful envelope.
#[must_use]
pub fn ok_generation(data: &str) -> Value {
    json_response(200, &GenerationResponse::success(data))
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}
