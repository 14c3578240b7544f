use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::GenerateError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Request path from an HTTP API (`rawPath`) or REST API (`path`) event.
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

/// Request method from an HTTP API (`requestContext.http.method`) or REST API (`httpMethod`) event.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Extracts the raw request body, decoding it when API Gateway base64-encoded it.
///
/// A missing or `null` body yields an empty string.
///
/// # Errors
///
/// Returns `ParseError` if the body is flagged as base64 but does not decode to UTF-8 text.
pub fn extract_body(payload: &Value) -> Result<String, GenerateError> {
    let raw = v_str(payload, &["body"]).unwrap_or("");

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !encoded {
        return Ok(raw.to_string());
    }

    let bytes = STANDARD.decode(raw)?;
    String::from_utf8(bytes)
        .map_err(|e| GenerateError::ParseError(format!("Body is not valid UTF-8: {e}")))
}

/// Parses the request body as JSON.
///
/// # Errors
///
/// Returns `ParseError` if the body is not valid JSON.
pub fn parse_json_body(body: &str) -> Result<Value, GenerateError> {
    Ok(serde_json::from_str(body)?)
}
