//! API Lambda handler - thin router in front of the generate route.
//!
//! This module handles:
//! - Path and method routing for API Gateway / function URL events
//! - Body extraction (including base64-encoded bodies)
//! - Delegation to the `generate` route with the shared upstream client

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::generate::{self, Failure, GENERATE_PATH};
use super::{helpers, parsing};
use crate::ai::ChatCompletion;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails the invocation; every outcome is expressed as a proxy response.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    llm: &dyn ChatCompletion,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(route_request(llm, &event.payload).await)
}

/// Routes a raw API Gateway payload and returns the proxy response.
pub async fn route_request(llm: &dyn ChatCompletion, payload: &Value) -> Value {
    // Direct invocations carry neither a path nor a method.
    let path = parsing::request_path(payload).unwrap_or(GENERATE_PATH);
    let method = parsing::request_method(payload).unwrap_or("POST");

    let trace_id = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "X-Amzn-Trace-Id"))
        .unwrap_or("");
    info!(path = %path, method = %method, xray_trace_id = %trace_id, "API Lambda received request");

    if !path.ends_with(GENERATE_PATH) {
        warn!(path = %path, "No route for path");
        return helpers::err_response(404, "Not found");
    }

    if !method.eq_ignore_ascii_case("POST") {
        warn!(method = %method, "Method not allowed on generate route");
        return helpers::err_response(405, "Method not allowed");
    }

    match parsing::extract_body(payload) {
        Ok(body) => generate::handle_generate(llm, &body).await,
        Err(e) => {
            error!("Failed to read request body: {}", e);
            Failure::from(&e).into_response()
        }
    }
}
