//! `POST /api/generate`: validate, forward upstream, classify failures.

use serde_json::Value;
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::ai::ChatCompletion;
use crate::core::models::GenerationRequest;
use crate::errors::GenerateError;

pub const GENERATE_PATH: &str = "/api/generate";

/// Returned when the first choice carries no text.
pub const FALLBACK_REPLY: &str = "Unable to generate a reply";

pub const INVALID_INPUT_MESSAGE: &str = "please provide valid input";
pub const API_KEY_MESSAGE: &str = "API key configuration error";
pub const QUOTA_MESSAGE: &str = "quota exhausted, please check account balance";
pub const UNAVAILABLE_MESSAGE: &str =
    "AI service is temporarily unavailable, please try again later";

/// Failure categories the route reports to its callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    InvalidInput,
    ApiKey,
    Quota,
    Unavailable,
}

impl Failure {
    /// Classifies an upstream failure by its message. `"API key"` wins over `"quota"`.
    #[must_use]
    pub fn classify(message: &str) -> Self {
        if message.contains("API key") {
            Self::ApiKey
        } else if message.contains("quota") {
            Self::Quota
        } else {
            Self::Unavailable
        }
    }

    #[must_use]
    pub fn status_code(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::Quota => 429,
            Self::ApiKey | Self::Unavailable => 500,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidInput => INVALID_INPUT_MESSAGE,
            Self::ApiKey => API_KEY_MESSAGE,
            Self::Quota => QUOTA_MESSAGE,
            Self::Unavailable => UNAVAILABLE_MESSAGE,
        }
    }

    #[must_use]
    pub fn into_response(self) -> Value {
        helpers::err_response(self.status_code(), self.message())
    }
}

impl From<&GenerateError> for Failure {
    fn from(error: &GenerateError) -> Self {
        match error {
            GenerateError::InvalidInput(_) => Self::InvalidInput,
            GenerateError::ParseError(_) => Self::Unavailable,
            other => Self::classify(&other.to_string()),
        }
    }
}

/// Handles a generate request body and returns the Lambda proxy response.
///
/// The upstream is only called once the body has parsed and the prompt has
/// validated.
#[tracing::instrument(level = "info", skip_all)]
pub async fn handle_generate(llm: &dyn ChatCompletion, body: &str) -> Value {
    match generate(llm, body).await {
        Ok(text) => helpers::ok_generation(&text),
        Err(e) => {
            let failure = Failure::from(&e);
            match failure {
                Failure::InvalidInput => warn!("Rejected generate request: {}", e),
                _ => error!(
                    status = failure.status_code(),
                    "Chat completion call failed: {}", e
                ),
            }
            failure.into_response()
        }
    }
}

async fn generate(llm: &dyn ChatCompletion, body: &str) -> Result<String, GenerateError> {
    let json = parsing::parse_json_body(body)?;
    let request = GenerationRequest::from_value(&json)?;
    let params = request.params();

    info!(
        model = %params.model,
        max_tokens = params.max_tokens,
        temperature = params.temperature,
        "Forwarding generate request"
    );

    let text = llm.complete(&request.prompt, &params).await?;
    Ok(text.unwrap_or_else(|| FALLBACK_REPLY.to_string()))
}
