use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::GenerateError;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Optional generation knobs as they appear on the wire (`maxTokens` is camelCase).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl GenerationOptions {
    /// Reads options leniently: fields with an unusable value are treated as absent.
    ///
    /// `maxTokens` may arrive as a whole-valued float (`1000.0`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_value(value: &Value) -> Self {
        Self {
            model: value
                .get("model")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(ToString::to_string),
            max_tokens: value
                .get("maxTokens")
                .and_then(Value::as_f64)
                .filter(|n| n.fract() == 0.0 && *n > 0.0 && *n <= f64::from(u32::MAX))
                .map(|n| n as u32),
            temperature: value.get("temperature").and_then(Value::as_f64),
        }
    }

    /// Merges these options over the defaults.
    #[must_use]
    pub fn resolve(&self) -> CompletionParams {
        let defaults = CompletionParams::default();
        CompletionParams {
            model: self
                .model
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or(defaults.model),
            max_tokens: self
                .max_tokens
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_tokens),
            temperature: self.temperature.unwrap_or(defaults.temperature),
        }
    }
}

/// Fully resolved parameters handed to the upstream chat completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl From<CompletionParams> for GenerationOptions {
    fn from(params: CompletionParams) -> Self {
        Self {
            model: Some(params.model),
            max_tokens: Some(params.max_tokens),
            temperature: Some(params.temperature),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerationOptions>,
}

impl GenerationRequest {
    /// # Errors
    ///
    /// Returns `ParseError` for a `null` body, which has no fields to read,
    /// and `InvalidInput` when `prompt` is missing, not a string, or empty.
    pub fn from_value(body: &Value) -> Result<Self, GenerateError> {
        if body.is_null() {
            return Err(GenerateError::ParseError("request body is null".to_string()));
        }

        let prompt = body
            .get("prompt")
            .and_then(Value::as_str)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                GenerateError::InvalidInput("prompt must be a non-empty string".to_string())
            })?;

        let options = body
            .get("options")
            .filter(|o| o.is_object())
            .map(GenerationOptions::from_value);

        Ok(Self {
            prompt: prompt.to_string(),
            options,
        })
    }

    #[must_use]
    pub fn params(&self) -> CompletionParams {
        self.options
            .as_ref()
            .map(GenerationOptions::resolve)
            .unwrap_or_default()
    }
}

/// The uniform `{success, data?, error?}` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResponse {
    #[must_use]
    pub fn success(data: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data.into()),
            error: None,
        }
    }
}
