//! LLM (`OpenAI`) API client module
//!
//! Speaks the chat-completions wire format. Request bodies are built from
//! `openai-api-rs` types; responses are read as loose JSON so that a missing
//! or `null` content field is not a decoding failure.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{
    ChatCompletionMessage, ChatCompletionRequest, Content, MessageRole,
};
use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

use super::ChatCompletion;
use crate::core::config::AppConfig;
use crate::core::models::CompletionParams;
use crate::errors::GenerateError;

/// LLM API client for chat completions
pub struct LlmClient {
    http: Client,
    api_key: String,
    org_id: Option<String>,
    base_url: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: String, org_id: Option<String>, base_url: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            org_id,
            base_url,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.openai_api_key.clone(),
            config.openai_org_id.clone(),
            config.openai_base_url.clone(),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    #[must_use]
    pub fn build_request(prompt: &str, params: &CompletionParams) -> ChatCompletionRequest {
        let messages = vec![ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(prompt.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }];

        ChatCompletionRequest::new(params.model.clone(), messages)
            .max_tokens(i64::from(params.max_tokens))
            .temperature(params.temperature)
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    /// # Errors
    ///
    /// Returns `HttpError` if the request cannot be sent or the body cannot be
    /// read, and `OpenAIError` carrying the vendor message for non-2xx replies.
    async fn complete(
        &self,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<Option<String>, GenerateError> {
        #[cfg(feature = "debug-logs")]
        info!("Using chat prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %params.model,
            max_tokens = params.max_tokens,
            temperature = params.temperature,
            prompt_chars = prompt.chars().count(),
            "Requesting chat completion"
        );

        let request = Self::build_request(prompt, params);

        let mut builder = self.http.post(self.endpoint()).json(&request);
        if !self.api_key.trim().is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }
        if let Some(org) = &self.org_id {
            builder = builder.header("OpenAI-Organization", org);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GenerateError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = upstream_error_message(&body);
            warn!(status = status.as_u16(), "Chat completion rejected upstream");
            return Err(GenerateError::OpenAIError(format!(
                "{} {}",
                status.as_u16(),
                message
            )));
        }

        let json: Value = serde_json::from_str(&body).map_err(|e| {
            GenerateError::OpenAIError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        Ok(first_choice_text(&json))
    }
}

/// Prefers `error.message` from an `OpenAI` error body, falling back to the raw text.
fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

fn first_choice_text(json: &Value) -> Option<String> {
    json.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
