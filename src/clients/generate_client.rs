//! Client helper for the generate route
//!
//! Callers get back either the generated text or a single error whose
//! message is whatever the proxy reported.

use reqwest::Client;
use serde::Serialize;
use tracing::error;
use url::Url;

use crate::api::generate::GENERATE_PATH;
use crate::core::models::{GenerationOptions, GenerationResponse};
use crate::errors::GenerateError;

/// Used when the proxy answers without an `error` field.
pub const GENERATION_FAILED_MESSAGE: &str = "generation failed";

#[derive(Serialize)]
struct GenerateBody<'a> {
    prompt: &'a str,
    options: GenerationOptions,
}

pub struct GenerateClient {
    http: Client,
    endpoint: Url,
}

impl GenerateClient {
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not a valid absolute URL.
    ///
    /// Any path on `base_url` (an API Gateway stage, say) is kept in front of
    /// the route path.
    pub fn new(base_url: &str) -> Result<Self, GenerateError> {
        let mut endpoint = Url::parse(base_url)?;
        endpoint
            .path_segments_mut()
            .map_err(|()| {
                GenerateError::ConfigError(format!("Base URL cannot carry a path: {base_url}"))
            })?
            .pop_if_empty()
            .extend(GENERATE_PATH.trim_start_matches('/').split('/'));
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one generate request and unwraps the envelope.
    ///
    /// Defaults are filled in before sending, so the proxy always receives
    /// every option.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Generation` carrying the proxy's error message,
    /// the fallback message, or the transport error's message.
    pub async fn generate_completion(
        &self,
        prompt: &str,
        options: Option<&GenerationOptions>,
    ) -> Result<String, GenerateError> {
        let options = GenerationOptions::from(options.cloned().unwrap_or_default().resolve());
        let body = GenerateBody { prompt, options };

        let envelope = self.send(&body).await.map_err(|e| {
            error!("Generate request failed: {}", e);
            GenerateError::Generation(e.to_string())
        })?;

        match envelope {
            GenerationResponse {
                success: true,
                data: Some(data),
                ..
            } if !data.is_empty() => Ok(data),
            GenerationResponse { error, .. } => Err(GenerateError::Generation(
                error.unwrap_or_else(|| GENERATION_FAILED_MESSAGE.to_string()),
            )),
        }
    }

    async fn send(&self, body: &GenerateBody<'_>) -> Result<GenerationResponse, reqwest::Error> {
        self.http
            .post(self.endpoint.clone())
            .json(body)
            .send()
            .await?
            .json::<GenerationResponse>()
            .await
    }
}
