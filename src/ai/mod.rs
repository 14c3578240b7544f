//! Upstream text generation

pub mod client;

use async_trait::async_trait;

use crate::core::models::CompletionParams;
use crate::errors::GenerateError;

pub use client::LlmClient;

/// The upstream chat-completion capability the proxy route forwards to.
///
/// `Ok(None)` means the call succeeded but the first choice carried no text.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<Option<String>, GenerateError>;
}
