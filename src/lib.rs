//! genapi - a serverless text-generation proxy for a web front end.
//!
//! This crate implements a single API Lambda behind API Gateway:
//! 1. `POST /api/generate` validates a prompt, forwards it to the `OpenAI`
//!    chat-completions API with default parameters applied, and returns a
//!    `{success, data}` / `{error}` JSON envelope
//! 2. A client helper calls that route and unwraps the envelope
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (`lambda_runtime`) for serverless execution
//! - reqwest for upstream and client-side HTTP
//! - openai-api-rs types for the chat-completion request body
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use genapi::clients::GenerateClient;
//! use genapi::core::models::GenerationOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GenerateClient::new("https://example.com")?;
//!
//!     let joke = client.generate_completion("Tell me a joke", None).await?;
//!     println!("{joke}");
//!
//!     let options = GenerationOptions {
//!         model: Some("gpt-4o-mini".to_string()),
//!         ..GenerationOptions::default()
//!     };
//!     let haiku = client
//!         .generate_completion("Write a haiku about Rust", Some(&options))
//!         .await?;
//!     println!("{haiku}");
//!
//!     Ok(())
//! }
//! ```
// Module declarations
pub mod ai;
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`). It
/// should be called once at cold start; later calls are no-ops.
///
/// # Example
///
/// ```
/// genapi::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
