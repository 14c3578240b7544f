#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use genapi::ai::ChatCompletion;
use genapi::core::models::CompletionParams;
use genapi::errors::GenerateError;
use serde_json::Value;

/// Upstream stand-in that records every call and replays a canned outcome.
pub struct RecordingLlm {
    outcome: Outcome,
    calls: Mutex<Vec<(String, CompletionParams)>>,
}

enum Outcome {
    Reply(Option<String>),
    Fail(fn() -> GenerateError),
}

impl RecordingLlm {
    pub fn replying(text: &str) -> Self {
        Self::with(Outcome::Reply(Some(text.to_string())))
    }

    pub fn empty() -> Self {
        Self::with(Outcome::Reply(None))
    }

    pub fn failing(make_error: fn() -> GenerateError) -> Self {
        Self::with(Outcome::Fail(make_error))
    }

    fn with(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, CompletionParams)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatCompletion for RecordingLlm {
    async fn complete(
        &self,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<Option<String>, GenerateError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), params.clone()));
        match &self.outcome {
            Outcome::Reply(text) => Ok(text.clone()),
            Outcome::Fail(make_error) => Err(make_error()),
        }
    }
}

/// Splits a Lambda proxy response into its status code and decoded JSON body.
pub fn status_and_body(response: &Value) -> (u64, Value) {
    let status = response["statusCode"].as_u64().unwrap();
    let body = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    (status, body)
}
