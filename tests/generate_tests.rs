mod support;

use genapi::api::generate::{FALLBACK_REPLY, handle_generate};
use genapi::core::models::CompletionParams;
use genapi::errors::GenerateError;
use serde_json::json;
use support::{RecordingLlm, status_and_body};

#[tokio::test]
async fn test_tell_me_a_joke_uses_defaults_and_returns_text() {
    let llm = RecordingLlm::replying("Why did the crab never share? Because he's shellfish.");

    let response = handle_generate(&llm, r#"{"prompt":"Tell me a joke"}"#).await;
    let (status, body) = status_and_body(&response);

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": "Why did the crab never share? Because he's shellfish."
        })
    );

    let calls = llm.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "Tell me a joke");
    assert_eq!(
        calls[0].1,
        CompletionParams {
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
        }
    );
}

#[tokio::test]
async fn test_response_is_json_proxy_response() {
    let llm = RecordingLlm::replying("ok");
    let response = handle_generate(&llm, r#"{"prompt":"hi"}"#).await;
    assert_eq!(response["headers"]["Content-Type"], "application/json");
    assert!(response["body"].is_string());
}

#[tokio::test]
async fn test_partial_options_pass_through() {
    let llm = RecordingLlm::replying("ok");
    let body = r#"{"prompt":"hi","options":{"model":"gpt-4o","temperature":0.1}}"#;

    let (status, _) = status_and_body(&handle_generate(&llm, body).await);

    assert_eq!(status, 200);
    assert_eq!(
        llm.calls()[0].1,
        CompletionParams {
            model: "gpt-4o".to_string(),
            max_tokens: 1000,
            temperature: 0.1,
        }
    );
}

#[tokio::test]
async fn test_invalid_prompt_is_rejected_without_upstream_call() {
    let bodies = [
        r"{}",
        r#"{"prompt":""}"#,
        r#"{"prompt":123}"#,
        r#"{"prompt":null,"options":{"model":"gpt-4o"}}"#,
        r#"["prompt"]"#,
    ];

    for body in bodies {
        let llm = RecordingLlm::replying("unused");
        let (status, json) = status_and_body(&handle_generate(&llm, body).await);

        assert_eq!(status, 400, "body: {body}");
        assert_eq!(json, json!({ "error": "please provide valid input" }));
        assert!(llm.calls().is_empty(), "upstream called for body: {body}");
    }
}

#[tokio::test]
async fn test_malformed_json_is_generic_failure() {
    let llm = RecordingLlm::replying("unused");
    let (status, json) = status_and_body(&handle_generate(&llm, "{prompt:").await);

    assert_eq!(status, 500);
    assert_eq!(
        json,
        json!({ "error": "AI service is temporarily unavailable, please try again later" })
    );
    assert!(llm.calls().is_empty());
}

#[tokio::test]
async fn test_null_body_is_generic_failure() {
    let llm = RecordingLlm::replying("unused");
    let (status, json) = status_and_body(&handle_generate(&llm, "null").await);

    assert_eq!(status, 500);
    assert_eq!(
        json,
        json!({ "error": "AI service is temporarily unavailable, please try again later" })
    );
    assert!(llm.calls().is_empty());
}

#[tokio::test]
async fn test_missing_completion_text_uses_fallback() {
    let llm = RecordingLlm::empty();
    let (status, json) = status_and_body(&handle_generate(&llm, r#"{"prompt":"hi"}"#).await);

    assert_eq!(status, 200);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], FALLBACK_REPLY);
}

#[tokio::test]
async fn test_api_key_errors_map_to_500() {
    let llm = RecordingLlm::failing(|| {
        GenerateError::OpenAIError("401 Incorrect API key provided: sk-***".to_string())
    });
    let (status, json) = status_and_body(&handle_generate(&llm, r#"{"prompt":"hi"}"#).await);

    assert_eq!(status, 500);
    assert_eq!(json, json!({ "error": "API key configuration error" }));
    assert_eq!(json.get("success"), None);
}

#[tokio::test]
async fn test_quota_errors_map_to_429() {
    let llm = RecordingLlm::failing(|| {
        GenerateError::OpenAIError("429 You exceeded your current quota".to_string())
    });
    let (status, json) = status_and_body(&handle_generate(&llm, r#"{"prompt":"hi"}"#).await);

    assert_eq!(status, 429);
    assert_eq!(
        json,
        json!({ "error": "quota exhausted, please check account balance" })
    );
}

#[tokio::test]
async fn test_other_errors_map_to_generic_500() {
    let llm = RecordingLlm::failing(|| {
        GenerateError::HttpError("OpenAI API request failed: connection reset".to_string())
    });
    let (status, json) = status_and_body(&handle_generate(&llm, r#"{"prompt":"hi"}"#).await);

    assert_eq!(status, 500);
    assert_eq!(
        json,
        json!({ "error": "AI service is temporarily unavailable, please try again later" })
    );
    assert_eq!(llm.calls().len(), 1);
}
