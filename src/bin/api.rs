use genapi::ai::LlmClient;
use genapi::api::handler;
use genapi::core::config::AppConfig;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::{error, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    genapi::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    if !config.has_api_key() {
        warn!("OPENAI_API_KEY is not set; upstream calls will be rejected");
    }

    // Built once per cold start and shared by every invocation.
    let llm = LlmClient::from_config(&config);
    let llm = &llm;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(llm, event).await
    }))
    .await
}
