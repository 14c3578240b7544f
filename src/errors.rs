use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse request body: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    /// Error surfaced by the client helper; displays the proxy's message verbatim.
    #[error("{0}")]
    Generation(String),
}

impl From<reqwest::Error> for GenerateError {
    fn from(error: reqwest::Error) -> Self {
        GenerateError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(error: serde_json::Error) -> Self {
        GenerateError::ParseError(error.to_string())
    }
}

impl From<base64::DecodeError> for GenerateError {
    fn from(error: base64::DecodeError) -> Self {
        GenerateError::ParseError(format!("Invalid base64 body: {error}"))
    }
}

impl From<url::ParseError> for GenerateError {
    fn from(error: url::ParseError) -> Self {
        GenerateError::ConfigError(format!("Invalid URL: {error}"))
    }
}
