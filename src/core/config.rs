use std::env;

use url::Url;

use crate::errors::GenerateError;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Empty when `OPENAI_API_KEY` is unset; the upstream reports the problem.
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_base_url: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if `OPENAI_BASE_URL` is set but is not a valid URL.
    pub fn from_env() -> Result<Self, GenerateError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GenerateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let openai_base_url =
            non_empty("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
        Url::parse(&openai_base_url)
            .map_err(|e| GenerateError::ConfigError(format!("OPENAI_BASE_URL: {e}")))?;

        Ok(Self {
            openai_api_key: lookup("OPENAI_API_KEY").unwrap_or_default(),
            openai_org_id: non_empty("OPENAI_ORG_ID"),
            openai_base_url,
        })
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.openai_api_key.trim().is_empty()
    }
}
