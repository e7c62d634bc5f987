// ============================================================================
// File: src/config.rs
// Configuration loading and validation
// ============================================================================

use std::fmt;

use crate::error::GenerationError;
use crate::models::ModelId;

/// Environment variable holding the inference API credential
pub const API_KEY_VAR: &str = "HUGGING_FACE_API_KEY";

/// Environment variable overriding the inference endpoint base URL
pub const API_URL_VAR: &str = "HUGGING_FACE_API_URL";

pub const DEFAULT_API_URL: &str = "https://api-inference.huggingface.co";

/// Process configuration, read once at startup and passed to the client
#[derive(Clone, PartialEq)]
pub struct Config {
    /// Bearer credential for the inference API. `None` when unset or empty.
    pub api_key: Option<String>,

    /// Base URL of the inference service, without trailing slash
    pub api_base_url: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Call after `dotenvy::dotenv()` so a local `.env` file can populate
    /// the variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let api_base_url = lookup(API_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self::new(api_key, api_base_url)
    }

    pub fn new(api_key: Option<String>, api_base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Validate the configuration
    ///
    /// A missing credential is not a configuration error here; it is
    /// reported per action through [`Config::credential`].
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(anyhow::anyhow!(
                "{} must be an http(s) URL, got '{}'",
                API_URL_VAR,
                self.api_base_url
            ));
        }

        Ok(())
    }

    /// The credential, or `MissingCredential` when none is configured
    pub fn credential(&self) -> Result<&str, GenerationError> {
        self.api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredential)
    }

    /// `{base}/models/{model_id}`
    pub fn model_url(&self, model: ModelId) -> String {
        format!("{}/models/{}", self.api_base_url, model.as_str())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_key, None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")]));
        assert!(matches!(
            config.credential(),
            Err(GenerationError::MissingCredential)
        ));
    }

    #[test]
    fn reads_credential_and_url_override() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "hf_secret"),
            (API_URL_VAR, "http://localhost:8080/"),
        ]));
        assert_eq!(config.credential().unwrap(), "hf_secret");
        assert_eq!(
            config.model_url(ModelId::GptJ6b),
            "http://localhost:8080/models/EleutherAI/gpt-j-6b"
        );
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = Config::new(None, "ftp://example.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_output_hides_credential() {
        let config = Config::new(Some("hf_secret".to_string()), DEFAULT_API_URL);
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hf_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
