// ============================================================================
// File: src/hf_client.rs
// Hosted inference API client for text generation
// ============================================================================

use log::debug;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::Config;
use crate::error::{GenerationError, Result};
use crate::models::{GenerationParameters, InferenceRequest, ModelId, ResponseShape};

pub struct GenerationClient {
    client: Client,
    config: Config,
}

impl GenerationClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Issue one generation request and return the normalized text with any
    /// echo of `prompt` removed.
    ///
    /// The credential is checked before anything goes on the wire. Non-200
    /// answers become [`GenerationError::Remote`]; everything else that goes
    /// wrong becomes [`GenerationError::Unexpected`]. No retries.
    pub async fn generate(
        &self,
        prompt: &str,
        model: ModelId,
        parameters: GenerationParameters,
    ) -> Result<String> {
        let api_key = self.config.credential()?;
        let url = self.config.model_url(model);

        debug!(
            "POST {} (max_new_tokens: {}, temperature: {}, top_p: {})",
            url, parameters.max_new_tokens, parameters.temperature, parameters.top_p
        );

        let request = InferenceRequest {
            inputs: prompt,
            parameters,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if status != StatusCode::OK {
            debug!("{} answered HTTP {}", model, status.as_u16());
            return Err(GenerationError::Remote {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let value: Value = serde_json::from_str(&response_text)?;
        let shape = ResponseShape::classify(value);
        debug!("Response shape: {}", shape.kind());

        Ok(strip_prompt(&shape.into_text(), prompt))
    }
}

/// Remove every verbatim occurrence of `prompt` from `content`.
///
/// Not anchored to the start: generated text that legitimately repeats the
/// prompt loses that passage too.
pub fn strip_prompt(content: &str, prompt: &str) -> String {
    if prompt.is_empty() || !content.contains(prompt) {
        return content.to_string();
    }

    debug!("Stripping echoed prompt from generated text");
    content.replace(prompt, "")
}
