// ============================================================================
// File: src/error.rs
// Error kinds surfaced by a generation action
// ============================================================================

use thiserror::Error;

/// Every kind is terminal for the current action; nothing is retried.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No credential configured; detected before any request is made
    #[error("API key not found. Please set the HUGGING_FACE_API_KEY environment variable.")]
    MissingCredential,

    /// The endpoint answered with something other than 200
    #[error("Error: {status}\nDetails: {body}")]
    Remote { status: u16, body: String },

    /// Transport or decoding failure while talking to the endpoint
    #[error("An error occurred: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Unexpected(err.to_string())
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::Unexpected(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
