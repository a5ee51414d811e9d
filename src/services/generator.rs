use async_trait::async_trait;
use thiserror::Error;

use crate::config::ApiKey;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to parse provider response: {0}")]
    Decode(String),

    #[error("provider returned no text: {0}")]
    Empty(String),
}

/// A hosted text-generation service.
///
/// Takes a credential and one fully assembled prompt, returns the complete
/// generated text. Implementations make exactly one request per call.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, api_key: &ApiKey, prompt: &str) -> Result<String, ProviderError>;
}
