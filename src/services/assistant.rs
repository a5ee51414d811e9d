use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use super::generator::{ProviderError, TextGenerator};
use super::prompt::build_prompt;
use crate::config::{API_KEY_VAR, ApiKey};

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("{0}")]
    Configuration(String),

    #[error(transparent)]
    Generation(#[from] ProviderError),
}

/// Answers tenant-rights questions through a text-generation provider.
#[derive(Clone)]
pub struct TenantAssistant {
    generator: Arc<dyn TextGenerator>,
    api_key: Option<ApiKey>,
}

impl std::fmt::Debug for TenantAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantAssistant")
            .field("api_key", &self.api_key)
            .finish()
    }
}

impl TenantAssistant {
    pub fn new(generator: Arc<dyn TextGenerator>, api_key: Option<ApiKey>) -> Self {
        Self { generator, api_key }
    }

    pub async fn ask(&self, question: &str) -> Result<String, AssistantError> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            AssistantError::Configuration(format!(
                "{API_KEY_VAR} not found in environment variables. \
                 Set it in the environment or in a .env file."
            ))
        })?;

        let prompt = build_prompt(question);
        debug!(prompt_len = prompt.len(), "prompt assembled");

        Ok(self.generator.generate(api_key, &prompt).await?)
    }
}
