// src/state.rs
use std::sync::Arc;

use crate::config::Settings;
use crate::services::assistant::TenantAssistant;
use crate::services::gemini::GeminiClient;
use crate::services::generator::{ProviderError, TextGenerator};

pub type SharedState = Arc<AppState>;

#[derive(Debug)]
pub struct AppState {
    pub assistant: TenantAssistant,
}

impl AppState {
    pub fn new(assistant: TenantAssistant) -> Self {
        Self { assistant }
    }

    /// Wire the Gemini client from settings. The credential may be absent.
    pub fn from_settings(settings: &Settings) -> Result<Self, ProviderError> {
        let client: Arc<dyn TextGenerator> = Arc::new(GeminiClient::new(&settings.gemini)?);
        Ok(Self::new(TenantAssistant::new(
            client,
            settings.gemini.api_key.clone(),
        )))
    }
}
