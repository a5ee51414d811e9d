#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use tenant_rights_backend::config::ApiKey;
use tenant_rights_backend::routes::create_router;
use tenant_rights_backend::services::assistant::TenantAssistant;
use tenant_rights_backend::services::generator::{ProviderError, TextGenerator};
use tenant_rights_backend::state::AppState;

/// Records every prompt it receives and replies with a fixed outcome.
pub struct StubGenerator {
    reply: Result<String, u16>,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, _api_key: &ApiKey, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(ProviderError::Status {
                status: *status,
                message: "Quota exceeded".to_string(),
            }),
        }
    }
}

pub fn app(stub: Arc<StubGenerator>, api_key: Option<&str>) -> Router {
    let assistant = TenantAssistant::new(stub, api_key.map(ApiKey::new));
    create_router().with_state(Arc::new(AppState::new(assistant)))
}
