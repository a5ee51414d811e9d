//! Print the Gemini models available to the configured key that support
//! `generateContent`.

use anyhow::{Context, bail};
use tracing_subscriber::EnvFilter;

use tenant_rights_backend::config::{API_KEY_VAR, Settings};
use tenant_rights_backend::services::gemini::GeminiClient;

const DESCRIPTION_CHARS: usize = 100;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let settings = Settings::from_env().context("invalid configuration")?;
    let Some(api_key) = settings.gemini.api_key.as_ref() else {
        bail!("{API_KEY_VAR} not found in environment variables");
    };

    let client = GeminiClient::new(&settings.gemini)?;
    let models = client
        .list_models(api_key)
        .await
        .context("failed to list models")?;

    println!("Available models:");
    println!("{}", "-".repeat(50));
    for model in models.iter().filter(|m| m.supports_generate_content()) {
        let description: String = model.description.chars().take(DESCRIPTION_CHARS).collect();
        println!("✓ {}", model.name);
        println!("  Display name: {}", model.display_name);
        println!("  Description: {description}...");
        println!();
    }

    Ok(())
}
