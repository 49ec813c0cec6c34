use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::time::Duration;

use crate::cli::ProviderKind;
use crate::config::Config;

pub mod gemini;
pub mod openai;

/// One prompt in, the full reply text out. Partial output is never surfaced.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;

    fn name(&self) -> &'static str;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

/// Build the configured provider. `Ok(None)` means no credential was
/// supplied; callers treat that as "unconfigured" rather than an error.
pub fn make_provider(cfg: &Config) -> Result<Option<DynProvider>> {
    build_provider(cfg, cfg.resolved_api_key())
}

/// Build a provider from an already-resolved credential.
pub fn build_provider(cfg: &Config, api_key: Option<String>) -> Result<Option<DynProvider>> {
    let Some(api_key) = api_key else {
        return Ok(None);
    };
    let timeout = (cfg.timeout_secs > 0).then(|| Duration::from_secs(cfg.timeout_secs));

    let prov: DynProvider = match cfg.provider {
        ProviderKind::Gemini => Box::new(gemini::GeminiProvider::new(
            api_key,
            cfg.model.clone(),
            cfg.api_base.clone(),
            timeout,
        )?),
        ProviderKind::OpenAI => Box::new(openai::OpenAIProvider::new(
            api_key,
            cfg.model.clone(),
            cfg.api_base.clone(),
            timeout,
        )?),
    };
    Ok(Some(prov))
}

pub(crate) fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    builder.build().map_err(|e| anyhow!("failed to build HTTP client: {e}"))
}
