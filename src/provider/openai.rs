use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::Provider;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com";

/// OpenAI-compatible chat completions: the prompt goes out as one user
/// message, nothing else is set.
pub struct OpenAIProvider {
    api_key: String,
    model: String,
    api_base: String,
    client: Client,
}

impl OpenAIProvider {
    pub fn new(
        api_key: String,
        model: String,
        api_base: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        Ok(Self {
            api_key,
            model,
            api_base: api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            client: super::build_client(timeout)?,
        })
    }
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

fn extract_text(raw: &str) -> Result<String> {
    let parsed: ChatResponse = serde_json::from_str(raw)
        .map_err(|e| anyhow!("Failed to parse OpenAI response: {e}"))?;
    Ok(parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default())
}

#[async_trait]
impl Provider for OpenAIProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.api_base.trim_end_matches('/'));
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ]
        });
        tracing::debug!("openai: POST {} ({} prompt bytes)", url, prompt.len());

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("openai request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("openai read body failed")?;
        tracing::debug!("openai: status {}, {} body bytes", status, text.len());

        if !status.is_success() {
            return Err(anyhow!("OpenAI API error ({}): {}", status, text));
        }
        extract_text(&text)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
