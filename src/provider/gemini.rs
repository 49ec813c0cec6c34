use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Provider;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Google Generative Language `generateContent`, single user turn, provider
/// defaults for every generation parameter.
pub struct GeminiProvider {
    api_key: String,
    model: String,
    api_base: String,
    client: Client,
}

impl GeminiProvider {
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

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<PartIn<'a>>,
}

#[derive(Serialize)]
struct PartIn<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentOut>,
}

#[derive(Deserialize)]
struct ContentOut {
    #[serde(default)]
    parts: Vec<PartOut>,
}

#[derive(Deserialize)]
struct PartOut {
    text: Option<String>,
}

fn body(prompt: &str) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: vec![Content { role: "user", parts: vec![PartIn { text: prompt }] }],
    }
}

/// Concatenated text parts of the first candidate.
fn extract_text(raw: &str) -> Result<String> {
    let parsed: GenerateResponse = serde_json::from_str(raw)
        .map_err(|e| anyhow!("gemini response parse error: {e}"))?;
    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("gemini: no candidates in response"))?;
    Ok(candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .unwrap_or_default())
}

#[async_trait]
impl Provider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = self.url();
        tracing::debug!("gemini: POST {} ({} prompt bytes)", url, prompt.len());

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body(prompt))
            .send()
            .await
            .context("gemini request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("gemini read body failed")?;
        tracing::debug!("gemini: status {}, {} body bytes", status, text.len());

        if !status.is_success() {
            return Err(anyhow!("Gemini API error ({}): {}", status, text));
        }
        extract_text(&text)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_is_a_single_user_turn() {
        let v = serde_json::to_value(body("hello")).unwrap();
        assert_eq!(
            v,
            serde_json::json!({ "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn joins_parts_of_first_candidate() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"CONTENT_TITLE_START\n"},{"text":"Hi\nCONTENT_TITLE_END"}]}},{"content":{"parts":[{"text":"other"}]}}]}"#;
        assert_eq!(extract_text(raw).unwrap(), "CONTENT_TITLE_START\nHi\nCONTENT_TITLE_END");
    }

    #[test]
    fn empty_candidates_is_an_error() {
        assert!(extract_text(r#"{"candidates":[]}"#).is_err());
        assert!(extract_text("not json").is_err());
    }

    #[test]
    fn url_uses_model_and_trims_base() {
        let p = GeminiProvider::new(
            "k".into(),
            "gemini-1.5-flash".into(),
            Some("http://localhost:9999/".into()),
            None,
        )
        .unwrap();
        assert_eq!(p.url(), "http://localhost:9999/v1beta/models/gemini-1.5-flash:generateContent");
    }
}
