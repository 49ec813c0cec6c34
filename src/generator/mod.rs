use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::errors::GenError;
use crate::log::Transcript;
use crate::parse;
use crate::prompt;
use crate::provider::{self, DynProvider};
use crate::wire::{ContentRequest, ContentResult, Variant};

pub const ACADEMIC_TOPICS: [&str; 10] = [
    "Machine Learning Applications",
    "Web Development Projects",
    "Data Science Analysis",
    "Mobile App Development",
    "IoT Smart Systems",
    "Blockchain Technology",
    "Cloud Computing",
    "Cybersecurity Solutions",
    "AI Chatbot Development",
    "E-commerce Platform",
];

pub const SOCIAL_TOPICS: [&str; 10] = [
    "বর্ষার দিনের স্মৃতি",
    "ঈদের কেনাকাটা",
    "ঢাকার ট্রাফিক জ্যাম",
    "বিপিএল ক্রিকেট",
    "পহেলা বৈশাখ",
    "মায়ের হাতের রান্না",
    "ফ্রিল্যান্সিং ক্যারিয়ার",
    "বিশ্ববিদ্যালয় জীবন",
    "গ্রামের বাড়ি",
    "স্ট্রিট ফুড",
];

const SUGGESTION_LIMIT: usize = 10;
const ACADEMIC_ERROR_FALLBACK: usize = 5;

fn fallback_topics(variant: Variant, after_error: bool) -> Vec<String> {
    let list: &[&str] = match variant {
        Variant::Academic if after_error => &ACADEMIC_TOPICS[..ACADEMIC_ERROR_FALLBACK],
        Variant::Academic => &ACADEMIC_TOPICS,
        Variant::Social => &SOCIAL_TOPICS,
    };
    list.iter().map(|s| s.to_string()).collect()
}

/// Generation client. Holds the one model handle every call shares; a
/// missing handle means no credential was configured.
pub struct Generator {
    provider: Option<DynProvider>,
    model: String,
    transcript_root: Option<PathBuf>,
}

impl Generator {
    pub fn new(provider: Option<DynProvider>) -> Self {
        Self { provider, model: String::new(), transcript_root: None }
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Ok(Self {
            provider: provider::make_provider(cfg)?,
            model: cfg.model.clone(),
            transcript_root: cfg.save_transcript.then(|| PathBuf::from(&cfg.out_dir)),
        })
    }

    pub fn with_transcripts(mut self, root: PathBuf) -> Self {
        self.transcript_root = Some(root);
        self
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Content call, then keyword call, then parse. Never runs the two calls
    /// concurrently and never retries.
    pub async fn generate_content(&self, req: &ContentRequest) -> Result<ContentResult, GenError> {
        let Some(provider) = self.provider.as_ref() else {
            return Err(GenError::Unconfigured);
        };
        let transcript = self.open_transcript(req);

        let content_prompt = prompt::build_content_prompt(req);
        let content_text = call(provider, "content", &content_prompt, transcript.as_ref()).await?;

        let keyword_prompt = prompt::build_keyword_prompt(req);
        let keyword_text = call(provider, "keywords", &keyword_prompt, transcript.as_ref()).await?;

        parse::parse_response(&content_text, &keyword_text, req)
    }

    /// Best-effort topic ideas; falls back to a fixed list instead of failing.
    pub async fn suggested_topics(&self, variant: Variant) -> Vec<String> {
        let Some(provider) = self.provider.as_ref() else {
            return fallback_topics(variant, false);
        };
        match provider.complete(prompt::suggestion_prompt(variant)).await {
            Ok(text) => {
                let topics = parse::parse_topic_list(&text, SUGGESTION_LIMIT);
                if topics.is_empty() {
                    tracing::warn!("suggestion reply had no topics; using fallback list");
                    fallback_topics(variant, false)
                } else {
                    topics
                }
            }
            Err(e) => {
                tracing::warn!("error getting suggested topics: {e:#}");
                fallback_topics(variant, true)
            }
        }
    }

    fn open_transcript(&self, req: &ContentRequest) -> Option<Transcript> {
        let root = self.transcript_root.as_ref()?;
        match Transcript::create(root, &self.model, req.content_type.as_str()) {
            Ok(t) => Some(t),
            Err(e) => {
                tracing::warn!("transcript disabled for this request: {e:#}");
                None
            }
        }
    }
}

async fn call(
    provider: &DynProvider,
    stage: &str,
    prompt: &str,
    transcript: Option<&Transcript>,
) -> Result<String, GenError> {
    tracing::debug!("[{stage}] sending {} prompt bytes to {}", prompt.len(), provider.name());
    let text = provider.complete(prompt).await.map_err(|e| {
        tracing::error!("error generating content ({stage}): {e:#}");
        GenError::GenerationFailed
    })?;
    tracing::debug!("[{stage}] received {} bytes", text.len());
    if let Some(t) = transcript {
        if let Err(e) = t.save_stage(stage, prompt, &text) {
            tracing::warn!("[{stage}] failed to save transcript: {e:#}");
        }
    }
    Ok(text)
}
