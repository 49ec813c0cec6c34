use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::wire::{Audience, ContentRequest, ContentType, RequestDetails, Tone, Variant};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(alias = "google")]
    Gemini,
    #[value(name = "openai", alias = "open-ai")]
    OpenAI,
}

impl ProviderKind {
    /// Environment variable consulted when no key is configured explicitly.
    pub fn env_var(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GEMINI_API_KEY",
            ProviderKind::OpenAI => "OPENAI_API_KEY",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini-1.5-flash",
            ProviderKind::OpenAI => "gpt-4.1-mini",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "content_forge", version, about = "Generate academic or social content from a topic via an LLM")]
pub struct Args {
    /// TOML config file; flags below override its values
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub api_base: Option<String>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long)]
    pub topic: Option<String>,

    #[arg(long, value_enum, default_value_t = ContentType::ProjectIdeas)]
    pub content_type: ContentType,

    #[arg(long, value_enum)]
    pub tone: Option<Tone>,

    #[arg(long, value_enum)]
    pub audience: Option<Audience>,

    /// Academic only
    #[arg(long)]
    pub details: Option<String>,

    /// Social only
    #[arg(long)]
    pub word_count: Option<u32>,

    #[arg(long, default_value_t = false)]
    pub hashtags: bool,

    #[arg(long, default_value_t = false)]
    pub emojis: bool,

    /// Print suggested topics for a variant instead of generating
    #[arg(long, value_enum)]
    pub suggest: Option<Variant>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,

    #[arg(long, default_value_t = false)]
    pub save_transcript: bool,

    #[arg(long)]
    pub out_dir: Option<String>,
}

impl Args {
    /// Assemble the request, rejecting an empty topic before anything else runs.
    pub fn to_request(&self) -> Result<ContentRequest> {
        let topic = self.topic.as_deref().map(str::trim).unwrap_or("");
        if topic.is_empty() {
            bail!("please enter a topic (--topic)");
        }
        let variant = self.content_type.variant();
        if let Some(tone) = self.tone {
            if tone.variant() != variant {
                bail!("tone '{tone}' is not available for {}", self.content_type);
            }
        }
        if let Some(audience) = self.audience {
            if !audience.fits(variant) {
                bail!("audience '{audience}' is not available for {}", self.content_type);
            }
        }
        let (tone, audience) = match variant {
            Variant::Academic => (Tone::Professional, Audience::Students),
            Variant::Social => (Tone::Casual, Audience::GeneralPublic),
        };
        let details = match variant {
            Variant::Academic => RequestDetails::Academic {
                additional_details: self.details.clone(),
            },
            Variant::Social => RequestDetails::Social {
                word_count: self.word_count,
                include_hashtags: self.hashtags,
                include_emojis: self.emojis,
            },
        };
        Ok(ContentRequest {
            topic: topic.to_string(),
            content_type: self.content_type,
            tone: self.tone.unwrap_or(tone),
            audience: self.audience.unwrap_or(audience),
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_topic_is_rejected() {
        let args = Args::try_parse_from(["content_forge", "--topic", "   "]).unwrap();
        assert!(args.to_request().is_err());
        let args = Args::try_parse_from(["content_forge"]).unwrap();
        assert!(args.to_request().is_err());
    }

    #[test]
    fn academic_request_defaults() {
        let args = Args::try_parse_from([
            "content_forge", "--topic", " Compilers ", "--content-type", "report", "--details", "use LLVM",
        ])
        .unwrap();
        let req = args.to_request().unwrap();
        assert_eq!(req.topic, "Compilers");
        assert_eq!(req.content_type, ContentType::ProjectReport);
        assert_eq!(req.tone, Tone::Professional);
        assert_eq!(req.audience, Audience::Students);
        assert_eq!(req.details, RequestDetails::Academic { additional_details: Some("use LLVM".into()) });
    }

    #[test]
    fn social_request_collects_flags() {
        let args = Args::try_parse_from([
            "content_forge", "--topic", "ঈদ", "--content-type", "viral-post", "--tone", "funny",
            "--audience", "gen-z", "--word-count", "80", "--hashtags",
        ])
        .unwrap();
        let req = args.to_request().unwrap();
        assert_eq!(req.tone, Tone::Funny);
        assert_eq!(req.audience, Audience::GenZ);
        assert_eq!(
            req.details,
            RequestDetails::Social { word_count: Some(80), include_hashtags: true, include_emojis: false }
        );
    }

    #[test]
    fn social_tone_and_audience_rejected_for_report() {
        let args = Args::try_parse_from([
            "content_forge", "--topic", "Compilers", "--content-type", "report", "--tone", "funny",
            "--audience", "gen-z",
        ])
        .unwrap();
        assert!(args.to_request().is_err());

        let args = Args::try_parse_from([
            "content_forge", "--topic", "Compilers", "--content-type", "report", "--tone", "funny",
        ])
        .unwrap();
        let err = args.to_request().unwrap_err().to_string();
        assert!(err.contains("Funny"), "{err}");

        let args = Args::try_parse_from([
            "content_forge", "--topic", "Compilers", "--content-type", "report", "--audience", "gen-z",
        ])
        .unwrap();
        let err = args.to_request().unwrap_err().to_string();
        assert!(err.contains("Gen Z"), "{err}");
    }

    #[test]
    fn academic_tone_rejected_for_social_post() {
        let args = Args::try_parse_from([
            "content_forge", "--topic", "ঈদ", "--content-type", "post", "--tone", "technical",
        ])
        .unwrap();
        assert!(args.to_request().is_err());
    }

    #[test]
    fn professionals_fit_both_products() {
        for ct in ["report", "script"] {
            let args = Args::try_parse_from([
                "content_forge", "--topic", "Budgeting", "--content-type", ct, "--audience", "professionals",
            ])
            .unwrap();
            assert_eq!(args.to_request().unwrap().audience, Audience::Professionals);
        }
    }

    #[test]
    fn provider_aliases() {
        let args = Args::try_parse_from(["content_forge", "--provider", "open-ai"]).unwrap();
        assert_eq!(args.provider, Some(ProviderKind::OpenAI));
    }
}
