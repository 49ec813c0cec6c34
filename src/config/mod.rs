use anyhow::{Context, Result};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::{Args, ProviderKind};

/// Built once at startup and passed by reference; nothing reads a global.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderKind,
    pub model: String,
    pub api_base: Option<String>,
    pub api_key: Option<String>,
    /// Transport timeout; 0 leaves it to the provider.
    pub timeout_secs: u64,
    pub out_dir: String,
    pub save_transcript: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            model: ProviderKind::Gemini.default_model().into(),
            api_base: None,
            api_key: None,
            timeout_secs: 0,
            out_dir: ".content_forge/out".into(),
            save_transcript: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        toml::from_str(&s).with_context(|| format!("parsing {}", path.display()))
    }

    /// Optional file first, then command-line overrides.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut cfg = match &args.config {
            Some(p) => Self::load(Path::new(p))?,
            None => Self::default(),
        };
        cfg.apply_args(args);
        Ok(cfg)
    }

    pub fn apply_args(&mut self, args: &Args) {
        if let Some(p) = args.provider {
            if p != self.provider && args.model.is_none() {
                self.model = p.default_model().into();
            }
            self.provider = p;
        }
        if let Some(m) = &args.model {
            self.model = m.clone();
        }
        if let Some(k) = &args.api_key {
            self.api_key = Some(k.clone());
        }
        if let Some(b) = &args.api_base {
            self.api_base = Some(b.clone());
        }
        if let Some(t) = args.timeout_secs {
            self.timeout_secs = t;
        }
        if let Some(o) = &args.out_dir {
            self.out_dir = o.clone();
        }
        self.save_transcript |= args.save_transcript;
    }

    /// Explicit key, else the provider's environment variable. Blank counts as unset.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.resolve_key(|var| std::env::var(var).ok())
    }

    /// Same as [`Config::resolved_api_key`] with the environment read through `lookup`.
    pub fn resolve_key(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| lookup(self.provider.env_var()))
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn defaults_target_gemini() {
        let cfg = Config::default();
        assert_eq!(cfg.provider, ProviderKind::Gemini);
        assert_eq!(cfg.model, "gemini-1.5-flash");
        assert_eq!(cfg.timeout_secs, 0);
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "model = \"gemini-2.0-flash\"\ntimeout_secs = 30").unwrap();
        let cfg = Config::load(f.path()).unwrap();
        assert_eq!(cfg.model, "gemini-2.0-flash");
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.provider, ProviderKind::Gemini);
        assert_eq!(cfg.out_dir, ".content_forge/out");
    }

    #[test]
    fn bad_toml_names_the_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "timeout_secs = \"soon\"").unwrap();
        let err = Config::load(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains(&f.path().display().to_string()));
    }

    #[test]
    fn flags_override_file_values() {
        let args = Args::try_parse_from([
            "content_forge", "--provider", "openai", "--api-key", "sk-1", "--timeout-secs", "5",
        ])
        .unwrap();
        let mut cfg = Config::default();
        cfg.apply_args(&args);
        assert_eq!(cfg.provider, ProviderKind::OpenAI);
        assert_eq!(cfg.model, "gpt-4.1-mini");
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.resolved_api_key().as_deref(), Some("sk-1"));
    }

    #[test]
    fn explicit_key_is_trimmed() {
        let cfg = Config { api_key: Some("  abc \n".into()), ..Config::default() };
        assert_eq!(cfg.resolved_api_key().as_deref(), Some("abc"));
    }

    #[test]
    fn env_key_used_only_when_explicit_key_blank() {
        let env = |var: &str| (var == "GEMINI_API_KEY").then(|| " from-env ".to_string());

        let cfg = Config { api_key: Some("  ".into()), ..Config::default() };
        assert_eq!(cfg.resolve_key(env).as_deref(), Some("from-env"));

        let cfg = Config { api_key: Some("explicit".into()), ..Config::default() };
        assert_eq!(cfg.resolve_key(env).as_deref(), Some("explicit"));

        let cfg = Config { provider: ProviderKind::OpenAI, ..Config::default() };
        assert_eq!(cfg.resolve_key(env), None);
        assert_eq!(cfg.resolve_key(|_| Some("\t".into())), None);
    }
}
