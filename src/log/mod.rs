use anyhow::Result;
use chrono::Utc;
use fs_err as fs;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

/// Install the stderr subscriber. Safe to call more than once.
pub fn init(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Per-request directory of prompts and raw replies, for debugging.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub tx: Uuid,
    pub dir: PathBuf,
}

fn tx_dir(root: &Path, tx: Uuid) -> PathBuf {
    root.join("tx").join(tx.to_string())
}

impl Transcript {
    pub fn create(root: &Path, model: &str, content_type: &str) -> Result<Self> {
        let tx = Uuid::new_v4();
        let dir = tx_dir(root, tx);
        fs::create_dir_all(&dir)?;
        let meta = json!({
            "tx": tx,
            "timestamp": Utc::now(),
            "model": model,
            "contentType": content_type,
        });
        fs::write(dir.join("meta.json"), serde_json::to_string_pretty(&meta)?)?;
        Ok(Self { tx, dir })
    }

    pub fn save_stage(&self, stage: &str, prompt: &str, response: &str) -> Result<()> {
        fs::write(self.dir.join(format!("{stage}.prompt.txt")), prompt)?;
        fs::write(self.dir.join(format!("{stage}.response.txt")), response)?;
        tracing::debug!("[{stage}] transcript saved under {}", self.dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_meta_and_stage_files() {
        let root = tempfile::tempdir().unwrap();
        let t = Transcript::create(root.path(), "gemini-1.5-flash", "Project Ideas").unwrap();
        assert_eq!(t.dir, root.path().join("tx").join(t.tx.to_string()));

        t.save_stage("content", "the prompt", "the reply").unwrap();
        assert_eq!(fs::read_to_string(t.dir.join("content.prompt.txt")).unwrap(), "the prompt");
        assert_eq!(fs::read_to_string(t.dir.join("content.response.txt")).unwrap(), "the reply");

        let meta: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(t.dir.join("meta.json")).unwrap()).unwrap();
        assert_eq!(meta["contentType"], "Project Ideas");
        assert_eq!(meta["tx"], t.tx.to_string());
    }
}
