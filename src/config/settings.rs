//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.  Every section is
//! `#[serde(default)]`, so a settings file only needs the keys it changes.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// LlmConfig
// ---------------------------------------------------------------------------

/// Settings for the chat-completions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible API, without the
    /// `/chat/completions` suffix.
    ///
    /// - Upstage default: `https://api.upstage.ai/v1`
    /// - OpenAI: `https://api.openai.com/v1`
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Model identifier sent to the API (e.g. `"solar-pro2"`).
    pub model: String,
    /// Sampling temperature.  `0.0` keeps both passes deterministic.
    pub temperature: f32,
    /// Maximum seconds to wait for a single completion before timing out.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.upstage.ai/v1".into(),
            api_key_env: "UPSTAGE_API_KEY".into(),
            model: "solar-pro2".into(),
            temperature: 0.0,
            timeout_secs: 60,
        }
    }
}

// ---------------------------------------------------------------------------
// RunConfig
// ---------------------------------------------------------------------------

/// Batch-run settings: where to read from, where to write to, and how many
/// rows may be in flight at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Source CSV containing an `err_sentence` column.
    pub input: PathBuf,
    /// Destination CSV (`id,err_sentence,cor_sentence`).
    pub output: PathBuf,
    /// Rows processed concurrently.  `1` means strictly sequential.
    pub concurrency: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/train_dataset.csv"),
            output: PathBuf::from("submission.csv"),
            concurrency: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use ko_corrector::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// println!("model = {}", config.llm.model);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Chat-completions endpoint settings.
    pub llm: LlmConfig,
    /// Batch I/O settings.
    pub run: RunConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet,
    /// so callers never need to special-case a missing file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.llm.base_url, "https://api.upstage.ai/v1");
        assert_eq!(cfg.llm.api_key_env, "UPSTAGE_API_KEY");
        assert_eq!(cfg.llm.model, "solar-pro2");
        assert_eq!(cfg.llm.temperature, 0.0);
        assert_eq!(cfg.run.input, PathBuf::from("data/train_dataset.csv"));
        assert_eq!(cfg.run.output, PathBuf::from("submission.csv"));
        assert_eq!(cfg.run.concurrency, 1);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");

        assert_eq!(config.llm.model, "solar-pro2");
        assert_eq!(config.run.output, PathBuf::from("submission.csv"));
    }

    #[test]
    fn modified_values_survive_save_and_load() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.toml");

        let mut cfg = AppConfig::default();
        cfg.llm.base_url = "https://api.openai.com/v1".into();
        cfg.llm.api_key_env = "OPENAI_API_KEY".into();
        cfg.llm.model = "gpt-4o-mini".into();
        cfg.llm.timeout_secs = 15;
        cfg.run.input = PathBuf::from("in.csv");
        cfg.run.concurrency = 4;

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(loaded.llm.api_key_env, "OPENAI_API_KEY");
        assert_eq!(loaded.llm.model, "gpt-4o-mini");
        assert_eq!(loaded.llm.timeout_secs, 15);
        assert_eq!(loaded.run.input, PathBuf::from("in.csv"));
        assert_eq!(loaded.run.concurrency, 4);
    }

    /// A file that only sets a few keys keeps defaults for everything else.
    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[llm]\nmodel = \"solar-mini\"\n").expect("write");

        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.llm.model, "solar-mini");
        assert_eq!(loaded.llm.base_url, "https://api.upstage.ai/v1");
        assert_eq!(loaded.run.concurrency, 1);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[llm\nmodel = ").expect("write");

        assert!(AppConfig::load_from(&path).is_err());
    }
}
