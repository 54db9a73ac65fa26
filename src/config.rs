//! Configuration loaded from `insight-map.toml` and environment variables

use crate::extraction::GeminiConfig;
use crate::insight::{Okr, default_okrs};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "insight-map.toml";
pub const CONFIG_ENV_VAR: &str = "INSIGHT_MAP_CONFIG";
pub const DEFAULT_DATA_DIR: &str = ".insight-map";

/// Environment variable consulted for the API key when the configured one is unset
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the file-backed store
    pub data_dir: PathBuf,
    /// Optional size limit for the stored working set, in bytes
    pub quota_bytes: Option<usize>,
    pub gemini: GeminiSection,
    /// OKR catalog; the built-in list is used when empty
    pub okrs: Vec<Okr>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiSection {
    pub model: String,
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            quota_bytes: None,
            gemini: GeminiSection::default(),
            okrs: Vec::new(),
        }
    }
}

impl Default for GeminiSection {
    fn default() -> Self {
        let defaults = GeminiConfig::default();
        Self {
            model: defaults.model,
            base_url: defaults.base_url,
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_secs: defaults.timeout_secs,
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// The file is `path` if given, else `$INSIGHT_MAP_CONFIG`, else
    /// `insight-map.toml`. A missing default file yields the defaults; an
    /// explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        let config_path = explicit
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if !config_path.exists() {
            if explicit.is_some() {
                anyhow::bail!("Config file '{}' does not exist", config_path.display());
            }
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file '{}'", config_path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file '{}'", config_path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.gemini.model.trim().is_empty() {
            anyhow::bail!("gemini.model must not be empty");
        }
        if self.gemini.timeout_secs == 0 {
            anyhow::bail!("gemini.timeout_secs must be greater than 0");
        }
        if let Some(okr) = self.okrs.iter().find(|okr| okr.id.trim().is_empty()) {
            anyhow::bail!("OKR '{}' has an empty id", okr.text);
        }
        Ok(())
    }

    /// OKR catalog in effect
    pub fn okr_catalog(&self) -> Vec<Okr> {
        if self.okrs.is_empty() {
            default_okrs()
        } else {
            self.okrs.clone()
        }
    }

    /// Gemini settings with the API key resolved from the environment
    pub fn gemini_config(&self) -> GeminiConfig {
        let api_key = [self.gemini.api_key_env.as_str(), FALLBACK_API_KEY_ENV]
            .into_iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.trim().is_empty());

        GeminiConfig {
            base_url: self.gemini.base_url.clone(),
            model: self.gemini.model.clone(),
            api_key,
            timeout_secs: self.gemini.timeout_secs,
        }
    }
}
