use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::paths::PathsConfig;
use self::reference::ReferenceConfig;
use self::report::ReportConfig;
use self::translator::TranslatorConfig;

pub mod paths;
pub mod reference;
pub mod report;
pub mod translator;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub translator: TranslatorConfig,
    pub reference: ReferenceConfig,
    pub report: ReportConfig,
}

impl Config {
    /// Load a JSON config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        tracing::info!("Loading config from {}", path.display());
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `HANZI_*` and `DEEPL_API_KEY` environment variables
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| env::var(key).ok());
    }

    pub fn apply_env_with(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("HANZI_INPUT") {
            self.paths.input = PathBuf::from(v);
        }
        if let Some(v) = var("HANZI_TRANSLATION_INPUT") {
            self.paths.translation_input = PathBuf::from(v);
        }
        if let Some(v) = var("HANZI_OUTPUT") {
            self.paths.output = PathBuf::from(v);
        }
        if let Some(v) = var("HANZI_CACHE") {
            self.paths.cache = PathBuf::from(v);
        }
        if let Some(v) = var("HANZI_TARGET_LANG") {
            self.translator.to_lang = v;
        }
        if let Some(v) = var("HANZI_TRANSLATOR") {
            self.translator.provider = v.to_lowercase();
        }
        if let Some(v) = var("HANZI_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.translator.timeout_seconds = v;
        }
        if let Some(v) = var("DEEPL_API_KEY") {
            self.translator.api_key = v;
        }
    }
}
