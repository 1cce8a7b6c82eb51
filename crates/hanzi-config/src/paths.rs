use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_input() -> PathBuf {
    PathBuf::from("input.txt")
}

fn default_translation_input() -> PathBuf {
    PathBuf::from("input_dutch.txt")
}

fn default_output() -> PathBuf {
    PathBuf::from("output.html")
}

fn default_cache() -> PathBuf {
    PathBuf::from("translation_cache.json")
}

/// Where each artifact of a run lives
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Chinese source text
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Optional full translation shown above the word grid
    #[serde(default = "default_translation_input")]
    pub translation_input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_cache")]
    pub cache: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            translation_input: default_translation_input(),
            output: default_output(),
            cache: default_cache(),
        }
    }
}
