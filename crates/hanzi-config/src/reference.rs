use serde::{Deserialize, Serialize};

fn default_use_embedded() -> bool {
    true
}

/// HSK reference table sources
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Load the word list bundled with the binary
    #[serde(default = "default_use_embedded")]
    pub use_embedded: bool,
    /// Extra TSV files (`word\tlevel\trank`), merged in order over the embedded list
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            use_embedded: default_use_embedded(),
            additional_paths: vec![],
        }
    }
}
