use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Mandarijn Leren".to_string()
}

fn default_preview_words() -> usize {
    10
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub dark_mode: bool,
    /// Number of unique words echoed to the console after a run
    #[serde(default = "default_preview_words")]
    pub preview_words: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            dark_mode: false,
            preview_words: default_preview_words(),
        }
    }
}
