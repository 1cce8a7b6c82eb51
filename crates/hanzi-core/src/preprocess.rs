use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default Chinese preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // NFC only: NFKC would fold full-width punctuation into ASCII
        let text: String = text.nfc().collect();

        // Normalize line endings, keep line structure for the original-text block
        text.replace("\r\n", "\n").replace('\r', "\n")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Strip `#` comment lines from a companion translation file
pub fn strip_comment_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
