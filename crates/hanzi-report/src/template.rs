use std::collections::HashMap;

use hanzi_types::EnrichedRecord;

use crate::html;
use crate::stats::{ReportStats, unique_words};

/// Colour set for the page; the inline script can switch at view time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub bg_color: &'static str,
    pub text_color: &'static str,
    pub card_bg: &'static str,
    pub border_color: &'static str,
    pub pinyin_color: &'static str,
    pub dutch_color: &'static str,
    pub hover_bg: &'static str,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        name: "light",
        bg_color: "#f5f7fa",
        text_color: "#2c3e50",
        card_bg: "#ffffff",
        border_color: "#e1e8ed",
        pinyin_color: "#3498db",
        dutch_color: "#e67e22",
        hover_bg: "#f8f9fa",
    };

    pub const DARK: Theme = Theme {
        name: "dark",
        bg_color: "#1a1a2e",
        text_color: "#eaeaea",
        card_bg: "#16213e",
        border_color: "#0f3460",
        pinyin_color: "#00d9ff",
        dutch_color: "#ffd700",
        hover_bg: "#0f3460",
    };

    pub fn for_mode(dark: bool) -> Self {
        if dark { Theme::DARK } else { Theme::LIGHT }
    }
}

/// Everything a report shows besides the statistics
#[derive(Debug, Clone, Copy)]
pub struct ReportDocument<'a> {
    pub title: &'a str,
    pub original_text: &'a str,
    /// Full translation of the text, if the user supplied one
    pub full_translation: Option<&'a str>,
    pub records: &'a [EnrichedRecord],
    pub theme: Theme,
}

#[derive(Debug, Clone)]
pub struct ReportTemplate {
    pub source: String,
}

impl ReportTemplate {
    /// Template bundled with the binary
    pub fn embedded() -> Self {
        Self::new(include_str!("../templates/report.html").to_string())
    }

    /// Create custom template
    pub fn new(source: String) -> Self {
        Self { source }
    }

    /// Fill the template. Pure: the same input renders the same bytes.
    pub fn render(&self, doc: &ReportDocument<'_>, stats: &ReportStats) -> String {
        let full_translation = match doc.full_translation {
            Some(text) if !text.trim().is_empty() => html::escape_multiline(text),
            _ => "<em>Geen vertaling beschikbaar. Zet de Nederlandse vertaling in het vertaalbestand naast de invoer.</em>".to_string(),
        };

        let word_grid: String = doc.records.iter().map(html::word_card).collect::<Vec<_>>().join("\n");
        let unique = unique_words(doc.records);
        let vocabulary = unique
            .iter()
            .map(|r| html::vocabulary_row(r))
            .collect::<Vec<_>>()
            .join("\n");

        let theme = doc.theme;
        let values: HashMap<&str, String> = [
            ("title", html::escape(doc.title)),
            ("theme", theme.name.to_string()),
            ("bg_color", theme.bg_color.to_string()),
            ("text_color", theme.text_color.to_string()),
            ("card_bg", theme.card_bg.to_string()),
            ("border_color", theme.border_color.to_string()),
            ("pinyin_color", theme.pinyin_color.to_string()),
            ("dutch_color", theme.dutch_color.to_string()),
            ("hover_bg", theme.hover_bg.to_string()),
            ("legend", html::legend()),
            ("original_text", html::escape_multiline(doc.original_text)),
            ("full_translation", full_translation),
            ("stats", html::stats(stats)),
            ("word_grid", word_grid),
            ("unique_count", unique.len().to_string()),
            ("vocabulary", vocabulary),
        ]
        .into_iter()
        .collect();

        substitute(&self.source, &values)
    }
}

/// Replace `{name}` markers in one pass. Unknown names and other braces
/// (CSS, JS) are copied through, and substituted text is never rescanned.
fn substitute(source: &str, values: &HashMap<&str, String>) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    let mut rest = source;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let name_len = after
            .find(|c: char| !(c.is_ascii_lowercase() || c == '_'))
            .unwrap_or(after.len());
        let name = &after[..name_len];

        match values.get(name) {
            Some(value) if name_len > 0 && after[name_len..].starts_with('}') => {
                out.push_str(value);
                rest = &after[name_len + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
