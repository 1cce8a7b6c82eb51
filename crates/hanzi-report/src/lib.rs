mod html;
mod stats;
mod template;

pub use stats::{ReportStats, unique_words};
pub use template::{ReportDocument, ReportTemplate, Theme};

use hanzi_config::report::ReportConfig;
use hanzi_types::EnrichedRecord;

/// Render the study sheet for `records` with the bundled template
pub fn render_report(
    config: &ReportConfig,
    original_text: &str,
    full_translation: Option<&str>,
    records: &[EnrichedRecord],
) -> String {
    let stats = ReportStats::from_records(records);
    tracing::debug!(
        "Rendering report: {} words, {} unique",
        stats.total_words,
        stats.unique_words
    );

    let doc = ReportDocument {
        title: &config.title,
        original_text,
        full_translation,
        records,
        theme: Theme::for_mode(config.dark_mode),
    };

    ReportTemplate::embedded().render(&doc, &stats)
}
