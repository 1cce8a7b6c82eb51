use hanzi_report::unique_words;

use crate::run::RunReport;

/// Console lines shown after a run
pub fn summary_lines(report: &RunReport, preview_words: usize) -> Vec<String> {
    let stats = &report.stats;
    let mut lines = vec![
        format!("Report: {}", report.output.display()),
        format!(
            "Words: {} total, {} unique, {} characters",
            stats.total_words, stats.unique_words, stats.total_characters
        ),
    ];

    let unique = unique_words(&report.records);
    if !unique.is_empty() && preview_words > 0 {
        lines.push("First words:".to_string());
        for record in unique.iter().take(preview_words) {
            let level = record.hsk_level.map(|l| l.as_str()).unwrap_or("-");
            lines.push(format!(
                "  {} ({}) = {} [{}]",
                record.surface, record.pinyin, record.translation, level
            ));
        }
        if unique.len() > preview_words {
            lines.push(format!("  ... and {} more", unique.len() - preview_words));
        }
    }

    lines
}

pub fn print_summary(report: &RunReport, preview_words: usize) {
    for line in summary_lines(report, preview_words) {
        println!("{line}");
    }
}
