use std::fmt::Write;

use hanzi_lang_chinese::FrequencyLevel;
use hanzi_types::{EnrichedRecord, HskLevel};

use crate::stats::ReportStats;

const UNRANKED_COLOR: &str = "#9E9E9E";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped text with line breaks kept
pub fn escape_multiline(text: &str) -> String {
    escape(text).replace('\n', "<br>\n")
}

fn level_color(level: Option<HskLevel>) -> &'static str {
    level.map(|l| l.color()).unwrap_or(UNRANKED_COLOR)
}

fn level_attr(level: Option<HskLevel>) -> String {
    level
        .map(|l| l.number().to_string())
        .unwrap_or_else(|| "unranked".to_string())
}

pub fn legend() -> String {
    let mut html = String::new();
    let items = HskLevel::ALL
        .iter()
        .map(|l| (l.color(), l.description()))
        .chain(std::iter::once((UNRANKED_COLOR, "Onbekend niveau")));

    for (color, label) in items {
        let _ = writeln!(
            html,
            r#"            <div class="legend-item"><span class="legend-dot" style="background: {color};"></span><span>{label}</span></div>"#
        );
    }
    html
}

pub fn stats(stats: &ReportStats) -> String {
    let cards = [
        (stats.total_words, "Totaal woorden"),
        (stats.unique_words, "Unieke woorden"),
        (stats.total_characters, "Totaal karakters"),
        (stats.beginner_words(), "HSK 1-2 woorden"),
    ];

    let mut html = String::new();
    for (value, label) in cards {
        let _ = writeln!(
            html,
            r#"            <div class="stat-card"><div class="stat-value">{value}</div><div class="stat-label">{label}</div></div>"#
        );
    }

    let mut levels: Vec<String> = HskLevel::ALL
        .iter()
        .map(|l| format!("{}: {}", l.as_str(), stats.count_for(*l)))
        .collect();
    levels.push(format!("Onbekend: {}", stats.unranked));
    let _ = writeln!(
        html,
        r#"            <div class="stat-card"><div class="stat-label">{}</div></div>"#,
        levels.join(" · ")
    );

    html
}

pub fn word_card(record: &EnrichedRecord) -> String {
    let surface = escape(&record.surface);

    if !record.is_chinese {
        return format!(
            r#"            <div class="word-card punctuation"><span class="chinese">{surface}</span></div>"#
        );
    }

    let level_label = record
        .hsk_level
        .map(|l| l.as_str())
        .unwrap_or("Onbekend");
    let badge = record
        .hsk_level
        .map(|l| l.number().to_string())
        .unwrap_or_else(|| "?".to_string());
    let frequency = FrequencyLevel::from_rank(record.frequency_rank);

    let mut breakdown = String::new();
    if !record.breakdown.is_empty() {
        breakdown.push_str(r#"<div class="breakdown"><strong>Karakters:</strong><br>"#);
        for reading in &record.breakdown {
            let _ = write!(
                breakdown,
                r#"<span class="breakdown-char">{} = {}</span>"#,
                escape(&reading.character.to_string()),
                escape(&reading.pinyin)
            );
        }
        breakdown.push_str("</div>");
    }

    format!(
        r#"            <div class="word-card" data-word="{surface}" data-hsk="{hsk}" onclick="copyWord(this.dataset.word)">
                <div class="tooltip">
                    <div class="tooltip-row"><span class="tooltip-label">Niveau:</span><span>{level_label}</span></div>
                    <div class="tooltip-row"><span class="tooltip-label">Frequentie:</span><span>{freq} {stars}</span></div>
                    {breakdown}
                </div>
                <button class="word-audio-btn" onclick="event.stopPropagation(); speakChinese(this.parentElement.dataset.word, this)" title="Uitspraak beluisteren">🔊</button>
                <span class="hsk-badge" style="background: {color};">{badge}</span>
                <span class="chinese">{surface}</span>
                <span class="pinyin">{pinyin}</span>
                <span class="dutch">{translation}</span>
            </div>"#,
        hsk = level_attr(record.hsk_level),
        freq = frequency.label_nl(),
        stars = frequency.stars(),
        color = level_color(record.hsk_level),
        pinyin = escape(&record.pinyin),
        translation = escape(&record.translation),
    )
}

pub fn vocabulary_row(record: &EnrichedRecord) -> String {
    let level = record.hsk_level.map(|l| l.as_str()).unwrap_or("-");

    format!(
        r#"                    <tr data-word="{surface}"><td class="chinese" style="font-size: 1.2rem;">{surface}</td><td style="color: var(--pinyin-color);">{pinyin}</td><td style="color: var(--dutch-color);">{translation}</td><td><span style="color: {color}; font-weight: bold;">{level}</span></td><td><button class="audio-btn" onclick="speakChinese(this.closest('tr').dataset.word, this)" title="Uitspraak beluisteren">🔊</button><button class="copy-btn" onclick="copyWord(this.closest('tr').dataset.word)">📋</button></td></tr>"#,
        surface = escape(&record.surface),
        pinyin = escape(&record.pinyin),
        translation = escape(&record.translation),
        color = level_color(record.hsk_level),
    )
}
