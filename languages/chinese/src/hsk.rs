use std::collections::HashMap;

use hanzi_core::ReferenceTable;
use hanzi_types::{HskLevel, ReferenceEntry};

/// HSK level and frequency provider
#[derive(Debug, Default)]
pub struct HskTable {
    entries: HashMap<String, ReferenceEntry>,
}

impl HskTable {
    /// Create empty HSK table
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Parse TSV data (`word\tlevel\trank`). Lines starting with `#` and
    /// malformed rows are skipped. The first row for a word wins.
    pub fn from_tsv(content: &str) -> Self {
        let mut entries = HashMap::new();

        for line in content.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            match parse_row(line) {
                Some(entry) => {
                    entries.entry(entry.word.clone()).or_insert(entry);
                }
                None => tracing::debug!("Skipping malformed HSK row: {:?}", line),
            }
        }

        Self { entries }
    }

    /// Merge another table into this one; its rows override existing words
    pub fn merge(mut self, other: HskTable) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn insert(&mut self, word: &str, level: HskLevel, rank: u32) {
        self.entries.insert(
            word.to_string(),
            ReferenceEntry {
                word: word.to_string(),
                level,
                rank: Some(rank),
            },
        );
    }

    /// Get HSK level for a word
    pub fn get_level(&self, word: &str) -> Option<HskLevel> {
        self.entries.get(word).map(|e| e.level)
    }

    /// Get frequency rank for a word (lower = more common)
    pub fn get_rank(&self, word: &str) -> Option<u32> {
        self.entries.get(word).and_then(|e| e.rank)
    }

    /// Number of words per level
    pub fn level_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for entry in self.entries.values() {
            counts[(entry.level.number() - 1) as usize] += 1;
        }
        counts
    }
}

fn parse_row(line: &str) -> Option<ReferenceEntry> {
    let mut parts = line.split('\t');
    let word = parts.next()?.trim();
    let level = HskLevel::from_str(parts.next()?)?;
    // Rank column is optional in hand-written lists
    let rank = parts.next().and_then(|r| r.trim().parse::<u32>().ok());

    if word.is_empty() {
        return None;
    }

    Some(ReferenceEntry {
        word: word.to_string(),
        level,
        rank,
    })
}

impl ReferenceTable for HskTable {
    fn lookup(&self, word: &str) -> Option<&ReferenceEntry> {
        self.entries.get(word)
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# word\tlevel\trank\n爱\t1\t105\n学习\tHSK1\t99\n环境\t3\n坏行\n\t2\t5\n爱\t6\t9000\n";

    #[test]
    fn parses_rows_and_skips_garbage() {
        let table = HskTable::from_tsv(SAMPLE);
        assert_eq!(table.entry_count(), 3);
        assert_eq!(table.get_level("学习"), Some(HskLevel::Hsk1));
        assert_eq!(table.get_rank("学习"), Some(99));
        assert_eq!(table.get_level("环境"), Some(HskLevel::Hsk3));
        assert_eq!(table.get_rank("环境"), None);
        assert_eq!(table.lookup("环境").map(|e| e.rank), Some(None));
    }

    #[test]
    fn first_row_wins_within_a_file() {
        let table = HskTable::from_tsv(SAMPLE);
        assert_eq!(table.get_level("爱"), Some(HskLevel::Hsk1));
    }

    #[test]
    fn merged_rows_override() {
        let base = HskTable::from_tsv(SAMPLE);
        let mut extra = HskTable::new();
        extra.insert("爱", HskLevel::Hsk2, 50);
        extra.insert("熊猫", HskLevel::Hsk3, 2500);

        let merged = base.merge(extra);
        assert_eq!(merged.get_level("爱"), Some(HskLevel::Hsk2));
        assert_eq!(merged.get_rank("熊猫"), Some(2500));
        assert_eq!(merged.entry_count(), 4);
    }

    #[test]
    fn unknown_words_are_unranked() {
        let table = HskTable::from_tsv(SAMPLE);
        assert!(table.lookup("电脑").is_none());
        assert_eq!(table.get_level("电脑"), None);
    }

    #[test]
    fn counts_words_per_level() {
        let counts = HskTable::from_tsv(SAMPLE).level_counts();
        assert_eq!(counts, [2, 0, 1, 0, 0, 0]);
    }
}
