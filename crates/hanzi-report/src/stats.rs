use std::collections::HashSet;

use hanzi_types::{EnrichedRecord, HskLevel};

/// Aggregate numbers shown above the word grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportStats {
    /// Chinese words in the text, repeats included
    pub total_words: usize,
    pub unique_words: usize,
    pub total_characters: usize,
    /// Unique words per HSK level, index 0 = HSK 1
    pub level_counts: [usize; 6],
    /// Unique words not in the reference table
    pub unranked: usize,
}

impl ReportStats {
    /// Single pass over the records; punctuation is not counted
    pub fn from_records(records: &[EnrichedRecord]) -> Self {
        let mut stats = ReportStats::default();
        let mut seen = HashSet::new();

        for record in records.iter().filter(|r| r.is_chinese) {
            stats.total_words += 1;
            stats.total_characters += record.char_count();

            if !seen.insert(record.surface.as_str()) {
                continue;
            }

            stats.unique_words += 1;
            match record.hsk_level {
                Some(level) => stats.level_counts[(level.number() - 1) as usize] += 1,
                None => stats.unranked += 1,
            }
        }

        stats
    }

    pub fn count_for(&self, level: HskLevel) -> usize {
        self.level_counts[(level.number() - 1) as usize]
    }

    /// Words a beginner should already know
    pub fn beginner_words(&self) -> usize {
        self.count_for(HskLevel::Hsk1) + self.count_for(HskLevel::Hsk2)
    }
}

/// Chinese records in first-occurrence order, one per distinct word
pub fn unique_words(records: &[EnrichedRecord]) -> Vec<&EnrichedRecord> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| r.is_chinese && seen.insert(r.surface.as_str()))
        .collect()
}
