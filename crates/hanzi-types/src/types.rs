use serde::{Deserialize, Serialize};

/// A word-sized piece of source text produced by segmentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub position: usize,
}

impl Token {
    pub fn new(surface: impl Into<String>, position: usize) -> Self {
        Self {
            surface: surface.into(),
            position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HskLevel {
    Hsk1, // Beginner (~150 words)
    Hsk2, // Elementary (~300 words)
    Hsk3, // Intermediate (~600 words)
    Hsk4, // Upper intermediate (~1200 words)
    Hsk5, // Advanced (~2500 words)
    Hsk6, // Mastery (~5000 words)
}

impl HskLevel {
    pub const ALL: [HskLevel; 6] = [
        HskLevel::Hsk1,
        HskLevel::Hsk2,
        HskLevel::Hsk3,
        HskLevel::Hsk4,
        HskLevel::Hsk5,
        HskLevel::Hsk6,
    ];

    /// Parse level from "1".."6" or "HSK1".."HSK6"
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        let digits = s.strip_prefix("HSK").unwrap_or(&s).trim();
        match digits.parse::<u8>().ok()? {
            n @ 1..=6 => Self::from_number(n),
            _ => None,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(HskLevel::Hsk1),
            2 => Some(HskLevel::Hsk2),
            3 => Some(HskLevel::Hsk3),
            4 => Some(HskLevel::Hsk4),
            5 => Some(HskLevel::Hsk5),
            6 => Some(HskLevel::Hsk6),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            HskLevel::Hsk1 => 1,
            HskLevel::Hsk2 => 2,
            HskLevel::Hsk3 => 3,
            HskLevel::Hsk4 => 4,
            HskLevel::Hsk5 => 5,
            HskLevel::Hsk6 => 6,
        }
    }

    /// Get level string
    pub fn as_str(&self) -> &'static str {
        match self {
            HskLevel::Hsk1 => "HSK 1",
            HskLevel::Hsk2 => "HSK 2",
            HskLevel::Hsk3 => "HSK 3",
            HskLevel::Hsk4 => "HSK 4",
            HskLevel::Hsk5 => "HSK 5",
            HskLevel::Hsk6 => "HSK 6",
        }
    }

    /// Get level description (Dutch, as shown in the report legend)
    pub fn description(&self) -> &'static str {
        match self {
            HskLevel::Hsk1 => "HSK 1 (Beginner)",
            HskLevel::Hsk2 => "HSK 2 (Elementair)",
            HskLevel::Hsk3 => "HSK 3 (Gemiddeld)",
            HskLevel::Hsk4 => "HSK 4 (Bovengemiddeld)",
            HskLevel::Hsk5 => "HSK 5 (Gevorderd)",
            HskLevel::Hsk6 => "HSK 6 (Meesterschap)",
        }
    }

    /// Badge colour
    pub fn color(&self) -> &'static str {
        match self {
            HskLevel::Hsk1 => "#4CAF50",
            HskLevel::Hsk2 => "#8BC34A",
            HskLevel::Hsk3 => "#FFC107",
            HskLevel::Hsk4 => "#FF9800",
            HskLevel::Hsk5 => "#FF5722",
            HskLevel::Hsk6 => "#F44336",
        }
    }
}

/// One row of the static HSK reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub word: String,
    pub level: HskLevel,
    /// Frequency rank (lower = more common); `None` when the list gives none
    pub rank: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharReading {
    pub character: char,
    pub pinyin: String,
}

/// A token with everything the report needs to show about it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub surface: String,
    pub position: usize,
    pub pinyin: String,
    pub translation: String,
    /// `None` means the word is not in the reference table (unranked)
    pub hsk_level: Option<HskLevel>,
    /// `None` when the word is unranked or its list row has no rank
    pub frequency_rank: Option<u32>,
    pub breakdown: Vec<CharReading>,
    pub is_chinese: bool,
}

impl EnrichedRecord {
    /// Record for punctuation, digits and other non-Chinese runs
    pub fn passthrough(token: &Token) -> Self {
        Self {
            surface: token.surface.clone(),
            position: token.position,
            pinyin: token.surface.clone(),
            translation: token.surface.clone(),
            hsk_level: None,
            frequency_rank: None,
            breakdown: Vec::new(),
            is_chinese: false,
        }
    }

    pub fn char_count(&self) -> usize {
        self.surface.chars().count()
    }
}
