use hanzi_types::{CharReading, ReferenceEntry, Token};

/// Splits unspaced text into word tokens
pub trait Segmenter: Send + Sync {
    /// Ordered tokens; empty input gives an empty sequence
    fn segment(&self, text: &str) -> Vec<Token>;
}

/// Phonetic romanization with tone marks
pub trait Romanizer: Send + Sync {
    /// Romanize a whole word. Characters without a reading are kept as-is.
    fn romanize(&self, text: &str) -> String;

    /// Reading of a single character, `None` if it has none
    fn romanize_char(&self, c: char) -> Option<String>;

    /// Per-character readings for tooltip display
    fn breakdown(&self, text: &str) -> Vec<CharReading> {
        text.chars()
            .map(|character| CharReading {
                character,
                pinyin: self
                    .romanize_char(character)
                    .unwrap_or_else(|| character.to_string()),
            })
            .collect()
    }
}

/// Static word-level reference data (HSK level and frequency rank)
pub trait ReferenceTable: Send + Sync {
    /// `None` means the word is unranked, which is not an error
    fn lookup(&self, word: &str) -> Option<&ReferenceEntry>;

    fn entry_count(&self) -> usize;
}

/// CJK Unified Ideographs block
pub fn is_han(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Whether the text holds at least one Chinese character
pub fn is_chinese(text: &str) -> bool {
    text.chars().any(is_han)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Romanizer for Upper {
        fn romanize(&self, text: &str) -> String {
            text.to_uppercase()
        }

        fn romanize_char(&self, c: char) -> Option<String> {
            c.is_ascii_alphabetic().then(|| c.to_ascii_uppercase().to_string())
        }
    }

    #[test]
    fn detects_chinese_text() {
        assert!(is_chinese("学习"));
        assert!(is_chinese("abc中"));
        assert!(!is_chinese("，。！"));
        assert!(!is_chinese("2024"));
        assert!(!is_chinese(""));
    }

    #[test]
    fn breakdown_falls_back_to_the_character() {
        let breakdown = Upper.breakdown("a1");
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].pinyin, "A");
        assert_eq!(breakdown[1].character, '1');
        assert_eq!(breakdown[1].pinyin, "1");
    }
}
