use hanzi_core::Romanizer;
use pinyin::ToPinyin;

/// Tone-marked pinyin backed by the `pinyin` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct PinyinRomanizer;

impl PinyinRomanizer {
    pub fn new() -> Self {
        Self
    }
}

impl Romanizer for PinyinRomanizer {
    fn romanize(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.romanize_char(c).unwrap_or_else(|| c.to_string()))
            .collect()
    }

    fn romanize_char(&self, c: char) -> Option<String> {
        c.to_pinyin().map(|p| p.with_tone().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_joined_without_spaces() {
        assert_eq!(PinyinRomanizer.romanize("中国"), "zhōngguó");
        assert_eq!(PinyinRomanizer.romanize("学习"), "xuéxí");
    }

    #[test]
    fn non_chinese_characters_are_kept() {
        assert_eq!(PinyinRomanizer.romanize("A4纸"), "A4zhǐ");
        assert_eq!(PinyinRomanizer.romanize_char('，'), None);
    }

    #[test]
    fn breakdown_reads_each_character() {
        let breakdown = PinyinRomanizer.breakdown("你好");
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].character, '你');
        assert_eq!(breakdown[0].pinyin, "nǐ");
        assert_eq!(breakdown[1].pinyin, "hǎo");
    }
}
