use hanzi_translator::Translator;
use hanzi_types::{EnrichedRecord, Token};

use crate::cache::TranslationCache;
use crate::language::{ReferenceTable, Romanizer, Segmenter, is_chinese};

/// Shown in place of a translation that could not be obtained
pub const TRANSLATION_PLACEHOLDER: &str = "?";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct TranslationCounts {
    cache_hits: usize,
    translated: usize,
    failed: usize,
}

/// Turns tokens into enriched records, one per token, order preserved
pub struct Annotator<'a> {
    segmenter: &'a dyn Segmenter,
    romanizer: &'a dyn Romanizer,
    reference: &'a dyn ReferenceTable,
    translator: &'a dyn Translator,
    from_lang: String,
    to_lang: String,
}

impl<'a> Annotator<'a> {
    pub fn new(
        segmenter: &'a dyn Segmenter,
        romanizer: &'a dyn Romanizer,
        reference: &'a dyn ReferenceTable,
        translator: &'a dyn Translator,
        from_lang: impl Into<String>,
        to_lang: impl Into<String>,
    ) -> Self {
        Self {
            segmenter,
            romanizer,
            reference,
            translator,
            from_lang: from_lang.into(),
            to_lang: to_lang.into(),
        }
    }

    /// Segment `text` and annotate every token
    pub async fn annotate(
        &self,
        text: &str,
        cache: &mut TranslationCache,
    ) -> Vec<EnrichedRecord> {
        let tokens = self.segmenter.segment(text);
        tracing::debug!("Segmented into {} tokens", tokens.len());

        self.annotate_tokens(&tokens, cache).await
    }

    pub async fn annotate_tokens(
        &self,
        tokens: &[Token],
        cache: &mut TranslationCache,
    ) -> Vec<EnrichedRecord> {
        let mut counts = TranslationCounts::default();
        let mut records = Vec::with_capacity(tokens.len());

        for token in tokens {
            records.push(self.annotate_token(token, cache, &mut counts).await);
        }

        tracing::info!(
            "Annotated {} tokens ({} cached, {} translated, {} failed)",
            records.len(),
            counts.cache_hits,
            counts.translated,
            counts.failed
        );

        records
    }

    async fn annotate_token(
        &self,
        token: &Token,
        cache: &mut TranslationCache,
        counts: &mut TranslationCounts,
    ) -> EnrichedRecord {
        if !is_chinese(&token.surface) {
            return EnrichedRecord::passthrough(token);
        }

        let word = token.surface.as_str();
        let pinyin = self.romanizer.romanize(word);
        let entry = self.reference.lookup(word);
        let translation = self.resolve_translation(word, cache, counts).await;
        let breakdown = self.romanizer.breakdown(word);

        EnrichedRecord {
            surface: token.surface.clone(),
            position: token.position,
            pinyin,
            translation,
            hsk_level: entry.map(|e| e.level),
            frequency_rank: entry.and_then(|e| e.rank),
            breakdown,
            is_chinese: true,
        }
    }

    /// Cache first, then the translator. Failures are never cached.
    async fn resolve_translation(
        &self,
        word: &str,
        cache: &mut TranslationCache,
        counts: &mut TranslationCounts,
    ) -> String {
        if let Some(hit) = cache.lookup(word) {
            counts.cache_hits += 1;
            return hit.to_string();
        }

        match self
            .translator
            .translate(word, &self.from_lang, &self.to_lang)
            .await
        {
            Ok(translation) => {
                counts.translated += 1;
                tracing::debug!("Translated '{}' -> '{}'", word, translation.text);
                cache.store(word, &translation.text);
                translation.text
            }
            Err(e) => {
                counts.failed += 1;
                tracing::warn!("Could not translate '{}': {}", word, e);
                TRANSLATION_PLACEHOLDER.to_string()
            }
        }
    }
}
