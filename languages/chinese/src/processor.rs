use std::path::Path;

use hanzi_config::reference::ReferenceConfig;
use hanzi_core::{Annotator, ReferenceTable};
use hanzi_translator::Translator;

use crate::hsk::HskTable;
use crate::loader::HskLoader;
use crate::romanizer::PinyinRomanizer;
use crate::segmenter::ChineseSegmenter;

/// Chinese language processor
pub struct ChineseProcessor {
    segmenter: ChineseSegmenter,
    romanizer: PinyinRomanizer,
    hsk: HskTable,
}

impl ChineseProcessor {
    /// Create a new Chinese processor with the embedded HSK list
    pub fn new() -> Self {
        Self::with_table(HskLoader::load_embedded())
    }

    pub fn with_table(hsk: HskTable) -> Self {
        Self {
            segmenter: ChineseSegmenter::new(),
            romanizer: PinyinRomanizer::new(),
            hsk,
        }
    }

    /// Build the reference table as configured: embedded list plus extra files
    pub fn from_config(config: &ReferenceConfig) -> Self {
        let mut table = if config.use_embedded {
            HskLoader::load_embedded()
        } else {
            tracing::warn!("Embedded HSK list disabled");
            HskTable::new()
        };

        // Load and merge additional word lists
        for path in &config.additional_paths {
            match HskLoader::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional HSK list from: {}", path);
                    table = HskLoader::merge(table, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load HSK list from {}: {}", path, e);
                }
            }
        }

        Self::with_table(table)
    }

    pub fn language_code(&self) -> &str {
        "zh-CN"
    }

    pub fn hsk(&self) -> &HskTable {
        &self.hsk
    }

    /// Annotation pipeline over this processor's segmenter, romanizer and table
    pub fn annotator<'a>(
        &'a self,
        translator: &'a dyn Translator,
        to_lang: &str,
    ) -> Annotator<'a> {
        tracing::debug!(
            "Annotator ready: {} HSK entries, translating {} -> {} via {}",
            self.hsk.entry_count(),
            self.language_code(),
            to_lang,
            translator.metadata().name
        );

        Annotator::new(
            &self.segmenter,
            &self.romanizer,
            &self.hsk,
            translator,
            self.language_code(),
            to_lang,
        )
    }
}

impl Default for ChineseProcessor {
    fn default() -> Self {
        Self::new()
    }
}
