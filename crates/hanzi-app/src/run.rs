use std::path::PathBuf;

use hanzi_config::Config;
use hanzi_core::{DefaultPreprocessor, Preprocessor, TranslationCache};
use hanzi_lang_chinese::ChineseProcessor;
use hanzi_report::{ReportStats, render_report};
use hanzi_translator::Translator;
use hanzi_types::EnrichedRecord;

use crate::io;

#[derive(Debug)]
pub enum RunOutcome {
    /// Input was missing; a sample was written and nothing else happened
    Bootstrapped { input: PathBuf },
    Rendered(RunReport),
}

#[derive(Debug)]
pub struct RunReport {
    pub records: Vec<EnrichedRecord>,
    pub stats: ReportStats,
    pub output: PathBuf,
}

/// One conversion: read the text, annotate every word, write the report.
pub async fn run(config: &Config, translator: &dyn Translator) -> anyhow::Result<RunOutcome> {
    let paths = &config.paths;

    if io::ensure_input(&paths.input)? {
        return Ok(RunOutcome::Bootstrapped {
            input: paths.input.clone(),
        });
    }

    let text = DefaultPreprocessor.process(&io::read_input(&paths.input)?);
    if text.is_empty() {
        anyhow::bail!("Input file {} is empty", paths.input.display());
    }

    let full_translation = io::read_translation(&paths.translation_input)?;

    let processor = ChineseProcessor::from_config(&config.reference);
    let mut cache = TranslationCache::load(&paths.cache);
    tracing::info!("Translation cache has {} entries", cache.len());

    let records = processor
        .annotator(translator, &config.translator.to_lang)
        .annotate(&text, &mut cache)
        .await;

    // The report is still worth writing when the cache cannot be saved
    if let Err(e) = cache.save() {
        tracing::warn!("Failed to save translation cache: {e}");
    }

    let html = render_report(&config.report, &text, full_translation.as_deref(), &records);
    io::write_output(&paths.output, &html)?;
    tracing::info!("Report written to {}", paths.output.display());

    Ok(RunOutcome::Rendered(RunReport {
        stats: ReportStats::from_records(&records),
        records,
        output: paths.output.clone(),
    }))
}
