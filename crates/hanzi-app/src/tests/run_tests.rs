use std::fs;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use hanzi_config::Config;
use hanzi_core::TRANSLATION_PLACEHOLDER;
use hanzi_translator::{OfflineTranslator, ProviderMetadata, TranslateError, Translation, Translator};
use tempfile::{TempDir, tempdir};

use crate::io::SAMPLE_TEXT;
use crate::run::{RunOutcome, RunReport, run};

fn config_in(dir: &Path) -> Config {
    let mut config = Config::default();
    config.paths.input = dir.join("input.txt");
    config.paths.translation_input = dir.join("input_dutch.txt");
    config.paths.output = dir.join("output.html");
    config.paths.cache = dir.join("translation_cache.json");
    config
}

fn workspace(input: &str) -> (TempDir, Config) {
    let dir = tempdir().expect("temp dir");
    let config = config_in(dir.path());
    fs::write(&config.paths.input, input).expect("write input");
    (dir, config)
}

fn rendered(outcome: RunOutcome) -> RunReport {
    match outcome {
        RunOutcome::Rendered(report) => report,
        other => panic!("expected a rendered report, got {other:?}"),
    }
}

/// Answers every word with `nl:<word>`, recording what it was asked
struct EchoTranslator {
    calls: Mutex<Vec<String>>,
}

impl EchoTranslator {
    fn new() -> Self {
        Self { calls: Mutex::new(vec![]) }
    }
}

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<Translation, TranslateError> {
        self.calls.lock().unwrap().push(text.to_string());
        Ok(Translation {
            text: format!("nl:{text}"),
            from: from.to_string(),
            to: to.to_string(),
            provider: "echo".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "echo".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

#[tokio::test]
async fn missing_input_writes_sample_and_stops() {
    let dir = tempdir().expect("temp dir");
    let config = config_in(dir.path());

    let outcome = run(&config, &OfflineTranslator).await.expect("run");

    assert!(matches!(outcome, RunOutcome::Bootstrapped { .. }));
    assert_eq!(fs::read_to_string(&config.paths.input).unwrap(), SAMPLE_TEXT);
    assert!(!config.paths.output.exists());
}

#[tokio::test]
async fn blank_input_is_an_error() {
    let (_dir, config) = workspace("  \n ");
    let err = run(&config, &OfflineTranslator).await.unwrap_err();
    assert!(err.to_string().contains("empty"));
    assert!(!config.paths.output.exists());
}

#[tokio::test]
async fn failed_translations_get_placeholder_and_are_not_cached() {
    let (_dir, config) = workspace("你好");

    let report = rendered(run(&config, &OfflineTranslator).await.expect("run"));

    assert!(!report.records.is_empty());
    for record in report.records.iter().filter(|r| r.is_chinese) {
        assert_eq!(record.translation, TRANSLATION_PLACEHOLDER);
    }
    assert!(config.paths.output.exists());
    assert!(!config.paths.cache.exists());
}

#[tokio::test]
async fn cached_words_skip_the_translator() {
    let (_dir, config) = workspace("你好");
    fs::write(
        &config.paths.cache,
        r#"{"你好": "hallo", "你": "jij", "好": "goed"}"#,
    )
    .unwrap();

    let translator = EchoTranslator::new();
    let report = rendered(run(&config, &translator).await.expect("run"));

    assert!(translator.calls.lock().unwrap().is_empty());
    assert!(report.records.iter().all(|r| !r.translation.starts_with("nl:")));
}

#[tokio::test]
async fn new_translations_are_persisted() {
    let (_dir, config) = workspace("中国");

    let translator = EchoTranslator::new();
    let report = rendered(run(&config, &translator).await.expect("run"));

    let cache = fs::read_to_string(&config.paths.cache).expect("cache written");
    for record in report.records.iter().filter(|r| r.is_chinese) {
        assert_eq!(record.translation, format!("nl:{}", record.surface));
        assert!(cache.contains(&record.surface));
    }
}

#[tokio::test]
async fn companion_translation_file_is_created_and_read() {
    let (_dir, config) = workspace("我爱学习。");

    run(&config, &OfflineTranslator).await.expect("first run");
    let created = fs::read_to_string(&config.paths.translation_input).expect("created");
    assert!(created.starts_with('#'));
    let html = fs::read_to_string(&config.paths.output).unwrap();
    assert!(html.contains("Geen vertaling beschikbaar"));

    fs::write(
        &config.paths.translation_input,
        format!("{created}Ik hou van leren.\n"),
    )
    .unwrap();
    run(&config, &OfflineTranslator).await.expect("second run");
    let html = fs::read_to_string(&config.paths.output).unwrap();
    assert!(html.contains("Ik hou van leren."));
    assert!(!html.contains("Regels die met #"));
}

#[tokio::test]
async fn report_contains_original_text_and_stats() {
    let (_dir, config) = workspace("我爱学习。");

    let report = rendered(run(&config, &OfflineTranslator).await.expect("run"));
    let html = fs::read_to_string(&report.output).unwrap();

    assert!(html.contains("我爱学习。"));
    assert!(report.stats.total_characters >= 4);
    assert!(report.stats.total_words >= 1);
    assert!(report.stats.unique_words <= report.stats.total_words);
}

#[tokio::test]
async fn punctuation_and_latin_become_passthrough_cards() {
    let (_dir, config) = workspace("你好，我有3个iPhone。");

    let translator = EchoTranslator::new();
    let report = rendered(run(&config, &translator).await.expect("run"));

    let surfaces: String = report.records.iter().map(|r| r.surface.as_str()).collect();
    assert_eq!(surfaces, "你好，我有3个iPhone。");

    for mark in ["，", "3", "iPhone", "。"] {
        let record = report
            .records
            .iter()
            .find(|r| r.surface == mark)
            .unwrap_or_else(|| panic!("no record for {mark}"));
        assert!(!record.is_chinese);
        assert_eq!(record.translation, mark);
    }
    assert!(translator.calls.lock().unwrap().iter().all(|w| w != "iPhone" && w != "，"));

    let html = fs::read_to_string(&config.paths.output).unwrap();
    assert!(html.contains(r#"<div class="word-card punctuation"><span class="chinese">iPhone</span></div>"#));
}
