pub mod frequency;
pub mod hsk;
pub mod loader;
pub mod processor;
pub mod romanizer;
pub mod segmenter;
pub mod translator;

pub use frequency::FrequencyLevel;
pub use hsk::HskTable;
pub use loader::HskLoader;
pub use processor::ChineseProcessor;
pub use romanizer::PinyinRomanizer;
pub use segmenter::ChineseSegmenter;
pub use translator::{DeeplTranslator, GoogleTranslator, translator_from_config};
