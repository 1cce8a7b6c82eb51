pub mod cache;
pub mod language;
pub mod pipeline;
pub mod preprocess;

pub use cache::{CacheError, TranslationCache};
pub use language::{ReferenceTable, Romanizer, Segmenter, is_chinese, is_han};
pub use pipeline::{Annotator, TRANSLATION_PLACEHOLDER};
pub use preprocess::{DefaultPreprocessor, Preprocessor};
