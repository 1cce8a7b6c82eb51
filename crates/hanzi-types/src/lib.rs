pub mod types;

pub use types::{CharReading, EnrichedRecord, HskLevel, ReferenceEntry, Token};
