use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialize error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Persisted word → translation map
///
/// Entries are never replaced once inserted; the file is rewritten in full
/// by [`TranslationCache::save`].
#[derive(Debug)]
pub struct TranslationCache {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    dirty: bool,
}

impl TranslationCache {
    /// Empty cache that will persist to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
            dirty: false,
        }
    }

    /// Load from disk. A missing or unreadable file gives an empty cache.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        if !path.exists() {
            tracing::info!("No translation cache at {}, starting empty", path.display());
            return Self::new(path);
        }

        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable translation cache {}: {}",
                    path.display(),
                    e
                );
                BTreeMap::new()
            }
        };

        tracing::info!("Loaded {} cached translations", entries.len());

        Self {
            path,
            entries,
            dirty: false,
        }
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, CacheError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Insert a translation. Returns `false` if the word was already cached.
    pub fn store(&mut self, word: &str, translation: &str) -> bool {
        if self.entries.contains_key(word) {
            return false;
        }

        self.entries.insert(word.to_string(), translation.to_string());
        self.dirty = true;
        true
    }

    /// Write the full mapping back to disk if anything was stored
    pub fn save(&mut self) -> Result<(), CacheError> {
        if !self.dirty {
            tracing::debug!("Translation cache unchanged, skipping write");
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, data)?;
        self.dirty = false;

        tracing::info!(
            "Saved {} translations to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
