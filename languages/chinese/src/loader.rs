use std::path::Path;

use crate::hsk::HskTable;

pub struct HskLoader;

impl HskLoader {
    /// Load the word list bundled with the binary
    pub fn load_embedded() -> HskTable {
        let tsv = include_str!("../data/hsk.tsv");
        tracing::info!("Loading embedded HSK word list...");
        let table = HskTable::from_tsv(tsv);
        tracing::info!("Loaded {} HSK entries", hanzi_core::ReferenceTable::entry_count(&table));
        table
    }

    /// Load HSK word list from file path
    pub fn load_from_file(path: &Path) -> Result<HskTable, std::io::Error> {
        tracing::info!("Loading HSK word list from file: {}", path.display());
        let tsv = std::fs::read_to_string(path)?;
        Ok(HskTable::from_tsv(&tsv))
    }

    /// Merge two tables (later entries override earlier ones by word)
    pub fn merge(base: HskTable, additional: HskTable) -> HskTable {
        base.merge(additional)
    }
}

#[cfg(test)]
mod tests {
    use hanzi_core::ReferenceTable;
    use hanzi_types::HskLevel;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn embedded_list_covers_every_level() {
        let table = HskLoader::load_embedded();
        assert!(table.entry_count() > 500);
        assert!(table.level_counts().iter().all(|&n| n > 0));
        assert_eq!(table.get_level("爱"), Some(HskLevel::Hsk1));
        assert_eq!(table.get_level("学习"), Some(HskLevel::Hsk1));
    }

    #[test]
    fn file_rows_override_embedded_ones() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("extra.tsv");
        std::fs::write(&path, "爱\t4\t1\n量子\t6\t20000\n").unwrap();

        let extra = HskLoader::load_from_file(&path).unwrap();
        let table = HskLoader::merge(HskLoader::load_embedded(), extra);

        assert_eq!(table.get_level("爱"), Some(HskLevel::Hsk4));
        assert_eq!(table.get_rank("量子"), Some(20000));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        assert!(HskLoader::load_from_file(&dir.path().join("missing.tsv")).is_err());
    }
}
