use std::path::PathBuf;

use tempfile::TempDir;
use wedding_manager::sheets::SheetStore;
use wedding_manager::sheets::csv::CsvSheetStore;
use wedding_manager::sheets::schema;
use wedding_manager::store::cache::LocalCache;

/// Temporary sheet directory and cache slot for one test.
pub struct TestFixture {
    dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    /// A CSV sheet store with every declared sheet created.
    pub fn sheet_store(&self) -> CsvSheetStore {
        let mut store = CsvSheetStore::new(self.dir.path().join("sheets"));
        store.ensure_sheets(&schema::ALL).expect("sheet setup");
        store
    }

    /// A sheet store over the directory without creating any sheets.
    pub fn empty_sheet_store(&self) -> CsvSheetStore {
        CsvSheetStore::new(self.dir.path().join("sheets"))
    }

    pub fn cache(&self) -> LocalCache {
        LocalCache::new(self.cache_path())
    }

    pub fn cache_path(&self) -> PathBuf {
        self.dir.path().join("wedding-data.json")
    }

    pub fn sheet_path(&self, name: &str) -> PathBuf {
        self.dir.path().join("sheets").join(format!("{name}.csv"))
    }
}
