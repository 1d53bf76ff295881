//! JSON-backed table store
//!
//! Each named table lives in `<root>/<name>.json` as a pretty-printed array
//! of row objects. Reads never fail: a missing or unreadable file is replaced
//! with the table's default content, which is written back straight away.
//!
//! There is no locking. Two sessions saving the same table race and the last
//! writer wins.

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::records::Record;

/// Default location of the persisted tables, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

const TABLE_EXTENSION: &str = "json";

/// Handle on a data directory holding one file per table
#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, StoreError> {
        let store = Self {
            root: root.as_ref().to_path_buf(),
        };
        store.ensure_root()?;
        Ok(store)
    }

    /// Open the store in [`DEFAULT_DATA_DIR`]
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(DEFAULT_DATA_DIR)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn table_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, TABLE_EXTENSION))
    }

    /// Load the rows of `name`.
    ///
    /// When the file is missing or cannot be parsed, the rows from
    /// `default_factory` are persisted and returned instead.
    pub fn load<T, F>(&self, name: &str, default_factory: F) -> Vec<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        let path = self.table_path(name);
        match read_rows(&path) {
            Ok(Some(rows)) => {
                debug!("Loaded {} rows from {}", rows.len(), path.display());
                return rows;
            }
            Ok(None) => info!("No saved '{}' table, using defaults", name),
            Err(e) => warn!("Discarding unreadable '{}' table: {}", name, e),
        }

        let rows = default_factory();
        if let Err(e) = self.save(name, &rows) {
            warn!("Could not persist default '{}' table: {}", name, e);
        }
        rows
    }

    /// Overwrite the persisted copy of `name` with `rows`
    pub fn save<T: Serialize>(&self, name: &str, rows: &[T]) -> Result<(), StoreError> {
        self.ensure_root()?;

        let path = self.table_path(name);
        let json = serde_json::to_string_pretty(rows).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        debug!("Saved {} rows to {}", rows.len(), path.display());
        Ok(())
    }

    /// Load a typed table, falling back to its built-in defaults
    pub fn load_table<R: Record>(&self) -> Vec<R> {
        self.load(R::TABLE, R::defaults)
    }

    pub fn save_table<R: Record>(&self, rows: &[R]) -> Result<(), StoreError> {
        self.save(R::TABLE, rows)
    }

    fn ensure_root(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })
    }
}

/// Read and parse a table file; `Ok(None)` when it does not exist
fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{DistributionRecord, ExpenseRecord, IncomeRecord};
    use serde::Deserialize;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, RecordStore) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path().join("data")).unwrap();
        (dir, store)
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        title: String,
        pages: u32,
    }

    fn default_notes() -> Vec<Note> {
        vec![Note { title: "ledger".to_string(), pages: 3 }]
    }

    #[test]
    fn test_open_creates_directory() {
        let (_dir, store) = temp_store();
        assert!(store.root().is_dir());
        // Opening again over an existing directory is fine
        assert!(RecordStore::open(store.root()).is_ok());
    }

    #[test]
    fn test_missing_table_is_created_from_defaults() {
        let (_dir, store) = temp_store();
        let path = store.table_path("notes");
        assert!(!path.exists());

        let rows = store.load("notes", default_notes);
        assert_eq!(rows, default_notes());

        let written: Vec<Note> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, default_notes());
    }

    #[test]
    fn test_corrupt_table_is_replaced() {
        let (_dir, store) = temp_store();
        let path = store.table_path("expenses");
        fs::write(&path, "{ not json").unwrap();

        let rows: Vec<ExpenseRecord> = store.load_table();
        assert_eq!(rows, ExpenseRecord::defaults());

        let written: Vec<ExpenseRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, ExpenseRecord::defaults());
    }

    #[test]
    fn test_wrong_shape_counts_as_corrupt() {
        let (_dir, store) = temp_store();
        fs::write(store.table_path("notes"), r#"{"title": "not a list"}"#).unwrap();

        assert_eq!(store.load("notes", default_notes), default_notes());
    }

    #[test]
    fn test_existing_table_is_not_overwritten_by_defaults() {
        let (_dir, store) = temp_store();
        let saved = vec![Note { title: "minutes".to_string(), pages: 9 }];
        store.save("notes", &saved).unwrap();

        assert_eq!(store.load("notes", default_notes), saved);
    }

    #[test]
    fn test_round_trip() {
        let (_dir, store) = temp_store();
        let mut rows = IncomeRecord::defaults();
        rows.push(IncomeRecord::new("Bridge Course", "40", "abc", "typed by hand"));
        rows[0].total = Some(9_000_000.0);

        store.save_table(&rows).unwrap();
        let loaded: Vec<IncomeRecord> = store.load("income", Vec::new);
        assert_eq!(loaded, rows);
    }

    #[test]
    fn test_empty_table_round_trips() {
        let (_dir, store) = temp_store();
        store.save_table::<DistributionRecord>(&[]).unwrap();

        let loaded: Vec<DistributionRecord> = store.load_table();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_unicode_written_unescaped() {
        let (_dir, store) = temp_store();
        store.save_table(&IncomeRecord::defaults()).unwrap();

        let text = fs::read_to_string(store.table_path("income")).unwrap();
        assert!(text.contains("Fee per Student (₹)"));
        assert!(!text.contains("\\u20b9"));
        assert!(text.contains("\n  {"));
    }

    #[test]
    fn test_save_recreates_removed_directory() {
        let (_dir, store) = temp_store();
        fs::remove_dir_all(store.root()).unwrap();

        store.save("notes", &default_notes()).unwrap();
        assert!(store.table_path("notes").exists());
    }
}
