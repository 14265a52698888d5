//! The catalog store: a flat JSON file holding an ordered array of books.
//!
//! The whole collection is read into memory once per run, mutated in place by
//! the passes, and written back wholesale at the end. There is no incremental
//! or streaming I/O; an interrupted run persists nothing.

use std::path::{Path, PathBuf};

use crate::error::{BookmendResult, CatalogError};
use crate::model::BookRecord;

/// In-memory view of the catalog file.
///
/// Record order is load order and is preserved through save.
pub struct BookCatalog {
    path: PathBuf,
    records: Vec<BookRecord>,
}

impl BookCatalog {
    /// Load the full collection from `path`.
    pub fn load(path: &Path) -> BookmendResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let records: Vec<BookRecord> =
            serde_json::from_str(&data).map_err(|e| CatalogError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::debug!(count = records.len(), path = %path.display(), "catalog loaded");
        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    /// Write the full collection back, human-readable, Unicode intact.
    ///
    /// Writes to a sibling temp file first and renames over the original, so
    /// a failure mid-write never truncates the catalog.
    pub fn save(&self) -> BookmendResult<()> {
        let json = serde_json::to_string_pretty(&self.records)
            .map_err(|e| CatalogError::Serialize { source: e })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json + "\n").map_err(|e| CatalogError::Write {
            path: tmp.clone(),
            source: e,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| CatalogError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(count = self.records.len(), path = %self.path.display(), "catalog saved");
        Ok(())
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [BookRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_catalog(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("books.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn load_save_preserves_order_and_unicode() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_catalog(
            dir.path(),
            r#"[
                {"id": "2", "title": "Étoile filante"},
                {"id": "1", "title": "Madeline"}
            ]"#,
        );

        let catalog = BookCatalog::load(&path).unwrap();
        catalog.save().unwrap();

        let reloaded = BookCatalog::load(&path).unwrap();
        assert_eq!(reloaded.records()[0].id, "2");
        assert_eq!(reloaded.records()[1].id, "1");

        // Non-ASCII stays literal, not \u-escaped.
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Étoile filante"));
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_catalog(dir.path(), "{not an array");
        assert!(BookCatalog::load(&path).is_err());
    }

    #[test]
    fn load_missing_file_is_fatal() {
        let err = BookCatalog::load(Path::new("/nonexistent/books.json"));
        assert!(err.is_err());
    }

    #[test]
    fn mutations_persist_through_save() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_catalog(dir.path(), r#"[{"id": "1", "title": "Corduroy"}]"#);

        let mut catalog = BookCatalog::load(&path).unwrap();
        catalog.records_mut()[0].description = Some("A small teddy bear.".into());
        catalog.save().unwrap();

        let reloaded = BookCatalog::load(&path).unwrap();
        assert_eq!(
            reloaded.records()[0].description.as_deref(),
            Some("A small teddy bear.")
        );
    }
}
