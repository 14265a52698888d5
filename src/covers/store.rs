//! Filesystem store for downloaded cover images.
//!
//! One file per record, named `{prefix}{id}.jpg`. Records reference assets
//! as `/covers/<file>` (a web-root-relative path); the store maps those refs
//! back to files in its directory by basename.

use std::path::{Path, PathBuf};

use crate::error::{BookmendResult, CoverError};

pub struct CoverStore {
    dir: PathBuf,
    prefix: String,
}

impl CoverStore {
    pub fn new(dir: &Path, prefix: &str) -> Self {
        Self {
            dir: dir.to_path_buf(),
            prefix: prefix.to_string(),
        }
    }

    /// Create the asset directory if it does not exist yet.
    pub fn ensure_dir(&self) -> BookmendResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| CoverError::CreateDir {
            path: self.dir.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Deterministic asset filename for a record id.
    pub fn filename(&self, id: &str) -> String {
        format!("{}{}.jpg", self.prefix, id)
    }

    /// The value stored in a record's cover field.
    pub fn record_ref(&self, id: &str) -> String {
        format!("/covers/{}", self.filename(id))
    }

    /// Filesystem path for a record's cover ref.
    pub fn path_for_ref(&self, cover_ref: &str) -> PathBuf {
        let basename = cover_ref.rsplit('/').next().unwrap_or(cover_ref);
        self.dir.join(basename)
    }

    /// Byte size of an asset, or `None` when the file is absent.
    pub fn size_of(&self, path: &Path) -> Option<u64> {
        std::fs::metadata(path).ok().map(|m| m.len())
    }

    /// Save downloaded image bytes for a record; returns the asset path.
    pub fn write(&self, id: &str, bytes: &[u8]) -> BookmendResult<PathBuf> {
        self.ensure_dir()?;
        let path = self.dir.join(self.filename(id));
        std::fs::write(&path, bytes).map_err(|e| CoverError::Write {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }

    /// Remove an asset file.
    pub fn delete(&self, path: &Path) -> BookmendResult<()> {
        std::fs::remove_file(path).map_err(|e| CoverError::Delete {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }
}
