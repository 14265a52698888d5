//! Placeholder cover detection and pruning.
//!
//! The primary image provider answers "no cover available" with a stock
//! image whose byte size never varies. Any asset matching that exact size is
//! a placeholder, not a real cover: the file is deleted and the owning
//! record's cover field is removed (absent, not nulled), so the record
//! becomes a candidate for re-acquisition.

use crate::catalog::BookCatalog;
use crate::config::MaintenanceConfig;
use crate::covers::store::CoverStore;
use crate::error::BookmendResult;

/// Exact-size signature test. Corrupt or truncated downloads have other
/// sizes and are a different failure mode (see the validator).
pub fn is_placeholder(size: u64, config: &MaintenanceConfig) -> bool {
    size == config.placeholder_signature_bytes
}

/// Delete placeholder assets and drop their record references.
///
/// Returns the ids of pruned records. Deletion failures are fatal: leaving
/// a record pointing at a file we half-removed is worse than stopping.
pub fn prune(
    catalog: &mut BookCatalog,
    store: &CoverStore,
    config: &MaintenanceConfig,
) -> BookmendResult<Vec<String>> {
    let mut pruned = Vec::new();
    for book in catalog.records_mut() {
        let Some(cover_ref) = &book.cover_image else {
            continue;
        };
        let path = store.path_for_ref(cover_ref);
        let Some(size) = store.size_of(&path) else {
            continue;
        };
        if !is_placeholder(size, config) {
            continue;
        }

        tracing::info!(id = %book.id, title = %book.title, size, "placeholder cover pruned");
        store.delete(&path)?;
        book.cover_image = None;
        pruned.push(book.id.clone());
    }
    Ok(pruned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn setup(dir: &Path, body: &str) -> (BookCatalog, CoverStore, MaintenanceConfig) {
        let path = dir.join("books.json");
        std::fs::write(&path, body).unwrap();
        let catalog = BookCatalog::load(&path).unwrap();
        let store = CoverStore::new(&dir.join("covers"), "cover-");
        store.ensure_dir().unwrap();
        (catalog, store, MaintenanceConfig::default())
    }

    #[test]
    fn signature_sized_asset_is_pruned_and_field_removed() {
        let dir = tempfile::TempDir::new().unwrap();
        let (mut catalog, store, config) = setup(
            dir.path(),
            r#"[{"id": "233", "title": "Jelly Beans", "coverImage": "/covers/cover-233.jpg"}]"#,
        );
        let path = store
            .write("233", &vec![0u8; config.placeholder_signature_bytes as usize])
            .unwrap();

        let pruned = prune(&mut catalog, &store, &config).unwrap();
        assert_eq!(pruned, vec!["233".to_string()]);
        assert!(!path.exists());
        assert!(catalog.records()[0].cover_image.is_none());

        // Field is absent in serialized output, not null.
        let out = serde_json::to_value(&catalog.records()[0]).unwrap();
        assert!(out.get("coverImage").is_none());
    }

    #[test]
    fn off_by_one_sizes_survive() {
        let dir = tempfile::TempDir::new().unwrap();
        let (mut catalog, store, config) = setup(
            dir.path(),
            r#"[{"id": "1", "title": "T", "coverImage": "/covers/cover-1.jpg"}]"#,
        );
        let path = store
            .write("1", &vec![0u8; config.placeholder_signature_bytes as usize - 1])
            .unwrap();

        let pruned = prune(&mut catalog, &store, &config).unwrap();
        assert!(pruned.is_empty());
        assert!(path.exists());
        assert!(catalog.records()[0].cover_image.is_some());
    }

    #[test]
    fn records_without_assets_are_skipped() {
        let dir = tempfile::TempDir::new().unwrap();
        let (mut catalog, store, config) = setup(
            dir.path(),
            r#"[
                {"id": "1", "title": "No ref"},
                {"id": "2", "title": "Dangling ref", "coverImage": "/covers/cover-2.jpg"}
            ]"#,
        );

        let pruned = prune(&mut catalog, &store, &config).unwrap();
        assert!(pruned.is_empty());
        // The dangling ref is the validator's business, not the pruner's.
        assert!(catalog.records()[1].cover_image.is_some());
    }

    #[test]
    fn signature_is_configurable() {
        let config = MaintenanceConfig {
            placeholder_signature_bytes: 9,
            ..MaintenanceConfig::default()
        };
        assert!(is_placeholder(9, &config));
        assert!(!is_placeholder(15_567, &config));
    }
}
