//! End-to-end tests for cover maintenance: pruning, validation, and the
//! restore pass wiring (with providers pointed at dead addresses).

use std::path::Path;

use bookmend::catalog::BookCatalog;
use bookmend::config::MaintenanceConfig;
use bookmend::covers::restore::{self, CoverRestorer};
use bookmend::covers::store::CoverStore;
use bookmend::covers::{placeholder, validate};

fn load_catalog(dir: &Path, body: &str) -> BookCatalog {
    let path = dir.join("books.json");
    std::fs::write(&path, body).unwrap();
    BookCatalog::load(&path).unwrap()
}

fn gradient_jpeg(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8])
    });
    img.save(path).unwrap();
}

#[test]
fn prune_then_check_leaves_a_consistent_catalog() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = MaintenanceConfig {
        covers_dir: dir.path().join("covers"),
        ..MaintenanceConfig::default()
    };
    let store = CoverStore::new(&config.covers_dir, &config.cover_prefix);
    store.ensure_dir().unwrap();

    let mut catalog = load_catalog(
        dir.path(),
        r#"[
            {"id": "1", "title": "Real Cover", "coverImage": "/covers/cover-1.jpg"},
            {"id": "2", "title": "Placeholder", "coverImage": "/covers/cover-2.jpg"}
        ]"#,
    );

    gradient_jpeg(&store.path_for_ref("/covers/cover-1.jpg"), 200, 300);
    std::fs::write(
        store.path_for_ref("/covers/cover-2.jpg"),
        vec![0u8; config.placeholder_signature_bytes as usize],
    )
    .unwrap();

    let pruned = placeholder::prune(&mut catalog, &store, &config).unwrap();
    assert_eq!(pruned, vec!["2".to_string()]);
    assert!(!store.path_for_ref("/covers/cover-2.jpg").exists());

    let report = validate::check(&mut catalog, &store, &config, false);
    assert_eq!(report.good.len(), 1);
    assert_eq!(report.good[0].id, "1");
    assert!(report.bad.is_empty());
    // The pruned record now counts as missing a cover.
    assert_eq!(report.missing.len(), 1);
    assert_eq!(report.missing[0].0, "2");
}

#[test]
fn prune_persists_field_removal_through_save() {
    let dir = tempfile::TempDir::new().unwrap();
    let books_path = dir.path().join("books.json");
    std::fs::write(
        &books_path,
        r#"[{"id": "233", "title": "Jelly Beans", "coverImage": "/covers/cover-233.jpg"}]"#,
    )
    .unwrap();

    let config = MaintenanceConfig {
        covers_dir: dir.path().join("covers"),
        ..MaintenanceConfig::default()
    };
    let store = CoverStore::new(&config.covers_dir, &config.cover_prefix);
    store
        .write("233", &vec![0u8; config.placeholder_signature_bytes as usize])
        .unwrap();

    let mut catalog = BookCatalog::load(&books_path).unwrap();
    placeholder::prune(&mut catalog, &store, &config).unwrap();
    catalog.save().unwrap();

    // The serialized record has no coverImage key at all.
    let raw = std::fs::read_to_string(&books_path).unwrap();
    assert!(!raw.contains("coverImage"));
}

#[test]
fn check_with_repair_fixes_records_for_restore() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = MaintenanceConfig {
        covers_dir: dir.path().join("covers"),
        restore_pause_ms: 0,
        cover_timeout_secs: 1,
        google_base: "http://127.0.0.1:1".into(),
        openlibrary_base: "http://127.0.0.1:1".into(),
        covers_base: "http://127.0.0.1:1".into(),
        skip_restore: vec!["9".into()],
        ..MaintenanceConfig::default()
    };
    let store = CoverStore::new(&config.covers_dir, &config.cover_prefix);
    store.ensure_dir().unwrap();

    let mut catalog = load_catalog(
        dir.path(),
        r#"[
            {"id": "8", "title": "Truncated", "author": "A", "coverImage": "/covers/cover-8.jpg"},
            {"id": "9", "title": "Excluded", "author": "B"}
        ]"#,
    );
    // A truncated download: too small to be a photo.
    std::fs::write(store.path_for_ref("/covers/cover-8.jpg"), vec![0u8; 200]).unwrap();

    let report = validate::check(&mut catalog, &store, &config, true);
    assert_eq!(report.bad.len(), 1);
    assert!(catalog.records()[0].cover_image.is_none());

    // Restore now attempts record 8 (providers dead, so it just fails) and
    // honors the exclusion for record 9.
    let restorer = CoverRestorer::new(&config);
    let report = restore::run(&mut catalog, &store, &config, &restorer, |_, _| {}).unwrap();
    assert_eq!(report.attempted, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.skipped, vec!["9".to_string()]);
}

#[test]
fn store_naming_matches_record_refs() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = CoverStore::new(&dir.path().join("covers"), "cover-");
    let path = store.write("42", b"payload").unwrap();
    assert_eq!(path, store.path_for_ref(&store.record_ref("42")));
}
