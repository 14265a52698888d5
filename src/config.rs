//! Run configuration for the maintenance passes.
//!
//! Every knob has an embedded default matching the catalog this tool grew up
//! with, so plain invocation works without any file. A TOML file can override
//! any subset of fields — notably the placeholder byte signature (which tracks
//! a provider-version-dependent artifact) and the restore exclusion list.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BookmendResult, ConfigError};

/// Tunable constants for all maintenance passes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaintenanceConfig {
    /// Catalog file holding the JSON array of book records.
    pub books_path: PathBuf,
    /// Directory holding downloaded cover assets.
    pub covers_dir: PathBuf,
    /// Filename prefix for cover assets (`{prefix}{id}.jpg`).
    pub cover_prefix: String,

    /// Exact byte size of the bibliographic provider's stock "no cover"
    /// placeholder response. Provider-version-dependent.
    pub placeholder_signature_bytes: u64,
    /// Below this, an asset cannot be a real photo (corrupt/truncated
    /// download rather than a known placeholder).
    pub min_photo_bytes: u64,
    /// Minimum accepted cover width and height, in pixels.
    pub min_cover_dim: u32,
    /// Minimum byte size for a full-size cover fetched from the cover-id
    /// catalog before it is trusted.
    pub cover_id_min_bytes: u64,
    /// Minimum byte size distinguishing a real thumbnail from a stub.
    pub thumbnail_min_bytes: u64,

    /// Per-call timeout for description lookups, in seconds.
    pub describe_timeout_secs: u64,
    /// Per-call timeout for cover downloads, in seconds.
    pub cover_timeout_secs: u64,
    /// Pause after this many processed records during describe (rate
    /// limiting courtesy, not a scheduling guarantee).
    pub describe_pause_every: usize,
    /// Length of the describe pause, in milliseconds.
    pub describe_pause_ms: u64,
    /// Pause after every record during cover restore, in milliseconds.
    pub restore_pause_ms: u64,

    /// Record ids permanently excluded from automatic cover re-acquisition
    /// (manually-confirmed bad matches that must never be auto-corrected).
    pub skip_restore: Vec<String>,

    /// Base URL of the Google-Books-shaped provider.
    pub google_base: String,
    /// Base URL of the Open-Library-shaped provider.
    pub openlibrary_base: String,
    /// Base URL of the Open-Library-shaped cover image host.
    pub covers_base: String,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            books_path: PathBuf::from("src/data/books.json"),
            covers_dir: PathBuf::from("public/covers"),
            cover_prefix: "cover-".into(),
            placeholder_signature_bytes: 15_567,
            min_photo_bytes: 1_000,
            min_cover_dim: 50,
            cover_id_min_bytes: 5_000,
            thumbnail_min_bytes: 3_000,
            describe_timeout_secs: 5,
            cover_timeout_secs: 10,
            describe_pause_every: 10,
            describe_pause_ms: 1_000,
            restore_pause_ms: 800,
            skip_restore: Vec::new(),
            google_base: "https://www.googleapis.com".into(),
            openlibrary_base: "https://openlibrary.org".into(),
            covers_base: "https://covers.openlibrary.org".into(),
        }
    }
}

impl MaintenanceConfig {
    /// Load a config from a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> BookmendResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = toml::from_str(&data).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_known_provider_constants() {
        let config = MaintenanceConfig::default();
        assert_eq!(config.placeholder_signature_bytes, 15_567);
        assert_eq!(config.min_photo_bytes, 1_000);
        assert_eq!(config.min_cover_dim, 50);
        assert!(config.skip_restore.is_empty());
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let toml = r#"
            placeholder_signature_bytes = 20000
            skip_restore = ["233"]
        "#;
        let config: MaintenanceConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.placeholder_signature_bytes, 20_000);
        assert_eq!(config.skip_restore, vec!["233".to_string()]);
        // Untouched keys keep their defaults.
        assert_eq!(config.min_photo_bytes, 1_000);
        assert_eq!(config.covers_dir, PathBuf::from("public/covers"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml = r#"placeholder_bytes = 1"#;
        assert!(toml::from_str::<MaintenanceConfig>(toml).is_err());
    }
}
