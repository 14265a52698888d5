//! Cover asset integrity checks.
//!
//! Distinct from placeholder detection: a corrupt or truncated download is a
//! different failure mode than the provider's known stock bytes. An asset is
//! valid when the file exists, clears the viable-photo byte floor, decodes as
//! an image, and is at least the dimension floor on both axes.

use std::path::{Path, PathBuf};

use image::GenericImageView;

use crate::catalog::BookCatalog;
use crate::config::MaintenanceConfig;
use crate::covers::store::CoverStore;

/// What the validator concluded about one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverVerdict {
    Good {
        width: u32,
        height: u32,
        bytes: u64,
    },
    /// Record references an asset that is not on disk.
    FileMissing { path: PathBuf },
    /// Below the viable-photo byte floor (truncated download).
    TooSmall { bytes: u64 },
    /// The decoder rejected the bytes.
    Undecodable { reason: String },
    /// Decodes, but below the dimension floor (e.g. a 1×1 tracking pixel).
    Tiny { width: u32, height: u32 },
}

impl CoverVerdict {
    pub fn is_good(&self) -> bool {
        matches!(self, Self::Good { .. })
    }
}

impl std::fmt::Display for CoverVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good {
                width,
                height,
                bytes,
            } => write!(f, "OK ({width}x{height}, {bytes} bytes)"),
            Self::FileMissing { path } => write!(f, "FILE MISSING: {}", path.display()),
            Self::TooSmall { bytes } => write!(f, "TOO SMALL: {bytes} bytes"),
            Self::Undecodable { reason } => write!(f, "CORRUPT: {reason}"),
            Self::Tiny { width, height } => write!(f, "TINY IMAGE: {width}x{height}"),
        }
    }
}

/// Validate a single asset file.
pub fn validate_asset(path: &Path, config: &MaintenanceConfig) -> CoverVerdict {
    let Ok(meta) = std::fs::metadata(path) else {
        return CoverVerdict::FileMissing {
            path: path.to_path_buf(),
        };
    };
    let bytes = meta.len();
    if bytes < config.min_photo_bytes {
        return CoverVerdict::TooSmall { bytes };
    }

    let image = match image::open(path) {
        Ok(image) => image,
        Err(e) => {
            return CoverVerdict::Undecodable {
                reason: e.to_string(),
            };
        }
    };
    let (width, height) = image.dimensions();
    if width < config.min_cover_dim || height < config.min_cover_dim {
        return CoverVerdict::Tiny { width, height };
    }
    CoverVerdict::Good {
        width,
        height,
        bytes,
    }
}

/// One record's line in the check report.
#[derive(Debug)]
pub struct CheckLine {
    pub id: String,
    pub title: String,
    pub verdict: CoverVerdict,
}

/// Result of a full check pass.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub good: Vec<CheckLine>,
    pub bad: Vec<CheckLine>,
    /// Records with no cover reference at all.
    pub missing: Vec<(String, String)>,
}

/// Validate every referenced cover. With `repair`, records failing
/// validation lose their cover field (absent, not nulled); the asset files
/// themselves are left in place for inspection.
pub fn check(
    catalog: &mut BookCatalog,
    store: &CoverStore,
    config: &MaintenanceConfig,
    repair: bool,
) -> CheckReport {
    let mut report = CheckReport::default();
    for book in catalog.records_mut() {
        let Some(cover_ref) = &book.cover_image else {
            report.missing.push((book.id.clone(), book.title.clone()));
            continue;
        };
        let path = store.path_for_ref(cover_ref);
        let verdict = validate_asset(&path, config);
        let line = CheckLine {
            id: book.id.clone(),
            title: book.title.clone(),
            verdict,
        };
        if line.verdict.is_good() {
            report.good.push(line);
        } else {
            if repair {
                tracing::info!(id = %book.id, verdict = %line.verdict, "cover reference removed");
                book.cover_image = None;
            }
            report.bad.push(line);
        }
    }
    report
}
