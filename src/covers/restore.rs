//! Cover re-acquisition for records without cover art.
//!
//! Two attempts per record: the cover-id catalog first (title/author search
//! for a numeric cover id, then the full-size image), then the primary
//! provider's thumbnail with its zoom parameter upgraded and transport forced
//! to https. Each fetched body must clear a byte floor before it is trusted;
//! provider stubs are smaller than any real cover.
//!
//! Records in the configured exclusion list are never touched: those are
//! manually-confirmed bad matches that must not be auto-corrected.

use std::io::Read;
use std::time::Duration;

use crate::catalog::BookCatalog;
use crate::config::MaintenanceConfig;
use crate::covers::store::CoverStore;
use crate::describe::google::GoogleBooks;
use crate::describe::openlibrary::OpenLibrary;
use crate::error::BookmendResult;
use crate::model::BookRecord;

/// Which attempt produced the accepted image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreSource {
    CoverCatalog,
    Thumbnail,
}

/// Outcome of one restore run.
#[derive(Debug, Default)]
pub struct RestoreReport {
    /// Records that were missing a cover and not excluded.
    pub attempted: usize,
    pub via_cover_catalog: usize,
    pub via_thumbnail: usize,
    pub failed: usize,
    /// Excluded record ids that would otherwise have been attempted.
    pub skipped: Vec<String>,
}

impl RestoreReport {
    pub fn restored(&self) -> usize {
        self.via_cover_catalog + self.via_thumbnail
    }
}

/// Downloads cover images from the two providers.
pub struct CoverRestorer {
    google: GoogleBooks,
    openlibrary: OpenLibrary,
    agent: ureq::Agent,
    covers_base: String,
    cover_id_min_bytes: u64,
    thumbnail_min_bytes: u64,
}

impl CoverRestorer {
    pub fn new(config: &MaintenanceConfig) -> Self {
        let timeout = Duration::from_secs(config.cover_timeout_secs);
        Self {
            google: GoogleBooks::new(&config.google_base, timeout),
            openlibrary: OpenLibrary::new(&config.openlibrary_base, timeout),
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
            covers_base: config.covers_base.trim_end_matches('/').to_string(),
            cover_id_min_bytes: config.cover_id_min_bytes,
            thumbnail_min_bytes: config.thumbnail_min_bytes,
        }
    }

    fn fetch_bytes(&self, url: &str) -> Option<Vec<u8>> {
        let response = self.agent.get(url).call().ok()?;
        let mut data = Vec::new();
        response.into_reader().read_to_end(&mut data).ok()?;
        Some(data)
    }

    /// Full-size image via the cover-id catalog.
    fn from_cover_catalog(&self, book: &BookRecord) -> Option<Vec<u8>> {
        let cover_id = self.openlibrary.cover_id(&book.title, &book.author)?;
        let url = format!("{}/b/id/{cover_id}-L.jpg", self.covers_base);
        let data = self.fetch_bytes(&url)?;
        (data.len() as u64 > self.cover_id_min_bytes).then_some(data)
    }

    /// Upgraded thumbnail from the primary provider.
    fn from_thumbnail(&self, book: &BookRecord) -> Option<Vec<u8>> {
        let url = self.google.thumbnail_url(&book.title, &book.author)?;
        let data = self.fetch_bytes(&url)?;
        (data.len() as u64 > self.thumbnail_min_bytes).then_some(data)
    }

    /// Try both providers in order.
    pub fn acquire(&self, book: &BookRecord) -> Option<(Vec<u8>, RestoreSource)> {
        if let Some(data) = self.from_cover_catalog(book) {
            return Some((data, RestoreSource::CoverCatalog));
        }
        if let Some(data) = self.from_thumbnail(book) {
            return Some((data, RestoreSource::Thumbnail));
        }
        None
    }
}

/// Re-acquire covers for every record lacking one.
///
/// `on_record` fires per attempted record with the outcome. A cooperative
/// pause follows every record (this is the slow flow; providers rate-limit).
pub fn run(
    catalog: &mut BookCatalog,
    store: &CoverStore,
    config: &MaintenanceConfig,
    restorer: &CoverRestorer,
    mut on_record: impl FnMut(&BookRecord, Option<RestoreSource>),
) -> BookmendResult<RestoreReport> {
    store.ensure_dir()?;

    let mut report = RestoreReport::default();
    for book in catalog.records_mut() {
        if book.cover_image.is_some() {
            continue;
        }
        if config.skip_restore.contains(&book.id) {
            tracing::info!(id = %book.id, "excluded from cover re-acquisition");
            report.skipped.push(book.id.clone());
            continue;
        }
        report.attempted += 1;

        match restorer.acquire(book) {
            Some((data, source)) => {
                store.write(&book.id, &data)?;
                book.cover_image = Some(store.record_ref(&book.id));
                match source {
                    RestoreSource::CoverCatalog => report.via_cover_catalog += 1,
                    RestoreSource::Thumbnail => report.via_thumbnail += 1,
                }
                tracing::info!(id = %book.id, ?source, bytes = data.len(), "cover restored");
                on_record(book, Some(source));
            }
            None => {
                report.failed += 1;
                tracing::debug!(id = %book.id, "no cover found at any provider");
                on_record(book, None);
            }
        }

        if config.restore_pause_ms > 0 {
            std::thread::sleep(Duration::from_millis(config.restore_pause_ms));
        }
    }

    tracing::info!(
        attempted = report.attempted,
        restored = report.restored(),
        failed = report.failed,
        skipped = report.skipped.len(),
        "restore pass finished"
    );
    Ok(report)
}
