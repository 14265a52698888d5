//! The description pipeline: fill missing descriptions from an ordered
//! chain of sources.
//!
//! Chain order is a policy choice: the manual table first (deterministic and
//! free), then the primary provider's ISBN/free-text lookup, then the
//! secondary provider, then the tag-template generator, which never fails —
//! so this pass always terminates with a value for every record it touches.
//! Records that already have a description are skipped entirely, making the
//! pass idempotent.

pub mod fallback;
pub mod google;
pub mod manual;
pub mod openlibrary;

use std::collections::BTreeMap;
use std::time::Duration;

use crate::catalog::BookCatalog;
use crate::config::MaintenanceConfig;
use crate::model::BookRecord;
use crate::resolve::{DescriptionSource, Resolved, resolve_description};

use fallback::TagFallback;
use google::GoogleBooks;
use manual::ManualSource;
use openlibrary::OpenLibrary;

/// Outcome of one describe run. Local to the invocation; passed back to the
/// caller rather than accumulated in shared state.
#[derive(Debug, Default)]
pub struct DescribeReport {
    /// Records that were missing a description.
    pub examined: usize,
    /// Records that got one.
    pub resolved: usize,
    /// Records that did not (only possible with a truncated chain).
    pub unresolved: usize,
    /// Wins per source name.
    pub by_source: BTreeMap<&'static str, usize>,
}

/// The standard four-link chain, in priority order.
pub fn standard_chain(config: &MaintenanceConfig) -> Vec<Box<dyn DescriptionSource>> {
    let timeout = Duration::from_secs(config.describe_timeout_secs);
    vec![
        Box::new(ManualSource),
        Box::new(GoogleBooks::new(&config.google_base, timeout)),
        Box::new(OpenLibrary::new(&config.openlibrary_base, timeout)),
        Box::new(TagFallback),
    ]
}

/// Resolve descriptions for every record that needs one.
///
/// `on_record` fires once per examined record with its position, the total,
/// the record, and the outcome, so the caller can render progress. A
/// cooperative pause runs after every `describe_pause_every` examined records
/// (skipped when the pause is zero).
pub fn run(
    catalog: &mut BookCatalog,
    config: &MaintenanceConfig,
    sources: &[Box<dyn DescriptionSource>],
    mut on_record: impl FnMut(usize, usize, &BookRecord, Option<&Resolved>),
) -> DescribeReport {
    let total = catalog
        .records()
        .iter()
        .filter(|b| b.needs_description())
        .count();

    let mut report = DescribeReport::default();
    for book in catalog.records_mut() {
        if !book.needs_description() {
            continue;
        }
        report.examined += 1;

        let outcome = resolve_description(book, sources);
        match &outcome {
            Some(resolved) => {
                book.description = Some(resolved.text.clone());
                *report.by_source.entry(resolved.source).or_insert(0) += 1;
                report.resolved += 1;
            }
            None => report.unresolved += 1,
        }
        on_record(report.examined, total, book, outcome.as_ref());

        if config.describe_pause_ms > 0
            && config.describe_pause_every > 0
            && report.examined % config.describe_pause_every == 0
        {
            std::thread::sleep(Duration::from_millis(config.describe_pause_ms));
        }
    }

    tracing::info!(
        examined = report.examined,
        resolved = report.resolved,
        unresolved = report.unresolved,
        "describe pass finished"
    );
    report
}

/// Replace generated catch-all text with curated per-id descriptions.
///
/// Only records whose description equals the generic template exactly are
/// touched, and only when the curated table knows their id. Returns the ids
/// of upgraded records.
pub fn retouch(catalog: &mut BookCatalog) -> Vec<String> {
    let mut upgraded = Vec::new();
    for book in catalog.records_mut() {
        if book.description.as_deref() != Some(fallback::GENERIC_TEMPLATE) {
            continue;
        }
        if let Some(text) = manual::curated_description(&book.id) {
            book.description = Some(text.to_string());
            upgraded.push(book.id.clone());
        }
    }
    tracing::info!(count = upgraded.len(), "retouch pass finished");
    upgraded
}
