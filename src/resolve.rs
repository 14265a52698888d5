//! The ordered fallback chain for missing record attributes.
//!
//! A source is one resolution attempt: it either produces a raw candidate or
//! nothing. Sources are expected to swallow their own failures — network
//! errors, timeouts, malformed responses all come back as `None`, never as an
//! error — so one unreliable provider cannot abort the chain. The chain tries
//! sources in declared order and the first candidate that survives
//! normalization wins; later sources are never invoked.

use crate::model::BookRecord;
use crate::normalize;

/// One attempt at producing a description for a record.
pub trait DescriptionSource {
    /// Short name for progress lines and per-source counts.
    fn name(&self) -> &'static str;

    /// Produce a raw candidate, or `None`. Must not fail: any internal
    /// error is reported as `None`.
    fn candidate(&self, book: &BookRecord) -> Option<String>;

    /// Trust floor: candidates with at most this many characters (after
    /// stripping) are rejected and the chain moves on.
    fn min_chars(&self) -> usize {
        0
    }
}

/// A winning candidate, tagged with the source that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub text: String,
    pub source: &'static str,
}

/// Try each source in order; first normalized survivor wins.
///
/// Returns `None` only when every source in the chain came up empty. No
/// side effects: the caller decides whether to write the result back.
pub fn resolve_description(
    book: &BookRecord,
    sources: &[Box<dyn DescriptionSource>],
) -> Option<Resolved> {
    for source in sources {
        let Some(raw) = source.candidate(book) else {
            tracing::debug!(source = source.name(), id = %book.id, "no candidate");
            continue;
        };
        match normalize::normalize(&raw, source.min_chars()) {
            Some(text) => {
                tracing::debug!(source = source.name(), id = %book.id, "resolved");
                return Some(Resolved {
                    text,
                    source: source.name(),
                });
            }
            None => {
                tracing::debug!(
                    source = source.name(),
                    id = %book.id,
                    "candidate rejected by normalization"
                );
            }
        }
    }
    None
}
