//! Core data types for the book catalog.
//!
//! A [`BookRecord`] mirrors one entry of the JSON catalog file. Fields the
//! maintenance passes do not understand are preserved verbatim through a
//! flattened map, so a load → mutate → save cycle never drops data added by
//! other tools.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One book entry in the catalog collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    /// Unique stable identifier within the collection. Never empty in a
    /// healthy catalog; the audit pass flags records where it is.
    #[serde(default)]
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Display author.
    #[serde(default)]
    pub author: String,
    /// Primary lookup key for bibliographic providers, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// Category labels ("Funny", "STEM", ...), used as a last-resort
    /// signal by the description fallback.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Free-text description; absent until resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reference to a cover asset (`/covers/<file>`). Removed entirely,
    /// not nulled, when the asset is invalidated.
    #[serde(
        rename = "coverImage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cover_image: Option<String>,
    /// Any other fields present in the catalog file, carried through
    /// untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BookRecord {
    /// Whether the description pipeline should touch this record.
    ///
    /// Records with a non-empty description are never re-resolved, which
    /// makes the describe pass idempotent.
    pub fn needs_description(&self) -> bool {
        match &self.description {
            None => true,
            Some(text) => text.trim().is_empty(),
        }
    }

    /// Exact-match tag test (case-sensitive, like the catalog's tag labels).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// ISBN, if present and non-empty.
    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref().filter(|s| !s.is_empty())
    }
}
