//! Provider B: an Open-Library-shaped catalog.
//!
//! Two endpoint shapes: a batch lookup keyed by `"ISBN:<isbn>"`, and a
//! title/author search whose docs carry a canonical detail-record key plus an
//! optional numeric cover-image id. Detail descriptions come back either as a
//! bare string or as a structured `{type, value}` object; both are accepted.
//!
//! This provider sits lower in the trust chain: candidates need more than 50
//! characters to be accepted, where the manual table and Provider A only need
//! to be non-empty.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::model::BookRecord;
use crate::resolve::DescriptionSource;

/// Trust floor for this provider's candidates, in characters.
const MIN_CHARS: usize = 50;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchDoc {
    key: Option<String>,
    #[serde(rename = "cover_i")]
    cover_id: Option<u64>,
}

/// Description field of a detail record: plain string or typed text object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextOrTyped {
    Plain(String),
    Typed { value: String },
}

impl TextOrTyped {
    fn into_string(self) -> String {
        match self {
            Self::Plain(s) => s,
            Self::Typed { value } => value,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct DetailRecord {
    description: Option<TextOrTyped>,
}

/// Client for the catalog API.
pub struct OpenLibrary {
    agent: ureq::Agent,
    base: String,
}

impl OpenLibrary {
    pub fn new(base: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Batch endpoint: one ISBN, keyed response.
    fn description_by_isbn(&self, isbn: &str) -> Option<String> {
        let url = format!("{}/api/books", self.base);
        let response = self
            .agent
            .get(&url)
            .query("bibkeys", &format!("ISBN:{isbn}"))
            .query("format", "json")
            .query("jscmd", "data")
            .call()
            .ok()?;
        let mut parsed: HashMap<String, DetailRecord> = response.into_json().ok()?;
        let record = parsed.remove(&format!("ISBN:{isbn}"))?;
        record.description.map(TextOrTyped::into_string)
    }

    /// First search doc for a title, optionally narrowed by author.
    fn first_doc(&self, title: &str, author: &str) -> Option<SearchDoc> {
        let url = format!("{}/search.json", self.base);
        let mut request = self.agent.get(&url).query("title", title);
        if !author.is_empty() {
            request = request.query("author", author);
        }
        let mut parsed: SearchResponse = request.call().ok()?.into_json().ok()?;
        if parsed.docs.is_empty() {
            return None;
        }
        Some(parsed.docs.remove(0))
    }

    /// Search path: find the canonical record key, then fetch its detail
    /// endpoint.
    fn description_by_search(&self, title: &str, author: &str) -> Option<String> {
        let key = self.first_doc(title, author)?.key?;
        let url = format!("{}{key}.json", self.base);
        let detail: DetailRecord = self.agent.get(&url).call().ok()?.into_json().ok()?;
        detail.description.map(TextOrTyped::into_string)
    }

    /// Raw description for a record.
    pub fn description(&self, book: &BookRecord) -> Option<String> {
        match book.isbn() {
            Some(isbn) => self.description_by_isbn(isbn),
            None => self.description_by_search(&book.title, &book.author),
        }
    }

    /// Numeric cover-image id for a title + author, when the catalog has one.
    pub fn cover_id(&self, title: &str, author: &str) -> Option<u64> {
        self.first_doc(title, author)?.cover_id
    }
}

impl DescriptionSource for OpenLibrary {
    fn name(&self) -> &'static str {
        "openlibrary"
    }

    fn candidate(&self, book: &BookRecord) -> Option<String> {
        self.description(book)
    }

    fn min_chars(&self) -> usize {
        MIN_CHARS
    }
}
