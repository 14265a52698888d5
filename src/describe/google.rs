//! Provider A: a Google-Books-shaped volumes API.
//!
//! One GET against the volumes search endpoint; the first returned item's
//! `volumeInfo` carries an optional description and optional image links.
//! Every failure mode — transport, timeout, HTTP status, JSON shape, missing
//! field — collapses to "no candidate".

use std::time::Duration;

use serde::Deserialize;

use crate::model::BookRecord;
use crate::resolve::DescriptionSource;

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
struct Volume {
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
struct VolumeInfo {
    description: Option<String>,
    #[serde(rename = "imageLinks")]
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
}

/// Client for the volumes API.
pub struct GoogleBooks {
    agent: ureq::Agent,
    base: String,
}

impl GoogleBooks {
    pub fn new(base: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn first_volume(&self, query: &str) -> Option<VolumeInfo> {
        let url = format!("{}/books/v1/volumes", self.base);
        let response = self
            .agent
            .get(&url)
            .query("q", query)
            .query("maxResults", "1")
            .call()
            .ok()?;
        let mut parsed: VolumesResponse = response.into_json().ok()?;
        if parsed.items.is_empty() {
            return None;
        }
        Some(parsed.items.remove(0).volume_info)
    }

    /// Raw description for a record: ISBN-keyed query when possible, else a
    /// free-text title + author query.
    pub fn description(&self, book: &BookRecord) -> Option<String> {
        let query = match book.isbn() {
            Some(isbn) => format!("isbn:{isbn}"),
            None => format!("{} {}", book.title, book.author).trim().to_string(),
        };
        self.first_volume(&query)?.description
    }

    /// Thumbnail URL for a title + author, upgraded for cover downloads:
    /// bump the embedded zoom parameter and force secure transport.
    pub fn thumbnail_url(&self, title: &str, author: &str) -> Option<String> {
        let query = format!("intitle:{title} inauthor:{author}");
        let info = self.first_volume(&query)?;
        let thumbnail = info.image_links?.thumbnail?;
        Some(
            thumbnail
                .replace("zoom=1", "zoom=2")
                .replace("http:", "https:"),
        )
    }
}

impl DescriptionSource for GoogleBooks {
    fn name(&self) -> &'static str {
        "google"
    }

    fn candidate(&self, book: &BookRecord) -> Option<String> {
        self.description(book)
    }
}
