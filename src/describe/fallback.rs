//! Terminal strategy: deterministic tag-template text.
//!
//! No network, never empty. Tags are checked in a fixed priority order and
//! the first match picks the template, so the description chain always
//! terminates with a value.

use crate::model::BookRecord;
use crate::resolve::DescriptionSource;

/// The catch-all template. The retouch pass matches on this exact string to
/// find records worth upgrading with curated text.
pub const GENERIC_TEMPLATE: &str =
    "An engaging story that will captivate young readers and spark their imagination.";

/// Template text for a record, by tag priority.
pub fn template_for(book: &BookRecord) -> String {
    if book.has_tag("Funny") {
        "A funny and entertaining story that will make young readers laugh out loud!".into()
    } else if book.has_tag("STEM") || book.has_tag("Science") {
        "An engaging introduction to science and discovery for curious young minds.".into()
    } else if book.has_tag("Biography") {
        // Subtitle after the first colon is dropped: "Ada: A Life" -> "Ada".
        let subject = book.title.split(':').next().unwrap_or(&book.title);
        format!("The inspiring true story of {subject}.")
    } else if book.has_tag("Friendship") {
        "A heartwarming tale about friendship, kindness, and being a good friend.".into()
    } else if book.has_tag("Classic") {
        "A beloved classic that has delighted generations of young readers.".into()
    } else {
        GENERIC_TEMPLATE.into()
    }
}

/// Last link in the description chain.
pub struct TagFallback;

impl DescriptionSource for TagFallback {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn candidate(&self, book: &BookRecord) -> Option<String> {
        Some(template_for(book))
    }
}
