//! Candidate description cleanup.
//!
//! Providers return descriptions with stray inline markup and arbitrary
//! length. Normalization is deliberately dumb: a fixed set of literal tag
//! strings is replaced textually (no HTML parsing), then the result is
//! length-capped. Anything that comes out empty, or under the calling
//! source's trust floor, is treated as no candidate at all.

/// Stored descriptions never exceed this many characters.
pub const MAX_CHARS: usize = 300;
/// Characters kept before the ellipsis when truncating.
const KEEP_CHARS: usize = 297;
/// Three-character truncation marker.
const ELLIPSIS: &str = "...";

/// Literal markup fragments and their replacements. Only these exact
/// strings are handled.
const MARKUP: &[(&str, &str)] = &[
    ("<p>", ""),
    ("</p>", ""),
    ("<br>", " "),
    ("<br/>", " "),
    ("<b>", ""),
    ("</b>", ""),
    ("<i>", ""),
    ("</i>", ""),
];

/// Remove the fixed markup set by direct textual replacement.
pub fn strip_markup(text: &str) -> String {
    let mut out = text.to_string();
    for (tag, replacement) in MARKUP {
        out = out.replace(tag, replacement);
    }
    out
}

/// Cap at [`MAX_CHARS`] characters, ending in `...` when cut.
///
/// Counts `char`s, not bytes, so multi-byte text truncates on a valid
/// boundary and the invariant holds in characters.
pub fn truncate_ellipsis(text: &str) -> String {
    if text.chars().count() <= MAX_CHARS {
        return text.to_string();
    }
    let mut out: String = text.chars().take(KEEP_CHARS).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Full normalization: strip markup, cap length, reject weak candidates.
///
/// Returns `None` when the stripped text is blank or has no more than
/// `min_chars` characters. Sources pass their own trust floor; the manual
/// table and the primary provider use 0, the secondary provider 50.
pub fn normalize(raw: &str, min_chars: usize) -> Option<String> {
    let stripped = strip_markup(raw);
    let trimmed = stripped.trim();
    if trimmed.is_empty() || trimmed.chars().count() <= min_chars {
        return None;
    }
    Some(truncate_ellipsis(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_the_fixed_tag_set() {
        assert_eq!(
            strip_markup("<p>A <b>bold</b> tale<br/>of <i>wonder</i></p>"),
            "A bold tale of wonder"
        );
        // Unknown tags are left alone.
        assert_eq!(strip_markup("<em>kept</em>"), "<em>kept</em>");
    }

    #[test]
    fn long_text_truncates_to_exactly_300_with_marker() {
        let raw = "x".repeat(450);
        let out = truncate_ellipsis(&raw);
        assert_eq!(out.chars().count(), MAX_CHARS);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_ellipsis("short"), "short");
        let exactly = "y".repeat(300);
        assert_eq!(truncate_ellipsis(&exactly), exactly);
    }

    #[test]
    fn truncation_is_char_boundary_safe() {
        let raw = "é".repeat(400);
        let out = truncate_ellipsis(&raw);
        assert_eq!(out.chars().count(), MAX_CHARS);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn normalize_rejects_blank_and_markup_only() {
        assert_eq!(normalize("", 0), None);
        assert_eq!(normalize("   ", 0), None);
        assert_eq!(normalize("<p></p>", 0), None);
    }

    #[test]
    fn normalize_applies_trust_floor() {
        let fifty = "z".repeat(50);
        assert_eq!(normalize(&fifty, 50), None); // exactly 50 is not enough
        let fifty_one = "z".repeat(51);
        assert_eq!(normalize(&fifty_one, 50).as_deref(), Some(fifty_one.as_str()));
        // The same text passes a zero floor.
        assert!(normalize(&fifty, 0).is_some());
    }

    #[test]
    fn normalize_strips_then_truncates() {
        let raw = format!("<p>{}</p>", "a".repeat(400));
        let out = normalize(&raw, 0).unwrap();
        assert_eq!(out.chars().count(), MAX_CHARS);
        assert!(!out.contains("<p>"));
        assert!(out.ends_with("..."));
    }
}
