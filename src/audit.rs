//! Catalog audit: structural checks over the whole collection.
//!
//! Errors are conditions the maintenance passes cannot work around (missing
//! identity fields, duplicate ids); warnings are quality gaps (missing ISBN,
//! odd ISBN shape, no tags, duplicate titles). Auditing never mutates.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::BookCatalog;

/// ISBN-13 shape for book products: 978/979 prefix plus ten digits.
static ISBN_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^97[89]\d{10}$").expect("valid literal regex"));

#[derive(Debug, Default)]
pub struct AuditReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Tag frequencies, most common first.
    pub tag_stats: Vec<(String, usize)>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Audit the whole collection.
pub fn run(catalog: &BookCatalog) -> AuditReport {
    let mut report = AuditReport::default();

    let mut id_counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut title_counts: BTreeMap<String, usize> = BTreeMap::new();
    for book in catalog.records() {
        *id_counts.entry(book.id.as_str()).or_insert(0) += 1;
        *title_counts
            .entry(book.title.trim().to_lowercase())
            .or_insert(0) += 1;
    }

    for book in catalog.records() {
        let book_ref = format!("Book #{}: \"{}\"", book.id, book.title);

        if book.id.is_empty() {
            report.errors.push(format!("{book_ref} - missing id"));
        }
        if book.title.is_empty() {
            report.errors.push(format!("{book_ref} - missing title"));
        }
        if book.author.is_empty() {
            report.errors.push(format!("{book_ref} - missing author"));
        }
        if id_counts.get(book.id.as_str()).copied().unwrap_or(0) > 1 {
            report
                .errors
                .push(format!("{book_ref} - duplicate id: {}", book.id));
        }

        match book.isbn() {
            None => report
                .warnings
                .push(format!("{book_ref} - missing ISBN (no cover will show)")),
            Some(isbn) if !ISBN_SHAPE.is_match(isbn) => report
                .warnings
                .push(format!("{book_ref} - invalid ISBN format: {isbn}")),
            Some(_) => {}
        }
        if book.tags.is_empty() {
            report.warnings.push(format!("{book_ref} - no tags"));
        }
    }

    for (title, count) in &title_counts {
        if *count > 1 {
            report
                .warnings
                .push(format!("duplicate title found {count} times: \"{title}\""));
        }
    }

    let mut tag_stats: BTreeMap<String, usize> = BTreeMap::new();
    for book in catalog.records() {
        for tag in &book.tags {
            *tag_stats.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    report.tag_stats = tag_stats.into_iter().collect();
    report.tag_stats.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn catalog_from(dir: &Path, body: &str) -> BookCatalog {
        let path = dir.join("books.json");
        std::fs::write(&path, body).unwrap();
        BookCatalog::load(&path).unwrap()
    }

    #[test]
    fn clean_catalog_audits_clean() {
        let dir = tempfile::TempDir::new().unwrap();
        let catalog = catalog_from(
            dir.path(),
            r#"[{"id": "1", "title": "T", "author": "A", "isbn": "9780064430173", "tags": ["Classic"]}]"#,
        );
        let report = run(&catalog);
        assert!(report.is_clean());
        assert!(report.warnings.is_empty());
        assert_eq!(report.tag_stats, vec![("Classic".to_string(), 1)]);
    }

    #[test]
    fn duplicate_ids_are_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let catalog = catalog_from(
            dir.path(),
            r#"[
                {"id": "1", "title": "A", "author": "x"},
                {"id": "1", "title": "B", "author": "y"}
            ]"#,
        );
        let report = run(&catalog);
        assert!(!report.is_clean());
        assert_eq!(
            report.errors.iter().filter(|e| e.contains("duplicate id")).count(),
            2
        );
    }

    #[test]
    fn isbn_shape_and_missing_isbn_warn() {
        let dir = tempfile::TempDir::new().unwrap();
        let catalog = catalog_from(
            dir.path(),
            r#"[
                {"id": "1", "title": "A", "author": "x", "isbn": "12345", "tags": ["F"]},
                {"id": "2", "title": "B", "author": "y", "tags": ["F"]}
            ]"#,
        );
        let report = run(&catalog);
        assert!(report.is_clean());
        assert!(report.warnings.iter().any(|w| w.contains("invalid ISBN format")));
        assert!(report.warnings.iter().any(|w| w.contains("missing ISBN")));
    }

    #[test]
    fn duplicate_titles_match_case_insensitively() {
        let dir = tempfile::TempDir::new().unwrap();
        let catalog = catalog_from(
            dir.path(),
            r#"[
                {"id": "1", "title": "Madeline", "author": "x", "isbn": "9780064430173", "tags": ["C"]},
                {"id": "2", "title": "MADELINE ", "author": "y", "isbn": "9780140564334", "tags": ["C"]}
            ]"#,
        );
        let report = run(&catalog);
        assert!(report.warnings.iter().any(|w| w.contains("duplicate title")));
    }

    #[test]
    fn tag_stats_sort_by_frequency() {
        let dir = tempfile::TempDir::new().unwrap();
        let catalog = catalog_from(
            dir.path(),
            r#"[
                {"id": "1", "title": "A", "author": "x", "isbn": "9780064430173", "tags": ["Funny", "Classic"]},
                {"id": "2", "title": "B", "author": "y", "isbn": "9780140564334", "tags": ["Funny"]}
            ]"#,
        );
        let report = run(&catalog);
        assert_eq!(
            report.tag_stats,
            vec![("Funny".to_string(), 2), ("Classic".to_string(), 1)]
        );
    }
}
