//! Rich diagnostic error types for the bookmend toolkit.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text. Only store-level failures (catalog file,
//! cover directory, config file) are errors at all: lookup strategies swallow
//! their failures and report "no candidate" instead, so one flaky provider never
//! aborts a run.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the bookmend toolkit.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum BookmendError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Cover(#[from] CoverError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    #[diagnostic(
        code(bookmend::catalog::read),
        help(
            "The catalog file could not be read. Check that the path exists \
             and has read permissions. Nothing has been modified."
        )
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse catalog {path}: {source}")]
    #[diagnostic(
        code(bookmend::catalog::parse),
        help(
            "The catalog file is not a valid JSON array of book records. \
             Fix the JSON by hand before re-running; no partial state is written."
        )
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write catalog {path}: {source}")]
    #[diagnostic(
        code(bookmend::catalog::write),
        help(
            "The catalog file could not be written. Check directory permissions \
             and free disk space. The previous file is left untouched."
        )
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize catalog: {source}")]
    #[diagnostic(
        code(bookmend::catalog::serialize),
        help("Serializing the in-memory collection failed. This is a bug; please report it.")
    )]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Cover store errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum CoverError {
    #[error("cannot create cover directory {path}: {source}")]
    #[diagnostic(
        code(bookmend::cover::create_dir),
        help("The cover image directory could not be created. Check permissions.")
    )]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write cover asset {path}: {source}")]
    #[diagnostic(
        code(bookmend::cover::write),
        help("A downloaded cover image could not be saved. Check permissions and disk space.")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot delete cover asset {path}: {source}")]
    #[diagnostic(
        code(bookmend::cover::delete),
        help(
            "A flagged placeholder image could not be deleted. Its record still \
             references it; re-run after fixing permissions."
        )
    )]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    #[diagnostic(
        code(bookmend::config::read),
        help("The config file was named explicitly but could not be read.")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    #[diagnostic(
        code(bookmend::config::parse),
        help(
            "The config file is not valid TOML for MaintenanceConfig. \
             All fields are optional; check spelling against the documented keys."
        )
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Convenience alias for functions returning bookmend results.
pub type BookmendResult<T> = std::result::Result<T, BookmendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_converts_to_bookmend_error() {
        let err = CatalogError::Read {
            path: PathBuf::from("books.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let top: BookmendError = err.into();
        assert!(matches!(top, BookmendError::Catalog(CatalogError::Read { .. })));
    }

    #[test]
    fn cover_error_converts_to_bookmend_error() {
        let err = CoverError::Delete {
            path: PathBuf::from("covers/cover-1.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let top: BookmendError = err.into();
        assert!(matches!(top, BookmendError::Cover(CoverError::Delete { .. })));
    }

    #[test]
    fn error_display_includes_path() {
        let err = CatalogError::Write {
            path: PathBuf::from("src/data/books.json"),
            source: std::io::Error::other("disk full"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("books.json"));
    }
}
