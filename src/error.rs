//! Error taxonomy for an import run.
//!
//! Every variant is fatal: the pipeline stops at the first error and the
//! binary exits non-zero with the message.

use thiserror::Error;

/// Errors raised while fetching, transforming or storing legislators.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Network failure or non-success HTTP status.
    #[error("Fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },

    /// Malformed YAML, or a document that does not fit the record model.
    #[error("Parse failed for {document}: {message}")]
    Parse { document: String, message: String },

    /// A code missing from one of the fixed lookup tables.
    #[error("Unknown {table} code: {code}")]
    Lookup { table: &'static str, code: String },

    /// Unsupported argument, e.g. a name mode other than `full`/`sort`.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A field required by a derivation is absent.
    #[error("{record} is missing {field}")]
    MissingField { record: String, field: &'static str },

    /// Underlying SQLite error at the store boundary.
    #[error("SQLite error: {0}")]
    Store(#[from] rusqlite::Error),

    /// CSV export failure.
    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),

    /// Filesystem failure while exporting.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImportError>;
