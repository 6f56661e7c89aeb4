//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur while reading the dataset or assembling the catalog.
///
/// Domain-level conditions (unknown users, unrated shows, titles missing
/// from a filmography) are never errors; they surface as result values or
/// silently dropped references per the replay semantics.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Input file could not be opened or read
    #[error("failed to read input file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input was not valid JSON or did not match the expected shape
    #[error("malformed input: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A serial's declared season count disagrees with its season list
    #[error("serial \"{title}\" declares {declared} seasons but lists {listed}")]
    SeasonCountMismatch {
        title: String,
        declared: usize,
        listed: usize,
    },
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
