//! Error types for the catalog crate.

use crate::types::MovieId;
use thiserror::Error;

/// Errors that can occur while loading and validating a catalog source.
///
/// Every load entry point returns these explicitly; whether a failed load
/// aborts the process or degrades to an empty catalog is the caller's
/// decision, not the loader's.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be opened or read
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Source was not a well-formed JSON array of movie records
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record field had an invalid value
    ///
    /// `index` is the zero-based position of the record in the source array.
    #[error("invalid value for {field} in record {index}: {value}")]
    InvalidValue {
        index: usize,
        field: &'static str,
        value: String,
    },

    /// Two records in the source share the same primary key
    #[error("duplicate movie id {id} in catalog source")]
    DuplicateId { id: MovieId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
