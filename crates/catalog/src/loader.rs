//! Load orchestration: catalog feed in, validated and indexed [`Catalog`] out.
//!
//! The source is read exactly once per process. Loading is all-or-nothing:
//! a catalog is either fully parsed, validated, and indexed before anyone
//! can observe it, or the load fails and nothing is published.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::Catalog;
use std::fs;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load a catalog from a JSON feed held in memory.
    ///
    /// Steps:
    /// 1. Parse the feed into raw records
    /// 2. Validate every record into a `Movie`
    /// 3. Build the primary-key index (rejecting duplicate ids)
    ///
    /// The first failure at any step fails the whole load, so a caller
    /// never sees a partially populated catalog.
    pub fn load_from_json(json: &str) -> Result<Self> {
        let records = parser::parse_records(json)?;

        let movies = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| parser::validate_record(index, record))
            .collect::<Result<Vec<_>>>()?;

        let catalog = Catalog::from_movies(movies)?;
        info!("loaded catalog with {} movies", catalog.len());
        Ok(catalog)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_from_json(&json)
    }
}
