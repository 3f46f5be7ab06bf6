//! Parsing and validation of the catalog wire format.
//!
//! The catalog source is a JSON array of records in the feed shape:
//!
//! ```json
//! [{"id": 1, "movieName": "...", "director": "...", "year": 1994,
//!   "genre": "Drama", "description": "...", "duration": 142,
//!   "imdbRating": 9.3}]
//! ```
//!
//! Records are parsed as a whole and then validated one by one; the first
//! invalid record fails the entire load.

use crate::error::{CatalogError, Result};
use crate::types::{Movie, MovieId};
use serde::Deserialize;

/// One record as it appears in the catalog feed.
///
/// Field names follow the feed, not Rust conventions; `movieName` and
/// `imdbRating` map onto the domain entity during validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMovieRecord {
    pub id: MovieId,
    #[serde(rename = "movieName")]
    pub movie_name: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
    pub description: String,
    /// Runtime in minutes
    pub duration: i64,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: f64,
}

/// Parse a JSON catalog feed into raw records.
pub fn parse_records(json: &str) -> Result<Vec<RawMovieRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Validate one raw record into a domain [`Movie`].
///
/// Invariants checked here: `id >= 1`, non-blank title, `duration >= 1`.
/// `index` is the record's position in the feed, carried into errors so a
/// failed load names the offending record.
pub fn validate_record(index: usize, record: RawMovieRecord) -> Result<Movie> {
    if record.id < 1 {
        return Err(CatalogError::InvalidValue {
            index,
            field: "id",
            value: record.id.to_string(),
        });
    }

    if record.movie_name.trim().is_empty() {
        return Err(CatalogError::InvalidValue {
            index,
            field: "movieName",
            value: record.movie_name,
        });
    }

    let duration_minutes = u32::try_from(record.duration)
        .ok()
        .filter(|&minutes| minutes >= 1)
        .ok_or_else(|| CatalogError::InvalidValue {
            index,
            field: "duration",
            value: record.duration.to_string(),
        })?;

    Ok(Movie {
        id: record.id,
        title: record.movie_name,
        director: record.director,
        year: record.year,
        genre: record.genre,
        description: record.description,
        duration_minutes,
        rating: record.imdb_rating,
    })
}
