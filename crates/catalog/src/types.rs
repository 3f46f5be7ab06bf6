//! Core domain types: the movie entity and the indexed catalog.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a movie. Valid ids are always >= 1.
pub type MovieId = i64;

/// A single movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub director: String,
    pub year: i32,
    /// Genre label; may pack several genres into one delimited string
    /// (e.g. "Action/Crime"). Matching treats it as a single opaque value.
    pub genre: String,
    pub description: String,
    pub duration_minutes: u32,
    pub rating: f64,
}

/// The full in-memory movie collection plus its primary-key index.
///
/// Built once at load time and never mutated afterwards. All accessors
/// return references, so a `Catalog` behind an `Arc` serves any number of
/// concurrent readers without locking.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Movies in source order; this is the order of every result list
    movies: Vec<Movie>,
    /// Primary-key index into `movies`
    by_id: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Create a catalog with no movies.
    ///
    /// This is the degraded form callers fall back to when a load fails:
    /// every query against it answers empty or not-found.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from validated movies, preserving their order.
    ///
    /// Fails with [`CatalogError::DuplicateId`] if two movies share an id;
    /// the index and the ordered sequence must never disagree about which
    /// record a key refers to.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(movies.len());
        for (position, movie) in movies.iter().enumerate() {
            if by_id.insert(movie.id, position).is_some() {
                return Err(CatalogError::DuplicateId { id: movie.id });
            }
        }
        Ok(Self { movies, by_id })
    }

    /// All movies in source order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a movie by primary key.
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.by_id.get(&id).map(|&position| &self.movies[position])
    }

    /// Number of movies in the catalog.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
