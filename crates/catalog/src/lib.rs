//! # Catalog Crate
//!
//! Loads the movie catalog feed once at startup, validates it, and
//! publishes an immutable [`Catalog`]: the ordered movie sequence plus a
//! primary-key index for O(1) lookup.
//!
//! ## Main Components
//!
//! - **types**: the `Movie` entity and the indexed `Catalog`
//! - **parser**: wire-format records and per-record validation
//! - **loader**: load entry points (JSON string or file)
//! - **error**: error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movies.json"))?;
//!
//! let movie = catalog.get(1).unwrap();
//! println!("{} ({}), {} min", movie.title, movie.year, movie.duration_minutes);
//! ```
//!
//! A failed load returns an explicit [`CatalogError`]; callers that prefer
//! to serve in a degraded state fall back to [`Catalog::empty`].

// Public modules
pub mod error;
pub mod loader;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::RawMovieRecord;
pub use types::{Catalog, Movie, MovieId};
