//! # Query Crate
//!
//! The read side of the movie catalog: a [`MovieService`] constructed over
//! an immutable [`catalog::Catalog`] that answers point lookups,
//! multi-criteria searches, and genre enumeration.
//!
//! ## Main Components
//!
//! - **criteria**: `SearchQuery` fields and their normalization into
//!   `Criterion` predicates
//! - **engine**: the `MovieService` query operations
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use query::{MovieService, SearchQuery};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_from_file("data/movies.json".as_ref())?);
//! let service = MovieService::new(catalog);
//!
//! let dramas = service.search(&SearchQuery::by_genre("drama"));
//! println!("{} dramas in the catalog", dramas.len());
//! ```

pub mod criteria;
pub mod engine;

pub use criteria::{Criterion, SearchQuery};
pub use engine::MovieService;
