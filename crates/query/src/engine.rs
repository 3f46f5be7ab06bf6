//! The movie query service.
//!
//! [`MovieService`] owns a shared, immutable catalog and answers point
//! lookups, filtered searches, and genre enumeration. Every operation is a
//! pure read over state built once at load time, so the service can be
//! cloned and queried from any number of threads without locking.

use crate::criteria::SearchQuery;
use catalog::{Catalog, Movie, MovieId};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Read-only query interface over a loaded [`Catalog`].
///
/// Constructed once with the catalog it serves and passed to callers;
/// there is no ambient global instance.
#[derive(Debug, Clone)]
pub struct MovieService {
    catalog: Arc<Catalog>,
}

impl MovieService {
    /// Create a service over an already-loaded catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// The catalog this service answers from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All movies, in catalog order.
    pub fn all_movies(&self) -> &[Movie] {
        self.catalog.movies()
    }

    /// Look up one movie by id.
    ///
    /// Ids below 1 are never valid keys and short-circuit to `None`
    /// before touching the index. A missing id is an ordinary absent
    /// result, not an error.
    pub fn movie_by_id(&self, id: MovieId) -> Option<&Movie> {
        if id < 1 {
            return None;
        }
        self.catalog.get(id)
    }

    /// Search the catalog with up to three optional criteria.
    ///
    /// A movie is returned iff it satisfies every supplied criterion; see
    /// [`SearchQuery::criteria`] for how fields normalize. A query with no
    /// effective criteria returns an empty result, never the full catalog.
    /// Results keep catalog order.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Movie> {
        let criteria = query.criteria();
        if criteria.is_empty() {
            debug!("search without effective criteria, returning no movies");
            return Vec::new();
        }

        let results: Vec<&Movie> = self
            .catalog
            .movies()
            .iter()
            .filter(|movie| criteria.iter().all(|criterion| criterion.matches(movie)))
            .collect();

        info!(
            "search name: {:?}, id: {:?}, genre: {:?} matched {} movies",
            query.name,
            query.id,
            query.genre,
            results.len()
        );
        results
    }

    /// Distinct genre field values, sorted ascending.
    ///
    /// A compound label like "Action/Crime" counts as one value; it is
    /// never split into its parts.
    pub fn genres(&self) -> Vec<&str> {
        self.catalog
            .movies()
            .iter()
            .map(|movie| movie.genre.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId, title: &str, genre: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            director: "Test Director".to_string(),
            year: 2000,
            genre: genre.to_string(),
            description: String::new(),
            duration_minutes: 120,
            rating: 7.5,
        }
    }

    fn fixture_service() -> MovieService {
        let catalog = Catalog::from_movies(vec![
            movie(1, "The Prison Escape", "Drama"),
            movie(2, "The Family Boss", "Action/Crime"),
            movie(3, "Midnight Heist", "Crime/Thriller"),
            movie(4, "A Quiet Meadow", "Drama"),
        ])
        .unwrap();

        MovieService::new(Arc::new(catalog))
    }

    fn ids(movies: &[&Movie]) -> Vec<MovieId> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_all_movies_in_catalog_order() {
        let service = fixture_service();

        let all = service.all_movies();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[3].id, 4);
    }

    #[test]
    fn test_movie_by_id_found() {
        let service = fixture_service();

        let movie = service.movie_by_id(2).unwrap();
        assert_eq!(movie.title, "The Family Boss");
    }

    #[test]
    fn test_movie_by_id_missing() {
        let service = fixture_service();

        assert!(service.movie_by_id(999).is_none());
    }

    #[test]
    fn test_movie_by_id_rejects_zero_and_negative() {
        let service = fixture_service();

        assert!(service.movie_by_id(0).is_none());
        assert!(service.movie_by_id(-1).is_none());
    }

    #[test]
    fn test_search_without_criteria_returns_empty() {
        let service = fixture_service();

        assert!(service.search(&SearchQuery::default()).is_empty());
    }

    #[test]
    fn test_search_with_whitespace_criteria_returns_empty() {
        let service = fixture_service();

        let query = SearchQuery {
            name: Some("   ".to_string()),
            id: None,
            genre: Some("  ".to_string()),
        };

        assert!(service.search(&query).is_empty());
    }

    #[test]
    fn test_search_by_name_is_case_insensitive() {
        let service = fixture_service();

        let results = service.search(&SearchQuery::by_name("PRISON"));
        assert_eq!(ids(&results), vec![1]);
    }

    #[test]
    fn test_search_by_name_trims_the_term() {
        let service = fixture_service();

        let trimmed = service.search(&SearchQuery::by_name("prison"));
        let padded = service.search(&SearchQuery::by_name("  prison  "));

        assert_eq!(ids(&trimmed), ids(&padded));
    }

    #[test]
    fn test_search_by_id() {
        let service = fixture_service();

        let results = service.search(&SearchQuery::by_id(2));
        assert_eq!(ids(&results), vec![2]);

        assert!(service.search(&SearchQuery::by_id(999)).is_empty());
    }

    #[test]
    fn test_search_by_genre_matches_compound_labels() {
        let service = fixture_service();

        // "crime" appears inside both "Action/Crime" and "Crime/Thriller"
        let results = service.search(&SearchQuery::by_genre("crime"));
        assert_eq!(ids(&results), vec![2, 3]);
    }

    #[test]
    fn test_search_combines_criteria_with_and() {
        let service = fixture_service();

        let query = SearchQuery {
            name: Some("the".to_string()),
            id: None,
            genre: Some("drama".to_string()),
        };

        let results = service.search(&query);
        assert_eq!(ids(&results), vec![1]);
    }

    #[test]
    fn test_search_conflicting_criteria_returns_empty() {
        let service = fixture_service();

        // Name matches movie 1, id points at movie 2; the intersection is empty.
        let query = SearchQuery {
            name: Some("prison".to_string()),
            id: Some(2),
            genre: None,
        };

        assert!(service.search(&query).is_empty());
    }

    #[test]
    fn test_search_results_keep_catalog_order() {
        let service = fixture_service();

        let results = service.search(&SearchQuery::by_name("the"));
        assert_eq!(ids(&results), vec![1, 2]);
    }

    #[test]
    fn test_search_is_idempotent() {
        let service = fixture_service();
        let query = SearchQuery::by_genre("drama");

        let first = ids(&service.search(&query));
        let second = ids(&service.search(&query));

        assert_eq!(first, second);
    }

    #[test]
    fn test_genres_sorted_and_distinct() {
        let service = fixture_service();

        // Two movies share "Drama"; it must appear once.
        assert_eq!(
            service.genres(),
            vec!["Action/Crime", "Crime/Thriller", "Drama"]
        );
    }

    #[test]
    fn test_empty_catalog_serves_degraded() {
        let service = MovieService::new(Arc::new(Catalog::empty()));

        assert!(service.all_movies().is_empty());
        assert!(service.movie_by_id(1).is_none());
        assert!(service.search(&SearchQuery::by_name("anything")).is_empty());
        assert!(service.genres().is_empty());
    }
}
