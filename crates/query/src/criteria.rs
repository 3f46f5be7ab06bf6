//! Search criteria and their normalization rules.
//!
//! A [`SearchQuery`] carries the raw, independently-optional request
//! fields; [`SearchQuery::criteria`] resolves them into the effective
//! [`Criterion`] predicates the engine evaluates. Normalization happens in
//! exactly one place so every caller gets the same trimming and
//! case-folding behavior.

use catalog::{Movie, MovieId};

/// A multi-field movie search request.
///
/// Each field is independently optional. Text fields are normalized at
/// evaluation time: surrounding whitespace is trimmed and a value that is
/// empty after trimming counts as not supplied at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Title substring, matched case-insensitively
    pub name: Option<String>,
    /// Exact movie id
    pub id: Option<MovieId>,
    /// Genre substring, matched case-insensitively against the whole
    /// (possibly compound) genre field
    pub genre: Option<String>,
}

impl SearchQuery {
    /// Query matching titles that contain `name`.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Query matching exactly one id.
    pub fn by_id(id: MovieId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Query matching genre fields that contain `genre`.
    pub fn by_genre(genre: impl Into<String>) -> Self {
        Self {
            genre: Some(genre.into()),
            ..Self::default()
        }
    }

    /// Resolve this query into its effective criteria.
    ///
    /// Text fields are trimmed and lowercased; a field that is empty or
    /// whitespace-only after trimming contributes no criterion, exactly
    /// as if it had not been supplied. An empty result means the query
    /// carries no constraints at all.
    pub fn criteria(&self) -> Vec<Criterion> {
        let mut criteria = Vec::new();

        if let Some(needle) = normalize_term(self.name.as_deref()) {
            criteria.push(Criterion::Title(needle));
        }
        if let Some(id) = self.id {
            criteria.push(Criterion::Id(id));
        }
        if let Some(needle) = normalize_term(self.genre.as_deref()) {
            criteria.push(Criterion::Genre(needle));
        }

        criteria
    }
}

/// One normalized search predicate.
///
/// Text variants carry the already-trimmed, lowercased needle produced by
/// [`SearchQuery::criteria`].
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Case-insensitive substring match against the movie title
    Title(String),
    /// Exact equality against the movie id
    Id(MovieId),
    /// Case-insensitive substring match against the genre field
    Genre(String),
}

impl Criterion {
    /// Whether a movie satisfies this predicate.
    pub fn matches(&self, movie: &Movie) -> bool {
        match self {
            Criterion::Title(needle) => movie.title.to_lowercase().contains(needle),
            Criterion::Id(id) => movie.id == *id,
            Criterion::Genre(needle) => movie.genre.to_lowercase().contains(needle),
        }
    }
}

/// Trim a search term and fold its case; whitespace-only terms are absent.
fn normalize_term(term: Option<&str>) -> Option<String> {
    let trimmed = term?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
