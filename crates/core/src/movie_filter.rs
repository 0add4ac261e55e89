//! Movie listing filters.
//!
//! A [`MovieFilter`] is an AND-combination of optional equality constraints
//! on a movie's foreign keys. The store layer turns its [`predicates`] into a
//! single `WHERE` clause; [`require_matches`] then decides whether an empty
//! result is an error.
//!
//! [`predicates`]: MovieFilter::predicates

use crate::error::CoreError;
use crate::types::DbId;

/// One equality constraint on a movie foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoviePredicate {
    Director(DbId),
    Genre(DbId),
}

impl MoviePredicate {
    /// Column on the `movie` table this predicate constrains.
    pub fn column(&self) -> &'static str {
        match self {
            MoviePredicate::Director(_) => "director_id",
            MoviePredicate::Genre(_) => "genre_id",
        }
    }

    /// Value the column must equal.
    pub fn value(&self) -> DbId {
        match self {
            MoviePredicate::Director(id) | MoviePredicate::Genre(id) => *id,
        }
    }
}

/// Optional director and genre constraints for a movie listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}

impl MovieFilter {
    pub fn new(director_id: Option<DbId>, genre_id: Option<DbId>) -> Self {
        Self {
            director_id,
            genre_id,
        }
    }

    pub fn by_director(director_id: DbId) -> Self {
        Self::new(Some(director_id), None)
    }

    pub fn by_genre(genre_id: DbId) -> Self {
        Self::new(None, Some(genre_id))
    }

    /// `true` when no constraint is set, i.e. the listing covers every movie.
    pub fn is_unfiltered(&self) -> bool {
        self.director_id.is_none() && self.genre_id.is_none()
    }

    /// The constraints that are set, in a stable order (director, genre).
    pub fn predicates(&self) -> Vec<MoviePredicate> {
        self.director_id
            .map(MoviePredicate::Director)
            .into_iter()
            .chain(self.genre_id.map(MoviePredicate::Genre))
            .collect()
    }
}

/// Apply the listing policy to the rows a filter produced.
///
/// An unfiltered listing always succeeds, even when the catalog is empty.
/// A filtered listing with no rows is [`CoreError::NoMatches`]; whether the
/// referenced director or genre exists at all is not distinguished.
pub fn require_matches<T>(filter: &MovieFilter, movies: Vec<T>) -> Result<Vec<T>, CoreError> {
    if movies.is_empty() && !filter.is_unfiltered() {
        return Err(CoreError::NoMatches { entity: "Movie" });
    }
    Ok(movies)
}
