//! Repository for the `movie` table.

use marquee_core::movie_filter::MovieFilter;
use marquee_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, trailer, year, rating, genre_id, director_id";

/// Provides read access to movies, plus inserts for seeding.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie (title, description, trailer, year, rating, genre_id, director_id)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.genre_id)
            .bind(input.director_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE id = ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies matching every constraint in `filter`, ordered by id.
    ///
    /// An unfiltered listing returns the whole table. The result is a single
    /// query; callers decide what an empty result means.
    pub async fn list(pool: &DbPool, filter: &MovieFilter) -> Result<Vec<Movie>, sqlx::Error> {
        let predicates = filter.predicates();

        // Build dynamic WHERE clauses.
        let conditions: Vec<String> = predicates
            .iter()
            .map(|p| format!("{} = ?", p.column()))
            .collect();

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT {COLUMNS} FROM movie {where_clause} ORDER BY id");
        tracing::debug!(%query, predicates = predicates.len(), "Listing movies");

        let mut q = sqlx::query_as::<_, Movie>(&query);

        // Bind dynamic parameters in order.
        for predicate in &predicates {
            q = q.bind(predicate.value());
        }

        q.fetch_all(pool).await
    }
}
