//! Movie entity model and DTOs.

use marquee_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row from the `movie` table.
///
/// Serializes flat: the director and genre appear as their foreign-key ids.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i64,
    pub rating: f64,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// DTO for inserting a movie. Only used by seeding and tests; movies are
/// read-only over HTTP.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub trailer: String,
    pub year: i64,
    pub rating: f64,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}
