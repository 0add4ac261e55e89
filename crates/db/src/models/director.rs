//! Director entity model and DTOs.

use marquee_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A director row from the `director` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new director.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDirector {
    pub name: String,
}

/// DTO for updating a director. Only `name` is applied; other fields in the
/// payload are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDirector {
    pub name: Option<String>,
}
