use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A filtered listing matched no rows.
    #[error("No {entity} records match the given filters")]
    NoMatches { entity: &'static str },
}
