//! Request handlers for the catalog entities.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers delegate to the corresponding repository in `marquee_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod director;
pub mod genre;
pub mod movie;
