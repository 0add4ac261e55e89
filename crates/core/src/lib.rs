//! Domain types shared by the store and HTTP layers.

pub mod error;
pub mod movie_filter;
pub mod types;
