//! Custom axum extractors for authentication and request validation.

pub mod auth;
pub mod query;
