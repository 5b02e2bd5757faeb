//! HTTP request handlers for the REST API.

pub mod admin;
pub mod public;
