//! HTTP/REST API layer for the notebook admin bridge.
//!
//! Axum-based REST API under `/api/` with shared-secret admin gating,
//! permissive CORS, and transparent pass-through of remote payloads.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
