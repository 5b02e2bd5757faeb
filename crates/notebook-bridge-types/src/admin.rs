//! Typed query parameters of the admin routes.
//!
//! Each struct deserializes from the route's query string with its defaults
//! applied, then [`validate`](UserListParams::validate) enforces the ranges
//! before any remote call is attempted.

use serde::Deserialize;

use crate::error::ParamError;

pub const DEFAULT_PAGE_LIMIT: u32 = 50;
pub const MAX_PAGE_LIMIT: u32 = 1000;
pub const DEFAULT_GROWTH_DAYS: u32 = 14;
pub const MAX_GROWTH_DAYS: u32 = 365;

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

fn default_days() -> u32 {
    DEFAULT_GROWTH_DAYS
}

fn check_limit(limit: u32) -> Result<(), ParamError> {
    if (1..=MAX_PAGE_LIMIT).contains(&limit) {
        Ok(())
    } else {
        Err(ParamError {
            name: "limit",
            reason: format!("must be between 1 and {MAX_PAGE_LIMIT}, got {limit}"),
        })
    }
}

/// `GET /api/admin/users` query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    pub search: Option<String>,
}

impl UserListParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        check_limit(self.limit)
    }
}

/// `GET /api/admin/notes` query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoteListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    pub search: Option<String>,
    pub user_id: Option<String>,
}

impl NoteListParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        check_limit(self.limit)
    }
}

/// `GET /api/admin/growth` query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GrowthParams {
    #[serde(default = "default_days")]
    pub days: u32,
}

impl GrowthParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        if (1..=MAX_GROWTH_DAYS).contains(&self.days) {
            Ok(())
        } else {
            Err(ParamError {
                name: "days",
                reason: format!("must be between 1 and {MAX_GROWTH_DAYS}, got {}", self.days),
            })
        }
    }
}

/// Validate a note id taken from the request path.
pub fn validate_note_id(note_id: &str) -> Result<&str, ParamError> {
    let trimmed = note_id.trim();
    if trimmed.is_empty() {
        return Err(ParamError {
            name: "note_id",
            reason: "must not be blank".to_string(),
        });
    }
    Ok(trimmed)
}
