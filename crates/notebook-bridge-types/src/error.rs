use std::time::Duration;

use thiserror::Error;

/// Errors from a single relayed remote call.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("operation name must not be empty")]
    InvalidOperation,

    #[error("no caller credential supplied and default credential fallback is disabled")]
    MissingCredential,

    #[error("remote service returned HTTP {status}")]
    Remote { status: u16, body: String },

    #[error("remote call timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode remote payload: {0}")]
    Decode(String),
}

/// Admin gate rejections.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("missing admin key")]
    Missing,

    #[error("invalid admin key")]
    Mismatch,
}

/// A route parameter failed validation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid parameter '{name}': {reason}")]
pub struct ParamError {
    pub name: &'static str,
    pub reason: String,
}

/// Errors raised while loading the bridge configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting '{0}'")]
    Missing(&'static str),

    #[error("setting '{0}' must not be blank")]
    Blank(&'static str),

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },
}
