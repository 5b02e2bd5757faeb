//! Shared value types for the notebook admin bridge.
//!
//! Holds the per-request RPC call descriptor, the typed query parameters of
//! the admin routes, the immutable process configuration, and the error
//! enums shared by every layer.
//!
//! Zero infrastructure dependencies -- only serde, secrecy, thiserror.

pub mod admin;
pub mod config;
pub mod error;
pub mod rpc;
