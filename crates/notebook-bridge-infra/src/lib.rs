//! Infrastructure layer for the notebook admin bridge.
//!
//! Contains the implementation of the `RpcTransport` port defined in
//! `notebook-bridge-core` (Supabase PostgREST RPC over reqwest) and the
//! loader that builds `BridgeConfig` from `config.toml` and the environment.

pub mod config;
pub mod supabase;
