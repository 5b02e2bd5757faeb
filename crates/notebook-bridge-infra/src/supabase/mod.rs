//! Supabase PostgREST remote-procedure-call backend.

pub mod client;

pub use client::SupabaseRpcTransport;
