//! Observability setup for the notebook admin bridge.

pub mod rpc_attrs;
pub mod tracing_setup;
