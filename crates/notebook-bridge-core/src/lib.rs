//! Business logic for the notebook admin bridge.
//!
//! Defines the [`RpcTransport`](rpc::transport::RpcTransport) port that the
//! infrastructure layer implements, plus the pieces every privileged request
//! flows through: the admin gate, the credential policy, the relay, and the
//! per-route procedure mapping table. Depends only on
//! `notebook-bridge-types` -- never on `notebook-bridge-infra` or any HTTP
//! client crate.

pub mod credential;
pub mod gate;
pub mod procedures;
pub mod relay;
pub mod rpc;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
