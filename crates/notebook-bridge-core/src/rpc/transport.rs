//! RpcTransport trait definition.
//!
//! The single seam between the relay and the network. Implementations send
//! one resolved [`RpcRequest`] and return the raw status and body; the relay
//! owns credential resolution, the timeout, and normalization.

use notebook_bridge_types::error::RelayError;
use notebook_bridge_types::rpc::{RpcReply, RpcRequest};

/// Trait for remote-procedure-call backends.
///
/// Uses native async fn in traits (RPITIT). Implementations live in
/// notebook-bridge-infra (e.g., `SupabaseRpcTransport`).
///
/// A transport must not interpret the remote status: any HTTP reply,
/// including 4xx and 5xx, is `Ok(RpcReply)`. Errors are reserved for calls
/// that produced no reply at all ([`RelayError::Transport`],
/// [`RelayError::Timeout`]).
pub trait RpcTransport: Send + Sync {
    /// Short backend name used in logs (e.g., "supabase").
    fn name(&self) -> &str;

    /// Perform one outbound call.
    fn invoke(
        &self,
        request: &RpcRequest<'_>,
    ) -> impl std::future::Future<Output = Result<RpcReply, RelayError>> + Send;
}
