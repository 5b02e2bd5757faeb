//! Relay -- performs one outbound RPC call and normalizes the outcome.
//!
//! Every privileged route funnels through [`Relay::call`]: resolve the bearer
//! via the [`CredentialPolicy`], invoke the transport under a single timeout,
//! then map the reply. Status < 400 yields the decoded JSON payload verbatim;
//! anything else becomes [`RelayError::Remote`] carrying the raw body so the
//! route can hand it back unchanged. No retries.

use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::{Instrument, Span, debug, info_span, warn};

use notebook_bridge_observe::rpc_attrs;
use notebook_bridge_types::error::RelayError;
use notebook_bridge_types::rpc::{RpcCall, RpcReply, RpcRequest};

use crate::credential::CredentialPolicy;
use crate::rpc::box_transport::BoxRpcTransport;

pub struct Relay {
    transport: BoxRpcTransport,
    policy: CredentialPolicy,
    timeout: Duration,
}

impl Relay {
    pub fn new(transport: BoxRpcTransport, policy: CredentialPolicy, timeout: Duration) -> Self {
        Self {
            transport,
            policy,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Perform `call` and return the remote payload.
    pub async fn call(&self, call: RpcCall) -> Result<Value, RelayError> {
        let (bearer, source) = self.policy.resolve(call.credential()).inspect_err(|_| {
            warn!(
                operation = call.operation(),
                "Rejected remote call: no caller credential and fallback disabled"
            );
        })?;

        let span = call_span(self.transport.name(), call.operation(), source.as_str());

        let request = RpcRequest {
            operation: call.operation(),
            params: call.params(),
            bearer,
        };

        self.dispatch(&request).instrument(span).await
    }

    async fn dispatch(&self, request: &RpcRequest<'_>) -> Result<Value, RelayError> {
        let started = Instant::now();
        let outcome = tokio::time::timeout(self.timeout, self.transport.invoke(request)).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let reply = match outcome {
            Ok(Ok(reply)) => reply,
            Ok(Err(err)) => {
                warn!(elapsed_ms, error = %err, "Remote call failed");
                return Err(err);
            }
            Err(_) => {
                warn!(
                    elapsed_ms,
                    timeout_secs = self.timeout.as_secs_f64(),
                    "Remote call timed out"
                );
                return Err(RelayError::Timeout(self.timeout));
            }
        };

        Span::current().record(rpc_attrs::RPC_STATUS, reply.status);
        if reply.is_success() {
            debug!(status = reply.status, elapsed_ms, "Remote call completed");
        } else {
            warn!(status = reply.status, elapsed_ms, "Remote call returned an error status");
        }

        normalize(reply).inspect_err(|err| {
            if let RelayError::Decode(reason) = err {
                warn!(reason = %reason, "Remote reply was not valid JSON");
            }
        })
    }
}

/// Open the span for one call. Field names match [`rpc_attrs`].
fn call_span(system: &str, method: &str, credential: &str) -> Span {
    info_span!(
        "rpc.call",
        rpc.system = system,
        rpc.method = method,
        rpc.credential = credential,
        rpc.status = tracing::field::Empty,
    )
}

/// Map a raw reply onto the relay's result.
///
/// An empty success body decodes to JSON `null`.
pub fn normalize(reply: RpcReply) -> Result<Value, RelayError> {
    if !reply.is_success() {
        return Err(RelayError::Remote {
            status: reply.status,
            body: reply.body,
        });
    }

    if reply.body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&reply.body).map_err(|e| RelayError::Decode(e.to_string()))
}
