//! In-memory [`RpcTransport`] that records every call it receives.
//!
//! Clones share the same call log, so a test keeps one handle and moves
//! another into the relay.

use std::sync::{Arc, Mutex};

use secrecy::ExposeSecret;

use notebook_bridge_types::error::RelayError;
use notebook_bridge_types::rpc::{RpcParams, RpcReply, RpcRequest};

use crate::rpc::transport::RpcTransport;

/// One call as seen by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation: String,
    pub params: RpcParams,
    pub bearer: String,
}

#[derive(Debug, Clone)]
enum Behavior {
    Reply(RpcReply),
    Fail(String),
    Hang,
}

#[derive(Debug, Clone)]
pub struct RecordingTransport {
    behavior: Behavior,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingTransport {
    /// Answer every call with `status` and `body`.
    pub fn replying(status: u16, body: &str) -> Self {
        Self::with_behavior(Behavior::Reply(RpcReply::new(status, body)))
    }

    /// Fail every call with a transport error.
    pub fn failing(message: &str) -> Self {
        Self::with_behavior(Behavior::Fail(message.to_string()))
    }

    /// Never answer.
    pub fn hanging() -> Self {
        Self::with_behavior(Behavior::Hang)
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl RpcTransport for RecordingTransport {
    fn name(&self) -> &str {
        "recording"
    }

    async fn invoke(&self, request: &RpcRequest<'_>) -> Result<RpcReply, RelayError> {
        self.calls.lock().unwrap().push(RecordedCall {
            operation: request.operation.to_string(),
            params: request.params.clone(),
            bearer: request.bearer.expose_secret().to_string(),
        });

        match &self.behavior {
            Behavior::Reply(reply) => Ok(reply.clone()),
            Behavior::Fail(message) => Err(RelayError::Transport(message.clone())),
            Behavior::Hang => std::future::pending().await,
        }
    }
}
