//! BoxRpcTransport -- object-safe dynamic dispatch wrapper for RpcTransport.
//!
//! 1. Define an object-safe `RpcTransportDyn` trait with boxed futures
//! 2. Blanket-impl `RpcTransportDyn` for all `T: RpcTransport`
//! 3. `BoxRpcTransport` wraps `Box<dyn RpcTransportDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use notebook_bridge_types::error::RelayError;
use notebook_bridge_types::rpc::{RpcReply, RpcRequest};

use super::transport::RpcTransport;

/// Object-safe version of [`RpcTransport`] with boxed futures.
pub trait RpcTransportDyn: Send + Sync {
    fn name(&self) -> &str;

    fn invoke_boxed<'a>(
        &'a self,
        request: &'a RpcRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<RpcReply, RelayError>> + Send + 'a>>;
}

impl<T: RpcTransport> RpcTransportDyn for T {
    fn name(&self) -> &str {
        RpcTransport::name(self)
    }

    fn invoke_boxed<'a>(
        &'a self,
        request: &'a RpcRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<RpcReply, RelayError>> + Send + 'a>> {
        Box::pin(self.invoke(request))
    }
}

/// Type-erased transport, so the relay (and the HTTP state holding it) stay
/// non-generic while tests swap in an in-memory backend.
pub struct BoxRpcTransport {
    inner: Box<dyn RpcTransportDyn>,
}

impl BoxRpcTransport {
    pub fn new<T: RpcTransport + 'static>(transport: T) -> Self {
        Self {
            inner: Box::new(transport),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn invoke(&self, request: &RpcRequest<'_>) -> Result<RpcReply, RelayError> {
        self.inner.invoke_boxed(request).await
    }
}
