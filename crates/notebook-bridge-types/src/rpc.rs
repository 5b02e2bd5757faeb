//! Outbound RPC call descriptor and the raw reply returned by a transport.

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};

use crate::error::RelayError;

/// Named parameters sent as the JSON body of a remote procedure call.
pub type RpcParams = Map<String, Value>;

/// One outbound call to a named remote procedure.
///
/// Built fresh per inbound request and never mutated once handed to the relay.
#[derive(Debug, Clone)]
pub struct RpcCall {
    operation: String,
    params: RpcParams,
    credential: Option<SecretString>,
}

impl RpcCall {
    /// Start a call to `operation`.
    ///
    /// Fails with [`RelayError::InvalidOperation`] when the name is empty or
    /// whitespace only.
    pub fn new(operation: impl Into<String>) -> Result<Self, RelayError> {
        let operation = operation.into();
        if operation.trim().is_empty() {
            return Err(RelayError::InvalidOperation);
        }
        Ok(Self {
            operation,
            params: RpcParams::new(),
            credential: None,
        })
    }

    /// Add a named parameter.
    pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }

    /// Add a string parameter only when it is present and not blank.
    pub fn param_if_present(self, name: &str, value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => self.param(name, v),
            _ => self,
        }
    }

    /// Attach the caller-supplied bearer credential, if any.
    pub fn with_credential(mut self, credential: Option<SecretString>) -> Self {
        self.credential = credential;
        self
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn params(&self) -> &RpcParams {
        &self.params
    }

    /// The caller credential, `None` when absent or blank.
    pub fn credential(&self) -> Option<&SecretString> {
        self.credential
            .as_ref()
            .filter(|c| !c.expose_secret().trim().is_empty())
    }
}

/// A fully resolved request as handed to a transport.
#[derive(Debug, Clone, Copy)]
pub struct RpcRequest<'a> {
    pub operation: &'a str,
    pub params: &'a RpcParams,
    pub bearer: &'a SecretString,
}

/// Raw status and body of a remote reply, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcReply {
    pub status: u16,
    pub body: String,
}

impl RpcReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Remote statuses below 400 count as success.
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}
