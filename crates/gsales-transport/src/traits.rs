//! Transport trait and call description
//!
//! Defines the single operation every transport must provide: dispatch a
//! named remote procedure with a mapping of named parameters.

use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Named parameters of a remote call, in insertion-independent key order.
pub type Params = serde_json::Map<String, Value>;

/// A remote procedure call to be dispatched via a [`Transport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteCall {
    /// Remote procedure name (e.g. `getArticle`)
    pub procedure: String,

    /// Named parameters; absent optionals are simply not present
    pub params: Params,
}

impl RemoteCall {
    /// Create a call without parameters
    pub fn new(procedure: impl Into<String>) -> Self {
        Self {
            procedure: procedure.into(),
            params: Params::new(),
        }
    }

    /// Create a call with an already assembled parameter mapping
    pub fn with_params(procedure: impl Into<String>, params: Params) -> Self {
        Self {
            procedure: procedure.into(),
            params,
        }
    }

    /// Add a named parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Get a parameter by name
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Parameter names, sorted
    pub fn param_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.params.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Boundary to the remote sales-management service.
///
/// Implementations own the wire format, authentication, retries and the
/// mapping of service failures onto [`TransportError`]. A missing entity must
/// be reported as [`TransportError::NotFound`] so callers can tell it apart
/// from other failures.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Dispatch a remote call and return its decoded result
    async fn call(&self, request: RemoteCall) -> Result<Value>;

    /// Short name of the transport, used in log output
    fn name(&self) -> &str {
        "custom"
    }
}
