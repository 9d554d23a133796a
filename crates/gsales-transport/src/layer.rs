//! Logging decorator for transports
//!
//! Wraps any [`Transport`] and records each remote call with structured
//! `tracing` fields: procedure, parameter names, elapsed time and outcome.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::Result;
use crate::traits::{RemoteCall, Transport};

/// Transport decorator that logs every call it forwards.
#[derive(Clone)]
pub struct TracingTransport {
    inner: Arc<dyn Transport>,
}

impl TracingTransport {
    /// Wrap a transport.
    pub fn new(inner: Arc<dyn Transport>) -> Self {
        Self { inner }
    }

    /// The wrapped transport.
    pub fn inner(&self) -> &Arc<dyn Transport> {
        &self.inner
    }
}

impl std::fmt::Debug for TracingTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TracingTransport")
            .field("inner", &self.inner.name())
            .finish()
    }
}

#[async_trait]
impl Transport for TracingTransport {
    async fn call(&self, request: RemoteCall) -> Result<Value> {
        let procedure = request.procedure.clone();
        let params = request.param_names().join(",");
        let start = Instant::now();

        let result = self.inner.call(request).await;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(_) => info!(
                transport = self.inner.name(),
                procedure = %procedure,
                params = %params,
                elapsed_ms,
                "Remote call succeeded"
            ),
            Err(error) => warn!(
                transport = self.inner.name(),
                procedure = %procedure,
                params = %params,
                elapsed_ms,
                error = %error,
                "Remote call failed"
            ),
        }

        result
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_forwards_success_unchanged() {
        let mock = Arc::new(MockTransport::new());
        mock.respond("getArticle", json!({"id": 5}));

        let transport = TracingTransport::new(mock.clone());
        let result = transport
            .call(RemoteCall::new("getArticle").with_param("articleid", 5))
            .await
            .unwrap();

        assert_eq!(result, json!({"id": 5}));
        assert_eq!(mock.last_call().unwrap().param("articleid"), Some(&json!(5)));
    }

    #[tokio::test]
    async fn test_forwards_error_unchanged() {
        let mock = Arc::new(MockTransport::new());
        mock.fail("getArticle", TransportError::NotFound("article 5".to_string()));

        let transport = TracingTransport::new(mock);
        let err = transport
            .call(RemoteCall::new("getArticle"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn test_name_is_inner_name() {
        let transport = TracingTransport::new(Arc::new(MockTransport::new()));
        assert_eq!(transport.name(), "mock");
        assert_eq!(format!("{transport:?}"), "TracingTransport { inner: \"mock\" }");
    }
}
