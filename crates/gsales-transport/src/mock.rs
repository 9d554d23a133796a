//! # Mock Transport
//!
//! `MockTransport` implements [`Transport`] entirely in memory. Replies are
//! scripted per procedure and handed out in FIFO order; every call is recorded
//! so tests can assert on the exact procedure name and parameters that were
//! dispatched.
//!
//! ```
//! use gsales_transport::{MockTransport, RemoteCall, Transport, TransportError};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let mock = MockTransport::new();
//! mock.respond("deleteArticle", json!(true))
//!     .fail("deleteArticle", TransportError::NotFound("article 42".into()));
//!
//! let call = RemoteCall::new("deleteArticle").with_param("articleid", 42);
//! assert_eq!(mock.call(call.clone()).await.unwrap(), json!(true));
//! assert!(mock.call(call).await.unwrap_err().is_not_found());
//! assert_eq!(mock.calls_to("deleteArticle").len(), 2);
//! # });
//! ```
//!
//! A call to a procedure with no scripted reply fails with
//! [`TransportError::Other`], so a forgotten expectation shows up as an error
//! instead of a silent `null`.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Result, TransportError};
use crate::traits::{RemoteCall, Transport};

#[derive(Debug)]
enum Reply {
    Value(Value),
    Error(TransportError),
}

#[derive(Debug, Default)]
struct MockState {
    replies: HashMap<String, VecDeque<Reply>>,
    calls: Vec<RemoteCall>,
}

/// Scripted, recording in-memory transport.
#[derive(Debug, Default)]
pub struct MockTransport {
    state: Mutex<MockState>,
}

impl MockTransport {
    /// Create a transport with no scripted replies.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, procedure: impl Into<String>, reply: Reply) -> &Self {
        self.state()
            .replies
            .entry(procedure.into())
            .or_default()
            .push_back(reply);
        self
    }

    /// Queue a successful reply for `procedure`.
    pub fn respond(&self, procedure: impl Into<String>, value: Value) -> &Self {
        self.push(procedure, Reply::Value(value))
    }

    /// Queue a failure for `procedure`.
    pub fn fail(&self, procedure: impl Into<String>, error: TransportError) -> &Self {
        self.push(procedure, Reply::Error(error))
    }

    /// All calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.state().calls.clone()
    }

    /// Calls received for one procedure, oldest first.
    pub fn calls_to(&self, procedure: &str) -> Vec<RemoteCall> {
        self.state()
            .calls
            .iter()
            .filter(|call| call.procedure == procedure)
            .cloned()
            .collect()
    }

    /// The most recent call, if any.
    pub fn last_call(&self) -> Option<RemoteCall> {
        self.state().calls.last().cloned()
    }

    /// Number of scripted replies not yet consumed.
    pub fn pending(&self) -> usize {
        self.state().replies.values().map(VecDeque::len).sum()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn call(&self, request: RemoteCall) -> Result<Value> {
        let procedure = request.procedure.clone();
        let reply = {
            let mut state = self.state();
            let reply = state
                .replies
                .get_mut(&procedure)
                .and_then(VecDeque::pop_front);
            state.calls.push(request);
            reply
        };

        match reply {
            Some(Reply::Value(value)) => Ok(value),
            Some(Reply::Error(error)) => Err(error),
            None => Err(TransportError::Other(anyhow::anyhow!(
                "no reply scripted for `{procedure}`"
            ))),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_replies_are_consumed_in_order() {
        let mock = MockTransport::new();
        mock.respond("getArticlesCount", json!(1))
            .respond("getArticlesCount", json!(2));
        assert_eq!(mock.pending(), 2);

        let first =
            tokio_test::block_on(mock.call(RemoteCall::new("getArticlesCount"))).unwrap();
        let second =
            tokio_test::block_on(mock.call(RemoteCall::new("getArticlesCount"))).unwrap();

        assert_eq!(first, json!(1));
        assert_eq!(second, json!(2));
        assert_eq!(mock.pending(), 0);
    }

    #[test]
    fn test_unscripted_call_fails_and_is_recorded() {
        let mock = MockTransport::new();
        let err = tokio_test::block_on(mock.call(RemoteCall::new("spoolNewsletter")))
            .unwrap_err();

        assert!(matches!(err, TransportError::Other(_)));
        assert!(err.to_string().contains("spoolNewsletter"));
        assert_eq!(mock.calls().len(), 1);
    }

    #[test]
    fn test_replies_are_scoped_per_procedure() {
        let mock = MockTransport::new();
        mock.respond("getArticle", json!({"id": 1}));

        let err =
            tokio_test::block_on(mock.call(RemoteCall::new("getNewsletter"))).unwrap_err();
        assert!(matches!(err, TransportError::Other(_)));
        assert_eq!(mock.pending(), 1);
    }

    #[test]
    fn test_last_call_and_calls_to() {
        let mock = MockTransport::new();
        mock.respond("getArticle", json!({"id": 1}))
            .respond("deleteArticle", json!(true));

        tokio_test::block_on(mock.call(RemoteCall::new("getArticle").with_param("articleid", 1)))
            .unwrap();
        tokio_test::block_on(
            mock.call(RemoteCall::new("deleteArticle").with_param("articleid", 1)),
        )
        .unwrap();

        assert_eq!(mock.last_call().unwrap().procedure, "deleteArticle");
        assert_eq!(mock.calls_to("getArticle").len(), 1);
        assert!(mock.calls_to("createArticle").is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(MockTransport::new().name(), "mock");
    }
}
