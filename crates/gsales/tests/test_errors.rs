//! Error taxonomy tests against a mockall transport

mod common;

use std::error::Error as _;
use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use gsales::{Client, ClientConfig, CollectionQuery, Error};
use gsales_transport::{RemoteCall, Transport, TransportError};
use mockall::{mock, predicate::eq};
use serde_json::{Value, json};

mock! {
    pub Remote {}

    #[async_trait]
    impl Transport for Remote {
        async fn call(&self, request: RemoteCall) -> gsales_transport::Result<Value>;
    }
}

fn client(remote: MockRemote) -> Client {
    common::init_tracing();
    Client::new(Arc::new(remote))
}

#[tokio::test]
async fn test_not_found_is_distinguished() {
    let mut remote = MockRemote::new();
    remote
        .expect_call()
        .withf(|call| call.procedure == "getNewsletter")
        .times(1)
        .returning(|_| Err(TransportError::NotFound("newsletter 3 not found".into())));

    let error = client(remote).newsletters().get(3).await.unwrap_err();

    assert!(error.is_not_found());
    assert_eq!(error.procedure(), Some("getNewsletter"));
}

#[tokio::test]
async fn test_remote_error_carries_transport_error() {
    let mut remote = MockRemote::new();
    remote
        .expect_call()
        .times(1)
        .returning(|_| Err(TransportError::Timeout));

    let error = client(remote).articles().all(CollectionQuery::new()).await.unwrap_err();

    assert_matches!(&error, Error::Remote { source: TransportError::Timeout, .. });
    assert_eq!(error.source().unwrap().to_string(), TransportError::Timeout.to_string());
}

#[tokio::test]
async fn test_opaque_transport_cause_is_kept() {
    let mut remote = MockRemote::new();
    remote
        .expect_call()
        .returning(|_| Err(anyhow::anyhow!("tls handshake failed").into()));

    let error = client(remote).customers().count(&[]).await.unwrap_err();

    assert!(!error.is_not_found());
    assert!(error.to_string().contains("tls handshake failed"));
}

#[tokio::test]
async fn test_decode_error_names_procedure() {
    let mut remote = MockRemote::new();
    remote
        .expect_call()
        .returning(|_| Ok(json!({"id": "not-a-number"})));

    let error = client(remote).articles().get(1).await.unwrap_err();

    assert_matches!(error, Error::Decode { procedure, .. } if procedure == "getArticle");
}

#[tokio::test]
async fn test_exact_request_is_sent() {
    let expected = RemoteCall::new("addNewsletterRecipientByCustomerId")
        .with_param("newsletterid", 7)
        .with_param("customerid", 99);

    let mut remote = MockRemote::new();
    remote
        .expect_call()
        .with(eq(expected))
        .times(1)
        .returning(|_| Ok(json!(1)));

    let result = client(remote)
        .newsletters()
        .add_customer_as_recipient(7, 99)
        .await
        .unwrap();
    assert_eq!(result, 1);
}

#[tokio::test]
async fn test_invalid_reference_never_reaches_transport() {
    let mut remote = MockRemote::new();
    remote.expect_call().never();

    let result = client(remote).newsletters().spool(true_reference()).await;
    assert_matches!(result, Err(Error::InvalidReferenceKind(kind)) if kind == "boolean");
}

fn true_reference() -> Value {
    Value::Bool(true)
}

#[test]
fn test_config_from_env_feeds_builder() {
    temp_env::with_var("GSALES_TRACE_CALLS", Some("on"), || {
        let config = ClientConfig::from_env().unwrap();
        assert!(config.trace_calls);

        let client = Client::builder()
            .transport(Arc::new(MockRemote::new()))
            .config(config)
            .build();
        assert!(client.is_ok());
    });
}
