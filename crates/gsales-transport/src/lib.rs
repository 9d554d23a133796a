//! Transport abstraction layer for the gsales SDK
//!
//! The SDK never talks to the network itself. Every remote procedure call is
//! handed to a [`Transport`] implementation supplied by the caller, which owns
//! the wire format, authentication and error mapping of the remote service.
//!
//! # Architecture
//!
//! - **Transport trait**: one `call` operation taking a procedure name and named parameters
//! - **Mock transport**: scripted, recording in-memory transport for tests
//! - **Tracing transport**: decorator that logs every call with its latency
//!
//! # Usage
//!
//! ```
//! use gsales_transport::{MockTransport, RemoteCall, Transport};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let transport = MockTransport::new();
//! transport.respond("getArticle", json!({"id": 42, "title": "Widget"}));
//!
//! let call = RemoteCall::new("getArticle").with_param("articleid", 42);
//! let result = transport.call(call).await.unwrap();
//! assert_eq!(result["title"], "Widget");
//! # });
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod layer;
pub mod mock;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError};
pub use layer::TracingTransport;
pub use mock::MockTransport;
pub use traits::{Params, RemoteCall, Transport};
