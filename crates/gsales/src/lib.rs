//! # gsales
//!
//! Typed client SDK for the gSales invoicing and newsletter service:
//! - Articles, newsletters and customers with get/list/count/create/update/delete
//! - Newsletter recipient management and spooling
//! - Filtering, sorting and pagination of collections
//! - Entity references that accept either an identifier or the entity itself
//!
//! The SDK does not speak any wire protocol itself. Remote calls go through a
//! [`gsales_transport::Transport`] supplied by the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gsales::{Client, CollectionQuery, Filter, Sort};
//! # use gsales_transport::Transport;
//!
//! # async fn example(transport: Arc<dyn Transport>) -> gsales::Result<()> {
//! let client = Client::builder().transport(transport).trace_calls(true).build()?;
//!
//! let newest = client
//!     .articles()
//!     .all(
//!         CollectionQuery::new()
//!             .filter(Filter::like("title", "Pen%"))
//!             .sort(Sort::desc("created"))
//!             .limit(10),
//!     )
//!     .await?;
//!
//! for article in &newest {
//!     client.articles().delete(article).await?;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use types::*;

// Module declarations
pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;
pub use gsales_transport as transport;
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use gsales::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Client, ClientConfig, Error, Result,
        resources::{Articles, Customers, Newsletters},
        types::{
            Article, ArticleBase, CollectionQuery, Customer, CustomerBase, Entity, EntityRef,
            Filter, Identifier, Newsletter, NewsletterBase, Recipient, RecipientBase, Sort,
        },
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod property_tests;
