//! Type definitions for the gSales API
//!
//! Persisted entities are `{ id, ..attributes }`; the matching `*Base` types
//! carry the attributes alone and are used for creation.

pub mod article;
pub mod customer;
pub mod datetime;
pub mod identifier;
pub mod lenient;
pub mod newsletter;
pub mod query;

pub use article::{Article, ArticleBase};
pub use customer::{Customer, CustomerBase};
pub use identifier::{Entity, EntityRef, Identifier, resolve_value};
pub use newsletter::{Newsletter, NewsletterBase, Recipient, RecipientBase};
pub use query::{CollectionQuery, Direction, Filter, Operator, Sort, filter_params};
