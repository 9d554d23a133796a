//! Resource contexts
//!
//! Every resource of the gSales API exposes the same get/list/count/create/
//! update/delete operations, differing only in procedure names and the name
//! of the identifier parameter. [`Context`] implements those operations once;
//! a [`ResourceKind`] supplies the names.

pub mod article;
pub mod customer;
pub mod newsletter;

pub use article::{ArticleResource, Articles};
pub use customer::{CustomerResource, Customers};
pub use newsletter::{NewsletterResource, Newsletters};

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use gsales_transport::Params;

use crate::api::{Api, decode_flag};
use crate::error::Result;
use crate::types::{CollectionQuery, Entity, EntityRef, Filter};

/// Remote procedure names of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Procedures {
    /// Fetch one entity
    pub get: &'static str,
    /// Fetch a collection
    pub list: &'static str,
    /// Count a collection
    pub count: &'static str,
    /// Create an entity
    pub create: &'static str,
    /// Update an entity
    pub update: &'static str,
    /// Delete an entity
    pub delete: &'static str,
    /// Name of the identifier parameter
    pub id_param: &'static str,
}

/// A resource type of the remote service.
pub trait ResourceKind: Send + Sync + 'static {
    /// Persisted entity
    type Entity: Entity + DeserializeOwned + Serialize + Send + Sync;

    /// Attributes used for creation
    type Base: Serialize + Send + Sync;

    /// Name used in logs
    const NAME: &'static str;

    /// Procedure names
    const PROCEDURES: Procedures;
}

/// Operations shared by all resources.
pub struct Context<R: ResourceKind> {
    api: Api,
    kind: PhantomData<fn() -> R>,
}

impl<R: ResourceKind> Clone for Context<R> {
    fn clone(&self) -> Self {
        Self::new(self.api.clone())
    }
}

impl<R: ResourceKind> fmt::Debug for Context<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("resource", &R::NAME)
            .field("api", &self.api)
            .finish()
    }
}

impl<R: ResourceKind> Context<R> {
    /// Create a context dispatching through `api`.
    pub fn new(api: Api) -> Self {
        Self {
            api,
            kind: PhantomData,
        }
    }

    /// The generic entity context this resource dispatches through.
    pub fn api(&self) -> &Api {
        &self.api
    }

    /// Fetch one entity.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidReferenceKind`](crate::Error::InvalidReferenceKind) if
    /// `id` does not denote an identifier, [`Error::NotFound`](crate::Error::NotFound)
    /// if there is no such entity.
    pub async fn get<'a>(&self, id: impl Into<EntityRef<'a, R::Entity>>) -> Result<R::Entity>
    where
        R::Entity: 'a,
    {
        let id = id.into().resolve()?;
        let procedures = R::PROCEDURES;
        self.api
            .fetch_entity(procedures.get, procedures.id_param, id)
            .await
    }

    /// Fetch one entity, or `None` if the service reports it as absent.
    pub async fn find<'a>(
        &self,
        id: impl Into<EntityRef<'a, R::Entity>>,
    ) -> Result<Option<R::Entity>>
    where
        R::Entity: 'a,
    {
        match self.get(id).await {
            Ok(entity) => Ok(Some(entity)),
            Err(error) if error.is_not_found() => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Fetch the entities matching `query`.
    pub async fn all(&self, query: impl Into<CollectionQuery>) -> Result<Vec<R::Entity>> {
        self.api
            .fetch_collection(R::PROCEDURES.list, &query.into())
            .await
    }

    /// Count the entities matching `filters`.
    pub async fn count(&self, filters: &[Filter]) -> Result<u64> {
        self.api
            .fetch_collection_count(R::PROCEDURES.count, filters)
            .await
    }

    /// Create an entity from its attributes.
    pub async fn create(&self, data: &R::Base) -> Result<R::Entity> {
        let mut params = Params::new();
        params.insert("data".to_string(), serde_json::to_value(data)?);
        self.api.invoke(R::PROCEDURES.create, params).await
    }

    /// Store the attributes of an existing entity.
    pub async fn update(&self, entity: &R::Entity) -> Result<R::Entity> {
        let procedures = R::PROCEDURES;
        let mut params = Params::new();
        params.insert(procedures.id_param.to_string(), Value::from(entity.id()));
        params.insert("data".to_string(), serde_json::to_value(entity)?);
        self.api.invoke(procedures.update, params).await
    }

    /// Delete an entity. Returns the status reported by the service.
    pub async fn delete<'a>(&self, id: impl Into<EntityRef<'a, R::Entity>>) -> Result<bool>
    where
        R::Entity: 'a,
    {
        let procedures = R::PROCEDURES;
        let id = id.into().resolve()?;

        let mut params = Params::new();
        params.insert(procedures.id_param.to_string(), Value::from(id));
        let status = self.api.invoke_raw(procedures.delete, params).await?;
        decode_flag(procedures.delete, &status)
    }
}
