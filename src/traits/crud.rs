//! Trait definitions
//!
//! This module defines the CRUD operation surface shared by all repositories.

use crate::errors::CrudError;
use crate::query_builder::QueryBuilder;
use crate::traits::entity::Entity;
use async_trait::async_trait;

/// Trait that defines the base CRUD operations for a bound entity type.
///
/// Every operation forwards directly to the underlying pool; no caching,
/// batching, or transaction orchestration happens at this layer.
#[async_trait]
pub trait BaseCrud: Send + Sync {
    /// The entity type this repository is bound to
    type Model: Entity;

    /// Persist an instance. The returned value is the stored row, so fields
    /// derived by the database are refreshed.
    async fn create(&self, instance: Self::Model) -> Result<Self::Model, CrudError>;

    /// Get the first record matching the query, or `None`. No ordering
    /// guarantee beyond storage default.
    async fn get(&self, query: QueryBuilder) -> Result<Option<Self::Model>, CrudError>;

    /// Get records matching the query, paginated. When the query carries no
    /// limit, a default limit of 100 applies.
    async fn filter(&self, query: QueryBuilder) -> Result<Vec<Self::Model>, CrudError>;

    /// Get every record of the bound type.
    async fn get_all(&self) -> Result<Vec<Self::Model>, CrudError>;

    /// Update a record. Identical to `create`: the write is an
    /// upsert-by-identity, so an instance that already has its key stored
    /// becomes an update rather than an insert.
    async fn update(&self, instance: Self::Model) -> Result<Self::Model, CrudError>;

    /// Remove a record by its primary key, returning the removed instance.
    async fn delete(&self, instance: Self::Model) -> Result<Self::Model, CrudError>;

    /// Count all records of the bound type.
    async fn count(&self) -> Result<i64, CrudError>;
}
