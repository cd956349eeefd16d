//! Driving port for generic CRUD use-cases.
//!
//! Inbound adapters depend on this trait only, so HTTP handlers never see
//! persistence types or errors.

use async_trait::async_trait;

use crate::domain::{Entity, Error};

/// CRUD use-cases for one entity type.
#[async_trait]
pub trait CrudService<E: Entity>: Send + Sync {
    /// Every stored entity.
    async fn get_all(&self) -> Result<Vec<E>, Error>;

    /// One entity, or `None` when absent.
    async fn get_by_id(&self, id: E::Key) -> Result<Option<E>, Error>;

    /// Store a new entity.
    async fn create(&self, entity: E) -> Result<E, Error>;

    /// Replace an existing entity; `None` when absent.
    async fn update(&self, id: E::Key, entity: E) -> Result<Option<E>, Error>;

    /// Remove an entity, reporting whether one existed.
    async fn delete(&self, id: E::Key) -> Result<bool, Error>;
}
