//! Driven port for entity persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::Entity;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by repository adapters.
    pub enum RepositoryError {
        /// Connection could not be established or was lost.
        Connection { message: String } => "repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "repository query failed: {message}",
    }
}

/// CRUD storage for one entity type.
///
/// Every mutating call is its own atomic unit and commits immediately.
/// Adapters assign the key and both timestamps; values supplied on the
/// entity passed to [`Repository::create`] or [`Repository::update`] are
/// ignored.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Every stored entity in ascending key order.
    async fn get_all(&self) -> Result<Vec<E>, RepositoryError>;

    /// Look up one entity. Absence is `Ok(None)`.
    async fn get_by_id(&self, id: E::Key) -> Result<Option<E>, RepositoryError>;

    /// Insert a new entity and return it with its generated key.
    async fn create(&self, entity: E) -> Result<E, RepositoryError>;

    /// Replace every mutable field of the entity stored under `id`.
    ///
    /// Returns `Ok(None)` without storing anything when `id` is absent.
    async fn update(&self, id: E::Key, entity: E) -> Result<Option<E>, RepositoryError>;

    /// Remove the entity stored under `id`, reporting whether one existed.
    async fn delete(&self, id: E::Key) -> Result<bool, RepositoryError>;
}
