//! Generic CRUD service.
//!
//! Implements the [`CrudService`] driving port by delegating to a
//! [`Repository`] and translating persistence failures into domain errors.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{CrudService, Repository, RepositoryError};
use crate::domain::{Entity, Error};

/// Pass-through service backed by a single repository.
pub struct GenericService<E: Entity> {
    repository: Arc<dyn Repository<E>>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> GenericService<E> {
    /// Create a service over `repository`.
    pub fn new(repository: Arc<dyn Repository<E>>) -> Self {
        Self {
            repository,
            _entity: PhantomData,
        }
    }

    fn map_repository_error(error: RepositoryError) -> Error {
        match error {
            RepositoryError::Connection { message } => {
                warn!(resource = E::RESOURCE, detail = %message, "repository unavailable");
                Error::service_unavailable(format!("{} repository unavailable", E::RESOURCE))
            }
            RepositoryError::Query { message } => {
                Error::internal(format!("{} repository error: {message}", E::RESOURCE))
            }
        }
    }
}

impl<E: Entity> Clone for GenericService<E> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

#[async_trait]
impl<E: Entity> CrudService<E> for GenericService<E> {
    async fn get_all(&self) -> Result<Vec<E>, Error> {
        self.repository
            .get_all()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get_by_id(&self, id: E::Key) -> Result<Option<E>, Error> {
        self.repository
            .get_by_id(id)
            .await
            .map_err(Self::map_repository_error)
    }

    async fn create(&self, entity: E) -> Result<E, Error> {
        let created = self
            .repository
            .create(entity)
            .await
            .map_err(Self::map_repository_error)?;
        info!(resource = E::RESOURCE, id = %created.id(), "entity created");
        Ok(created)
    }

    async fn update(&self, id: E::Key, entity: E) -> Result<Option<E>, Error> {
        let updated = self
            .repository
            .update(id, entity)
            .await
            .map_err(Self::map_repository_error)?;
        if updated.is_some() {
            info!(resource = E::RESOURCE, %id, "entity updated");
        }
        Ok(updated)
    }

    async fn delete(&self, id: E::Key) -> Result<bool, Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?;
        info!(resource = E::RESOURCE, %id, removed, "entity delete processed");
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "crud_service_tests.rs"]
mod tests;
