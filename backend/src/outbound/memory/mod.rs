//! In-memory repository adapter.
//!
//! Backs the HTTP API when no database URL is configured and serves as a
//! deterministic store for tests. Keys come from a process-local sequence
//! starting at 1, mirroring a `SERIAL` column.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{Repository, RepositoryError};
use crate::domain::{BaseEntity, Entity, EntityKey};

struct Store<E: Entity> {
    rows: BTreeMap<E::Key, E>,
    last_sequence: u64,
}

/// Mutex-guarded map keyed by entity id.
pub struct InMemoryRepository<E: Entity> {
    store: Mutex<Store<E>>,
    clock: Arc<dyn Clock>,
}

impl<E: Entity> InMemoryRepository<E> {
    /// Create an empty repository stamping rows with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Mutex::new(Store {
                rows: BTreeMap::new(),
                last_sequence: 0,
            }),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store<E>>, RepositoryError> {
        self.store
            .lock()
            .map_err(|_| RepositoryError::query(format!("{} store lock poisoned", E::RESOURCE)))
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn get_all(&self) -> Result<Vec<E>, RepositoryError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: E::Key) -> Result<Option<E>, RepositoryError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn create(&self, mut entity: E) -> Result<E, RepositoryError> {
        let mut store = self.lock()?;
        let sequence = store.last_sequence.saturating_add(1);
        let id = E::Key::from_sequence(sequence)
            .ok_or_else(|| RepositoryError::query(format!("{} key space exhausted", E::RESOURCE)))?;
        store.last_sequence = sequence;

        *entity.base_mut() = BaseEntity::stamped(id, self.clock.utc());
        store.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: E::Key, mut entity: E) -> Result<Option<E>, RepositoryError> {
        let mut store = self.lock()?;
        let Some(slot) = store.rows.get_mut(&id) else {
            return Ok(None);
        };

        let base = entity.base_mut();
        base.id = id;
        base.created_date = slot.base().created_date;
        base.updated_date = self.clock.utc();
        slot.clone_from(&entity);
        Ok(Some(entity))
    }

    async fn delete(&self, id: E::Key) -> Result<bool, RepositoryError> {
        Ok(self.lock()?.rows.remove(&id).is_some())
    }
}
