//! Builders wiring storage adapters into the HTTP state.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::warn;

use finapp::domain::ports::{CrudService, Repository};
use finapp::domain::{GenericService, User};
use finapp::inbound::http::state::HttpState;
use finapp::outbound::memory::InMemoryRepository;
use finapp::outbound::persistence::{DbPool, DieselUserRepository};

use super::ServerConfig;

/// Pick the Diesel repository when a pool is configured, otherwise the
/// in-memory store.
fn build_user_repository(pool: Option<&DbPool>, clock: Arc<dyn Clock>) -> Arc<dyn Repository<User>> {
    match pool {
        Some(pool) => Arc::new(DieselUserRepository::new(pool.clone(), clock)),
        None => {
            warn!("no database configured; users are kept in memory");
            Arc::new(InMemoryRepository::new(clock))
        }
    }
}

/// Build the HTTP state for `config`.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let users: Arc<dyn CrudService<User>> = Arc::new(GenericService::new(
        build_user_repository(config.db_pool.as_ref(), clock),
    ));
    HttpState::new(users)
}
