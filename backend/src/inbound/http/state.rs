//! Shared HTTP adapter state.
//!
//! Handlers only depend on domain ports, so the server can swap storage
//! adapters without touching the HTTP layer.

use std::sync::Arc;

use crate::domain::User;
use crate::domain::ports::CrudService;

/// Dependency bundle for HTTP routes.
#[derive(Clone)]
pub struct HttpState {
    /// CRUD use-cases for users.
    pub users: Arc<dyn CrudService<User>>,
}

impl HttpState {
    /// Bundle the given ports.
    pub fn new(users: Arc<dyn CrudService<User>>) -> Self {
        Self { users }
    }
}
