//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod crud_service;
mod repository;

pub use crud_service::CrudService;
pub use repository::{Repository, RepositoryError};
