//! Domain primitives, ports and the generic CRUD service.
//!
//! Purpose: define the entity model shared by the HTTP and persistence
//! layers, the ports those adapters implement, and the pass-through service
//! connecting them. Types here never depend on actix or Diesel.
//!
//! Public surface:
//! - Error (alias to `error::DomainError`) — transport-agnostic error payload.
//! - ErrorCode — stable error identifier.
//! - Entity / EntityKey / BaseEntity — generic CRUD capability.
//! - User — the application user record.
//! - GenericService — CRUD service over any repository.

pub mod crud_service;
pub mod entity;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::crud_service::GenericService;
pub use self::entity::{BaseEntity, Entity, EntityKey};
pub use self::error::{DomainError as Error, DomainErrorValidationError, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::User;
pub use self::validation::{FieldViolation, ValidationErrors};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use finapp::domain::{ApiResult, Error};
///
/// fn lookup(found: bool) -> ApiResult<u32> {
///     if found { Ok(7) } else { Err(Error::not_found("nothing here")) }
/// }
///
/// assert!(lookup(false).is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
