//! FinApp backend library.
//!
//! A CRUD HTTP API over PostgreSQL built as generic layers: domain entities
//! and ports, a pass-through service, Diesel and in-memory repositories, and
//! an Actix controller instantiated per entity type.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
