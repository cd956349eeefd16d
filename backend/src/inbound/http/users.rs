//! Users resource.
//!
//! ```text
//! GET    /api/users
//! GET    /api/users/{id}
//! POST   /api/users {"name":"Ana","surname":"Diaz","userName":"adiaz"}
//! PUT    /api/users/{id}
//! DELETE /api/users/{id}
//! ```
//!
//! Routing is provided by the generic controller in
//! [`crate::inbound::http::crud`]. The empty functions below carry the
//! OpenAPI descriptions of those routes and are never mounted.

use std::sync::Arc;

use actix_web::Scope;

use crate::domain::User;
use crate::domain::ports::CrudService;
use crate::inbound::http::crud::crud_scope;

/// Mount point of the users resource.
pub const USERS_PATH: &str = "/api/users";

/// CRUD scope for users.
pub fn users_scope(service: Arc<dyn CrudService<User>>) -> Scope {
    crud_scope(USERS_PATH, service)
}

/// List every user.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [crate::inbound::http::schemas::UserSchema]),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Storage unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub fn list_users() {}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User key")),
    responses(
        (status = 200, description = "User", body = crate::inbound::http::schemas::UserSchema),
        (status = 404, description = "No user with this key", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
pub fn get_user() {}

/// Create a user; storage assigns the key and timestamps.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = crate::inbound::http::schemas::UserSchema,
    responses(
        (status = 200, description = "Created user", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Malformed or invalid payload", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub fn create_user() {}

/// Replace every mutable field of a user. The path key wins over any key in
/// the body.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User key")),
    request_body = crate::inbound::http::schemas::UserSchema,
    responses(
        (status = 200, description = "Updated user", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Malformed or invalid payload", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "No user with this key", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
pub fn update_user() {}

/// Delete a user. Absent keys also answer 204.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User key")),
    responses(
        (status = 204, description = "User removed or already absent")
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
pub fn delete_user() {}
