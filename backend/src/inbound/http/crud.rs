//! Generic CRUD controller.
//!
//! ```text
//! GET    {path}       list every entity
//! GET    {path}/{id}  fetch one entity (404 when absent)
//! POST   {path}       create an entity (400 on validation failure)
//! PUT    {path}/{id}  replace an entity (400 on validation, 404 when absent)
//! DELETE {path}/{id}  remove an entity (204, also for absent keys)
//! ```
//!
//! Handlers are generic over [`Entity`] and reach the domain only through the
//! [`CrudService`] port registered on the scope. Validation runs before the
//! service is called, so invalid payloads never reach storage.

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Scope, error, web};

use crate::domain::ports::CrudService;
use crate::domain::{ApiResult, Entity, Error};

/// Build a scope exposing CRUD routes for `E` under `path`.
///
/// Malformed JSON bodies and non-numeric path keys are rejected with the
/// domain error envelope rather than Actix's plain-text defaults.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use actix_web::App;
/// use finapp::domain::{GenericService, User};
/// use finapp::domain::ports::CrudService;
/// use finapp::inbound::http::crud::crud_scope;
/// use finapp::outbound::memory::InMemoryRepository;
///
/// let repository = Arc::new(InMemoryRepository::<User>::new(Arc::new(mockable::DefaultClock)));
/// let service: Arc<dyn CrudService<User>> = Arc::new(GenericService::new(repository));
/// let app = App::new().service(crud_scope("/api/users", service));
/// ```
pub fn crud_scope<E: Entity>(path: &str, service: Arc<dyn CrudService<E>>) -> Scope {
    web::scope(path)
        .app_data(web::Data::from(service))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .route("", web::get().to(get_all::<E>))
        .route("", web::post().to(create::<E>))
        .route("/{id}", web::get().to(get_by_id::<E>))
        .route("/{id}", web::put().to(update::<E>))
        .route("/{id}", web::delete().to(delete::<E>))
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid JSON payload: {err}")).into()
}

fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::not_found(format!("no resource at this path: {err}")).into()
}

fn not_found<E: Entity>(id: E::Key) -> Error {
    Error::not_found(format!("{} {id} not found", E::RESOURCE))
}

async fn get_all<E: Entity>(
    service: web::Data<dyn CrudService<E>>,
) -> ApiResult<web::Json<Vec<E>>> {
    Ok(web::Json(service.get_all().await?))
}

async fn get_by_id<E: Entity>(
    service: web::Data<dyn CrudService<E>>,
    path: web::Path<E::Key>,
) -> ApiResult<web::Json<E>> {
    let id = path.into_inner();
    service
        .get_by_id(id)
        .await?
        .map(web::Json)
        .ok_or_else(|| not_found::<E>(id))
}

async fn create<E: Entity>(
    service: web::Data<dyn CrudService<E>>,
    payload: web::Json<E>,
) -> ApiResult<web::Json<E>> {
    let entity = payload.into_inner();
    entity.validate()?;
    Ok(web::Json(service.create(entity).await?))
}

async fn update<E: Entity>(
    service: web::Data<dyn CrudService<E>>,
    path: web::Path<E::Key>,
    payload: web::Json<E>,
) -> ApiResult<web::Json<E>> {
    let id = path.into_inner();
    let entity = payload.into_inner();
    entity.validate()?;
    service
        .update(id, entity)
        .await?
        .map(web::Json)
        .ok_or_else(|| not_found::<E>(id))
}

async fn delete<E: Entity>(
    service: web::Data<dyn CrudService<E>>,
    path: web::Path<E::Key>,
) -> ApiResult<HttpResponse> {
    service.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
