//! Tests for application wiring.

use std::net::SocketAddr;

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

use finapp::domain::TRACE_ID_HEADER;

use super::*;

fn memory_app_state() -> (web::Data<HealthState>, HttpState) {
    let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));
    (web::Data::new(HealthState::new()), build_http_state(&config))
}

#[actix_web::test]
async fn users_routes_are_mounted_with_trace_ids() {
    let (health, state) = memory_app_state();
    let app = test::init_service(build_app(health, state)).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "name": "Ana", "surname": "Diaz", "userName": "adiaz" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["id"], 1);
}

#[rstest]
#[case("/health/live", StatusCode::OK)]
#[case("/health/ready", StatusCode::SERVICE_UNAVAILABLE)]
#[actix_web::test]
async fn probes_reflect_health_state(#[case] uri: &str, #[case] expected: StatusCode) {
    let (health, state) = memory_app_state();
    let app = test::init_service(build_app(health, state)).await;

    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(res.status(), expected);
}

#[actix_web::test]
async fn create_server_marks_ready_after_binding() {
    let health = web::Data::new(HealthState::new());
    let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));

    let server = create_server(health.clone(), &config).expect("server binds");

    assert!(health.is_ready());
    drop(server);
}
