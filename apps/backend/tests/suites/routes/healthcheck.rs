use actix_web::body::to_bytes;
use actix_web::test;
use bowling_backend::infra::state::build_state;
use bowling_backend::AppError;

use crate::common::json_body;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn health_reports_db_and_migrations() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-trace-id"));
    let body = json_body(resp, 200).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20261019_000001_init");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body.get("db_error").is_none());
    assert!(body.get("migrations_applied").is_none());
    assert!(body["time"].as_str().unwrap().contains('T'));
    Ok(())
}

#[actix_web::test]
async fn health_without_db_still_answers() -> Result<(), AppError> {
    let state = build_state().build().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body = json_body(test::call_service(&app, req).await, 200).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "error");
    assert_eq!(body["migrations"], "unknown");
    assert!(body["db_error"].as_str().unwrap().contains("DB unavailable"));
    Ok(())
}

#[actix_web::test]
async fn root_greets() -> Result<(), AppError> {
    let state = build_state().build().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = to_bytes(resp.into_body()).await.unwrap();
    assert!(String::from_utf8_lossy(&body).contains("Bowling"));
    Ok(())
}
