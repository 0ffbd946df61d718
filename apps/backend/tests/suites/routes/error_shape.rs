use actix_web::{test, web, HttpResponse};
use bowling_backend::infra::state::build_state;
use bowling_backend::{AppError, ErrorCode};

use crate::common::assert_problem_details_structure;
use crate::support::create_test_app;

async fn validation_error() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(ErrorCode::ValidationError, "Field validation failed"))
}

async fn not_found_error() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(ErrorCode::NotFound, "Resource not found"))
}

async fn conflict_error() -> Result<HttpResponse, AppError> {
    Err(AppError::conflict(ErrorCode::OptimisticLock, "Game was modified"))
}

async fn internal_error() -> Result<HttpResponse, AppError> {
    Err(AppError::internal("Something broke"))
}

async fn db_error() -> Result<HttpResponse, AppError> {
    Err(AppError::db("Connection reset"))
}

// handler-only: no DB
#[actix_web::test]
async fn error_responses_conform_to_problem_details() {
    let state = build_state().build().await.expect("create test state");
    let app = create_test_app(state)
        .with_routes(|cfg| {
            cfg.route("/_test/validation", web::get().to(validation_error))
                .route("/_test/not_found", web::get().to(not_found_error))
                .route("/_test/conflict", web::get().to(conflict_error))
                .route("/_test/internal", web::get().to(internal_error))
                .route("/_test/db", web::get().to(db_error));
        })
        .build()
        .await;

    let cases = [
        ("/_test/validation", 400, "VALIDATION_ERROR", "Field validation failed"),
        ("/_test/not_found", 404, "NOT_FOUND", "Resource not found"),
        ("/_test/conflict", 409, "OPTIMISTIC_LOCK", "Game was modified"),
        ("/_test/internal", 500, "INTERNAL", "Something broke"),
        ("/_test/db", 500, "DB_ERROR", "Connection reset"),
    ];

    for (uri, status, code, detail) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_structure(resp, status, code, Some(detail)).await;
    }
}

#[actix_web::test]
async fn data_routes_without_db_are_unavailable() {
    let state = build_state().build().await.expect("create test state");
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post().uri("/api/games").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 503, "DB_UNAVAILABLE", None).await;

    let req = test::TestRequest::get().uri("/api/games/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 503, "DB_UNAVAILABLE", None).await;
}

#[actix_web::test]
async fn every_response_carries_a_fresh_trace_id() {
    let state = build_state().build().await.expect("create test state");
    let app = create_test_app(state).with_prod_routes().build().await;

    let mut seen = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        let trace_id = resp
            .headers()
            .get("x-trace-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
            .expect("x-trace-id header");
        assert_eq!(trace_id.len(), 36);
        seen.push(trace_id);
    }
    assert_ne!(seen[0], seen[1]);
}

#[actix_web::test]
async fn problem_trace_id_matches_response_header() {
    let state = build_state().build().await.expect("create test state");
    let app = create_test_app(state)
        .with_routes(|cfg| {
            cfg.route("/_test/internal", web::get().to(internal_error));
        })
        .build()
        .await;

    let req = test::TestRequest::get().uri("/_test/internal").to_request();
    let resp = test::call_service(&app, req).await;
    let header = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("x-trace-id header");
    let body = crate::common::json_body(resp, 500).await;

    assert_eq!(body["trace_id"], header.as_str());
    assert_ne!(header, bowling_backend::trace_ctx::UNKNOWN_TRACE_ID);
}
