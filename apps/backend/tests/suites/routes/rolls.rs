use actix_web::http::header::CONTENT_TYPE;
use actix_web::test;
use bowling_backend::AppError;
use serde_json::json;

use crate::common::{assert_problem_details_structure, json_body};
use crate::support::factory::game_with_rolls;
use crate::support::{build_test_state, create_test_app};

fn roll_request(game_id: i64, frame: i32, pins: i32) -> actix_http::Request {
    test::TestRequest::post()
        .uri(&format!("/api/games/{game_id}/rolls"))
        .set_json(json!({ "frameNumber": frame, "pins": pins }))
        .to_request()
}

#[actix_web::test]
async fn roll_updates_the_active_frame() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let game = game_with_rolls(&state, &[]).await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let body = json_body(test::call_service(&app, roll_request(game.id, 1, 7)).await, 200).await;
    assert_eq!(body["frames"][0]["rolls"], json!([7]));
    assert_eq!(body["frames"][0]["complete"], false);
    assert_eq!(body["active_frame"], 1);

    let body = json_body(test::call_service(&app, roll_request(game.id, 1, 2)).await, 200).await;
    assert_eq!(body["frames"][0]["rolls"], json!([7, 2]));
    assert_eq!(body["frames"][0]["score"], 9);
    assert_eq!(body["frames"][0]["kind"], "open");
    assert_eq!(body["total_score"], 9);
    assert_eq!(body["active_frame"], 2);
    Ok(())
}

#[actix_web::test]
async fn rejected_rolls_map_to_specific_codes() -> Result<(), AppError> {
    let state = build_test_state().await?;
    // Frame 1 complete (3, 4); frame 2 holds a 7.
    let game = game_with_rolls(&state, &[3, 4, 7]).await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let cases = [
        (2, 11, "INVALID_PIN_COUNT"),
        (2, -1, "INVALID_PIN_COUNT"),
        (0, 5, "INVALID_FRAME_NUMBER"),
        (11, 5, "INVALID_FRAME_NUMBER"),
        (1, 2, "FRAME_ALREADY_COMPLETE"),
        (3, 2, "FRAME_MISMATCH"),
        (2, 4, "ROLL_EXCEEDS_REMAINING_PINS"),
    ];

    for (frame, pins, code) in cases {
        let resp = test::call_service(&app, roll_request(game.id, frame, pins)).await;
        assert_problem_details_structure(resp, 400, code, None).await;
    }

    // None of the rejections touched the game.
    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{}", game.id))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, 200).await;
    assert_eq!(body["frames"][0]["rolls"], json!([3, 4]));
    assert_eq!(body["frames"][1]["rolls"], json!([7]));
    assert_eq!(body["total_score"], 7);
    assert_eq!(body["active_frame"], 2);
    Ok(())
}

#[actix_web::test]
async fn exceeding_pins_detail_names_what_remains() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let game = game_with_rolls(&state, &[6]).await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, roll_request(game.id, 1, 5)).await;
    assert_problem_details_structure(resp, 400, "ROLL_EXCEEDS_REMAINING_PINS", Some("4 pins"))
        .await;
    Ok(())
}

#[actix_web::test]
async fn roll_on_unknown_game_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, roll_request(9_999, 1, 5)).await;
    assert_problem_details_structure(resp, 404, "GAME_NOT_FOUND", None).await;
    Ok(())
}

#[actix_web::test]
async fn malformed_bodies_are_bad_requests() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let game = game_with_rolls(&state, &[]).await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let uri = format!("/api/games/{}/rolls", game.id);

    let bodies = [
        "",
        "{not json",
        r#"{"pins": 5}"#,
        r#"{"frameNumber": "one", "pins": 5}"#,
    ];

    for raw in bodies {
        let req = test::TestRequest::post()
            .uri(&uri)
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload(raw)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_structure(resp, 400, "BAD_REQUEST", None).await;
    }
    Ok(())
}

#[actix_web::test]
async fn tenth_frame_bonus_over_http() -> Result<(), AppError> {
    let state = build_test_state().await?;
    // Nine open frames of (0, 0).
    let game = game_with_rolls(&state, &[0; 18]).await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let body = json_body(test::call_service(&app, roll_request(game.id, 10, 4)).await, 200).await;
    assert_eq!(body["frames"][9]["state"], "in_progress");

    let body = json_body(test::call_service(&app, roll_request(game.id, 10, 6)).await, 200).await;
    assert_eq!(body["frames"][9]["state"], "awaiting_spare_bonus");
    assert!(body["frames"][9]["score"].is_null());
    assert_eq!(body["status"], "in_progress");

    let body = json_body(test::call_service(&app, roll_request(game.id, 10, 10)).await, 200).await;
    assert_eq!(body["frames"][9]["rolls"], json!([4, 6, 10]));
    assert_eq!(body["frames"][9]["score"], 20);
    assert_eq!(body["status"], "complete");
    assert_eq!(body["total_score"], 20);
    Ok(())
}
