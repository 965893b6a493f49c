//! Tests for the board and label handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{api_test_app, login_cookie};

#[actix_web::test]
async fn board_routes_require_a_session() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/tasks/boards")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn listing_boards_returns_success_envelope() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/tasks/boards")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn creating_a_board_answers_201_with_the_board() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/boards")
            .cookie(cookie)
            .set_json(json!({
                "name": "Q3 campaigns",
                "companyId": Uuid::new_v4().to_string(),
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Q3 campaigns");
    assert_eq!(body["data"]["isArchived"], false);
}

#[actix_web::test]
async fn creating_a_board_without_a_name_is_rejected() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/boards")
            .cookie(cookie)
            .set_json(json!({ "companyId": Uuid::new_v4().to_string() }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["details"]["field"], "name");
}

#[actix_web::test]
async fn unknown_board_composition_is_not_found() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/tasks/boards/{}", Uuid::new_v4()))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["error"]["code"], "not_found");
}

#[actix_web::test]
async fn malformed_board_id_is_a_validation_error() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/tasks/boards/not-a-uuid")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn creating_a_label_answers_201() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/labels")
            .cookie(cookie)
            .set_json(json!({
                "boardId": Uuid::new_v4().to_string(),
                "name": "Urgent",
                "color": "#ff5733",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["data"]["color"], "#ff5733");
}

#[actix_web::test]
async fn deleting_a_board_acknowledges_without_data() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/tasks/boards/{}", Uuid::new_v4()))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "board deleted");
    assert!(body.get("data").is_none());
}
