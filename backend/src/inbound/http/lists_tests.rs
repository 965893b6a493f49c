//! Tests for the list handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{api_test_app, login_cookie};

#[actix_web::test]
async fn creating_a_list_answers_201_with_the_list() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;
    let board_id = Uuid::new_v4().to_string();

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/lists")
            .cookie(cookie)
            .set_json(json!({ "name": "Backlog", "boardId": board_id }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Backlog");
    assert_eq!(body["data"]["boardId"], board_id);
}

#[actix_web::test]
async fn creating_a_list_without_a_name_is_rejected() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/lists")
            .cookie(cookie)
            .set_json(json!({ "boardId": Uuid::new_v4().to_string() }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["error"]["details"]["field"], "name");
}

#[actix_web::test]
async fn creating_a_list_with_malformed_board_id_is_rejected() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/lists")
            .cookie(cookie)
            .set_json(json!({ "name": "Backlog", "boardId": "nope" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn deleting_a_list_acknowledges() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/tasks/lists/{}", Uuid::new_v4()))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "list deleted");
}

#[actix_web::test]
async fn list_routes_require_a_session() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/lists")
            .set_json(json!({ "name": "Backlog", "boardId": Uuid::new_v4().to_string() }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
