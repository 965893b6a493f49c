//! Tests for the comment, checklist, and attachment handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::domain::ports::FIXTURE_LOGIN_USER_ID;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{api_test_app, login_cookie};

#[actix_web::test]
async fn adding_a_comment_attributes_the_session_user() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/comments")
            .cookie(cookie)
            .set_json(json!({
                "cardId": Uuid::new_v4().to_string(),
                "body": "looks good",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["data"]["body"], "looks good");
    assert_eq!(body["data"]["authorId"], FIXTURE_LOGIN_USER_ID);
}

#[actix_web::test]
async fn adding_a_comment_without_a_body_is_rejected() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/comments")
            .cookie(cookie)
            .set_json(json!({ "cardId": Uuid::new_v4().to_string() }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["error"]["details"]["field"], "body");
}

#[actix_web::test]
async fn adding_a_checklist_item_answers_201() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/checklist-items")
            .cookie(cookie)
            .set_json(json!({
                "checklistId": Uuid::new_v4().to_string(),
                "title": "Check copy",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["data"]["title"], "Check copy");
    assert_eq!(body["data"]["isDone"], false);
}

#[actix_web::test]
async fn patching_an_unknown_checklist_item_is_not_found() {
    // The fixture command reports every item as missing.
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/tasks/checklist-items/{}", Uuid::new_v4()))
            .cookie(cookie)
            .set_json(json!({ "isDone": true }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn recording_an_attachment_answers_201() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/attachments")
            .cookie(cookie)
            .set_json(json!({
                "cardId": Uuid::new_v4().to_string(),
                "fileName": "a1b2.pdf",
                "originalName": "brief.pdf",
                "mimeType": "application/pdf",
                "byteSize": 52_431,
                "url": "https://files.example.com/a1b2.pdf",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["data"]["originalName"], "brief.pdf");
    assert_eq!(body["data"]["uploadedBy"], FIXTURE_LOGIN_USER_ID);
}

#[actix_web::test]
async fn recording_an_attachment_without_a_url_is_rejected() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/attachments")
            .cookie(cookie)
            .set_json(json!({
                "cardId": Uuid::new_v4().to_string(),
                "fileName": "a1b2.pdf",
                "originalName": "brief.pdf",
                "mimeType": "application/pdf",
                "byteSize": 52_431,
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["error"]["details"]["field"], "url");
}

#[actix_web::test]
async fn deleting_a_checklist_acknowledges() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/tasks/checklists/{}", Uuid::new_v4()))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "checklist deleted");
}
