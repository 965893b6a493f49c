//! Tests for the session endpoints.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{Value, json};

use crate::domain::ports::FIXTURE_LOGIN_USER_ID;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{api_test_app, login_cookie};

#[actix_web::test]
async fn login_issues_cookie_and_identity_envelope() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "admin", "password": "password" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .response()
            .cookies()
            .any(|cookie| cookie.name() == "session")
    );
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["userId"], FIXTURE_LOGIN_USER_ID);
}

#[actix_web::test]
async fn login_rejects_unknown_credentials() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "admin", "password": "nope" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "unauthorized");
}

#[actix_web::test]
async fn login_requires_both_fields() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "admin" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn me_reflects_the_logged_in_user() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/me")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["data"]["userId"], FIXTURE_LOGIN_USER_ID);
}

#[actix_web::test]
async fn me_without_session_is_unauthorised() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/me").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
