//! Tests for the card handlers and the move protocol endpoint.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{api_test_app, login_cookie};

#[actix_web::test]
async fn creating_a_card_answers_201_with_the_card() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;
    let list_id = Uuid::new_v4().to_string();

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/cards")
            .cookie(cookie)
            .set_json(json!({
                "title": "Draft social assets",
                "listId": list_id,
                "dueDate": "2026-09-01T12:00:00Z",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["title"], "Draft social assets");
    assert_eq!(body["data"]["listId"], list_id);
}

#[actix_web::test]
async fn creating_a_card_without_a_title_is_rejected() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/cards")
            .cookie(cookie)
            .set_json(json!({ "listId": Uuid::new_v4().to_string() }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["error"]["details"]["field"], "title");
}

#[actix_web::test]
async fn creating_a_card_with_a_bad_due_date_is_rejected() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/cards")
            .cookie(cookie)
            .set_json(json!({
                "title": "Draft social assets",
                "listId": Uuid::new_v4().to_string(),
                "dueDate": "next tuesday",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["error"]["details"]["field"], "dueDate");
}

// Drop contract: the client sends the destination list and the slot equal
// to that list's current card count; the response reflects both verbatim.
#[actix_web::test]
async fn moving_a_card_echoes_destination_and_position() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;
    let card_id = Uuid::new_v4().to_string();
    let destination = Uuid::new_v4().to_string();

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/tasks/cards/move")
            .cookie(cookie)
            .set_json(json!({
                "cardId": card_id,
                "newListId": destination,
                "newPosition": 2,
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], card_id);
    assert_eq!(body["data"]["listId"], destination);
    assert_eq!(body["data"]["position"], 2);
}

#[actix_web::test]
async fn moving_a_card_requires_every_field() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/tasks/cards/move")
            .cookie(cookie)
            .set_json(json!({
                "cardId": Uuid::new_v4().to_string(),
                "newListId": Uuid::new_v4().to_string(),
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["error"]["details"]["field"], "newPosition");
}

#[actix_web::test]
async fn card_routes_require_a_session() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/tasks/cards/move")
            .set_json(json!({
                "cardId": Uuid::new_v4().to_string(),
                "newListId": Uuid::new_v4().to_string(),
                "newPosition": 0,
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn linking_a_label_acknowledges_with_201() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/tasks/card-labels")
            .cookie(cookie)
            .set_json(json!({
                "cardId": Uuid::new_v4().to_string(),
                "labelId": Uuid::new_v4().to_string(),
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "label linked");
}

#[actix_web::test]
async fn unassigning_a_user_acknowledges() {
    let app = actix_test::init_service(api_test_app(HttpState::fixture())).await;
    let cookie = login_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!(
                "/api/v1/tasks/assignments/{}/{}",
                Uuid::new_v4(),
                Uuid::new_v4()
            ))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "user unassigned");
}
