//! Card HTTP handlers, including the move protocol.
//!
//! ```text
//! POST   /api/v1/tasks/cards
//! PUT    /api/v1/tasks/cards/move
//! PUT    /api/v1/tasks/cards/{id}
//! DELETE /api/v1/tasks/cards/{id}
//! POST   /api/v1/tasks/card-labels
//! DELETE /api/v1/tasks/card-labels/{card_id}/{label_id}
//! POST   /api/v1/tasks/assignments
//! DELETE /api/v1/tasks/assignments/{card_id}/{user_id}
//! ```
//!
//! `/cards/move` is registered before `/cards/{id}` so the literal segment
//! wins route matching.

use actix_web::{HttpResponse, delete, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::MoveCard;
use crate::domain::{CardPatch, Error, NewCard};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::CardResponse;
use crate::inbound::http::envelope::{Ack, Envelope};
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    double_option, parse_rfc3339, parse_user_id, parse_user_id_list, parse_uuid, parse_uuid_list,
    require_field,
};

#[derive(Debug, Deserialize)]
struct CardPath {
    id: String,
}

#[derive(Debug, Deserialize)]
struct CardLabelPath {
    card_id: String,
    label_id: String,
}

#[derive(Debug, Deserialize)]
struct AssignmentPath {
    card_id: String,
    user_id: String,
}

/// Request payload for creating a card.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    /// Display title.
    pub title: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date (RFC 3339).
    pub due_date: Option<String>,
    /// Owning list.
    pub list_id: Option<String>,
    /// Labels to link at creation time.
    pub label_ids: Option<Vec<String>>,
    /// Users to assign at creation time.
    pub assignee_ids: Option<Vec<String>>,
}

/// Request payload for patching a card.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardRequest {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description; explicit `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    /// Replacement due date; explicit `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub due_date: Option<Option<String>>,
    /// Replacement archive flag.
    pub is_archived: Option<bool>,
}

/// Request payload for the move protocol.
///
/// Callers compute `newPosition` as the destination list's current card
/// count; the server persists it verbatim after validating both ends.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardRequest {
    /// Card being relocated.
    pub card_id: Option<String>,
    /// Destination list.
    pub new_list_id: Option<String>,
    /// Zero-based slot in the destination list.
    pub new_position: Option<i32>,
}

/// Request payload linking a label to a card.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardLabelRequest {
    /// Card to link.
    pub card_id: Option<String>,
    /// Label to link.
    pub label_id: Option<String>,
}

/// Request payload assigning a user to a card.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    /// Card to assign.
    pub card_id: Option<String>,
    /// User to assign.
    pub user_id: Option<String>,
}

fn parse_due_date(value: Option<String>) -> Result<Option<DateTime<Utc>>, Error> {
    value.map(|raw| parse_rfc3339(raw, "dueDate")).transpose()
}

/// Create a card appended at the end of its list.
#[utoipa::path(
    post,
    path = "/api/v1/tasks/cards",
    request_body = CreateCardRequest,
    responses(
        (status = 201, description = "Card created", body = Envelope<CardResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "List not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["cards"],
    operation_id = "createCard"
)]
#[post("/cards")]
pub async fn create_card(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateCardRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let payload = payload.into_inner();
    let draft = NewCard {
        list_id: parse_uuid(require_field(payload.list_id, "listId")?, "listId")?,
        title: require_field(payload.title, "title")?,
        description: payload.description,
        due_date: parse_due_date(payload.due_date)?,
        label_ids: parse_uuid_list(payload.label_ids.unwrap_or_default(), "labelIds")?,
        assignee_ids: parse_user_id_list(
            payload.assignee_ids.unwrap_or_default(),
            "assigneeIds",
        )?,
        created_by: user_id,
    };
    let card = state.cards.create_card(draft).await?;
    Ok(HttpResponse::Created().json(Envelope::ok(CardResponse::from(card))))
}

/// Relocate a card to a (possibly different) list.
#[utoipa::path(
    put,
    path = "/api/v1/tasks/cards/move",
    request_body = MoveCardRequest,
    responses(
        (status = 200, description = "Card moved", body = Envelope<CardResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Card or destination not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["cards"],
    operation_id = "moveCard"
)]
#[put("/cards/move")]
pub async fn move_card(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<MoveCardRequest>,
) -> ApiResult<web::Json<Envelope<CardResponse>>> {
    session.require_user_id()?;
    let payload = payload.into_inner();
    let request = MoveCard {
        card_id: parse_uuid(require_field(payload.card_id, "cardId")?, "cardId")?,
        new_list_id: parse_uuid(require_field(payload.new_list_id, "newListId")?, "newListId")?,
        new_position: require_field(payload.new_position, "newPosition")?,
    };
    let card = state.cards.move_card(request).await?;
    Ok(web::Json(Envelope::ok(card.into())))
}

/// Patch a card's fields.
#[utoipa::path(
    put,
    path = "/api/v1/tasks/cards/{id}",
    params(("id" = String, Path, description = "Card identifier")),
    request_body = UpdateCardRequest,
    responses(
        (status = 200, description = "Card updated", body = Envelope<CardResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Card not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["cards"],
    operation_id = "updateCard"
)]
#[put("/cards/{id}")]
pub async fn update_card(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<CardPath>,
    payload: web::Json<UpdateCardRequest>,
) -> ApiResult<web::Json<Envelope<CardResponse>>> {
    session.require_user_id()?;
    let card_id = parse_uuid(path.into_inner().id, "cardId")?;
    let payload = payload.into_inner();
    let due_date = match payload.due_date {
        None => None,
        Some(None) => Some(None),
        Some(Some(raw)) => Some(Some(parse_rfc3339(raw, "dueDate")?)),
    };
    let patch = CardPatch {
        title: payload.title,
        description: payload.description,
        due_date,
        is_archived: payload.is_archived,
    };
    let card = state.cards.patch_card(card_id, patch).await?;
    Ok(web::Json(Envelope::ok(card.into())))
}

/// Delete a card and, via the schema cascade, everything it owns.
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/cards/{id}",
    params(("id" = String, Path, description = "Card identifier")),
    responses(
        (status = 200, description = "Card deleted", body = crate::inbound::http::schemas::AckSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Card not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["cards"],
    operation_id = "deleteCard"
)]
#[delete("/cards/{id}")]
pub async fn delete_card(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<CardPath>,
) -> ApiResult<web::Json<Ack>> {
    session.require_user_id()?;
    let card_id = parse_uuid(path.into_inner().id, "cardId")?;
    state.cards.delete_card(card_id).await?;
    Ok(web::Json(Ack::acknowledged("card deleted")))
}

/// Link a label to a card.
#[utoipa::path(
    post,
    path = "/api/v1/tasks/card-labels",
    request_body = CardLabelRequest,
    responses(
        (status = 201, description = "Label linked", body = crate::inbound::http::schemas::AckSchema),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Card or label not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["cards"],
    operation_id = "linkCardLabel"
)]
#[post("/card-labels")]
pub async fn link_card_label(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CardLabelRequest>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let payload = payload.into_inner();
    let card_id = parse_uuid(require_field(payload.card_id, "cardId")?, "cardId")?;
    let label_id = parse_uuid(require_field(payload.label_id, "labelId")?, "labelId")?;
    state.cards.link_label(card_id, label_id).await?;
    Ok(HttpResponse::Created().json(Ack::acknowledged("label linked")))
}

/// Remove a card-label link.
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/card-labels/{card_id}/{label_id}",
    params(
        ("card_id" = String, Path, description = "Card identifier"),
        ("label_id" = String, Path, description = "Label identifier")
    ),
    responses(
        (status = 200, description = "Label unlinked", body = crate::inbound::http::schemas::AckSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Link not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["cards"],
    operation_id = "unlinkCardLabel"
)]
#[delete("/card-labels/{card_id}/{label_id}")]
pub async fn unlink_card_label(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<CardLabelPath>,
) -> ApiResult<web::Json<Ack>> {
    session.require_user_id()?;
    let path = path.into_inner();
    let card_id = parse_uuid(path.card_id, "cardId")?;
    let label_id = parse_uuid(path.label_id, "labelId")?;
    state.cards.unlink_label(card_id, label_id).await?;
    Ok(web::Json(Ack::acknowledged("label unlinked")))
}

/// Assign a user to a card.
#[utoipa::path(
    post,
    path = "/api/v1/tasks/assignments",
    request_body = AssignmentRequest,
    responses(
        (status = 201, description = "User assigned", body = crate::inbound::http::schemas::AckSchema),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Card not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["cards"],
    operation_id = "assignUser"
)]
#[post("/assignments")]
pub async fn assign_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<AssignmentRequest>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let payload = payload.into_inner();
    let card_id = parse_uuid(require_field(payload.card_id, "cardId")?, "cardId")?;
    let user_id = parse_user_id(require_field(payload.user_id, "userId")?, "userId")?;
    state.cards.assign_user(card_id, user_id).await?;
    Ok(HttpResponse::Created().json(Ack::acknowledged("user assigned")))
}

/// Remove a card assignment.
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/assignments/{card_id}/{user_id}",
    params(
        ("card_id" = String, Path, description = "Card identifier"),
        ("user_id" = String, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User unassigned", body = crate::inbound::http::schemas::AckSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Assignment not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["cards"],
    operation_id = "unassignUser"
)]
#[delete("/assignments/{card_id}/{user_id}")]
pub async fn unassign_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<AssignmentPath>,
) -> ApiResult<web::Json<Ack>> {
    session.require_user_id()?;
    let path = path.into_inner();
    let card_id = parse_uuid(path.card_id, "cardId")?;
    let user_id = parse_user_id(path.user_id, "userId")?;
    state.cards.unassign_user(card_id, user_id).await?;
    Ok(web::Json(Ack::acknowledged("user unassigned")))
}

#[cfg(test)]
#[path = "cards_tests.rs"]
mod tests;
