//! Comment, checklist, and attachment HTTP handlers.
//!
//! ```text
//! POST   /api/v1/tasks/comments
//! DELETE /api/v1/tasks/comments/{id}
//! POST   /api/v1/tasks/checklists
//! DELETE /api/v1/tasks/checklists/{id}
//! POST   /api/v1/tasks/checklist-items
//! PUT    /api/v1/tasks/checklist-items/{id}
//! DELETE /api/v1/tasks/checklist-items/{id}
//! POST   /api/v1/tasks/attachments
//! DELETE /api/v1/tasks/attachments/{id}
//! ```

use actix_web::{HttpResponse, delete, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ChecklistItemPatch, NewAttachment};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{
    AttachmentResponse, ChecklistItemResponse, ChecklistResponse, CommentResponse,
};
use crate::inbound::http::envelope::{Ack, Envelope};
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_uuid, require_field};

#[derive(Debug, Deserialize)]
struct DetailPath {
    id: String,
}

/// Request payload for adding a comment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    /// Commented card.
    pub card_id: Option<String>,
    /// Comment text.
    pub body: Option<String>,
}

/// Request payload for adding a checklist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChecklistRequest {
    /// Owning card.
    pub card_id: Option<String>,
    /// Display title.
    pub title: Option<String>,
}

/// Request payload for adding a checklist item.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChecklistItemRequest {
    /// Owning checklist.
    pub checklist_id: Option<String>,
    /// Display title.
    pub title: Option<String>,
}

/// Request payload for patching a checklist item.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChecklistItemRequest {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement completion flag.
    pub is_done: Option<bool>,
}

/// Request payload recording an attachment descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttachmentRequest {
    /// Owning card.
    pub card_id: Option<String>,
    /// Storage-assigned file name.
    pub file_name: Option<String>,
    /// File name as uploaded.
    pub original_name: Option<String>,
    /// MIME type reported at upload time.
    pub mime_type: Option<String>,
    /// Size in bytes.
    pub byte_size: Option<i64>,
    /// Storage URL for download.
    pub url: Option<String>,
}

/// Add a comment authored by the session user.
#[utoipa::path(
    post,
    path = "/api/v1/tasks/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment added", body = Envelope<CommentResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Card not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["card-details"],
    operation_id = "addComment"
)]
#[post("/comments")]
pub async fn add_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateCommentRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let payload = payload.into_inner();
    let card_id = parse_uuid(require_field(payload.card_id, "cardId")?, "cardId")?;
    let body = require_field(payload.body, "body")?;
    let comment = state.card_details.add_comment(card_id, user_id, body).await?;
    Ok(HttpResponse::Created().json(Envelope::ok(CommentResponse::from(comment))))
}

/// Delete a comment.
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/comments/{id}",
    params(("id" = String, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Comment deleted", body = crate::inbound::http::schemas::AckSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Comment not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["card-details"],
    operation_id = "deleteComment"
)]
#[delete("/comments/{id}")]
pub async fn delete_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<DetailPath>,
) -> ApiResult<web::Json<Ack>> {
    session.require_user_id()?;
    let comment_id = parse_uuid(path.into_inner().id, "commentId")?;
    state.card_details.delete_comment(comment_id).await?;
    Ok(web::Json(Ack::acknowledged("comment deleted")))
}

/// Add a checklist appended at the end of the card's checklists.
#[utoipa::path(
    post,
    path = "/api/v1/tasks/checklists",
    request_body = CreateChecklistRequest,
    responses(
        (status = 201, description = "Checklist added", body = Envelope<ChecklistResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Card not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["card-details"],
    operation_id = "addChecklist"
)]
#[post("/checklists")]
pub async fn add_checklist(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateChecklistRequest>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let payload = payload.into_inner();
    let card_id = parse_uuid(require_field(payload.card_id, "cardId")?, "cardId")?;
    let title = require_field(payload.title, "title")?;
    let checklist = state.card_details.add_checklist(card_id, title).await?;
    Ok(HttpResponse::Created().json(Envelope::ok(ChecklistResponse::from(checklist))))
}

/// Delete a checklist and, via the schema cascade, its items.
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/checklists/{id}",
    params(("id" = String, Path, description = "Checklist identifier")),
    responses(
        (status = 200, description = "Checklist deleted", body = crate::inbound::http::schemas::AckSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Checklist not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["card-details"],
    operation_id = "deleteChecklist"
)]
#[delete("/checklists/{id}")]
pub async fn delete_checklist(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<DetailPath>,
) -> ApiResult<web::Json<Ack>> {
    session.require_user_id()?;
    let checklist_id = parse_uuid(path.into_inner().id, "checklistId")?;
    state.card_details.delete_checklist(checklist_id).await?;
    Ok(web::Json(Ack::acknowledged("checklist deleted")))
}

/// Add an item appended at the end of its checklist.
#[utoipa::path(
    post,
    path = "/api/v1/tasks/checklist-items",
    request_body = CreateChecklistItemRequest,
    responses(
        (status = 201, description = "Item added", body = Envelope<ChecklistItemResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Checklist not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["card-details"],
    operation_id = "addChecklistItem"
)]
#[post("/checklist-items")]
pub async fn add_checklist_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateChecklistItemRequest>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let payload = payload.into_inner();
    let checklist_id = parse_uuid(
        require_field(payload.checklist_id, "checklistId")?,
        "checklistId",
    )?;
    let title = require_field(payload.title, "title")?;
    let item = state
        .card_details
        .add_checklist_item(checklist_id, title)
        .await?;
    Ok(HttpResponse::Created().json(Envelope::ok(ChecklistItemResponse::from(item))))
}

/// Patch a checklist item's title or completion flag.
#[utoipa::path(
    put,
    path = "/api/v1/tasks/checklist-items/{id}",
    params(("id" = String, Path, description = "Item identifier")),
    request_body = UpdateChecklistItemRequest,
    responses(
        (status = 200, description = "Item updated", body = Envelope<ChecklistItemResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Item not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["card-details"],
    operation_id = "updateChecklistItem"
)]
#[put("/checklist-items/{id}")]
pub async fn update_checklist_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<DetailPath>,
    payload: web::Json<UpdateChecklistItemRequest>,
) -> ApiResult<web::Json<Envelope<ChecklistItemResponse>>> {
    session.require_user_id()?;
    let item_id = parse_uuid(path.into_inner().id, "itemId")?;
    let payload = payload.into_inner();
    let patch = ChecklistItemPatch {
        title: payload.title,
        is_done: payload.is_done,
    };
    let item = state.card_details.patch_checklist_item(item_id, patch).await?;
    Ok(web::Json(Envelope::ok(item.into())))
}

/// Delete a checklist item.
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/checklist-items/{id}",
    params(("id" = String, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Item deleted", body = crate::inbound::http::schemas::AckSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Item not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["card-details"],
    operation_id = "deleteChecklistItem"
)]
#[delete("/checklist-items/{id}")]
pub async fn delete_checklist_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<DetailPath>,
) -> ApiResult<web::Json<Ack>> {
    session.require_user_id()?;
    let item_id = parse_uuid(path.into_inner().id, "itemId")?;
    state.card_details.delete_checklist_item(item_id).await?;
    Ok(web::Json(Ack::acknowledged("checklist item deleted")))
}

/// Record an attachment descriptor uploaded by the session user.
#[utoipa::path(
    post,
    path = "/api/v1/tasks/attachments",
    request_body = CreateAttachmentRequest,
    responses(
        (status = 201, description = "Attachment recorded", body = Envelope<AttachmentResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Card not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["card-details"],
    operation_id = "addAttachment"
)]
#[post("/attachments")]
pub async fn add_attachment(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateAttachmentRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let payload = payload.into_inner();
    let draft = NewAttachment {
        card_id: parse_uuid(require_field(payload.card_id, "cardId")?, "cardId")?,
        file_name: require_field(payload.file_name, "fileName")?,
        original_name: require_field(payload.original_name, "originalName")?,
        mime_type: require_field(payload.mime_type, "mimeType")?,
        byte_size: require_field(payload.byte_size, "byteSize")?,
        url: require_field(payload.url, "url")?,
        uploaded_by: user_id,
    };
    let attachment = state.card_details.add_attachment(draft).await?;
    Ok(HttpResponse::Created().json(Envelope::ok(AttachmentResponse::from(attachment))))
}

/// Delete an attachment descriptor. The stored bytes are the storage
/// service's concern.
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/attachments/{id}",
    params(("id" = String, Path, description = "Attachment identifier")),
    responses(
        (status = 200, description = "Attachment deleted", body = crate::inbound::http::schemas::AckSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Attachment not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["card-details"],
    operation_id = "deleteAttachment"
)]
#[delete("/attachments/{id}")]
pub async fn delete_attachment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<DetailPath>,
) -> ApiResult<web::Json<Ack>> {
    session.require_user_id()?;
    let attachment_id = parse_uuid(path.into_inner().id, "attachmentId")?;
    state.card_details.delete_attachment(attachment_id).await?;
    Ok(web::Json(Ack::acknowledged("attachment deleted")))
}

#[cfg(test)]
#[path = "card_details_tests.rs"]
mod tests;
