//! List HTTP handlers.
//!
//! ```text
//! POST   /api/v1/tasks/lists
//! PUT    /api/v1/tasks/lists/{id}
//! DELETE /api/v1/tasks/lists/{id}
//! ```

use actix_web::{HttpResponse, delete, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::NewList;
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::ListResponse;
use crate::inbound::http::envelope::{Ack, Envelope};
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_uuid, require_field};

#[derive(Debug, Deserialize)]
struct ListPath {
    id: String,
}

/// Request payload for creating a list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    /// Display name.
    pub name: Option<String>,
    /// Owning board.
    pub board_id: Option<String>,
}

/// Request payload for renaming a list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RenameListRequest {
    /// Replacement name.
    pub name: Option<String>,
}

/// Create a list appended at the end of its board.
#[utoipa::path(
    post,
    path = "/api/v1/tasks/lists",
    request_body = CreateListRequest,
    responses(
        (status = 201, description = "List created", body = Envelope<ListResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Board not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["lists"],
    operation_id = "createList"
)]
#[post("/lists")]
pub async fn create_list(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateListRequest>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let payload = payload.into_inner();
    let draft = NewList {
        board_id: parse_uuid(require_field(payload.board_id, "boardId")?, "boardId")?,
        name: require_field(payload.name, "name")?,
    };
    let list = state.lists.create_list(draft).await?;
    Ok(HttpResponse::Created().json(Envelope::ok(ListResponse::from(list))))
}

/// Rename a list.
#[utoipa::path(
    put,
    path = "/api/v1/tasks/lists/{id}",
    params(("id" = String, Path, description = "List identifier")),
    request_body = RenameListRequest,
    responses(
        (status = 200, description = "List renamed", body = Envelope<ListResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "List not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["lists"],
    operation_id = "renameList"
)]
#[put("/lists/{id}")]
pub async fn rename_list(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<ListPath>,
    payload: web::Json<RenameListRequest>,
) -> ApiResult<web::Json<Envelope<ListResponse>>> {
    session.require_user_id()?;
    let list_id = parse_uuid(path.into_inner().id, "listId")?;
    let name = require_field(payload.into_inner().name, "name")?;
    let list = state.lists.rename_list(list_id, name).await?;
    Ok(web::Json(Envelope::ok(list.into())))
}

/// Delete a list and, via the schema cascade, its cards.
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/lists/{id}",
    params(("id" = String, Path, description = "List identifier")),
    responses(
        (status = 200, description = "List deleted", body = crate::inbound::http::schemas::AckSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "List not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["lists"],
    operation_id = "deleteList"
)]
#[delete("/lists/{id}")]
pub async fn delete_list(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<ListPath>,
) -> ApiResult<web::Json<Ack>> {
    session.require_user_id()?;
    let list_id = parse_uuid(path.into_inner().id, "listId")?;
    state.lists.delete_list(list_id).await?;
    Ok(web::Json(Ack::acknowledged("list deleted")))
}

#[cfg(test)]
#[path = "lists_tests.rs"]
mod tests;
