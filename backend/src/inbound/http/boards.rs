//! Board and label HTTP handlers.
//!
//! ```text
//! GET    /api/v1/tasks/boards
//! POST   /api/v1/tasks/boards
//! GET    /api/v1/tasks/boards/{id}
//! PUT    /api/v1/tasks/boards/{id}
//! DELETE /api/v1/tasks/boards/{id}
//! POST   /api/v1/tasks/labels
//! DELETE /api/v1/tasks/labels/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{BoardPatch, Error, NewBoard, NewLabel};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{BoardResponse, BoardViewResponse, LabelResponse};
use crate::inbound::http::envelope::{Ack, Envelope};
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{double_option, parse_uuid, require_field};

#[derive(Debug, Deserialize)]
struct BoardPath {
    id: String,
}

/// Request payload for creating a board.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    /// Display name.
    pub name: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Owning company reference.
    pub company_id: Option<String>,
}

/// Request payload for patching a board.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardRequest {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description; explicit `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    /// Replacement archive flag.
    pub is_archived: Option<bool>,
}

/// Request payload for creating a label.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLabelRequest {
    /// Owning board.
    pub board_id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Display colour token.
    pub color: Option<String>,
}

fn parse_board_id(path: BoardPath) -> Result<Uuid, Error> {
    parse_uuid(path.id, "boardId")
}

/// List non-archived boards, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/tasks/boards",
    responses(
        (status = 200, description = "Boards", body = Envelope<Vec<BoardResponse>>),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema)
    ),
    tags = ["boards"],
    operation_id = "listBoards"
)]
#[get("/boards")]
pub async fn list_boards(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Envelope<Vec<BoardResponse>>>> {
    session.require_user_id()?;
    let boards = state.board_query.list_boards().await?;
    Ok(web::Json(Envelope::ok(
        boards.into_iter().map(Into::into).collect(),
    )))
}

/// Fetch one board with its full composed graph.
#[utoipa::path(
    get,
    path = "/api/v1/tasks/boards/{id}",
    params(("id" = String, Path, description = "Board identifier")),
    responses(
        (status = 200, description = "Composed board", body = Envelope<BoardViewResponse>),
        (status = 400, description = "Invalid identifier", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Board not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["boards"],
    operation_id = "getBoard"
)]
#[get("/boards/{id}")]
pub async fn get_board(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<BoardPath>,
) -> ApiResult<web::Json<Envelope<BoardViewResponse>>> {
    session.require_user_id()?;
    let board_id = parse_board_id(path.into_inner())?;
    let view = state.board_query.compose_board(board_id).await?;
    Ok(web::Json(Envelope::ok(view.into())))
}

/// Create a board.
#[utoipa::path(
    post,
    path = "/api/v1/tasks/boards",
    request_body = CreateBoardRequest,
    responses(
        (status = 201, description = "Board created", body = Envelope<BoardResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema)
    ),
    tags = ["boards"],
    operation_id = "createBoard"
)]
#[post("/boards")]
pub async fn create_board(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateBoardRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let payload = payload.into_inner();
    let draft = NewBoard {
        name: require_field(payload.name, "name")?,
        description: payload.description,
        company_id: parse_uuid(require_field(payload.company_id, "companyId")?, "companyId")?,
        created_by: user_id,
    };
    let board = state.boards.create_board(draft).await?;
    Ok(HttpResponse::Created()
        .json(Envelope::ok(BoardResponse::from(board))))
}

/// Patch a board's fields.
#[utoipa::path(
    put,
    path = "/api/v1/tasks/boards/{id}",
    params(("id" = String, Path, description = "Board identifier")),
    request_body = UpdateBoardRequest,
    responses(
        (status = 200, description = "Board updated", body = Envelope<BoardResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Board not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["boards"],
    operation_id = "updateBoard"
)]
#[put("/boards/{id}")]
pub async fn update_board(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<BoardPath>,
    payload: web::Json<UpdateBoardRequest>,
) -> ApiResult<web::Json<Envelope<BoardResponse>>> {
    session.require_user_id()?;
    let board_id = parse_board_id(path.into_inner())?;
    let payload = payload.into_inner();
    let patch = BoardPatch {
        name: payload.name,
        description: payload.description,
        is_archived: payload.is_archived,
    };
    let board = state.boards.update_board(board_id, patch).await?;
    Ok(web::Json(Envelope::ok(board.into())))
}

/// Delete a board and, via the schema cascade, everything it owns.
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/boards/{id}",
    params(("id" = String, Path, description = "Board identifier")),
    responses(
        (status = 200, description = "Board deleted", body = crate::inbound::http::schemas::AckSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Board not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["boards"],
    operation_id = "deleteBoard"
)]
#[delete("/boards/{id}")]
pub async fn delete_board(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<BoardPath>,
) -> ApiResult<web::Json<Ack>> {
    session.require_user_id()?;
    let board_id = parse_board_id(path.into_inner())?;
    state.boards.delete_board(board_id).await?;
    Ok(web::Json(Ack::acknowledged("board deleted")))
}

/// Create a label on a board.
#[utoipa::path(
    post,
    path = "/api/v1/tasks/labels",
    request_body = CreateLabelRequest,
    responses(
        (status = 201, description = "Label created", body = Envelope<LabelResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Board not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["boards"],
    operation_id = "createLabel"
)]
#[post("/labels")]
pub async fn create_label(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateLabelRequest>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let payload = payload.into_inner();
    let draft = NewLabel {
        board_id: parse_uuid(require_field(payload.board_id, "boardId")?, "boardId")?,
        name: require_field(payload.name, "name")?,
        color: require_field(payload.color, "color")?,
    };
    let label = state.boards.create_label(draft).await?;
    Ok(HttpResponse::Created()
        .json(Envelope::ok(LabelResponse::from(label))))
}

/// Delete a label; links to cards disappear with it.
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/labels/{id}",
    params(("id" = String, Path, description = "Label identifier")),
    responses(
        (status = 200, description = "Label deleted", body = crate::inbound::http::schemas::AckSchema),
        (status = 401, description = "Unauthorised", body = ErrorEnvelopeSchema),
        (status = 404, description = "Label not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["boards"],
    operation_id = "deleteLabel"
)]
#[delete("/labels/{id}")]
pub async fn delete_label(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<BoardPath>,
) -> ApiResult<web::Json<Ack>> {
    session.require_user_id()?;
    let label_id = parse_uuid(path.into_inner().id, "labelId")?;
    state.boards.delete_label(label_id).await?;
    Ok(web::Json(Ack::acknowledged("label deleted")))
}

#[cfg(test)]
#[path = "boards_tests.rs"]
mod tests;
