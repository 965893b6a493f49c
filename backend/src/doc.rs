//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API:
//! session endpoints, the task-board surface, and health probes. Swagger UI
//! serves it at `/docs` in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::dto::{
    AttachmentResponse, BoardResponse, BoardViewResponse, CardResponse, CardViewResponse,
    ChecklistItemResponse, ChecklistResponse, ChecklistViewResponse, CommentResponse,
    LabelResponse, ListResponse, ListViewResponse,
};
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::{AckSchema, ErrorEnvelopeSchema};
use crate::inbound::http::users::SessionUserResponse;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Taskdeck backend API",
        description = "HTTP interface for the agency task boards: boards, lists, cards, and their relations."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::current_user,
        crate::inbound::http::boards::list_boards,
        crate::inbound::http::boards::get_board,
        crate::inbound::http::boards::create_board,
        crate::inbound::http::boards::update_board,
        crate::inbound::http::boards::delete_board,
        crate::inbound::http::boards::create_label,
        crate::inbound::http::boards::delete_label,
        crate::inbound::http::lists::create_list,
        crate::inbound::http::lists::rename_list,
        crate::inbound::http::lists::delete_list,
        crate::inbound::http::cards::create_card,
        crate::inbound::http::cards::move_card,
        crate::inbound::http::cards::update_card,
        crate::inbound::http::cards::delete_card,
        crate::inbound::http::cards::link_card_label,
        crate::inbound::http::cards::unlink_card_label,
        crate::inbound::http::cards::assign_user,
        crate::inbound::http::cards::unassign_user,
        crate::inbound::http::card_details::add_comment,
        crate::inbound::http::card_details::delete_comment,
        crate::inbound::http::card_details::add_checklist,
        crate::inbound::http::card_details::delete_checklist,
        crate::inbound::http::card_details::add_checklist_item,
        crate::inbound::http::card_details::update_checklist_item,
        crate::inbound::http::card_details::delete_checklist_item,
        crate::inbound::http::card_details::add_attachment,
        crate::inbound::http::card_details::delete_attachment,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        ErrorEnvelopeSchema,
        AckSchema,
        SessionUserResponse,
        Envelope<SessionUserResponse>,
        Envelope<Vec<BoardResponse>>,
        Envelope<BoardResponse>,
        Envelope<BoardViewResponse>,
        Envelope<LabelResponse>,
        Envelope<ListResponse>,
        Envelope<CardResponse>,
        Envelope<CommentResponse>,
        Envelope<ChecklistResponse>,
        Envelope<ChecklistItemResponse>,
        Envelope<AttachmentResponse>,
        BoardResponse,
        BoardViewResponse,
        LabelResponse,
        ListResponse,
        ListViewResponse,
        CardResponse,
        CardViewResponse,
        CommentResponse,
        ChecklistResponse,
        ChecklistViewResponse,
        ChecklistItemResponse,
        AttachmentResponse,
    )),
    tags(
        (name = "session", description = "Login and identity"),
        (name = "boards", description = "Boards and labels"),
        (name = "lists", description = "Lists within a board"),
        (name = "cards", description = "Cards, moves, links, and assignments"),
        (name = "card-details", description = "Comments, checklists, and attachments"),
        (name = "health", description = "Probes for orchestration")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::*;

    #[test]
    fn document_includes_the_move_endpoint() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/tasks/cards/move"));
        assert!(doc.paths.paths.contains_key("/api/v1/tasks/boards/{id}"));
    }

    #[test]
    fn document_registers_board_schemas() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");
        assert!(components.schemas.contains_key("BoardViewResponse"));
        assert!(components.schemas.contains_key("CardResponse"));
    }
}
