//! HTTP inbound adapter exposing the REST endpoints.

pub mod boards;
pub mod card_details;
pub mod cards;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod health;
pub mod lists;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the session and task-board endpoints under `/api/v1`.
///
/// The caller wraps the scope with session middleware and provides
/// [`state::HttpState`] via `app_data`. `/tasks/cards/move` is registered
/// before `/tasks/cards/{id}` so the literal segment wins route matching.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(users::login).service(users::current_user).service(
        web::scope("/tasks")
            .service(boards::list_boards)
            .service(boards::create_board)
            .service(boards::get_board)
            .service(boards::update_board)
            .service(boards::delete_board)
            .service(boards::create_label)
            .service(boards::delete_label)
            .service(lists::create_list)
            .service(lists::rename_list)
            .service(lists::delete_list)
            .service(cards::create_card)
            .service(cards::move_card)
            .service(cards::update_card)
            .service(cards::delete_card)
            .service(cards::link_card_label)
            .service(cards::unlink_card_label)
            .service(cards::assign_user)
            .service(cards::unassign_user)
            .service(card_details::add_comment)
            .service(card_details::delete_comment)
            .service(card_details::add_checklist)
            .service(card_details::delete_checklist)
            .service(card_details::add_checklist_item)
            .service(card_details::update_checklist_item)
            .service(card_details::delete_checklist_item)
            .service(card_details::add_attachment)
            .service(card_details::delete_attachment),
    );
}
