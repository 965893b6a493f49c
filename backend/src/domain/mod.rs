//! Domain entities, aggregates, services, and ports.
//!
//! Types here are transport agnostic: the HTTP adapter maps them onto the
//! wire envelope, and the persistence adapter maps them onto rows. Services
//! implement the driving ports against the repository ports, which is where
//! the board invariants live: append-at-end position computation, move
//! validation, and composition ordering.

pub mod board;
pub mod board_service;
pub mod board_view;
pub mod card;
pub mod card_detail_service;
pub mod card_service;
pub mod error;
pub mod list;
pub mod list_service;
pub mod ports;
pub mod user;
pub mod validate;

pub use self::board::{Board, BoardPatch, Label, NewBoard, NewLabel};
pub use self::board_service::{BoardCommandService, BoardQueryService};
pub use self::board_view::{BoardView, CardView, ChecklistView, ListView};
pub use self::card::{
    Attachment, Card, CardPatch, Checklist, ChecklistItem, ChecklistItemPatch, Comment,
    NewAttachment, NewCard,
};
pub use self::card_detail_service::CardDetailCommandService;
pub use self::card_service::CardCommandService;
pub use self::error::{Error, ErrorCode};
pub use self::list::{List, NewList};
pub use self::list_service::ListCommandService;
pub use self::user::{UserId, UserIdValidationError};

/// Convenient result alias for code returning domain errors.
pub type ApiResult<T> = Result<T, Error>;
