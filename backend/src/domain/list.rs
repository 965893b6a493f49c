//! Lists: ordered columns within a board.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ordered column within a board, containing cards.
///
/// `position` defines left-to-right order among the board's lists. It is a
/// soft invariant maintained by append-at-end computation on creation, not a
/// database constraint; readers must sort rather than assume density.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Stable identifier.
    pub id: Uuid,
    /// Owning board.
    pub board_id: Uuid,
    /// Display name.
    pub name: String,
    /// Zero-based order among sibling lists.
    pub position: i32,
    /// Soft-archive flag.
    pub is_archived: bool,
}

/// Fields accepted when creating a list; `position` is computed by the
/// service as the current sibling count.
#[derive(Debug, Clone)]
pub struct NewList {
    /// Owning board.
    pub board_id: Uuid,
    /// Display name; must be non-blank.
    pub name: String,
}
