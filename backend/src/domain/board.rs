//! Board aggregate root and labels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// Top-level container for a Kanban-style task workspace.
///
/// A board owns an ordered collection of lists and an unordered collection
/// of labels. Ordering of lists is carried by each list's `position`, not by
/// the board itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Stable identifier, assigned at creation.
    pub id: Uuid,
    /// Display name shown in the dashboard.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Owning company reference; companies are managed elsewhere.
    pub company_id: Uuid,
    /// User who created the board.
    pub created_by: UserId,
    /// Soft-archive flag; archived boards are hidden from listings.
    pub is_archived: bool,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Tag attachable to cards of a single board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Stable identifier.
    pub id: Uuid,
    /// Owning board.
    pub board_id: Uuid,
    /// Display name.
    pub name: String,
    /// Display colour, stored as an opaque token (e.g. `#ff5733`).
    pub color: String,
}

/// Fields accepted when creating a board.
#[derive(Debug, Clone)]
pub struct NewBoard {
    /// Display name; must be non-blank.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Owning company reference.
    pub company_id: Uuid,
    /// Creating user.
    pub created_by: UserId,
}

/// Partial update applied to an existing board.
///
/// `None` fields are left unchanged; `description` uses a double `Option`
/// so a patch can clear the value explicitly.
#[derive(Debug, Clone, Default)]
pub struct BoardPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description (`Some(None)` clears it).
    pub description: Option<Option<String>>,
    /// Replacement archive flag.
    pub is_archived: Option<bool>,
}

impl BoardPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.is_archived.is_none()
    }
}

/// Fields accepted when creating a label.
#[derive(Debug, Clone)]
pub struct NewLabel {
    /// Owning board.
    pub board_id: Uuid,
    /// Display name; must be non-blank.
    pub name: String,
    /// Display colour token.
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_reports_empty() {
        assert!(BoardPatch::default().is_empty());
    }

    #[test]
    fn patch_with_cleared_description_is_not_empty() {
        let patch = BoardPatch {
            description: Some(None),
            ..BoardPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
