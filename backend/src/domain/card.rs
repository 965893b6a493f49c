//! Cards and their owned relations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// A single task within a list.
///
/// A card belongs to exactly one list at any time; the move protocol
/// rewrites `list_id` and `position` in a single-row update and never
/// duplicates the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Stable identifier.
    pub id: Uuid,
    /// Owning list.
    pub list_id: Uuid,
    /// Display title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Zero-based order among sibling cards.
    pub position: i32,
    /// Soft-archive flag.
    pub is_archived: bool,
    /// User who created the card.
    pub created_by: UserId,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Discussion entry on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Stable identifier.
    pub id: Uuid,
    /// Owning card.
    pub card_id: Uuid,
    /// Authoring user.
    pub author_id: UserId,
    /// Comment text.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Named group of checklist items on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    /// Stable identifier.
    pub id: Uuid,
    /// Owning card.
    pub card_id: Uuid,
    /// Display title.
    pub title: String,
    /// Zero-based order among the card's checklists.
    pub position: i32,
}

/// Single tickable entry of a checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Stable identifier.
    pub id: Uuid,
    /// Owning checklist.
    pub checklist_id: Uuid,
    /// Display title.
    pub title: String,
    /// Completion flag.
    pub is_done: bool,
    /// Zero-based order among the checklist's items.
    pub position: i32,
}

/// File metadata attached to a card. The bytes live in external storage;
/// only the descriptor row is owned by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Stable identifier.
    pub id: Uuid,
    /// Owning card.
    pub card_id: Uuid,
    /// Storage-assigned file name.
    pub file_name: String,
    /// File name as uploaded by the user.
    pub original_name: String,
    /// MIME type reported at upload time.
    pub mime_type: String,
    /// Size in bytes.
    pub byte_size: i64,
    /// Storage URL for download.
    pub url: String,
    /// Uploading user.
    pub uploaded_by: UserId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a card; `position` is computed by the
/// service as the current sibling count.
#[derive(Debug, Clone)]
pub struct NewCard {
    /// Owning list.
    pub list_id: Uuid,
    /// Display title; must be non-blank.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Labels to link at creation time.
    pub label_ids: Vec<Uuid>,
    /// Users to assign at creation time.
    pub assignee_ids: Vec<UserId>,
    /// Creating user.
    pub created_by: UserId,
}

/// Fields accepted when recording an attachment descriptor. The upload
/// itself happens against external storage before this record is written.
#[derive(Debug, Clone)]
pub struct NewAttachment {
    /// Owning card.
    pub card_id: Uuid,
    /// Storage-assigned file name.
    pub file_name: String,
    /// File name as uploaded by the user.
    pub original_name: String,
    /// MIME type reported at upload time.
    pub mime_type: String,
    /// Size in bytes.
    pub byte_size: i64,
    /// Storage URL for download.
    pub url: String,
    /// Uploading user.
    pub uploaded_by: UserId,
}

/// Partial update applied to an existing card.
///
/// `None` fields are left unchanged; double `Option`s clear the value when
/// the inner option is `None`.
#[derive(Debug, Clone, Default)]
pub struct CardPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description (`Some(None)` clears it).
    pub description: Option<Option<String>>,
    /// Replacement due date (`Some(None)` clears it).
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Replacement archive flag.
    pub is_archived: Option<bool>,
}

impl CardPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.is_archived.is_none()
    }
}

/// Partial update applied to a checklist item.
#[derive(Debug, Clone, Default)]
pub struct ChecklistItemPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement completion flag.
    pub is_done: Option<bool>,
}

impl ChecklistItemPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.is_done.is_none()
    }
}
