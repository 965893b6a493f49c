//! Response DTOs shared by the task-board handlers.
//!
//! Wire casing is camelCase and timestamps are RFC 3339 strings. Domain
//! types convert into these via `From`, keeping serialisation concerns out
//! of the domain.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    Attachment, Board, BoardView, Card, CardView, Checklist, ChecklistItem, ChecklistView,
    Comment, Label, List, ListView,
};

/// Board fields as serialised on the wire.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    /// Board identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Owning company reference.
    pub company_id: String,
    /// Creating user.
    pub created_by: String,
    /// Soft-archive flag.
    pub is_archived: bool,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last modification timestamp (RFC 3339).
    pub updated_at: String,
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        Self {
            id: board.id.to_string(),
            name: board.name,
            description: board.description,
            company_id: board.company_id.to_string(),
            created_by: board.created_by.to_string(),
            is_archived: board.is_archived,
            created_at: board.created_at.to_rfc3339(),
            updated_at: board.updated_at.to_rfc3339(),
        }
    }
}

/// Label fields as serialised on the wire.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabelResponse {
    /// Label identifier.
    pub id: String,
    /// Owning board.
    pub board_id: String,
    /// Display name.
    pub name: String,
    /// Display colour token.
    pub color: String,
}

impl From<Label> for LabelResponse {
    fn from(label: Label) -> Self {
        Self {
            id: label.id.to_string(),
            board_id: label.board_id.to_string(),
            name: label.name,
            color: label.color,
        }
    }
}

/// List fields as serialised on the wire.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    /// List identifier.
    pub id: String,
    /// Owning board.
    pub board_id: String,
    /// Display name.
    pub name: String,
    /// Zero-based order among the board's lists.
    pub position: i32,
    /// Soft-archive flag.
    pub is_archived: bool,
}

impl From<List> for ListResponse {
    fn from(list: List) -> Self {
        Self {
            id: list.id.to_string(),
            board_id: list.board_id.to_string(),
            name: list.name,
            position: list.position,
            is_archived: list.is_archived,
        }
    }
}

/// Card fields as serialised on the wire.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    /// Card identifier.
    pub id: String,
    /// Owning list.
    pub list_id: String,
    /// Display title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date (RFC 3339).
    pub due_date: Option<String>,
    /// Zero-based order among the list's cards.
    pub position: i32,
    /// Soft-archive flag.
    pub is_archived: bool,
    /// Creating user.
    pub created_by: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last modification timestamp (RFC 3339).
    pub updated_at: String,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            id: card.id.to_string(),
            list_id: card.list_id.to_string(),
            title: card.title,
            description: card.description,
            due_date: card.due_date.map(|due| due.to_rfc3339()),
            position: card.position,
            is_archived: card.is_archived,
            created_by: card.created_by.to_string(),
            created_at: card.created_at.to_rfc3339(),
            updated_at: card.updated_at.to_rfc3339(),
        }
    }
}

/// Comment fields as serialised on the wire.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    /// Comment identifier.
    pub id: String,
    /// Owning card.
    pub card_id: String,
    /// Authoring user.
    pub author_id: String,
    /// Comment text.
    pub body: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            card_id: comment.card_id.to_string(),
            author_id: comment.author_id.to_string(),
            body: comment.body,
            created_at: comment.created_at.to_rfc3339(),
        }
    }
}

/// Checklist fields as serialised on the wire.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistResponse {
    /// Checklist identifier.
    pub id: String,
    /// Owning card.
    pub card_id: String,
    /// Display title.
    pub title: String,
    /// Zero-based order among the card's checklists.
    pub position: i32,
}

impl From<Checklist> for ChecklistResponse {
    fn from(checklist: Checklist) -> Self {
        Self {
            id: checklist.id.to_string(),
            card_id: checklist.card_id.to_string(),
            title: checklist.title,
            position: checklist.position,
        }
    }
}

/// Checklist item fields as serialised on the wire.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItemResponse {
    /// Item identifier.
    pub id: String,
    /// Owning checklist.
    pub checklist_id: String,
    /// Display title.
    pub title: String,
    /// Completion flag.
    pub is_done: bool,
    /// Zero-based order among the checklist's items.
    pub position: i32,
}

impl From<ChecklistItem> for ChecklistItemResponse {
    fn from(item: ChecklistItem) -> Self {
        Self {
            id: item.id.to_string(),
            checklist_id: item.checklist_id.to_string(),
            title: item.title,
            is_done: item.is_done,
            position: item.position,
        }
    }
}

/// Attachment fields as serialised on the wire.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentResponse {
    /// Attachment identifier.
    pub id: String,
    /// Owning card.
    pub card_id: String,
    /// Storage-assigned file name.
    pub file_name: String,
    /// File name as uploaded.
    pub original_name: String,
    /// MIME type reported at upload time.
    pub mime_type: String,
    /// Size in bytes.
    pub byte_size: i64,
    /// Storage URL for download.
    pub url: String,
    /// Uploading user.
    pub uploaded_by: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl From<Attachment> for AttachmentResponse {
    fn from(attachment: Attachment) -> Self {
        Self {
            id: attachment.id.to_string(),
            card_id: attachment.card_id.to_string(),
            file_name: attachment.file_name,
            original_name: attachment.original_name,
            mime_type: attachment.mime_type,
            byte_size: attachment.byte_size,
            url: attachment.url,
            uploaded_by: attachment.uploaded_by.to_string(),
            created_at: attachment.created_at.to_rfc3339(),
        }
    }
}

/// Checklist with its ordered items.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistViewResponse {
    /// The checklist itself.
    #[serde(flatten)]
    pub checklist: ChecklistResponse,
    /// Items ordered ascending by position.
    pub items: Vec<ChecklistItemResponse>,
}

impl From<ChecklistView> for ChecklistViewResponse {
    fn from(view: ChecklistView) -> Self {
        Self {
            checklist: view.checklist.into(),
            items: view.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Card with all nested relations, as rendered on the board.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardViewResponse {
    /// The card itself.
    #[serde(flatten)]
    pub card: CardResponse,
    /// Labels linked to the card.
    pub labels: Vec<LabelResponse>,
    /// Ids of users assigned to the card.
    pub assignees: Vec<String>,
    /// Comments, oldest first.
    pub comments: Vec<CommentResponse>,
    /// Checklists ordered ascending by position.
    pub checklists: Vec<ChecklistViewResponse>,
    /// Attachment descriptors.
    pub attachments: Vec<AttachmentResponse>,
}

impl From<CardView> for CardViewResponse {
    fn from(view: CardView) -> Self {
        Self {
            card: view.card.into(),
            labels: view.labels.into_iter().map(Into::into).collect(),
            assignees: view
                .assignees
                .into_iter()
                .map(|user| user.to_string())
                .collect(),
            comments: view.comments.into_iter().map(Into::into).collect(),
            checklists: view.checklists.into_iter().map(Into::into).collect(),
            attachments: view.attachments.into_iter().map(Into::into).collect(),
        }
    }
}

/// List with its ordered cards.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListViewResponse {
    /// The list itself.
    #[serde(flatten)]
    pub list: ListResponse,
    /// Cards ordered ascending by position.
    pub cards: Vec<CardViewResponse>,
}

impl From<ListView> for ListViewResponse {
    fn from(view: ListView) -> Self {
        Self {
            list: view.list.into(),
            cards: view.cards.into_iter().map(Into::into).collect(),
        }
    }
}

/// The full board graph served by the composition endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardViewResponse {
    /// The board itself.
    #[serde(flatten)]
    pub board: BoardResponse,
    /// Labels defined on the board.
    pub labels: Vec<LabelResponse>,
    /// Lists ordered ascending by position.
    pub lists: Vec<ListViewResponse>,
}

impl From<BoardView> for BoardViewResponse {
    fn from(view: BoardView) -> Self {
        Self {
            board: view.board.into(),
            labels: view.labels.into_iter().map(Into::into).collect(),
            lists: view.lists.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::Value;
    use uuid::Uuid;

    use super::*;
    use crate::domain::UserId;

    #[test]
    fn card_response_uses_camel_case_keys() {
        let now = Utc::now();
        let card = Card {
            id: Uuid::new_v4(),
            list_id: Uuid::new_v4(),
            title: "Ship newsletter".to_owned(),
            description: None,
            due_date: Some(now),
            position: 1,
            is_archived: false,
            created_by: UserId::random(),
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(CardResponse::from(card)).expect("serialise");
        assert!(value.get("listId").is_some());
        assert!(value.get("dueDate").is_some());
        assert!(value.get("list_id").is_none());
    }

    #[test]
    fn list_view_flattens_list_fields() {
        let list = List {
            id: Uuid::new_v4(),
            board_id: Uuid::new_v4(),
            name: "Doing".to_owned(),
            position: 0,
            is_archived: false,
        };
        let view = ListViewResponse {
            list: list.into(),
            cards: Vec::new(),
        };
        let value = serde_json::to_value(view).expect("serialise");
        assert_eq!(value.get("name"), Some(&Value::String("Doing".to_owned())));
        assert!(value.get("cards").is_some());
        assert!(value.get("list").is_none());
    }
}
