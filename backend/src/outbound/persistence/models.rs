//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer; never exposed to the
//! domain. Repositories convert between these rows and domain types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{
    attachments, boards, card_assignments, card_labels, cards, checklist_items, checklists,
    comments, labels, lists,
};

// ---------------------------------------------------------------------------
// Boards and labels
// ---------------------------------------------------------------------------

/// Row struct for reading from the boards table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = boards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BoardRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub company_id: Uuid,
    pub created_by: Uuid,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating board records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = boards)]
pub(crate) struct NewBoardRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub company_id: Uuid,
    pub created_by: Uuid,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changeset overwriting a board's mutable fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = boards)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct BoardUpdate<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub is_archived: bool,
    pub updated_at: DateTime<Utc>,
}

/// Row struct for reading from the labels table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = labels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LabelRow {
    pub id: Uuid,
    pub board_id: Uuid,
    pub name: String,
    pub color: String,
}

/// Insertable struct for creating label records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = labels)]
pub(crate) struct NewLabelRow<'a> {
    pub id: Uuid,
    pub board_id: Uuid,
    pub name: &'a str,
    pub color: &'a str,
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

/// Row struct for reading from the lists table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ListRow {
    pub id: Uuid,
    pub board_id: Uuid,
    pub name: String,
    pub position: i32,
    pub is_archived: bool,
}

/// Insertable struct for creating list records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = lists)]
pub(crate) struct NewListRow<'a> {
    pub id: Uuid,
    pub board_id: Uuid,
    pub name: &'a str,
    pub position: i32,
    pub is_archived: bool,
}

/// Changeset overwriting a list's mutable fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = lists)]
pub(crate) struct ListUpdate<'a> {
    pub name: &'a str,
    pub position: i32,
    pub is_archived: bool,
}

// ---------------------------------------------------------------------------
// Cards and join rows
// ---------------------------------------------------------------------------

/// Row struct for reading from the cards table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CardRow {
    pub id: Uuid,
    pub list_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub position: i32,
    pub is_archived: bool,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating card records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cards)]
pub(crate) struct NewCardRow<'a> {
    pub id: Uuid,
    pub list_id: Uuid,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub due_date: Option<DateTime<Utc>>,
    pub position: i32,
    pub is_archived: bool,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changeset overwriting a card's mutable fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = cards)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct CardUpdate<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_archived: bool,
    pub updated_at: DateTime<Utc>,
}

/// Changeset for the move protocol: list membership and position only.
#[derive(Debug, Clone, Copy, AsChangeset)]
#[diesel(table_name = cards)]
pub(crate) struct CardRelocation {
    pub list_id: Uuid,
    pub position: i32,
    pub updated_at: DateTime<Utc>,
}

/// Insertable card-label join row.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = card_labels)]
pub(crate) struct CardLabelRow {
    pub card_id: Uuid,
    pub label_id: Uuid,
}

/// Insertable card-assignment join row.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = card_assignments)]
pub(crate) struct CardAssignmentRow {
    pub card_id: Uuid,
    pub user_id: Uuid,
}

// ---------------------------------------------------------------------------
// Card dependents
// ---------------------------------------------------------------------------

/// Row struct for reading from the comments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: Uuid,
    pub card_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating comment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub id: Uuid,
    pub card_id: Uuid,
    pub author_id: Uuid,
    pub body: &'a str,
    pub created_at: DateTime<Utc>,
}

/// Row struct for reading from the checklists table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = checklists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ChecklistRow {
    pub id: Uuid,
    pub card_id: Uuid,
    pub title: String,
    pub position: i32,
}

/// Insertable struct for creating checklist records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = checklists)]
pub(crate) struct NewChecklistRow<'a> {
    pub id: Uuid,
    pub card_id: Uuid,
    pub title: &'a str,
    pub position: i32,
}

/// Row struct for reading from the checklist items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = checklist_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ChecklistItemRow {
    pub id: Uuid,
    pub checklist_id: Uuid,
    pub title: String,
    pub is_done: bool,
    pub position: i32,
}

/// Insertable struct for creating checklist item records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = checklist_items)]
pub(crate) struct NewChecklistItemRow<'a> {
    pub id: Uuid,
    pub checklist_id: Uuid,
    pub title: &'a str,
    pub is_done: bool,
    pub position: i32,
}

/// Changeset overwriting a checklist item's mutable fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = checklist_items)]
pub(crate) struct ChecklistItemUpdate<'a> {
    pub title: &'a str,
    pub is_done: bool,
}

/// Row struct for reading from the attachments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = attachments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AttachmentRow {
    pub id: Uuid,
    pub card_id: Uuid,
    pub file_name: String,
    pub original_name: String,
    pub mime_type: String,
    pub byte_size: i64,
    pub url: String,
    pub uploaded_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating attachment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = attachments)]
pub(crate) struct NewAttachmentRow<'a> {
    pub id: Uuid,
    pub card_id: Uuid,
    pub file_name: &'a str,
    pub original_name: &'a str,
    pub mime_type: &'a str,
    pub byte_size: i64,
    pub url: &'a str,
    pub uploaded_by: Uuid,
    pub created_at: DateTime<Utc>,
}
