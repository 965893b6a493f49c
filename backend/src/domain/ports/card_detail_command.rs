//! Driving port for comments, checklists, and attachments.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    Attachment, Checklist, ChecklistItem, ChecklistItemPatch, Comment, Error, NewAttachment,
    UserId,
};

/// Write-side use cases for the rows owned by a card.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardDetailCommand: Send + Sync {
    /// Add a comment authored by the session user.
    async fn add_comment(
        &self,
        card_id: Uuid,
        author_id: UserId,
        body: String,
    ) -> Result<Comment, Error>;

    /// Delete a comment.
    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), Error>;

    /// Add a checklist appended at the end of the card's checklists.
    async fn add_checklist(&self, card_id: Uuid, title: String) -> Result<Checklist, Error>;

    /// Delete a checklist; items fall to the schema cascade.
    async fn delete_checklist(&self, checklist_id: Uuid) -> Result<(), Error>;

    /// Add an item appended at the end of its checklist.
    async fn add_checklist_item(
        &self,
        checklist_id: Uuid,
        title: String,
    ) -> Result<ChecklistItem, Error>;

    /// Apply a partial update to a checklist item.
    async fn patch_checklist_item(
        &self,
        item_id: Uuid,
        patch: ChecklistItemPatch,
    ) -> Result<ChecklistItem, Error>;

    /// Delete a checklist item.
    async fn delete_checklist_item(&self, item_id: Uuid) -> Result<(), Error>;

    /// Record an attachment descriptor uploaded by the session user.
    async fn add_attachment(&self, draft: NewAttachment) -> Result<Attachment, Error>;

    /// Delete an attachment descriptor.
    async fn delete_attachment(&self, attachment_id: Uuid) -> Result<(), Error>;
}

/// Fixture implementation echoing drafts back as persisted entities.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCardDetailCommand;

#[async_trait]
impl CardDetailCommand for FixtureCardDetailCommand {
    async fn add_comment(
        &self,
        card_id: Uuid,
        author_id: UserId,
        body: String,
    ) -> Result<Comment, Error> {
        Ok(Comment {
            id: Uuid::new_v4(),
            card_id,
            author_id,
            body,
            created_at: Utc::now(),
        })
    }

    async fn delete_comment(&self, _comment_id: Uuid) -> Result<(), Error> {
        Ok(())
    }

    async fn add_checklist(&self, card_id: Uuid, title: String) -> Result<Checklist, Error> {
        Ok(Checklist {
            id: Uuid::new_v4(),
            card_id,
            title,
            position: 0,
        })
    }

    async fn delete_checklist(&self, _checklist_id: Uuid) -> Result<(), Error> {
        Ok(())
    }

    async fn add_checklist_item(
        &self,
        checklist_id: Uuid,
        title: String,
    ) -> Result<ChecklistItem, Error> {
        Ok(ChecklistItem {
            id: Uuid::new_v4(),
            checklist_id,
            title,
            is_done: false,
            position: 0,
        })
    }

    async fn patch_checklist_item(
        &self,
        item_id: Uuid,
        _patch: ChecklistItemPatch,
    ) -> Result<ChecklistItem, Error> {
        Err(Error::not_found(format!(
            "checklist item {item_id} not found"
        )))
    }

    async fn delete_checklist_item(&self, _item_id: Uuid) -> Result<(), Error> {
        Ok(())
    }

    async fn add_attachment(&self, draft: NewAttachment) -> Result<Attachment, Error> {
        Ok(Attachment {
            id: Uuid::new_v4(),
            card_id: draft.card_id,
            file_name: draft.file_name,
            original_name: draft.original_name,
            mime_type: draft.mime_type,
            byte_size: draft.byte_size,
            url: draft.url,
            uploaded_by: draft.uploaded_by,
            created_at: Utc::now(),
        })
    }

    async fn delete_attachment(&self, _attachment_id: Uuid) -> Result<(), Error> {
        Ok(())
    }
}
