//! Domain service for comments, checklists, and attachments.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::ports::{CardDetailCommand, CardDetailRepository, CardRepository};
use crate::domain::validate::{append_position, require_non_blank};
use crate::domain::{
    Attachment, Checklist, ChecklistItem, ChecklistItemPatch, Comment, Error, NewAttachment,
    UserId,
};

/// Write-side service for the rows owned by a card.
#[derive(Clone)]
pub struct CardDetailCommandService<C, D> {
    cards: Arc<C>,
    details: Arc<D>,
}

impl<C, D> CardDetailCommandService<C, D> {
    /// Create the service over the card and detail repositories.
    pub fn new(cards: Arc<C>, details: Arc<D>) -> Self {
        Self { cards, details }
    }
}

impl<C, D> CardDetailCommandService<C, D>
where
    C: CardRepository,
    D: CardDetailRepository,
{
    async fn require_card(&self, card_id: Uuid) -> Result<(), Error> {
        self.cards
            .find_by_id(card_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("card {card_id} not found")))
    }
}

#[async_trait]
impl<C, D> CardDetailCommand for CardDetailCommandService<C, D>
where
    C: CardRepository,
    D: CardDetailRepository,
{
    async fn add_comment(
        &self,
        card_id: Uuid,
        author_id: UserId,
        body: String,
    ) -> Result<Comment, Error> {
        let body = require_non_blank("body", body)?;
        self.require_card(card_id).await?;

        let comment = Comment {
            id: Uuid::new_v4(),
            card_id,
            author_id,
            body,
            created_at: Utc::now(),
        };
        self.details.save_comment(&comment).await?;
        Ok(comment)
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), Error> {
        if !self.details.delete_comment(comment_id).await? {
            return Err(Error::not_found(format!("comment {comment_id} not found")));
        }
        Ok(())
    }

    async fn add_checklist(&self, card_id: Uuid, title: String) -> Result<Checklist, Error> {
        let title = require_non_blank("title", title)?;
        self.require_card(card_id).await?;

        let count = self.details.count_checklists_for_card(card_id).await?;
        let checklist = Checklist {
            id: Uuid::new_v4(),
            card_id,
            title,
            position: append_position(count)?,
        };
        self.details.save_checklist(&checklist).await?;
        Ok(checklist)
    }

    async fn delete_checklist(&self, checklist_id: Uuid) -> Result<(), Error> {
        if !self.details.delete_checklist(checklist_id).await? {
            return Err(Error::not_found(format!(
                "checklist {checklist_id} not found"
            )));
        }
        Ok(())
    }

    async fn add_checklist_item(
        &self,
        checklist_id: Uuid,
        title: String,
    ) -> Result<ChecklistItem, Error> {
        let title = require_non_blank("title", title)?;
        self.details
            .find_checklist(checklist_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("checklist {checklist_id} not found")))?;

        let count = self.details.count_items_for_checklist(checklist_id).await?;
        let item = ChecklistItem {
            id: Uuid::new_v4(),
            checklist_id,
            title,
            is_done: false,
            position: append_position(count)?,
        };
        self.details.save_item(&item).await?;
        Ok(item)
    }

    async fn patch_checklist_item(
        &self,
        item_id: Uuid,
        patch: ChecklistItemPatch,
    ) -> Result<ChecklistItem, Error> {
        if patch.is_empty() {
            return Err(Error::invalid_request("no fields to update"));
        }
        let mut item = self
            .details
            .find_item(item_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("checklist item {item_id} not found")))?;

        if let Some(title) = patch.title {
            item.title = require_non_blank("title", title)?;
        }
        if let Some(is_done) = patch.is_done {
            item.is_done = is_done;
        }

        if !self.details.update_item(&item).await? {
            return Err(Error::not_found(format!(
                "checklist item {item_id} not found"
            )));
        }
        Ok(item)
    }

    async fn delete_checklist_item(&self, item_id: Uuid) -> Result<(), Error> {
        if !self.details.delete_item(item_id).await? {
            return Err(Error::not_found(format!(
                "checklist item {item_id} not found"
            )));
        }
        Ok(())
    }

    async fn add_attachment(&self, draft: NewAttachment) -> Result<Attachment, Error> {
        let file_name = require_non_blank("fileName", draft.file_name)?;
        let original_name = require_non_blank("originalName", draft.original_name)?;
        let mime_type = require_non_blank("mimeType", draft.mime_type)?;
        let url = require_non_blank("url", draft.url)?;
        if draft.byte_size < 0 {
            return Err(Error::invalid_request("byteSize must not be negative"));
        }
        self.require_card(draft.card_id).await?;

        let attachment = Attachment {
            id: Uuid::new_v4(),
            card_id: draft.card_id,
            file_name,
            original_name,
            mime_type,
            byte_size: draft.byte_size,
            url,
            uploaded_by: draft.uploaded_by,
            created_at: Utc::now(),
        };
        self.details.save_attachment(&attachment).await?;
        Ok(attachment)
    }

    async fn delete_attachment(&self, attachment_id: Uuid) -> Result<(), Error> {
        if !self.details.delete_attachment(attachment_id).await? {
            return Err(Error::not_found(format!(
                "attachment {attachment_id} not found"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "card_detail_service_tests.rs"]
mod tests;
