//! Port for card dependents: comments, checklists, items, attachments.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Attachment, Checklist, ChecklistItem, Comment};

use super::RepositoryError;

/// Port for writing and reading the rows owned by a card.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardDetailRepository: Send + Sync {
    /// Persist a freshly created comment.
    async fn save_comment(&self, comment: &Comment) -> Result<(), RepositoryError>;

    /// Delete a comment. Returns `false` when no row matched the id.
    async fn delete_comment(&self, comment_id: Uuid) -> Result<bool, RepositoryError>;

    /// Comments on any of the given cards, oldest first.
    async fn comments_for_cards(&self, card_ids: &[Uuid])
    -> Result<Vec<Comment>, RepositoryError>;

    /// Persist a freshly created checklist.
    async fn save_checklist(&self, checklist: &Checklist) -> Result<(), RepositoryError>;

    /// Find a checklist by id.
    async fn find_checklist(&self, checklist_id: Uuid)
    -> Result<Option<Checklist>, RepositoryError>;

    /// Delete a checklist; items fall to the schema cascade. Returns
    /// `false` when no row matched the id.
    async fn delete_checklist(&self, checklist_id: Uuid) -> Result<bool, RepositoryError>;

    /// Checklists on any of the given cards.
    async fn checklists_for_cards(
        &self,
        card_ids: &[Uuid],
    ) -> Result<Vec<Checklist>, RepositoryError>;

    /// Number of checklists on a card; feeds append-at-end positions.
    async fn count_checklists_for_card(&self, card_id: Uuid) -> Result<i64, RepositoryError>;

    /// Persist a freshly created checklist item.
    async fn save_item(&self, item: &ChecklistItem) -> Result<(), RepositoryError>;

    /// Find a checklist item by id.
    async fn find_item(&self, item_id: Uuid) -> Result<Option<ChecklistItem>, RepositoryError>;

    /// Overwrite a checklist item's mutable fields. Returns `false` when no
    /// row matched the id.
    async fn update_item(&self, item: &ChecklistItem) -> Result<bool, RepositoryError>;

    /// Delete a checklist item. Returns `false` when no row matched the id.
    async fn delete_item(&self, item_id: Uuid) -> Result<bool, RepositoryError>;

    /// Items belonging to any of the given checklists.
    async fn items_for_checklists(
        &self,
        checklist_ids: &[Uuid],
    ) -> Result<Vec<ChecklistItem>, RepositoryError>;

    /// Number of items on a checklist; feeds append-at-end positions.
    async fn count_items_for_checklist(&self, checklist_id: Uuid)
    -> Result<i64, RepositoryError>;

    /// Persist a freshly created attachment descriptor.
    async fn save_attachment(&self, attachment: &Attachment) -> Result<(), RepositoryError>;

    /// Delete an attachment descriptor. Returns `false` when no row matched
    /// the id.
    async fn delete_attachment(&self, attachment_id: Uuid) -> Result<bool, RepositoryError>;

    /// Attachment descriptors on any of the given cards.
    async fn attachments_for_cards(
        &self,
        card_ids: &[Uuid],
    ) -> Result<Vec<Attachment>, RepositoryError>;
}

/// Fixture implementation for tests that do not exercise card dependents.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCardDetailRepository;

#[async_trait]
impl CardDetailRepository for FixtureCardDetailRepository {
    async fn save_comment(&self, _comment: &Comment) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn delete_comment(&self, _comment_id: Uuid) -> Result<bool, RepositoryError> {
        Ok(true)
    }

    async fn comments_for_cards(
        &self,
        _card_ids: &[Uuid],
    ) -> Result<Vec<Comment>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn save_checklist(&self, _checklist: &Checklist) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn find_checklist(
        &self,
        _checklist_id: Uuid,
    ) -> Result<Option<Checklist>, RepositoryError> {
        Ok(None)
    }

    async fn delete_checklist(&self, _checklist_id: Uuid) -> Result<bool, RepositoryError> {
        Ok(true)
    }

    async fn checklists_for_cards(
        &self,
        _card_ids: &[Uuid],
    ) -> Result<Vec<Checklist>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn count_checklists_for_card(&self, _card_id: Uuid) -> Result<i64, RepositoryError> {
        Ok(0)
    }

    async fn save_item(&self, _item: &ChecklistItem) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn find_item(&self, _item_id: Uuid) -> Result<Option<ChecklistItem>, RepositoryError> {
        Ok(None)
    }

    async fn update_item(&self, _item: &ChecklistItem) -> Result<bool, RepositoryError> {
        Ok(true)
    }

    async fn delete_item(&self, _item_id: Uuid) -> Result<bool, RepositoryError> {
        Ok(true)
    }

    async fn items_for_checklists(
        &self,
        _checklist_ids: &[Uuid],
    ) -> Result<Vec<ChecklistItem>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn count_items_for_checklist(
        &self,
        _checklist_id: Uuid,
    ) -> Result<i64, RepositoryError> {
        Ok(0)
    }

    async fn save_attachment(&self, _attachment: &Attachment) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn delete_attachment(&self, _attachment_id: Uuid) -> Result<bool, RepositoryError> {
        Ok(true)
    }

    async fn attachments_for_cards(
        &self,
        _card_ids: &[Uuid],
    ) -> Result<Vec<Attachment>, RepositoryError> {
        Ok(Vec::new())
    }
}
