//! PostgreSQL-backed `CardDetailRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{CardDetailRepository, RepositoryError};
use crate::domain::{Attachment, Checklist, ChecklistItem, Comment, UserId};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::{
    AttachmentRow, ChecklistItemRow, ChecklistItemUpdate, ChecklistRow, CommentRow,
    NewAttachmentRow, NewChecklistItemRow, NewChecklistRow, NewCommentRow,
};
use super::pool::{DbPool, checkout};
use super::schema::{attachments, checklist_items, checklists, comments};

/// Diesel-backed implementation of the `CardDetailRepository` port.
#[derive(Clone)]
pub struct DieselCardDetailRepository {
    pool: DbPool,
}

impl DieselCardDetailRepository {
    /// Create a repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_comment(row: CommentRow) -> Comment {
    Comment {
        id: row.id,
        card_id: row.card_id,
        author_id: UserId::from_uuid(row.author_id),
        body: row.body,
        created_at: row.created_at,
    }
}

fn row_to_checklist(row: ChecklistRow) -> Checklist {
    Checklist {
        id: row.id,
        card_id: row.card_id,
        title: row.title,
        position: row.position,
    }
}

fn row_to_item(row: ChecklistItemRow) -> ChecklistItem {
    ChecklistItem {
        id: row.id,
        checklist_id: row.checklist_id,
        title: row.title,
        is_done: row.is_done,
        position: row.position,
    }
}

fn row_to_attachment(row: AttachmentRow) -> Attachment {
    Attachment {
        id: row.id,
        card_id: row.card_id,
        file_name: row.file_name,
        original_name: row.original_name,
        mime_type: row.mime_type,
        byte_size: row.byte_size,
        url: row.url,
        uploaded_by: UserId::from_uuid(row.uploaded_by),
        created_at: row.created_at,
    }
}

#[async_trait]
impl CardDetailRepository for DieselCardDetailRepository {
    async fn save_comment(&self, comment: &Comment) -> Result<(), RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let row = NewCommentRow {
            id: comment.id,
            card_id: comment.card_id,
            author_id: comment.author_id.as_uuid(),
            body: comment.body.as_str(),
            created_at: comment.created_at,
        };
        diesel::insert_into(comments::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "save comment"))?;
        Ok(())
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let affected = diesel::delete(comments::table.filter(comments::id.eq(comment_id)))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "delete comment"))?;
        Ok(affected > 0)
    }

    async fn comments_for_cards(
        &self,
        card_ids: &[Uuid],
    ) -> Result<Vec<Comment>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let rows = comments::table
            .filter(comments::card_id.eq_any(card_ids))
            .order(comments::created_at.asc())
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list comments"))?;
        Ok(rows.into_iter().map(row_to_comment).collect())
    }

    async fn save_checklist(&self, checklist: &Checklist) -> Result<(), RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let row = NewChecklistRow {
            id: checklist.id,
            card_id: checklist.card_id,
            title: checklist.title.as_str(),
            position: checklist.position,
        };
        diesel::insert_into(checklists::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "save checklist"))?;
        Ok(())
    }

    async fn find_checklist(
        &self,
        checklist_id: Uuid,
    ) -> Result<Option<Checklist>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let row = checklists::table
            .filter(checklists::id.eq(checklist_id))
            .select(ChecklistRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find checklist"))?;
        Ok(row.map(row_to_checklist))
    }

    async fn delete_checklist(&self, checklist_id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let affected = diesel::delete(checklists::table.filter(checklists::id.eq(checklist_id)))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "delete checklist"))?;
        Ok(affected > 0)
    }

    async fn checklists_for_cards(
        &self,
        card_ids: &[Uuid],
    ) -> Result<Vec<Checklist>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let rows = checklists::table
            .filter(checklists::card_id.eq_any(card_ids))
            .order(checklists::position.asc())
            .select(ChecklistRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list checklists"))?;
        Ok(rows.into_iter().map(row_to_checklist).collect())
    }

    async fn count_checklists_for_card(&self, card_id: Uuid) -> Result<i64, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        checklists::table
            .filter(checklists::card_id.eq(card_id))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "count checklists"))
    }

    async fn save_item(&self, item: &ChecklistItem) -> Result<(), RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let row = NewChecklistItemRow {
            id: item.id,
            checklist_id: item.checklist_id,
            title: item.title.as_str(),
            is_done: item.is_done,
            position: item.position,
        };
        diesel::insert_into(checklist_items::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "save checklist item"))?;
        Ok(())
    }

    async fn find_item(&self, item_id: Uuid) -> Result<Option<ChecklistItem>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let row = checklist_items::table
            .filter(checklist_items::id.eq(item_id))
            .select(ChecklistItemRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find checklist item"))?;
        Ok(row.map(row_to_item))
    }

    async fn update_item(&self, item: &ChecklistItem) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let changes = ChecklistItemUpdate {
            title: item.title.as_str(),
            is_done: item.is_done,
        };
        let affected =
            diesel::update(checklist_items::table.filter(checklist_items::id.eq(item.id)))
                .set(&changes)
                .execute(&mut conn)
                .await
                .map_err(|err| map_diesel_error(err, "update checklist item"))?;
        Ok(affected > 0)
    }

    async fn delete_item(&self, item_id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let affected =
            diesel::delete(checklist_items::table.filter(checklist_items::id.eq(item_id)))
                .execute(&mut conn)
                .await
                .map_err(|err| map_diesel_error(err, "delete checklist item"))?;
        Ok(affected > 0)
    }

    async fn items_for_checklists(
        &self,
        checklist_ids: &[Uuid],
    ) -> Result<Vec<ChecklistItem>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let rows = checklist_items::table
            .filter(checklist_items::checklist_id.eq_any(checklist_ids))
            .order(checklist_items::position.asc())
            .select(ChecklistItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list checklist items"))?;
        Ok(rows.into_iter().map(row_to_item).collect())
    }

    async fn count_items_for_checklist(
        &self,
        checklist_id: Uuid,
    ) -> Result<i64, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        checklist_items::table
            .filter(checklist_items::checklist_id.eq(checklist_id))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "count checklist items"))
    }

    async fn save_attachment(&self, attachment: &Attachment) -> Result<(), RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let row = NewAttachmentRow {
            id: attachment.id,
            card_id: attachment.card_id,
            file_name: attachment.file_name.as_str(),
            original_name: attachment.original_name.as_str(),
            mime_type: attachment.mime_type.as_str(),
            byte_size: attachment.byte_size,
            url: attachment.url.as_str(),
            uploaded_by: attachment.uploaded_by.as_uuid(),
            created_at: attachment.created_at,
        };
        diesel::insert_into(attachments::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "save attachment"))?;
        Ok(())
    }

    async fn delete_attachment(&self, attachment_id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let affected =
            diesel::delete(attachments::table.filter(attachments::id.eq(attachment_id)))
                .execute(&mut conn)
                .await
                .map_err(|err| map_diesel_error(err, "delete attachment"))?;
        Ok(affected > 0)
    }

    async fn attachments_for_cards(
        &self,
        card_ids: &[Uuid],
    ) -> Result<Vec<Attachment>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let rows = attachments::table
            .filter(attachments::card_id.eq_any(card_ids))
            .order(attachments::created_at.asc())
            .select(AttachmentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list attachments"))?;
        Ok(rows.into_iter().map(row_to_attachment).collect())
    }
}
