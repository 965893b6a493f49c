//! PostgreSQL-backed `CardRepository` implementation.
//!
//! Card creation writes the card row, its label links, and its assignments
//! inside one transaction so a partial failure cannot leave a card behind
//! without its intended relations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{CardRepository, RepositoryError};
use crate::domain::{Card, Label, UserId};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::{
    CardAssignmentRow, CardLabelRow, CardRelocation, CardRow, CardUpdate, LabelRow, NewCardRow,
};
use super::pool::{DbPool, checkout};
use super::schema::{card_assignments, card_labels, cards, labels};

/// Diesel-backed implementation of the `CardRepository` port.
#[derive(Clone)]
pub struct DieselCardRepository {
    pool: DbPool,
}

impl DieselCardRepository {
    /// Create a repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_card(row: CardRow) -> Card {
    Card {
        id: row.id,
        list_id: row.list_id,
        title: row.title,
        description: row.description,
        due_date: row.due_date,
        position: row.position,
        is_archived: row.is_archived,
        created_by: UserId::from_uuid(row.created_by),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn row_to_label(row: LabelRow) -> Label {
    Label {
        id: row.id,
        board_id: row.board_id,
        name: row.name,
        color: row.color,
    }
}

#[async_trait]
impl CardRepository for DieselCardRepository {
    async fn save_with_links(
        &self,
        card: &Card,
        label_ids: &[Uuid],
        assignee_ids: &[UserId],
    ) -> Result<(), RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let card_row = NewCardRow {
            id: card.id,
            list_id: card.list_id,
            title: card.title.as_str(),
            description: card.description.as_deref(),
            due_date: card.due_date,
            position: card.position,
            is_archived: card.is_archived,
            created_by: card.created_by.as_uuid(),
            created_at: card.created_at,
            updated_at: card.updated_at,
        };
        let label_rows: Vec<CardLabelRow> = label_ids
            .iter()
            .map(|label_id| CardLabelRow {
                card_id: card.id,
                label_id: *label_id,
            })
            .collect();
        let assignment_rows: Vec<CardAssignmentRow> = assignee_ids
            .iter()
            .map(|user_id| CardAssignmentRow {
                card_id: card.id,
                user_id: user_id.as_uuid(),
            })
            .collect();

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                diesel::insert_into(cards::table)
                    .values(&card_row)
                    .execute(conn)
                    .await?;
                if !label_rows.is_empty() {
                    diesel::insert_into(card_labels::table)
                        .values(&label_rows)
                        .execute(conn)
                        .await?;
                }
                if !assignment_rows.is_empty() {
                    diesel::insert_into(card_assignments::table)
                        .values(&assignment_rows)
                        .execute(conn)
                        .await?;
                }
                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| map_diesel_error(err, "save card"))?;
        Ok(())
    }

    async fn find_by_id(&self, card_id: Uuid) -> Result<Option<Card>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let row = cards::table
            .filter(cards::id.eq(card_id))
            .select(CardRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find card"))?;
        Ok(row.map(row_to_card))
    }

    async fn cards_for_lists(&self, list_ids: &[Uuid]) -> Result<Vec<Card>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let rows = cards::table
            .filter(cards::list_id.eq_any(list_ids))
            .order((cards::list_id.asc(), cards::position.asc()))
            .select(CardRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list cards"))?;
        Ok(rows.into_iter().map(row_to_card).collect())
    }

    async fn count_for_list(&self, list_id: Uuid) -> Result<i64, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        cards::table
            .filter(cards::list_id.eq(list_id))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "count cards"))
    }

    async fn update(&self, card: &Card) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let changes = CardUpdate {
            title: card.title.as_str(),
            description: card.description.as_deref(),
            due_date: card.due_date,
            is_archived: card.is_archived,
            updated_at: card.updated_at,
        };
        let affected = diesel::update(cards::table.filter(cards::id.eq(card.id)))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "update card"))?;
        Ok(affected > 0)
    }

    async fn relocate(
        &self,
        card_id: Uuid,
        list_id: Uuid,
        position: i32,
        moved_at: DateTime<Utc>,
    ) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let changes = CardRelocation {
            list_id,
            position,
            updated_at: moved_at,
        };
        let affected = diesel::update(cards::table.filter(cards::id.eq(card_id)))
            .set(changes)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "move card"))?;
        Ok(affected > 0)
    }

    async fn delete(&self, card_id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let affected = diesel::delete(cards::table.filter(cards::id.eq(card_id)))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "delete card"))?;
        Ok(affected > 0)
    }

    async fn link_label(&self, card_id: Uuid, label_id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let row = CardLabelRow { card_id, label_id };
        diesel::insert_into(card_labels::table)
            .values(&row)
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "link label"))?;
        Ok(())
    }

    async fn unlink_label(&self, card_id: Uuid, label_id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let affected = diesel::delete(
            card_labels::table
                .filter(card_labels::card_id.eq(card_id))
                .filter(card_labels::label_id.eq(label_id)),
        )
        .execute(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, "unlink label"))?;
        Ok(affected > 0)
    }

    async fn assign_user(&self, card_id: Uuid, user_id: &UserId) -> Result<(), RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let row = CardAssignmentRow {
            card_id,
            user_id: user_id.as_uuid(),
        };
        diesel::insert_into(card_assignments::table)
            .values(&row)
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "assign user"))?;
        Ok(())
    }

    async fn unassign_user(
        &self,
        card_id: Uuid,
        user_id: &UserId,
    ) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let affected = diesel::delete(
            card_assignments::table
                .filter(card_assignments::card_id.eq(card_id))
                .filter(card_assignments::user_id.eq(user_id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, "unassign user"))?;
        Ok(affected > 0)
    }

    async fn labels_for_cards(
        &self,
        card_ids: &[Uuid],
    ) -> Result<Vec<(Uuid, Label)>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let rows: Vec<(Uuid, LabelRow)> = card_labels::table
            .inner_join(labels::table)
            .filter(card_labels::card_id.eq_any(card_ids))
            .select((card_labels::card_id, LabelRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list card labels"))?;
        Ok(rows
            .into_iter()
            .map(|(card_id, row)| (card_id, row_to_label(row)))
            .collect())
    }

    async fn assignees_for_cards(
        &self,
        card_ids: &[Uuid],
    ) -> Result<Vec<(Uuid, UserId)>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let rows: Vec<(Uuid, Uuid)> = card_assignments::table
            .filter(card_assignments::card_id.eq_any(card_ids))
            .select((card_assignments::card_id, card_assignments::user_id))
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list card assignees"))?;
        Ok(rows
            .into_iter()
            .map(|(card_id, user_id)| (card_id, UserId::from_uuid(user_id)))
            .collect())
    }
}
