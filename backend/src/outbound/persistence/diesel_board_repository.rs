//! PostgreSQL-backed `BoardRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{BoardRepository, RepositoryError};
use crate::domain::{Board, Label, UserId};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::{BoardRow, BoardUpdate, LabelRow, NewBoardRow, NewLabelRow};
use super::pool::{DbPool, checkout};
use super::schema::{boards, labels};

/// Diesel-backed implementation of the `BoardRepository` port.
#[derive(Clone)]
pub struct DieselBoardRepository {
    pool: DbPool,
}

impl DieselBoardRepository {
    /// Create a repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_board(row: BoardRow) -> Board {
    Board {
        id: row.id,
        name: row.name,
        description: row.description,
        company_id: row.company_id,
        created_by: UserId::from_uuid(row.created_by),
        is_archived: row.is_archived,
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
impl BoardRepository for DieselBoardRepository {
    async fn save(&self, board: &Board) -> Result<(), RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let row = NewBoardRow {
            id: board.id,
            name: board.name.as_str(),
            description: board.description.as_deref(),
            company_id: board.company_id,
            created_by: board.created_by.as_uuid(),
            is_archived: board.is_archived,
            created_at: board.created_at,
            updated_at: board.updated_at,
        };
        diesel::insert_into(boards::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "save board"))?;
        Ok(())
    }

    async fn find_by_id(&self, board_id: Uuid) -> Result<Option<Board>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let row = boards::table
            .filter(boards::id.eq(board_id))
            .select(BoardRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find board"))?;
        Ok(row.map(row_to_board))
    }

    async fn list_active(&self) -> Result<Vec<Board>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let rows = boards::table
            .filter(boards::is_archived.eq(false))
            .order(boards::created_at.desc())
            .select(BoardRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list boards"))?;
        Ok(rows.into_iter().map(row_to_board).collect())
    }

    async fn update(&self, board: &Board) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let changes = BoardUpdate {
            name: board.name.as_str(),
            description: board.description.as_deref(),
            is_archived: board.is_archived,
            updated_at: board.updated_at,
        };
        let affected = diesel::update(boards::table.filter(boards::id.eq(board.id)))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "update board"))?;
        Ok(affected > 0)
    }

    async fn delete(&self, board_id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let affected = diesel::delete(boards::table.filter(boards::id.eq(board_id)))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "delete board"))?;
        Ok(affected > 0)
    }

    async fn save_label(&self, label: &Label) -> Result<(), RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let row = NewLabelRow {
            id: label.id,
            board_id: label.board_id,
            name: label.name.as_str(),
            color: label.color.as_str(),
        };
        diesel::insert_into(labels::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "save label"))?;
        Ok(())
    }

    async fn delete_label(&self, label_id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let affected = diesel::delete(labels::table.filter(labels::id.eq(label_id)))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "delete label"))?;
        Ok(affected > 0)
    }

    async fn labels_for_board(&self, board_id: Uuid) -> Result<Vec<Label>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let rows = labels::table
            .filter(labels::board_id.eq(board_id))
            .order(labels::name.asc())
            .select(LabelRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list labels"))?;
        Ok(rows.into_iter().map(row_to_label).collect())
    }
}
