//! PostgreSQL-backed `ListRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::List;
use crate::domain::ports::{ListRepository, RepositoryError};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::{ListRow, ListUpdate, NewListRow};
use super::pool::{DbPool, checkout};
use super::schema::lists;

/// Diesel-backed implementation of the `ListRepository` port.
#[derive(Clone)]
pub struct DieselListRepository {
    pool: DbPool,
}

impl DieselListRepository {
    /// Create a repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_list(row: ListRow) -> List {
    List {
        id: row.id,
        board_id: row.board_id,
        name: row.name,
        position: row.position,
        is_archived: row.is_archived,
    }
}

#[async_trait]
impl ListRepository for DieselListRepository {
    async fn save(&self, list: &List) -> Result<(), RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let row = NewListRow {
            id: list.id,
            board_id: list.board_id,
            name: list.name.as_str(),
            position: list.position,
            is_archived: list.is_archived,
        };
        diesel::insert_into(lists::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "save list"))?;
        Ok(())
    }

    async fn find_by_id(&self, list_id: Uuid) -> Result<Option<List>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let row = lists::table
            .filter(lists::id.eq(list_id))
            .select(ListRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find list"))?;
        Ok(row.map(row_to_list))
    }

    async fn lists_for_board(&self, board_id: Uuid) -> Result<Vec<List>, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let rows = lists::table
            .filter(lists::board_id.eq(board_id))
            .order(lists::position.asc())
            .select(ListRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list lists"))?;
        Ok(rows.into_iter().map(row_to_list).collect())
    }

    async fn count_for_board(&self, board_id: Uuid) -> Result<i64, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        lists::table
            .filter(lists::board_id.eq(board_id))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "count lists"))
    }

    async fn update(&self, list: &List) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let changes = ListUpdate {
            name: list.name.as_str(),
            position: list.position,
            is_archived: list.is_archived,
        };
        let affected = diesel::update(lists::table.filter(lists::id.eq(list.id)))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "update list"))?;
        Ok(affected > 0)
    }

    async fn delete(&self, list_id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = checkout(&self.pool).await.map_err(map_pool_error)?;
        let affected = diesel::delete(lists::table.filter(lists::id.eq(list_id)))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "delete list"))?;
        Ok(affected > 0)
    }
}
