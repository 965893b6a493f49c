//! List domain service.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{BoardRepository, ListCommand, ListRepository};
use crate::domain::validate::{append_position, require_non_blank};
use crate::domain::{Error, List, NewList};

/// Write-side list service.
///
/// New lists are appended at the end of their board: the position equals
/// the board's current list count at creation time.
#[derive(Clone)]
pub struct ListCommandService<B, L> {
    boards: Arc<B>,
    lists: Arc<L>,
}

impl<B, L> ListCommandService<B, L> {
    /// Create the service over the board and list repositories.
    pub fn new(boards: Arc<B>, lists: Arc<L>) -> Self {
        Self { boards, lists }
    }
}

#[async_trait]
impl<B, L> ListCommand for ListCommandService<B, L>
where
    B: BoardRepository,
    L: ListRepository,
{
    async fn create_list(&self, draft: NewList) -> Result<List, Error> {
        let name = require_non_blank("name", draft.name)?;
        self.boards
            .find_by_id(draft.board_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("board {} not found", draft.board_id)))?;

        let count = self.lists.count_for_board(draft.board_id).await?;
        let list = List {
            id: Uuid::new_v4(),
            board_id: draft.board_id,
            name,
            position: append_position(count)?,
            is_archived: false,
        };
        self.lists.save(&list).await?;
        Ok(list)
    }

    async fn rename_list(&self, list_id: Uuid, name: String) -> Result<List, Error> {
        let name = require_non_blank("name", name)?;
        let mut list = self
            .lists
            .find_by_id(list_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("list {list_id} not found")))?;

        list.name = name;
        if !self.lists.update(&list).await? {
            return Err(Error::not_found(format!("list {list_id} not found")));
        }
        Ok(list)
    }

    async fn delete_list(&self, list_id: Uuid) -> Result<(), Error> {
        if !self.lists.delete(list_id).await? {
            return Err(Error::not_found(format!("list {list_id} not found")));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "list_service_tests.rs"]
mod tests;
