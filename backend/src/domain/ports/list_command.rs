//! Driving port for list mutations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, List, NewList};

/// Write-side use cases for lists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListCommand: Send + Sync {
    /// Create a list appended at the end of its board.
    async fn create_list(&self, draft: NewList) -> Result<List, Error>;

    /// Rename a list.
    async fn rename_list(&self, list_id: Uuid, name: String) -> Result<List, Error>;

    /// Delete a list; its cards fall to the schema cascade.
    async fn delete_list(&self, list_id: Uuid) -> Result<(), Error>;
}

/// Fixture implementation echoing drafts back as persisted entities.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureListCommand;

#[async_trait]
impl ListCommand for FixtureListCommand {
    async fn create_list(&self, draft: NewList) -> Result<List, Error> {
        Ok(List {
            id: Uuid::new_v4(),
            board_id: draft.board_id,
            name: draft.name,
            position: 0,
            is_archived: false,
        })
    }

    async fn rename_list(&self, list_id: Uuid, _name: String) -> Result<List, Error> {
        Err(Error::not_found(format!("list {list_id} not found")))
    }

    async fn delete_list(&self, _list_id: Uuid) -> Result<(), Error> {
        Ok(())
    }
}
