//! Port for list persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::List;

use super::RepositoryError;

/// Port for writing and reading lists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Persist a freshly created list.
    async fn save(&self, list: &List) -> Result<(), RepositoryError>;

    /// Find a list by id.
    async fn find_by_id(&self, list_id: Uuid) -> Result<Option<List>, RepositoryError>;

    /// Lists belonging to a board, in storage order.
    async fn lists_for_board(&self, board_id: Uuid) -> Result<Vec<List>, RepositoryError>;

    /// Number of lists on a board; feeds append-at-end position computation.
    async fn count_for_board(&self, board_id: Uuid) -> Result<i64, RepositoryError>;

    /// Overwrite a list's mutable fields. Returns `false` when no row
    /// matched the id.
    async fn update(&self, list: &List) -> Result<bool, RepositoryError>;

    /// Delete a list; dependent cards fall to the schema cascade. Returns
    /// `false` when no row matched the id.
    async fn delete(&self, list_id: Uuid) -> Result<bool, RepositoryError>;
}

/// Fixture implementation for tests that do not exercise list persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureListRepository;

#[async_trait]
impl ListRepository for FixtureListRepository {
    async fn save(&self, _list: &List) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn find_by_id(&self, _list_id: Uuid) -> Result<Option<List>, RepositoryError> {
        Ok(None)
    }

    async fn lists_for_board(&self, _board_id: Uuid) -> Result<Vec<List>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn count_for_board(&self, _board_id: Uuid) -> Result<i64, RepositoryError> {
        Ok(0)
    }

    async fn update(&self, _list: &List) -> Result<bool, RepositoryError> {
        Ok(true)
    }

    async fn delete(&self, _list_id: Uuid) -> Result<bool, RepositoryError> {
        Ok(true)
    }
}
