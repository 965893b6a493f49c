//! Port for board and label persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Board, Label};

use super::RepositoryError;

/// Port for writing and reading boards and their labels.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Persist a freshly created board.
    async fn save(&self, board: &Board) -> Result<(), RepositoryError>;

    /// Find a board by id.
    async fn find_by_id(&self, board_id: Uuid) -> Result<Option<Board>, RepositoryError>;

    /// List non-archived boards, newest first.
    async fn list_active(&self) -> Result<Vec<Board>, RepositoryError>;

    /// Overwrite a board's mutable fields. Returns `false` when no row
    /// matched the id.
    async fn update(&self, board: &Board) -> Result<bool, RepositoryError>;

    /// Delete a board. Returns `false` when no row matched the id.
    async fn delete(&self, board_id: Uuid) -> Result<bool, RepositoryError>;

    /// Persist a freshly created label.
    async fn save_label(&self, label: &Label) -> Result<(), RepositoryError>;

    /// Delete a label. Returns `false` when no row matched the id.
    async fn delete_label(&self, label_id: Uuid) -> Result<bool, RepositoryError>;

    /// Labels defined on a board.
    async fn labels_for_board(&self, board_id: Uuid) -> Result<Vec<Label>, RepositoryError>;
}

/// Fixture implementation for tests that do not exercise board persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBoardRepository;

#[async_trait]
impl BoardRepository for FixtureBoardRepository {
    async fn save(&self, _board: &Board) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn find_by_id(&self, _board_id: Uuid) -> Result<Option<Board>, RepositoryError> {
        Ok(None)
    }

    async fn list_active(&self) -> Result<Vec<Board>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn update(&self, _board: &Board) -> Result<bool, RepositoryError> {
        Ok(true)
    }

    async fn delete(&self, _board_id: Uuid) -> Result<bool, RepositoryError> {
        Ok(true)
    }

    async fn save_label(&self, _label: &Label) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn delete_label(&self, _label_id: Uuid) -> Result<bool, RepositoryError> {
        Ok(true)
    }

    async fn labels_for_board(&self, _board_id: Uuid) -> Result<Vec<Label>, RepositoryError> {
        Ok(Vec::new())
    }
}
