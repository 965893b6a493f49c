//! Driving port for board and label mutations.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Board, BoardPatch, Error, Label, NewBoard, NewLabel};

/// Write-side use cases for boards and their labels.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardCommand: Send + Sync {
    /// Create a board owned by the given company.
    async fn create_board(&self, draft: NewBoard) -> Result<Board, Error>;

    /// Apply a partial update to a board.
    async fn update_board(&self, board_id: Uuid, patch: BoardPatch) -> Result<Board, Error>;

    /// Delete a board; lists and cards fall to the schema cascade.
    async fn delete_board(&self, board_id: Uuid) -> Result<(), Error>;

    /// Create a label on a board.
    async fn create_label(&self, draft: NewLabel) -> Result<Label, Error>;

    /// Delete a label; card links fall to the schema cascade.
    async fn delete_label(&self, label_id: Uuid) -> Result<(), Error>;
}

/// Fixture implementation echoing drafts back as persisted entities.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBoardCommand;

#[async_trait]
impl BoardCommand for FixtureBoardCommand {
    async fn create_board(&self, draft: NewBoard) -> Result<Board, Error> {
        let now = Utc::now();
        Ok(Board {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            company_id: draft.company_id,
            created_by: draft.created_by,
            is_archived: false,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update_board(&self, board_id: Uuid, _patch: BoardPatch) -> Result<Board, Error> {
        Err(Error::not_found(format!("board {board_id} not found")))
    }

    async fn delete_board(&self, _board_id: Uuid) -> Result<(), Error> {
        Ok(())
    }

    async fn create_label(&self, draft: NewLabel) -> Result<Label, Error> {
        Ok(Label {
            id: Uuid::new_v4(),
            board_id: draft.board_id,
            name: draft.name,
            color: draft.color,
        })
    }

    async fn delete_label(&self, _label_id: Uuid) -> Result<(), Error> {
        Ok(())
    }
}
