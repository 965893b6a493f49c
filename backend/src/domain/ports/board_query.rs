//! Driving port for board read models.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Board, BoardView, Error};

/// Read-side use cases for boards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardQuery: Send + Sync {
    /// Non-archived boards, newest first.
    async fn list_boards(&self) -> Result<Vec<Board>, Error>;

    /// The full composed graph for one board: labels, ordered lists,
    /// ordered cards, and every card's nested relations.
    async fn compose_board(&self, board_id: Uuid) -> Result<BoardView, Error>;
}

/// Fixture implementation answering with an empty workspace.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBoardQuery;

#[async_trait]
impl BoardQuery for FixtureBoardQuery {
    async fn list_boards(&self) -> Result<Vec<Board>, Error> {
        Ok(Vec::new())
    }

    async fn compose_board(&self, board_id: Uuid) -> Result<BoardView, Error> {
        Err(Error::not_found(format!("board {board_id} not found")))
    }
}
