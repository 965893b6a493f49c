//! Board domain services: composition query and board/label mutations.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::board_view::{
    BoardView, CardView, ChecklistView, ListView, sort_card_views, sort_checklist_items,
    sort_lists,
};
use crate::domain::ports::{
    BoardCommand, BoardQuery, BoardRepository, CardDetailRepository, CardRepository,
    ListRepository,
};
use crate::domain::validate::require_non_blank;
use crate::domain::{Board, BoardPatch, Card, Error, Label, NewBoard, NewLabel};

/// Read-side board service assembling the composed board graph.
///
/// Each nested relation is fetched with one batched query keyed by parent
/// ids rather than per card, so composing a board costs a fixed number of
/// round trips regardless of its size.
#[derive(Clone)]
pub struct BoardQueryService<B, L, C, D> {
    boards: Arc<B>,
    lists: Arc<L>,
    cards: Arc<C>,
    details: Arc<D>,
}

impl<B, L, C, D> BoardQueryService<B, L, C, D> {
    /// Create the service over the four repositories.
    pub fn new(boards: Arc<B>, lists: Arc<L>, cards: Arc<C>, details: Arc<D>) -> Self {
        Self {
            boards,
            lists,
            cards,
            details,
        }
    }
}

/// Group values by a key extracted from each value.
fn group_by<K, V, F>(values: Vec<V>, key: F) -> HashMap<K, Vec<V>>
where
    K: std::hash::Hash + Eq,
    F: Fn(&V) -> K,
{
    let mut grouped: HashMap<K, Vec<V>> = HashMap::new();
    for value in values {
        grouped.entry(key(&value)).or_default().push(value);
    }
    grouped
}

impl<B, L, C, D> BoardQueryService<B, L, C, D>
where
    B: BoardRepository,
    L: ListRepository,
    C: CardRepository,
    D: CardDetailRepository,
{
    async fn card_views(&self, cards: Vec<Card>) -> Result<HashMap<Uuid, Vec<CardView>>, Error> {
        let card_ids: Vec<Uuid> = cards.iter().map(|card| card.id).collect();

        let mut labels = group_by(self.cards.labels_for_cards(&card_ids).await?, |link| link.0);
        let mut assignees = group_by(self.cards.assignees_for_cards(&card_ids).await?, |link| {
            link.0
        });
        let mut comments = group_by(self.details.comments_for_cards(&card_ids).await?, |comment| {
            comment.card_id
        });
        let checklists = self.details.checklists_for_cards(&card_ids).await?;
        let checklist_ids: Vec<Uuid> = checklists.iter().map(|checklist| checklist.id).collect();
        let mut items = group_by(
            self.details.items_for_checklists(&checklist_ids).await?,
            |item| item.checklist_id,
        );
        let mut checklists = group_by(checklists, |checklist| checklist.card_id);
        let mut attachments = group_by(
            self.details.attachments_for_cards(&card_ids).await?,
            |attachment| attachment.card_id,
        );

        let views = cards.into_iter().map(|card| {
            let card_checklists = checklists
                .remove(&card.id)
                .unwrap_or_default()
                .into_iter()
                .map(|checklist| {
                    let mut checklist_items = items.remove(&checklist.id).unwrap_or_default();
                    sort_checklist_items(&mut checklist_items);
                    ChecklistView {
                        checklist,
                        items: checklist_items,
                    }
                })
                .collect();
            let list_id = card.list_id;
            let view = CardView {
                labels: labels
                    .remove(&card.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|link| link.1)
                    .collect(),
                assignees: assignees
                    .remove(&card.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|link| link.1)
                    .collect(),
                comments: comments.remove(&card.id).unwrap_or_default(),
                checklists: card_checklists,
                attachments: attachments.remove(&card.id).unwrap_or_default(),
                card,
            };
            (list_id, view)
        });

        Ok(group_by(views.collect(), |entry: &(Uuid, CardView)| entry.0)
            .into_iter()
            .map(|(list_id, entries)| {
                let mut card_views: Vec<CardView> =
                    entries.into_iter().map(|entry| entry.1).collect();
                sort_card_views(&mut card_views);
                (list_id, card_views)
            })
            .collect())
    }
}

#[async_trait]
impl<B, L, C, D> BoardQuery for BoardQueryService<B, L, C, D>
where
    B: BoardRepository,
    L: ListRepository,
    C: CardRepository,
    D: CardDetailRepository,
{
    async fn list_boards(&self) -> Result<Vec<Board>, Error> {
        Ok(self.boards.list_active().await?)
    }

    async fn compose_board(&self, board_id: Uuid) -> Result<BoardView, Error> {
        let board = self
            .boards
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("board {board_id} not found")))?;

        let labels = self.boards.labels_for_board(board_id).await?;
        let mut lists = self.lists.lists_for_board(board_id).await?;
        sort_lists(&mut lists);

        let list_ids: Vec<Uuid> = lists.iter().map(|list| list.id).collect();
        let cards = self.cards.cards_for_lists(&list_ids).await?;
        let mut cards_by_list = self.card_views(cards).await?;

        let lists = lists
            .into_iter()
            .map(|list| {
                let cards = cards_by_list.remove(&list.id).unwrap_or_default();
                ListView { list, cards }
            })
            .collect();

        Ok(BoardView {
            board,
            labels,
            lists,
        })
    }
}

/// Write-side board service.
#[derive(Clone)]
pub struct BoardCommandService<B> {
    boards: Arc<B>,
}

impl<B> BoardCommandService<B> {
    /// Create the service over the board repository.
    pub fn new(boards: Arc<B>) -> Self {
        Self { boards }
    }
}

#[async_trait]
impl<B> BoardCommand for BoardCommandService<B>
where
    B: BoardRepository,
{
    async fn create_board(&self, draft: NewBoard) -> Result<Board, Error> {
        let name = require_non_blank("name", draft.name)?;
        let now = Utc::now();
        let board = Board {
            id: Uuid::new_v4(),
            name,
            description: draft.description,
            company_id: draft.company_id,
            created_by: draft.created_by,
            is_archived: false,
            created_at: now,
            updated_at: now,
        };
        self.boards.save(&board).await?;
        Ok(board)
    }

    async fn update_board(&self, board_id: Uuid, patch: BoardPatch) -> Result<Board, Error> {
        if patch.is_empty() {
            return Err(Error::invalid_request("no fields to update"));
        }
        let mut board = self
            .boards
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("board {board_id} not found")))?;

        if let Some(name) = patch.name {
            board.name = require_non_blank("name", name)?;
        }
        if let Some(description) = patch.description {
            board.description = description;
        }
        if let Some(is_archived) = patch.is_archived {
            board.is_archived = is_archived;
        }
        board.updated_at = Utc::now();

        if !self.boards.update(&board).await? {
            return Err(Error::not_found(format!("board {board_id} not found")));
        }
        Ok(board)
    }

    async fn delete_board(&self, board_id: Uuid) -> Result<(), Error> {
        if !self.boards.delete(board_id).await? {
            return Err(Error::not_found(format!("board {board_id} not found")));
        }
        Ok(())
    }

    async fn create_label(&self, draft: NewLabel) -> Result<Label, Error> {
        let name = require_non_blank("name", draft.name)?;
        let color = require_non_blank("color", draft.color)?;
        self.boards
            .find_by_id(draft.board_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("board {} not found", draft.board_id)))?;

        let label = Label {
            id: Uuid::new_v4(),
            board_id: draft.board_id,
            name,
            color,
        };
        self.boards.save_label(&label).await?;
        Ok(label)
    }

    async fn delete_label(&self, label_id: Uuid) -> Result<(), Error> {
        if !self.boards.delete_label(label_id).await? {
            return Err(Error::not_found(format!("label {label_id} not found")));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_service_tests.rs"]
mod tests;
