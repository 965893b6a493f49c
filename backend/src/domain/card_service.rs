//! Card domain service, including the move protocol.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::ports::{CardCommand, CardRepository, ListRepository, MoveCard};
use crate::domain::validate::{append_position, require_non_blank};
use crate::domain::{Card, CardPatch, Error, NewCard, UserId};

/// Write-side card service.
///
/// The move protocol validates that both the card and the destination list
/// exist, then rewrites `list_id` and `position` in a single-row update.
/// Sibling positions are not renumbered: callers supply `new_position` as
/// the destination list's current card count, so moves append at the end.
#[derive(Clone)]
pub struct CardCommandService<L, C> {
    lists: Arc<L>,
    cards: Arc<C>,
}

impl<L, C> CardCommandService<L, C> {
    /// Create the service over the list and card repositories.
    pub fn new(lists: Arc<L>, cards: Arc<C>) -> Self {
        Self { lists, cards }
    }
}

impl<L, C> CardCommandService<L, C>
where
    L: ListRepository,
    C: CardRepository,
{
    async fn require_card(&self, card_id: Uuid) -> Result<Card, Error> {
        self.cards
            .find_by_id(card_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("card {card_id} not found")))
    }
}

#[async_trait]
impl<L, C> CardCommand for CardCommandService<L, C>
where
    L: ListRepository,
    C: CardRepository,
{
    async fn create_card(&self, draft: NewCard) -> Result<Card, Error> {
        let title = require_non_blank("title", draft.title)?;
        self.lists
            .find_by_id(draft.list_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("list {} not found", draft.list_id)))?;

        let count = self.cards.count_for_list(draft.list_id).await?;
        let now = Utc::now();
        let card = Card {
            id: Uuid::new_v4(),
            list_id: draft.list_id,
            title,
            description: draft.description,
            due_date: draft.due_date,
            position: append_position(count)?,
            is_archived: false,
            created_by: draft.created_by,
            created_at: now,
            updated_at: now,
        };
        // The card row, its label links, and its assignments commit or roll
        // back together.
        self.cards
            .save_with_links(&card, &draft.label_ids, &draft.assignee_ids)
            .await?;
        Ok(card)
    }

    async fn patch_card(&self, card_id: Uuid, patch: CardPatch) -> Result<Card, Error> {
        if patch.is_empty() {
            return Err(Error::invalid_request("no fields to update"));
        }
        let mut card = self.require_card(card_id).await?;

        if let Some(title) = patch.title {
            card.title = require_non_blank("title", title)?;
        }
        if let Some(description) = patch.description {
            card.description = description;
        }
        if let Some(due_date) = patch.due_date {
            card.due_date = due_date;
        }
        if let Some(is_archived) = patch.is_archived {
            card.is_archived = is_archived;
        }
        card.updated_at = Utc::now();

        if !self.cards.update(&card).await? {
            return Err(Error::not_found(format!("card {card_id} not found")));
        }
        Ok(card)
    }

    async fn move_card(&self, request: MoveCard) -> Result<Card, Error> {
        if request.new_position < 0 {
            return Err(Error::invalid_request("newPosition must not be negative"));
        }
        let mut card = self.require_card(request.card_id).await?;
        self.lists
            .find_by_id(request.new_list_id)
            .await?
            .ok_or_else(|| {
                Error::not_found(format!("list {} not found", request.new_list_id))
            })?;

        let moved_at = Utc::now();
        let relocated = self
            .cards
            .relocate(
                request.card_id,
                request.new_list_id,
                request.new_position,
                moved_at,
            )
            .await?;
        if !relocated {
            // The card vanished between the lookup and the update.
            return Err(Error::not_found(format!(
                "card {} not found",
                request.card_id
            )));
        }

        card.list_id = request.new_list_id;
        card.position = request.new_position;
        card.updated_at = moved_at;
        Ok(card)
    }

    async fn delete_card(&self, card_id: Uuid) -> Result<(), Error> {
        if !self.cards.delete(card_id).await? {
            return Err(Error::not_found(format!("card {card_id} not found")));
        }
        Ok(())
    }

    async fn link_label(&self, card_id: Uuid, label_id: Uuid) -> Result<(), Error> {
        self.require_card(card_id).await?;
        Ok(self.cards.link_label(card_id, label_id).await?)
    }

    async fn unlink_label(&self, card_id: Uuid, label_id: Uuid) -> Result<(), Error> {
        if !self.cards.unlink_label(card_id, label_id).await? {
            return Err(Error::not_found("card-label link not found"));
        }
        Ok(())
    }

    async fn assign_user(&self, card_id: Uuid, user_id: UserId) -> Result<(), Error> {
        self.require_card(card_id).await?;
        Ok(self.cards.assign_user(card_id, &user_id).await?)
    }

    async fn unassign_user(&self, card_id: Uuid, user_id: UserId) -> Result<(), Error> {
        if !self.cards.unassign_user(card_id, &user_id).await? {
            return Err(Error::not_found("assignment not found"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "card_service_tests.rs"]
mod tests;
