//! Driving port for card mutations, including the move protocol.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Card, CardPatch, Error, NewCard, UserId};

/// Parameters of the card move protocol.
///
/// `new_position` is supplied by the caller as the destination list's
/// current card count; the server persists it verbatim after validating the
/// card and destination exist. Sibling positions are not renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCard {
    /// Card being relocated.
    pub card_id: Uuid,
    /// Destination list; may equal the card's current list.
    pub new_list_id: Uuid,
    /// Zero-based slot the card should occupy in the destination.
    pub new_position: i32,
}

/// Write-side use cases for cards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardCommand: Send + Sync {
    /// Create a card appended at the end of its list, linking labels and
    /// assignees atomically with the card row.
    async fn create_card(&self, draft: NewCard) -> Result<Card, Error>;

    /// Apply a partial update to a card.
    async fn patch_card(&self, card_id: Uuid, patch: CardPatch) -> Result<Card, Error>;

    /// Relocate a card to a (possibly different) list at the given
    /// position.
    async fn move_card(&self, request: MoveCard) -> Result<Card, Error>;

    /// Delete a card; dependents fall to the schema cascade.
    async fn delete_card(&self, card_id: Uuid) -> Result<(), Error>;

    /// Link a label to a card.
    async fn link_label(&self, card_id: Uuid, label_id: Uuid) -> Result<(), Error>;

    /// Remove a card-label link.
    async fn unlink_label(&self, card_id: Uuid, label_id: Uuid) -> Result<(), Error>;

    /// Assign a user to a card.
    async fn assign_user(&self, card_id: Uuid, user_id: UserId) -> Result<(), Error>;

    /// Remove a card assignment.
    async fn unassign_user(&self, card_id: Uuid, user_id: UserId) -> Result<(), Error>;
}

/// Fixture implementation echoing drafts back as persisted entities.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCardCommand;

#[async_trait]
impl CardCommand for FixtureCardCommand {
    async fn create_card(&self, draft: NewCard) -> Result<Card, Error> {
        let now = Utc::now();
        Ok(Card {
            id: Uuid::new_v4(),
            list_id: draft.list_id,
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            position: 0,
            is_archived: false,
            created_by: draft.created_by,
            created_at: now,
            updated_at: now,
        })
    }

    async fn patch_card(&self, card_id: Uuid, _patch: CardPatch) -> Result<Card, Error> {
        Err(Error::not_found(format!("card {card_id} not found")))
    }

    async fn move_card(&self, request: MoveCard) -> Result<Card, Error> {
        let now = Utc::now();
        Ok(Card {
            id: request.card_id,
            list_id: request.new_list_id,
            title: "fixture card".to_owned(),
            description: None,
            due_date: None,
            position: request.new_position,
            is_archived: false,
            created_by: UserId::random(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn delete_card(&self, _card_id: Uuid) -> Result<(), Error> {
        Ok(())
    }

    async fn link_label(&self, _card_id: Uuid, _label_id: Uuid) -> Result<(), Error> {
        Ok(())
    }

    async fn unlink_label(&self, _card_id: Uuid, _label_id: Uuid) -> Result<(), Error> {
        Ok(())
    }

    async fn assign_user(&self, _card_id: Uuid, _user_id: UserId) -> Result<(), Error> {
        Ok(())
    }

    async fn unassign_user(&self, _card_id: Uuid, _user_id: UserId) -> Result<(), Error> {
        Ok(())
    }
}
