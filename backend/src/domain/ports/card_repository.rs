//! Port for card persistence, including label links and assignments.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Card, Label, UserId};

use super::RepositoryError;

/// Port for writing and reading cards and their join relations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Persist a freshly created card together with its initial label links
    /// and assignments in one transaction; partial failure must leave no
    /// card row behind.
    async fn save_with_links(
        &self,
        card: &Card,
        label_ids: &[Uuid],
        assignee_ids: &[UserId],
    ) -> Result<(), RepositoryError>;

    /// Find a card by id.
    async fn find_by_id(&self, card_id: Uuid) -> Result<Option<Card>, RepositoryError>;

    /// Cards belonging to any of the given lists, in storage order.
    async fn cards_for_lists(&self, list_ids: &[Uuid]) -> Result<Vec<Card>, RepositoryError>;

    /// Number of cards on a list; feeds append-at-end position computation.
    async fn count_for_list(&self, list_id: Uuid) -> Result<i64, RepositoryError>;

    /// Overwrite a card's mutable fields. Returns `false` when no row
    /// matched the id.
    async fn update(&self, card: &Card) -> Result<bool, RepositoryError>;

    /// Rewrite list membership and position in a single-row update. Returns
    /// `false` when no row matched the id.
    async fn relocate(
        &self,
        card_id: Uuid,
        list_id: Uuid,
        position: i32,
        moved_at: DateTime<Utc>,
    ) -> Result<bool, RepositoryError>;

    /// Delete a card; dependents fall to the schema cascade. Returns
    /// `false` when no row matched the id.
    async fn delete(&self, card_id: Uuid) -> Result<bool, RepositoryError>;

    /// Link a label to a card.
    async fn link_label(&self, card_id: Uuid, label_id: Uuid) -> Result<(), RepositoryError>;

    /// Remove a card-label link. Returns `false` when the link did not
    /// exist.
    async fn unlink_label(&self, card_id: Uuid, label_id: Uuid) -> Result<bool, RepositoryError>;

    /// Assign a user to a card.
    async fn assign_user(&self, card_id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;

    /// Remove a card assignment. Returns `false` when the assignment did
    /// not exist.
    async fn unassign_user(&self, card_id: Uuid, user_id: &UserId)
    -> Result<bool, RepositoryError>;

    /// Labels linked to any of the given cards, keyed by card id.
    async fn labels_for_cards(
        &self,
        card_ids: &[Uuid],
    ) -> Result<Vec<(Uuid, Label)>, RepositoryError>;

    /// Users assigned to any of the given cards, keyed by card id.
    async fn assignees_for_cards(
        &self,
        card_ids: &[Uuid],
    ) -> Result<Vec<(Uuid, UserId)>, RepositoryError>;
}

/// Fixture implementation for tests that do not exercise card persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCardRepository;

#[async_trait]
impl CardRepository for FixtureCardRepository {
    async fn save_with_links(
        &self,
        _card: &Card,
        _label_ids: &[Uuid],
        _assignee_ids: &[UserId],
    ) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn find_by_id(&self, _card_id: Uuid) -> Result<Option<Card>, RepositoryError> {
        Ok(None)
    }

    async fn cards_for_lists(&self, _list_ids: &[Uuid]) -> Result<Vec<Card>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn count_for_list(&self, _list_id: Uuid) -> Result<i64, RepositoryError> {
        Ok(0)
    }

    async fn update(&self, _card: &Card) -> Result<bool, RepositoryError> {
        Ok(true)
    }

    async fn relocate(
        &self,
        _card_id: Uuid,
        _list_id: Uuid,
        _position: i32,
        _moved_at: DateTime<Utc>,
    ) -> Result<bool, RepositoryError> {
        Ok(true)
    }

    async fn delete(&self, _card_id: Uuid) -> Result<bool, RepositoryError> {
        Ok(true)
    }

    async fn link_label(&self, _card_id: Uuid, _label_id: Uuid) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn unlink_label(
        &self,
        _card_id: Uuid,
        _label_id: Uuid,
    ) -> Result<bool, RepositoryError> {
        Ok(true)
    }

    async fn assign_user(&self, _card_id: Uuid, _user_id: &UserId) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn unassign_user(
        &self,
        _card_id: Uuid,
        _user_id: &UserId,
    ) -> Result<bool, RepositoryError> {
        Ok(true)
    }

    async fn labels_for_cards(
        &self,
        _card_ids: &[Uuid],
    ) -> Result<Vec<(Uuid, Label)>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn assignees_for_cards(
        &self,
        _card_ids: &[Uuid],
    ) -> Result<Vec<(Uuid, UserId)>, RepositoryError> {
        Ok(Vec::new())
    }
}
