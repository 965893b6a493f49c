//! Unit tests for the card service and its move protocol.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::*;
use crate::domain::List;
use crate::domain::ports::{MockCardRepository, MockListRepository};
use crate::domain::{ErrorCode, NewCard};

fn existing_list(list_id: Uuid) -> List {
    List {
        id: list_id,
        board_id: Uuid::new_v4(),
        name: "In progress".to_owned(),
        position: 0,
        is_archived: false,
    }
}

fn existing_card(card_id: Uuid, list_id: Uuid, position: i32) -> Card {
    let now = Utc::now();
    Card {
        id: card_id,
        list_id,
        title: "Draft social assets".to_owned(),
        description: None,
        due_date: None,
        position,
        is_archived: false,
        created_by: UserId::random(),
        created_at: now,
        updated_at: now,
    }
}

fn lists_with_list() -> MockListRepository {
    let mut lists = MockListRepository::new();
    lists
        .expect_find_by_id()
        .returning(|id| Ok(Some(existing_list(id))));
    lists
}

fn draft(list_id: Uuid) -> NewCard {
    NewCard {
        list_id,
        title: "Draft social assets".to_owned(),
        description: None,
        due_date: None,
        label_ids: vec![],
        assignee_ids: vec![],
        created_by: UserId::random(),
    }
}

#[tokio::test]
async fn first_card_on_empty_list_gets_position_zero() {
    let mut cards = MockCardRepository::new();
    cards.expect_count_for_list().returning(|_| Ok(0));
    cards
        .expect_save_with_links()
        .withf(|card: &Card, _, _| card.position == 0)
        .returning(|_, _, _| Ok(()));

    let service = CardCommandService::new(Arc::new(lists_with_list()), Arc::new(cards));
    let card = service.create_card(draft(Uuid::new_v4())).await.expect("create");
    assert_eq!(card.position, 0);
}

#[tokio::test]
async fn new_card_is_appended_at_sibling_count() {
    let mut cards = MockCardRepository::new();
    cards.expect_count_for_list().returning(|_| Ok(5));
    cards
        .expect_save_with_links()
        .withf(|card: &Card, _, _| card.position == 5)
        .returning(|_, _, _| Ok(()));

    let service = CardCommandService::new(Arc::new(lists_with_list()), Arc::new(cards));
    let card = service.create_card(draft(Uuid::new_v4())).await.expect("create");
    assert_eq!(card.position, 5);
}

#[tokio::test]
async fn create_card_forwards_labels_and_assignees_to_one_save() {
    let label = Uuid::new_v4();
    let assignee = UserId::random();
    let expected_assignee = assignee.clone();

    let mut cards = MockCardRepository::new();
    cards.expect_count_for_list().returning(|_| Ok(0));
    cards
        .expect_save_with_links()
        .withf(move |_, labels: &[Uuid], assignees: &[UserId]| {
            labels == [label].as_slice() && assignees == [expected_assignee.clone()].as_slice()
        })
        .returning(|_, _, _| Ok(()));

    let service = CardCommandService::new(Arc::new(lists_with_list()), Arc::new(cards));
    let mut card_draft = draft(Uuid::new_v4());
    card_draft.label_ids = vec![label];
    card_draft.assignee_ids = vec![assignee];
    service.create_card(card_draft).await.expect("create");
}

#[tokio::test]
async fn blank_title_is_rejected_before_storage() {
    let service = CardCommandService::new(
        Arc::new(MockListRepository::new()),
        Arc::new(MockCardRepository::new()),
    );
    let mut card_draft = draft(Uuid::new_v4());
    card_draft.title = "  ".to_owned();
    let err = service.create_card(card_draft).await.expect_err("blank title");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

// Scenario from the board contract: dragging the only card of one list onto
// a list that already holds two cards appends it at position 2.
#[tokio::test]
async fn move_appends_card_to_destination_list() {
    let card_id = Uuid::new_v4();
    let source_list = Uuid::new_v4();
    let destination_list = Uuid::new_v4();

    let mut cards = MockCardRepository::new();
    cards
        .expect_find_by_id()
        .returning(move |id| Ok(Some(existing_card(id, source_list, 0))));
    cards
        .expect_relocate()
        .withf(move |id, list_id, position, _| {
            *id == card_id && *list_id == destination_list && *position == 2
        })
        .returning(|_, _, _, _| Ok(true));

    let service = CardCommandService::new(Arc::new(lists_with_list()), Arc::new(cards));
    let moved = service
        .move_card(MoveCard {
            card_id,
            new_list_id: destination_list,
            new_position: 2,
        })
        .await
        .expect("move");

    assert_eq!(moved.list_id, destination_list);
    assert_eq!(moved.position, 2);
}

#[tokio::test]
async fn move_within_same_list_rewrites_position_only() {
    let card_id = Uuid::new_v4();
    let list_id = Uuid::new_v4();

    let mut cards = MockCardRepository::new();
    cards
        .expect_find_by_id()
        .returning(move |id| Ok(Some(existing_card(id, list_id, 1))));
    cards.expect_relocate().returning(|_, _, _, _| Ok(true));

    let service = CardCommandService::new(Arc::new(lists_with_list()), Arc::new(cards));
    let moved = service
        .move_card(MoveCard {
            card_id,
            new_list_id: list_id,
            new_position: 3,
        })
        .await
        .expect("move");

    assert_eq!(moved.list_id, list_id);
    assert_eq!(moved.position, 3);
}

#[tokio::test]
async fn negative_position_is_rejected_before_storage() {
    let service = CardCommandService::new(
        Arc::new(MockListRepository::new()),
        Arc::new(MockCardRepository::new()),
    );
    let err = service
        .move_card(MoveCard {
            card_id: Uuid::new_v4(),
            new_list_id: Uuid::new_v4(),
            new_position: -1,
        })
        .await
        .expect_err("negative position");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn moving_unknown_card_is_not_found() {
    let mut cards = MockCardRepository::new();
    cards.expect_find_by_id().returning(|_| Ok(None));

    let service = CardCommandService::new(Arc::new(MockListRepository::new()), Arc::new(cards));
    let err = service
        .move_card(MoveCard {
            card_id: Uuid::new_v4(),
            new_list_id: Uuid::new_v4(),
            new_position: 0,
        })
        .await
        .expect_err("unknown card");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn moving_to_unknown_list_is_not_found() {
    let mut cards = MockCardRepository::new();
    cards
        .expect_find_by_id()
        .returning(|id| Ok(Some(existing_card(id, Uuid::new_v4(), 0))));

    let mut lists = MockListRepository::new();
    lists.expect_find_by_id().returning(|_| Ok(None));

    let service = CardCommandService::new(Arc::new(lists), Arc::new(cards));
    let err = service
        .move_card(MoveCard {
            card_id: Uuid::new_v4(),
            new_list_id: Uuid::new_v4(),
            new_position: 0,
        })
        .await
        .expect_err("unknown destination");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn unlinking_missing_label_is_not_found() {
    let mut cards = MockCardRepository::new();
    cards.expect_unlink_label().returning(|_, _| Ok(false));

    let service = CardCommandService::new(Arc::new(MockListRepository::new()), Arc::new(cards));
    let err = service
        .unlink_label(Uuid::new_v4(), Uuid::new_v4())
        .await
        .expect_err("missing link");
    assert_eq!(err.code(), ErrorCode::NotFound);
}
