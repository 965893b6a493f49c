//! Unit tests for the card detail service.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::*;
use crate::domain::Card;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockCardDetailRepository, MockCardRepository};

fn existing_card(card_id: Uuid) -> Card {
    let now = Utc::now();
    Card {
        id: card_id,
        list_id: Uuid::new_v4(),
        title: "Send brief".to_owned(),
        description: None,
        due_date: None,
        position: 0,
        is_archived: false,
        created_by: UserId::random(),
        created_at: now,
        updated_at: now,
    }
}

fn cards_with_card() -> MockCardRepository {
    let mut cards = MockCardRepository::new();
    cards
        .expect_find_by_id()
        .returning(|id| Ok(Some(existing_card(id))));
    cards
}

#[tokio::test]
async fn comment_records_author_and_body() {
    let author = UserId::random();
    let expected_author = author.clone();

    let mut details = MockCardDetailRepository::new();
    details
        .expect_save_comment()
        .withf(move |comment: &Comment| {
            comment.author_id == expected_author && comment.body == "looks good"
        })
        .returning(|_| Ok(()));

    let service = CardDetailCommandService::new(Arc::new(cards_with_card()), Arc::new(details));
    let comment = service
        .add_comment(Uuid::new_v4(), author, "looks good".to_owned())
        .await
        .expect("add comment");
    assert_eq!(comment.body, "looks good");
}

#[tokio::test]
async fn blank_comment_is_rejected_before_storage() {
    let service = CardDetailCommandService::new(
        Arc::new(MockCardRepository::new()),
        Arc::new(MockCardDetailRepository::new()),
    );
    let err = service
        .add_comment(Uuid::new_v4(), UserId::random(), "  ".to_owned())
        .await
        .expect_err("blank body");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn checklist_is_appended_at_sibling_count() {
    let mut details = MockCardDetailRepository::new();
    details
        .expect_count_checklists_for_card()
        .returning(|_| Ok(2));
    details
        .expect_save_checklist()
        .withf(|checklist: &Checklist| checklist.position == 2)
        .returning(|_| Ok(()));

    let service = CardDetailCommandService::new(Arc::new(cards_with_card()), Arc::new(details));
    let checklist = service
        .add_checklist(Uuid::new_v4(), "QA pass".to_owned())
        .await
        .expect("add checklist");
    assert_eq!(checklist.position, 2);
}

#[tokio::test]
async fn checklist_item_requires_existing_checklist() {
    let mut details = MockCardDetailRepository::new();
    details.expect_find_checklist().returning(|_| Ok(None));

    let service = CardDetailCommandService::new(
        Arc::new(MockCardRepository::new()),
        Arc::new(details),
    );
    let err = service
        .add_checklist_item(Uuid::new_v4(), "Check copy".to_owned())
        .await
        .expect_err("unknown checklist");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn checklist_item_patch_toggles_completion() {
    let item_id = Uuid::new_v4();
    let mut details = MockCardDetailRepository::new();
    details.expect_find_item().returning(|id| {
        Ok(Some(ChecklistItem {
            id,
            checklist_id: Uuid::new_v4(),
            title: "Check copy".to_owned(),
            is_done: false,
            position: 0,
        }))
    });
    details
        .expect_update_item()
        .withf(|item: &ChecklistItem| item.is_done)
        .returning(|_| Ok(true));

    let service = CardDetailCommandService::new(
        Arc::new(MockCardRepository::new()),
        Arc::new(details),
    );
    let item = service
        .patch_checklist_item(
            item_id,
            ChecklistItemPatch {
                title: None,
                is_done: Some(true),
            },
        )
        .await
        .expect("patch item");
    assert!(item.is_done);
}

#[tokio::test]
async fn empty_item_patch_is_rejected() {
    let service = CardDetailCommandService::new(
        Arc::new(MockCardRepository::new()),
        Arc::new(MockCardDetailRepository::new()),
    );
    let err = service
        .patch_checklist_item(Uuid::new_v4(), ChecklistItemPatch::default())
        .await
        .expect_err("empty patch");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn negative_attachment_size_is_rejected() {
    let service = CardDetailCommandService::new(
        Arc::new(MockCardRepository::new()),
        Arc::new(MockCardDetailRepository::new()),
    );
    let err = service
        .add_attachment(NewAttachment {
            card_id: Uuid::new_v4(),
            file_name: "a1b2.pdf".to_owned(),
            original_name: "brief.pdf".to_owned(),
            mime_type: "application/pdf".to_owned(),
            byte_size: -10,
            url: "https://files.example.com/a1b2.pdf".to_owned(),
            uploaded_by: UserId::random(),
        })
        .await
        .expect_err("negative size");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn delete_attachment_reports_missing_row() {
    let mut details = MockCardDetailRepository::new();
    details.expect_delete_attachment().returning(|_| Ok(false));

    let service = CardDetailCommandService::new(
        Arc::new(MockCardRepository::new()),
        Arc::new(details),
    );
    let err = service
        .delete_attachment(Uuid::new_v4())
        .await
        .expect_err("missing attachment");
    assert_eq!(err.code(), ErrorCode::NotFound);
}
