//! Unit tests for the list service.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::*;
use crate::domain::ports::{MockBoardRepository, MockListRepository};
use crate::domain::user::UserId;
use crate::domain::{Board, ErrorCode};

fn existing_board(board_id: Uuid) -> Board {
    let now = Utc::now();
    Board {
        id: board_id,
        name: "Production".to_owned(),
        description: None,
        company_id: Uuid::new_v4(),
        created_by: UserId::random(),
        is_archived: false,
        created_at: now,
        updated_at: now,
    }
}

fn boards_with_board() -> MockBoardRepository {
    let mut boards = MockBoardRepository::new();
    boards
        .expect_find_by_id()
        .returning(|id| Ok(Some(existing_board(id))));
    boards
}

#[tokio::test]
async fn new_list_is_appended_at_sibling_count() {
    let mut lists = MockListRepository::new();
    lists.expect_count_for_board().returning(|_| Ok(3));
    lists
        .expect_save()
        .withf(|list: &List| list.position == 3 && list.name == "Review")
        .returning(|_| Ok(()));

    let service = ListCommandService::new(Arc::new(boards_with_board()), Arc::new(lists));
    let list = service
        .create_list(NewList {
            board_id: Uuid::new_v4(),
            name: "Review".to_owned(),
        })
        .await
        .expect("create list");
    assert_eq!(list.position, 3);
}

#[tokio::test]
async fn first_list_gets_position_zero() {
    let mut lists = MockListRepository::new();
    lists.expect_count_for_board().returning(|_| Ok(0));
    lists
        .expect_save()
        .withf(|list: &List| list.position == 0)
        .returning(|_| Ok(()));

    let service = ListCommandService::new(Arc::new(boards_with_board()), Arc::new(lists));
    let list = service
        .create_list(NewList {
            board_id: Uuid::new_v4(),
            name: "Backlog".to_owned(),
        })
        .await
        .expect("create list");
    assert_eq!(list.position, 0);
}

#[tokio::test]
async fn blank_name_is_rejected_before_storage() {
    // No mock expectations: any repository call panics the test.
    let service = ListCommandService::new(
        Arc::new(MockBoardRepository::new()),
        Arc::new(MockListRepository::new()),
    );
    let err = service
        .create_list(NewList {
            board_id: Uuid::new_v4(),
            name: String::new(),
        })
        .await
        .expect_err("blank name rejected");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn create_list_requires_existing_board() {
    let mut boards = MockBoardRepository::new();
    boards.expect_find_by_id().returning(|_| Ok(None));

    let service = ListCommandService::new(Arc::new(boards), Arc::new(MockListRepository::new()));
    let err = service
        .create_list(NewList {
            board_id: Uuid::new_v4(),
            name: "Doing".to_owned(),
        })
        .await
        .expect_err("unknown board");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn rename_unknown_list_is_not_found() {
    let mut lists = MockListRepository::new();
    lists.expect_find_by_id().returning(|_| Ok(None));

    let service = ListCommandService::new(
        Arc::new(MockBoardRepository::new()),
        Arc::new(lists),
    );
    let err = service
        .rename_list(Uuid::new_v4(), "Done".to_owned())
        .await
        .expect_err("unknown list");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn delete_reports_missing_row() {
    let mut lists = MockListRepository::new();
    lists.expect_delete().returning(|_| Ok(false));

    let service = ListCommandService::new(
        Arc::new(MockBoardRepository::new()),
        Arc::new(lists),
    );
    let err = service
        .delete_list(Uuid::new_v4())
        .await
        .expect_err("missing list");
    assert_eq!(err.code(), ErrorCode::NotFound);
}
