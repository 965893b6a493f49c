//! Builders wiring repositories and services into the HTTP state.

use std::sync::Arc;

use backend::domain::ports::FixtureLoginService;
use backend::domain::{
    BoardCommandService, BoardQueryService, CardCommandService, CardDetailCommandService,
    ListCommandService,
};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::outbound::persistence::{
    DbPool, DieselBoardRepository, DieselCardDetailRepository, DieselCardRepository,
    DieselListRepository,
};

use super::ServerConfig;

/// Build the HTTP state from the configuration.
///
/// With a pool, every port is backed by the Diesel repositories; without
/// one, fixture ports serve canned data. Login keeps the fixture
/// credential contract until a real identity provider is wired in.
pub fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => diesel_state(pool),
        None => HttpState::fixture(),
    }
}

fn diesel_state(pool: &DbPool) -> HttpState {
    let boards = Arc::new(DieselBoardRepository::new(pool.clone()));
    let lists = Arc::new(DieselListRepository::new(pool.clone()));
    let cards = Arc::new(DieselCardRepository::new(pool.clone()));
    let details = Arc::new(DieselCardDetailRepository::new(pool.clone()));

    HttpState::new(HttpStatePorts {
        login: Arc::new(FixtureLoginService),
        board_query: Arc::new(BoardQueryService::new(
            boards.clone(),
            lists.clone(),
            cards.clone(),
            details.clone(),
        )),
        boards: Arc::new(BoardCommandService::new(boards.clone())),
        lists: Arc::new(ListCommandService::new(boards, lists.clone())),
        cards: Arc::new(CardCommandService::new(lists, cards.clone())),
        card_details: Arc::new(CardDetailCommandService::new(cards, details)),
    })
}
