//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BoardCommand, BoardQuery, CardCommand, CardDetailCommand, FixtureBoardCommand,
    FixtureBoardQuery, FixtureCardCommand, FixtureCardDetailCommand, FixtureListCommand,
    FixtureLoginService, ListCommand, LoginService,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Login port issuing user identities.
    pub login: Arc<dyn LoginService>,
    /// Board read models.
    pub board_query: Arc<dyn BoardQuery>,
    /// Board and label mutations.
    pub boards: Arc<dyn BoardCommand>,
    /// List mutations.
    pub lists: Arc<dyn ListCommand>,
    /// Card mutations including the move protocol.
    pub cards: Arc<dyn CardCommand>,
    /// Comment, checklist, and attachment mutations.
    pub card_details: Arc<dyn CardDetailCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Login port issuing user identities.
    pub login: Arc<dyn LoginService>,
    /// Board read models.
    pub board_query: Arc<dyn BoardQuery>,
    /// Board and label mutations.
    pub boards: Arc<dyn BoardCommand>,
    /// List mutations.
    pub lists: Arc<dyn ListCommand>,
    /// Card mutations including the move protocol.
    pub cards: Arc<dyn CardCommand>,
    /// Comment, checklist, and attachment mutations.
    pub card_details: Arc<dyn CardDetailCommand>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        Self {
            login: ports.login,
            board_query: ports.board_query,
            boards: ports.boards,
            lists: ports.lists,
            cards: ports.cards,
            card_details: ports.card_details,
        }
    }

    /// State backed entirely by fixture ports.
    ///
    /// Used when no database is configured (local development without
    /// PostgreSQL) and as the baseline for handler tests.
    pub fn fixture() -> Self {
        Self::new(HttpStatePorts {
            login: Arc::new(FixtureLoginService),
            board_query: Arc::new(FixtureBoardQuery),
            boards: Arc::new(FixtureBoardCommand),
            lists: Arc::new(FixtureListCommand),
            cards: Arc::new(FixtureCardCommand),
            card_details: Arc::new(FixtureCardDetailCommand),
        })
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
