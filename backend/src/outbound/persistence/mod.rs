//! PostgreSQL persistence adapter.
//!
//! One Diesel-backed implementation per repository port, plus the shared
//! connection pool and embedded migrations. Row structs stay private to
//! this module.

mod diesel_board_repository;
mod diesel_card_detail_repository;
mod diesel_card_repository;
mod diesel_helpers;
mod diesel_list_repository;
mod migrations;
mod models;
mod pool;
pub mod schema;

pub use diesel_board_repository::DieselBoardRepository;
pub use diesel_card_detail_repository::DieselCardDetailRepository;
pub use diesel_card_repository::DieselCardRepository;
pub use diesel_list_repository::DieselListRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbConnection, DbPool, PoolConfig, PoolError, build_pool};
