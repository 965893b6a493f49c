//! Shared helpers for Diesel repository implementations.
//!
//! Collapses pool and Diesel failures into [`RepositoryError`] values and
//! recognises foreign-key violations so a write against a missing parent
//! surfaces as a not-found rather than an opaque store error.

use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// Map pool errors to repository errors.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RepositoryError::connection(message)
        }
    }
}

/// Derive the referenced parent entity from a foreign-key constraint name.
///
/// Constraints follow the migration naming scheme
/// `<table>_<column>_fkey`, so the column tells us which entity the write
/// pointed at.
fn parent_from_constraint(constraint: Option<&str>) -> Option<&'static str> {
    let constraint = constraint?.to_lowercase();
    if constraint.contains("board_id") {
        Some("board")
    } else if constraint.contains("list_id") {
        Some("list")
    } else if constraint.contains("card_id") {
        Some("card")
    } else if constraint.contains("label_id") {
        Some("label")
    } else if constraint.contains("checklist_id") {
        Some("checklist")
    } else {
        None
    }
}

/// Map Diesel errors to repository errors, logging driver context.
pub(crate) fn map_diesel_error(error: diesel::result::Error, operation: &str) -> RepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
            match kind {
                DatabaseErrorKind::ForeignKeyViolation => {
                    match parent_from_constraint(info.constraint_name()) {
                        Some(parent) => RepositoryError::missing_parent(parent),
                        None => RepositoryError::query("foreign key violation"),
                    }
                }
                DatabaseErrorKind::ClosedConnection => {
                    RepositoryError::connection("database connection closed")
                }
                _ => RepositoryError::query("database error"),
            }
        }
        DieselError::NotFound => RepositoryError::query("record not found"),
        other => {
            debug!(error = %other, %operation, "diesel operation failed");
            RepositoryError::query("database error")
        }
    }
}
