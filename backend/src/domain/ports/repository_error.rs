//! Error type shared by the driven repository ports.

/// Failure raised by repository adapters.
///
/// Adapters collapse driver-specific failures into these categories; domain
/// services translate them into [`crate::domain::Error`] codes without ever
/// seeing driver types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// A connection could not be checked out or was lost mid-operation.
    #[error("repository connection failed: {message}")]
    Connection {
        /// Adapter-provided description, logged but never shown to clients.
        message: String,
    },
    /// A query or mutation failed during execution.
    #[error("repository query failed: {message}")]
    Query {
        /// Adapter-provided description, logged but never shown to clients.
        message: String,
    },
    /// A write referenced a parent row that does not exist.
    #[error("referenced {parent} does not exist")]
    MissingParent {
        /// Human-readable name of the referenced entity (e.g. `list`).
        parent: String,
    },
}

impl RepositoryError {
    /// Create a connection failure with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query failure with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a missing-parent failure for the named entity.
    pub fn missing_parent(parent: impl Into<String>) -> Self {
        Self::MissingParent {
            parent: parent.into(),
        }
    }
}

impl From<RepositoryError> for crate::domain::Error {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Connection { message } => {
                Self::service_unavailable(format!("task store unavailable: {message}"))
            }
            RepositoryError::Query { message } => {
                Self::internal(format!("task store error: {message}"))
            }
            RepositoryError::MissingParent { parent } => {
                Self::not_found(format!("{parent} not found"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Error, ErrorCode};

    #[test]
    fn maps_to_domain_error_codes() {
        assert_eq!(
            Error::from(RepositoryError::connection("down")).code(),
            ErrorCode::ServiceUnavailable
        );
        assert_eq!(
            Error::from(RepositoryError::query("broken sql")).code(),
            ErrorCode::InternalError
        );
        assert_eq!(
            Error::from(RepositoryError::missing_parent("list")).code(),
            ErrorCode::NotFound
        );
    }

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            RepositoryError::connection("pool exhausted").to_string(),
            "repository connection failed: pool exhausted"
        );
        assert_eq!(
            RepositoryError::missing_parent("list").to_string(),
            "referenced list does not exist"
        );
    }
}
