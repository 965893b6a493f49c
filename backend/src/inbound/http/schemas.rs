//! OpenAPI schema wrappers for envelope shapes.
//!
//! These types exist only for documentation: they describe the wire shape
//! of failure and acknowledgement envelopes without coupling the domain
//! error type to any particular endpoint.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Error;

/// Failure envelope: `{ "success": false, "error": { ... } }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelopeSchema {
    /// Always `false`.
    #[schema(example = false)]
    pub success: bool,
    /// The failure payload.
    pub error: Error,
}

/// Acknowledgement envelope for operations with no payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct AckSchema {
    /// Always `true`.
    #[schema(example = true)]
    pub success: bool,
    /// Human-readable note.
    #[schema(example = "list deleted")]
    pub message: String,
}
