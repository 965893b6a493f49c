//! Response envelope shared by every REST endpoint.
//!
//! Successful responses serialise as `{ "success": true, "data": ...,
//! "message"?: ... }`; failures are produced by the error adapter as
//! `{ "success": false, "error": { ... } }`. Clients branch on `success`
//! without inspecting HTTP status codes.

use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope wrapping a response payload.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Envelope<T> {
    /// Always `true` for this type; failures use the error envelope.
    pub success: bool,
    /// Operation result, omitted for acknowledgement-only responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Optional human-readable note, mostly on mutations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Wrap a payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Wrap a payload with a note.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

/// Acknowledgement envelope for operations with no payload.
pub type Ack = Envelope<()>;

impl Ack {
    /// Acknowledge without a payload.
    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn payload_envelope_serialises_success_and_data() {
        let value =
            serde_json::to_value(Envelope::ok(json!({ "id": 1 }))).expect("serialise envelope");
        assert_eq!(value, json!({ "success": true, "data": { "id": 1 } }));
    }

    #[test]
    fn acknowledgement_omits_data() {
        let value = serde_json::to_value(Ack::acknowledged("list deleted"))
            .expect("serialise envelope");
        assert_eq!(
            value,
            json!({ "success": true, "message": "list deleted" })
        );
        assert_eq!(value.get("data"), None::<&Value>);
    }
}
