//! Shared validation helpers for inbound HTTP requests.
//!
//! Requests arrive with optional fields so a missing value can be reported
//! as a structured validation error instead of a deserialisation failure;
//! these helpers do the unwrapping and parsing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use uuid::Uuid;

use crate::domain::{Error, UserId};

/// Error for a required field that was absent.
pub(crate) fn missing_field_error(field: &'static str) -> Error {
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

fn invalid_uuid_error(field: &'static str, value: &str) -> Error {
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_uuid",
    }))
}

/// Unwrap a required field or report it as missing.
pub(crate) fn require_field<T>(value: Option<T>, field: &'static str) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Parse a UUID field.
pub(crate) fn parse_uuid(value: String, field: &'static str) -> Result<Uuid, Error> {
    Uuid::parse_str(&value).map_err(|_| invalid_uuid_error(field, &value))
}

/// Parse a list of UUIDs, reporting the offending index on failure.
pub(crate) fn parse_uuid_list(
    values: Vec<String>,
    field: &'static str,
) -> Result<Vec<Uuid>, Error> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            Uuid::parse_str(&value).map_err(|_| {
                Error::invalid_request(format!("{field} must contain valid UUIDs")).with_details(
                    json!({
                        "field": field,
                        "index": index,
                        "value": value,
                        "code": "invalid_uuid",
                    }),
                )
            })
        })
        .collect()
}

/// Parse a user id field.
pub(crate) fn parse_user_id(value: String, field: &'static str) -> Result<UserId, Error> {
    UserId::new(&value).map_err(|_| invalid_uuid_error(field, &value))
}

/// Parse a list of user ids.
pub(crate) fn parse_user_id_list(
    values: Vec<String>,
    field: &'static str,
) -> Result<Vec<UserId>, Error> {
    parse_uuid_list(values, field)
        .map(|ids| ids.into_iter().map(UserId::from_uuid).collect())
}

/// Parse an RFC 3339 timestamp field.
pub(crate) fn parse_rfc3339(value: String, field: &'static str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(&value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| {
            Error::invalid_request(format!("{field} must be an RFC 3339 timestamp")).with_details(
                json!({
                    "field": field,
                    "value": value,
                    "code": "invalid_timestamp",
                }),
            )
        })
}

/// Deserialiser distinguishing an absent field from an explicit `null`.
///
/// Pair with `#[serde(default)]`: a missing field stays `None`, an explicit
/// `null` becomes `Some(None)` (clear the value), and a value becomes
/// `Some(Some(value))`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Deserialize;

    use super::*;
    use crate::domain::ErrorCode;

    #[test]
    fn missing_field_reports_name() {
        let err = require_field(None::<String>, "boardId").expect_err("missing");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            err.details().and_then(|details| details.get("field")),
            Some(&serde_json::json!("boardId"))
        );
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    fn invalid_uuid_is_rejected(#[case] value: &str) {
        assert!(parse_uuid(value.to_owned(), "listId").is_err());
    }

    #[test]
    fn uuid_list_reports_offending_index() {
        let err = parse_uuid_list(
            vec![Uuid::nil().to_string(), "broken".to_owned()],
            "labelIds",
        )
        .expect_err("invalid entry");
        assert_eq!(
            err.details().and_then(|details| details.get("index")),
            Some(&serde_json::json!(1))
        );
    }

    #[test]
    fn rfc3339_timestamps_normalise_to_utc() {
        let parsed =
            parse_rfc3339("2026-03-01T10:00:00+02:00".to_owned(), "dueDate").expect("valid");
        assert_eq!(parsed.to_rfc3339(), "2026-03-01T08:00:00+00:00");
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        description: Option<Option<String>>,
    }

    #[rstest]
    #[case("{}", None)]
    #[case(r#"{"description": null}"#, Some(None))]
    #[case(r#"{"description": "x"}"#, Some(Some("x".to_owned())))]
    fn double_option_distinguishes_null_from_absent(
        #[case] json: &str,
        #[case] expected: Option<Option<String>>,
    ) {
        let patch: Patch = serde_json::from_str(json).expect("deserialise");
        assert_eq!(patch.description, expected);
    }
}
