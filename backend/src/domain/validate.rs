//! Input guards shared by the domain services.

use serde_json::json;

use crate::domain::Error;

/// Require a non-blank text field, returning the value unchanged.
///
/// Blank means empty after trimming; surrounding whitespace on otherwise
/// valid input is preserved.
pub fn require_non_blank(field: &'static str, value: String) -> Result<String, Error> {
    if value.trim().is_empty() {
        return Err(
            Error::invalid_request(format!("{field} must not be blank"))
                .with_details(json!({ "field": field })),
        );
    }
    Ok(value)
}

/// Convert a sibling count into the position of a new trailing sibling.
///
/// Creation always appends at the end, so the new position equals the
/// current count. Counts beyond `i32::MAX` cannot be represented in the
/// position column and are reported as internal errors.
pub fn append_position(count: i64) -> Result<i32, Error> {
    i32::try_from(count)
        .map_err(|_| Error::internal(format!("sibling count {count} exceeds position range")))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_values_are_rejected(#[case] value: &str) {
        let err = require_non_blank("name", value.to_owned()).expect_err("blank rejected");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.details(), Some(&serde_json::json!({ "field": "name" })));
    }

    #[test]
    fn non_blank_value_passes_through_unchanged() {
        let value = require_non_blank("name", "  Launch plan  ".to_owned()).expect("valid");
        assert_eq!(value, "  Launch plan  ");
    }

    #[rstest]
    #[case(0, 0)]
    #[case(7, 7)]
    fn append_position_equals_count(#[case] count: i64, #[case] expected: i32) {
        assert_eq!(append_position(count).expect("in range"), expected);
    }

    #[test]
    fn oversized_count_is_an_internal_error() {
        let err = append_position(i64::from(i32::MAX) + 1).expect_err("out of range");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
