//! Shared DTOs

use serde::{Deserialize, Serialize};

use core_kernel::CoreError;

use crate::error::ApiError;

/// Body of every successful write action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// JSON body carrying a single row id
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IdRequest {
    pub id: i64,
}

/// Reads the optional `id` field of an upsert form
///
/// Absent or blank means "create"; anything else must be an integer.
pub fn parse_form_id(raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    parse_optional_integer(raw, "id")
}

/// Reads an optional integer form field; absent or blank yields `None`
pub fn parse_optional_integer(raw: Option<&str>, field: &str) -> Result<Option<i64>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<i64>().map(Some).map_err(|_| {
            CoreError::validation(format!("{} must be an integer, got '{}'", field, value)).into()
        }),
    }
}

/// Blank optional text becomes `None`
pub fn non_blank(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_form_id_blank_means_create() {
        assert_eq!(parse_form_id(None).unwrap(), None);
        assert_eq!(parse_form_id(Some("")).unwrap(), None);
        assert_eq!(parse_form_id(Some("  ")).unwrap(), None);
    }

    #[test]
    fn test_form_id_parses_integer() {
        assert_eq!(parse_form_id(Some(" 12 ")).unwrap(), Some(12));
    }

    #[test]
    fn test_form_id_rejects_garbage() {
        let err = parse_form_id(Some("abc")).unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref m) if m.contains("id must be an integer")));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some("x".into())), Some("x".into()));
        assert_eq!(non_blank(None), None);
    }

    proptest! {
        #[test]
        fn prop_padded_integers_parse(n in any::<i64>(), pad in 0usize..4) {
            let raw = format!("{}{}{}", " ".repeat(pad), n, " ".repeat(pad));
            prop_assert_eq!(parse_optional_integer(Some(&raw), "numeroOperacion").unwrap(), Some(n));
        }

        #[test]
        fn prop_alphabetic_input_rejected(raw in "[a-zA-Z]{1,12}") {
            prop_assert!(parse_optional_integer(Some(&raw), "numeroOperacion").is_err());
        }
    }
}
