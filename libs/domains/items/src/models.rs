use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Maximum name length, counted in characters after trimming
pub const NAME_MAX_CHARS: usize = 100;

/// Custom validator for item names
///
/// Surrounding whitespace is not part of the name: `"  "` is empty and
/// `" x "` is stored as `"x"`.
fn validate_item_name(name: &str) -> Result<(), ValidationError> {
    let chars = name.trim().chars().count();

    if chars == 0 {
        return Err(ValidationError::new("blank").with_message("must not be empty".into()));
    }
    if chars > NAME_MAX_CHARS {
        return Err(ValidationError::new("length")
            .with_message(format!("must be at most {} characters", NAME_MAX_CHARS).into()));
    }
    Ok(())
}

/// A persisted item
///
/// Only the store creates items, so fields are read through accessors and
/// the type is serialize-only:
///
/// ```compile_fail
/// fn deserializable<T: serde::de::DeserializeOwned>() {}
/// deserializable::<domain_items::Item>();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Item {
    /// Store-assigned identifier, increasing in insertion order
    pub(crate) id: i64,
    /// Unique item name
    pub(crate) name: String,
    /// Optional free-text description
    pub(crate) description: Option<String>,
    /// Creation timestamp (UTC, microsecond precision)
    #[serde(serialize_with = "serialize_micros")]
    #[schema(value_type = String, format = DateTime)]
    pub(crate) created_at: DateTime<Utc>,
}

impl Item {
    pub(crate) fn new(
        id: i64,
        name: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// DTO for creating a new item
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    /// 1-100 characters after trimming; must be unique
    #[validate(custom(function = "validate_item_name"))]
    #[schema(example = "Sample Item")]
    pub name: String,
    /// Up to 1000 characters
    #[serde(default)]
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    #[schema(example = "This is a sample item")]
    pub description: Option<String>,
}

impl CreateItem {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }
}

/// ISO-8601 with exactly six fractional digits and a `Z` suffix,
/// e.g. `2024-05-01T12:00:00.123456Z`
fn serialize_micros<S: Serializer>(
    value: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Micros, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_valid_input() {
        assert!(CreateItem::new("Sample Item", None).validate().is_ok());
        assert!(CreateItem::new("a".repeat(100), Some("d".repeat(1000))).validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        for name in ["", "   ", "\t\n"] {
            let errors = CreateItem::new(name, None).validate().unwrap_err();
            assert!(errors.field_errors().contains_key("name"), "name {:?}", name);
        }
    }

    #[test]
    fn test_name_length_counted_after_trim() {
        assert!(CreateItem::new("a".repeat(101), None).validate().is_err());
        let padded = format!("  {}  ", "a".repeat(100));
        assert!(CreateItem::new(padded, None).validate().is_ok());
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        assert!(CreateItem::new("é".repeat(100), None).validate().is_ok());
    }

    #[test]
    fn test_description_too_long() {
        let errors = CreateItem::new("x", Some("d".repeat(1001)))
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn test_missing_description_deserializes_to_none() {
        let input: CreateItem = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(input.description, None);
    }

    #[test]
    fn test_item_json_shape() {
        let created_at = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .unwrap()
            .with_nanosecond(123_456_000)
            .unwrap();
        let item = Item::new(1, "Sample Item".into(), None, created_at);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Sample Item",
                "description": null,
                "created_at": "2024-05-01T12:00:00.123456Z"
            })
        );
    }
}
