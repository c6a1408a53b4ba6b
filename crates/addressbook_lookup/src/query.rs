use addressbook_core::{validate_search_terms, ValidationError};
use serde::Deserialize;

/// A query-style input that may arrive as a single value or as a repeated
/// parameter. Only the first value counts; the rest are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FieldInput {
    Single(String),
    Many(Vec<String>),
}

impl FieldInput {
    /// The value validation applies to: the first one supplied, if any.
    pub fn first_value(&self) -> &str {
        match self {
            FieldInput::Single(value) => value,
            FieldInput::Many(values) => values.first().map(String::as_str).unwrap_or(""),
        }
    }
}

/// Boundary validation for incoming query parameters: coerces each union to
/// its first value, then runs the pure field validator. The coercion lives
/// here so the validator itself stays a plain string predicate.
pub fn validate_query(
    postcode: &FieldInput,
    street_number: &FieldInput,
) -> Result<(), ValidationError> {
    validate_search_terms(postcode.first_value(), street_number.first_value()).map(|_| ())
}
