//! Client-side field validation.
//!
//! Every field is checked independently and every violation is collected;
//! nothing short-circuits. The result replaces the previous error map
//! wholesale.

use std::sync::LazyLock;

use regex::Regex;

use crate::form::{ErrorMap, FormState};
use crate::schema::{FieldSpec, FormSchema, Rule};

// Both patterns are literals, so compilation cannot fail at runtime.
#[allow(clippy::expect_used)]
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

#[allow(clippy::expect_used)]
static MOBILE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s-]{10,15}$").expect("mobile pattern is valid"));

/// Validate every field of `schema` against `state`.
#[must_use]
pub fn validate(schema: &FormSchema, state: &FormState) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for field in schema.fields() {
        if let Some(message) = check_field(field, state.get(field.name)) {
            errors.insert(field.name, message);
        }
    }
    errors
}

/// Check one value against its field's rule, returning the error if any.
#[must_use]
pub fn check_field(field: &FieldSpec, value: &str) -> Option<&'static str> {
    let blank = value.trim().is_empty();
    match field.rule {
        Rule::Optional => None,
        Rule::Required => blank.then_some(field.required_message),
        Rule::Email => {
            if blank {
                Some(field.required_message)
            } else if !is_email(value) {
                Some(field.invalid_message())
            } else {
                None
            }
        }
        Rule::Mobile => {
            if blank {
                Some(field.required_message)
            } else if !is_mobile(value) {
                Some(field.invalid_message())
            } else {
                None
            }
        }
        Rule::Choice(options) => {
            if blank {
                Some(field.required_message)
            } else if !options.iter().any(|c| c.value == value) {
                Some(field.invalid_message())
            } else {
                None
            }
        }
        Rule::Description { min_chars } => {
            (value.trim().chars().count() < min_chars).then_some(field.required_message)
        }
    }
}

/// At least one non-space, `@`, at least one non-space, `.`, at least one
/// non-space, anywhere in the value.
#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Optional leading `+`, then 10 to 15 digits, spaces or hyphens and
/// nothing else.
#[must_use]
pub fn is_mobile(value: &str) -> bool {
    MOBILE_SHAPE.is_match(value)
}
