//! Argument guards.
//!
//! # Responsibilities
//! - Decide whether a dynamic value is null or empty
//! - Check that a value has an expected kind
//! - Check that every element of a list has an expected kind
//! - Check that strings belong to a fixed set of allowed values
//!
//! # Design Decisions
//! - Pure checks: no logging, no side effects
//! - Guards report pass/fail; callers pick the error to raise
//! - A whitespace-only string counts as empty

use serde_json::Value;
use thiserror::Error;

/// The kinds of value a guard can check for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Object,
    Array,
    Number,
    Boolean,
}

/// Raised when the input to a guard is itself unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("Elements to be checked cannot be null or empty")]
    EmptyElement,
}

/// Returns true if `value` is null, a whitespace-only string, an empty array
/// or an empty object. Numbers and booleans are never empty.
pub fn is_null_or_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Number(_) | Value::Bool(_) => false,
    }
}

/// Checks that `value` is of `kind`.
///
/// Empty values (see [`is_null_or_empty`]) pass only when `allow_empty` is
/// set, and fail otherwise regardless of their kind.
pub fn is_of_kind(value: &Value, kind: ValueKind, allow_empty: bool) -> bool {
    if is_null_or_empty(value) {
        return allow_empty;
    }

    match kind {
        ValueKind::String => value.is_string(),
        ValueKind::Object => value.is_object(),
        ValueKind::Array => value.is_array(),
        ValueKind::Number => value.is_number(),
        ValueKind::Boolean => value.is_boolean(),
    }
}

/// Checks that every element of `items` is of `kind`.
///
/// An empty element is an error rather than a failed check, even when it
/// comes after an element of the wrong kind.
pub fn are_elements_of_kind(items: &[Value], kind: ValueKind) -> Result<bool, GuardError> {
    if items.iter().any(is_null_or_empty) {
        return Err(GuardError::EmptyElement);
    }
    Ok(items.iter().all(|item| is_of_kind(item, kind, false)))
}

/// Checks that every element of `items` is a string from `allowed`, ignoring
/// case. A non-string element fails the check.
///
/// An empty element is an error rather than a failed check.
pub fn are_elements_of_enum(items: &[Value], allowed: &[&str]) -> Result<bool, GuardError> {
    if !are_elements_of_kind(items, ValueKind::String)? {
        return Ok(false);
    }

    let allowed: Vec<String> = allowed.iter().map(|v| v.to_uppercase()).collect();
    Ok(items
        .iter()
        .filter_map(Value::as_str)
        .all(|item| allowed.contains(&item.to_uppercase())))
}

/// String guard used for required text arguments.
pub fn is_non_empty_str(value: &str) -> bool {
    !value.trim().is_empty()
}
