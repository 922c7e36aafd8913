//! Options validation.
//!
//! # Responsibilities
//! - Options must be an object (or absent)
//! - Every key must name a known option
//! - Each option value must have the right kind
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Value → Result<(), Vec<ValidationError>>
//! - Runs before options are accepted

use serde_json::Value;
use thiserror::Error;

use crate::config::schema::VALID_OPTIONS;
use crate::validation::{are_elements_of_enum, is_null_or_empty, is_of_kind, GuardError, ValueKind};

/// A single problem found in an options value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Argument 'options' expects an object")]
    NotAnObject,

    #[error("Argument 'options' contains invalid option '{key}'. Valid options are {valid}")]
    UnknownOption { key: String, valid: String },

    #[error("Argument 'options.{0}' expects boolean")]
    NotBoolean(String),

    #[error("Argument 'options' contains an empty key")]
    EmptyKey(#[source] GuardError),
}

/// Validate a dynamic options value.
pub fn validate_options(value: &Value) -> Result<(), Vec<ValidationError>> {
    if !is_of_kind(value, ValueKind::Object, true) {
        return Err(vec![ValidationError::NotAnObject]);
    }

    let Value::Object(map) = value else {
        // null or empty: defaults apply
        return Ok(());
    };

    let mut errors = Vec::new();

    for (key, option) in map {
        match are_elements_of_enum(&[Value::String(key.clone())], VALID_OPTIONS) {
            Ok(true) => {}
            Ok(false) => {
                errors.push(ValidationError::UnknownOption {
                    key: key.clone(),
                    valid: VALID_OPTIONS.join(", "),
                });
                continue;
            }
            Err(e) => {
                errors.push(ValidationError::EmptyKey(e));
                continue;
            }
        }

        if !is_null_or_empty(option) && !is_of_kind(option, ValueKind::Boolean, false) {
            errors.push(ValidationError::NotBoolean(key.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
