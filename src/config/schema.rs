//! Option definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::loader::ConfigError;
use crate::config::validation::validate_options;

pub const IGNORE_TRAILING_SLASH: &str = "ignoreTrailingSlash";

/// Option keys accepted in dynamic options.
pub const VALID_OPTIONS: &[&str] = &[IGNORE_TRAILING_SLASH];

/// Options for a single [`parse_url`](crate::parse_url) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// When set, a trailing slash missing from either the template or the url
    /// is added before matching.
    pub ignore_trailing_slash: bool,
}

impl ParseOptions {
    /// Options with `ignore_trailing_slash` set.
    pub fn ignore_trailing_slash() -> Self {
        Self {
            ignore_trailing_slash: true,
        }
    }

    /// Build options from a dynamic value.
    ///
    /// `null` and `{}` give the defaults. Validation accepts a key in any
    /// case, but only the exact spelling sets an option.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        validate_options(value).map_err(ConfigError::Validation)?;

        let flag = |key: &str| value.get(key).and_then(Value::as_bool).unwrap_or(false);

        Ok(Self {
            ignore_trailing_slash: flag(IGNORE_TRAILING_SLASH),
        })
    }
}
