//! Configuration errors raised by the parser.
//!
//! A URL that does not fit the template is not an error. It is reported as
//! [`MatchResult::NoMatch`](crate::MatchResult::NoMatch) instead.

use thiserror::Error;

use crate::config::loader::ConfigError;

/// Errors that can occur while setting up a match.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A required argument was empty or whitespace.
    #[error("Argument '{0}' expects a string that is not empty")]
    InvalidArgument(&'static str),

    /// The URL to match does not carry an origin.
    #[error("Url '{0}' is invalid. Url must start with an origin in the format of protocol://hostname:port")]
    RelativeUrl(String),

    /// The template could not be joined to the URL origin.
    #[error("Template '{template}' does not form an absolute url with origin '{origin}': {source}")]
    InvalidTemplate {
        template: String,
        origin: String,
        #[source]
        source: url::ParseError,
    },

    /// Options were rejected.
    #[error(transparent)]
    InvalidOptions(#[from] ConfigError),

    /// Two placeholders follow each other without a literal between them.
    #[error("{{variable}} tokens cannot be placed together: '{first}' and '{second}'")]
    ColocatedVariables { first: String, second: String },

    /// A placeholder id appears more than once in one template.
    #[error("Duplicate variable id '{0}'")]
    DuplicateVariable(String),

    /// Tokens do not cover a segment exactly.
    #[error("Tokenization failed for '{segment}': tokens cover {covered} of {expected} characters")]
    TokenizationMismatch {
        segment: String,
        covered: usize,
        expected: usize,
    },

    /// Percent-decoding produced invalid UTF-8.
    #[error("'{input}' is not valid UTF-8 once percent-decoded")]
    Decode {
        input: String,
        #[source]
        source: std::str::Utf8Error,
    },
}

impl ParseError {
    /// Returns true for errors caused by the template itself rather than the
    /// arguments of a particular call.
    pub fn is_template_error(&self) -> bool {
        matches!(
            self,
            ParseError::ColocatedVariables { .. }
                | ParseError::DuplicateVariable(_)
                | ParseError::InvalidTemplate { .. }
        )
    }
}
