//! Url template matching.
//!
//! Matches a concrete url against a route template such as
//! `/books/{bookid}/{chapter}/?author={author}#{section}` and extracts the
//! values of its `{variable}` placeholders.
//!
//! - Placeholders may appear in the path, query values and hash
//! - Placeholder ids cannot contain whitespace and must be unique
//! - Two placeholders must be separated by literal text
//! - The url must be absolute; its origin is ignored
//! - Matching is case sensitive and extra trailing text in the url is ignored
//! - Extracted values are raw strings and may be empty
//!
//! ```
//! use url_template_matcher::{parse_url, ParseOptions};
//!
//! let result = parse_url(
//!     "/books/{bookid}/?author={author}",
//!     "https://localhost:3000/books/12/?author=tolkien",
//!     &ParseOptions::default(),
//! )
//! .unwrap();
//!
//! assert!(result.is_match());
//! assert_eq!(result.get("bookid"), Some("12"));
//! assert_eq!(result.get("author"), Some("tolkien"));
//! ```

pub mod config;
pub mod error;
pub mod observability;
pub mod routing;
pub mod validation;

pub use config::ParseOptions;
pub use error::ParseError;
pub use routing::result::{MatchResult, Variables};
pub use routing::router::{parse_url, parse_url_with_value};
pub use routing::template::TemplateTokens;
pub use routing::token::Token;
