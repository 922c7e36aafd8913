//! Template routing subsystem.
//!
//! # Data Flow
//! ```text
//! parse_url(template, url, options)
//!     → router.rs (argument checks, template normalization)
//!     → location.rs (decode template and url parts)
//!     → tokenizer.rs (path, query and hash tokens)
//!     → template.rs (assembly + structural checks)
//!     → matcher.rs (walk tokens over the url)
//!     → Return: Matched(variables) or NoMatch
//! ```
//!
//! # Design Decisions
//! - Every stage is a pure function and can be tested on its own
//! - Templates are tokenized per call; callers may keep a `TemplateTokens`
//! - Deterministic: same input always gives the same result
//! - First occurrence wins; there is no backtracking

pub mod location;
pub mod matcher;
pub mod result;
pub mod router;
pub mod template;
pub mod token;
pub mod tokenizer;
