//! Match options.
//!
//! # Data Flow
//! ```text
//! ParseOptions built in code
//!     → used directly by parse_url
//!
//! options from JSON / TOML / file
//!     → loader.rs (parse into a dynamic value)
//!     → validation.rs (kind and key checks)
//!     → ParseOptions
//! ```
//!
//! # Design Decisions
//! - Every option has a default, so an absent or empty options value is valid
//! - Validation reports every problem, not just the first
//! - Unknown keys are rejected rather than ignored

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ParseOptions;
