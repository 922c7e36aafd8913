//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing (tokenize, check, match)
//!     → tracing events (debug / trace / warn)
//!     → subscriber installed by logging.rs, or by the host application
//! ```
//!
//! # Design Decisions
//! - The library only emits events; installing a subscriber is opt-in
//! - Filter comes from `RUST_LOG` when set

pub mod logging;
