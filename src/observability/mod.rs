//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! notepad internals produce:
//!     → tracing events (re-derivation, swallowed write failures, reloads)
//!
//! Consumers:
//!     → logging.rs installs a stderr subscriber filtered by RUST_LOG
//! ```
//!
//! # Design Decisions
//! - Library code only emits `tracing` events; installing a subscriber is the
//!   binary's decision
//! - Diagnostics go to stderr so they never mix with notepad output on stdout

pub mod logging;
