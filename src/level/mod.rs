//! Severity levels.
//!
//! # Design Decisions
//! - Seven levels fixed at compile time; no dynamic extension
//! - Comparison is by ordinal, so sink gating is a plain `>=`
//! - Raw ordinals and names are validated on conversion, never trusted

pub mod threshold;

pub use threshold::{Threshold, ThresholdError, LEVEL_COUNT};
