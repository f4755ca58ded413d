//! Level listeners.
//!
//! # Responsibilities
//! - Let external code observe a level independently of sink thresholds
//! - Provide a reference listener that counts events per level floor
//!
//! # Design Decisions
//! - One-method capability; closures are listeners through a blanket impl
//! - Queried for every level at every re-derivation, never at emit time
//! - Returned writers are called without any locking by the notepad

use std::sync::Arc;
use crate::level::Threshold;
use crate::sink::SharedSink;

pub mod counter;

pub use counter::{level_counter, Counter, LevelCounter};

/// Observer consulted once per level when a notepad derives its handles.
pub trait Listener: Send + Sync {
    /// Returns the writer that should receive lines emitted at `level`, or
    /// `None` when the listener is not interested in that level.
    fn select(&self, level: Threshold) -> Option<SharedSink>;
}

impl<F> Listener for F
where
    F: Fn(Threshold) -> Option<SharedSink> + Send + Sync,
{
    fn select(&self, level: Threshold) -> Option<SharedSink> {
        self(level)
    }
}

/// Reference-counted listener, as stored by a notepad.
pub type SharedListener = Arc<dyn Listener>;
