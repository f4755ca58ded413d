//! Leveled logging dispatch.
//!
//! A [`Notepad`] owns two thresholded sinks (interactive and durable), a set
//! of listeners, and one [`Logger`] per [`Threshold`]. Every reconfiguration
//! re-derives all handles and publishes them together.

pub mod config;
pub mod format;
pub mod global;
pub mod level;
pub mod listener;
pub mod notepad;
pub mod observability;
pub mod sink;

pub use config::{ConfigError, NotepadConfig};
pub use format::{Flags, Logger};
pub use level::{Threshold, ThresholdError, LEVEL_COUNT};
pub use listener::{level_counter, Counter, LevelCounter, Listener, SharedListener};
pub use notepad::{Feedback, Handles, Notepad, Settings, AUDIT_HEADER};
pub use sink::{Broadcast, Discard, MemorySink, SharedSink, SharedWriter, Sink};
