//! The notepad: two thresholded sinks, listeners, and one handle per level.
//!
//! # Data Flow
//! ```text
//! setter / update / apply_config
//!     → Settings mutated under the settings lock
//!     → derive.rs builds a complete Handles generation
//!     → ArcSwap::store publishes it in one pointer swap
//!
//! emit:
//!     → handles.load() (lock-free)
//!     → Logger for the level
//!     → destination (sinks and/or listener writers)
//! ```
//!
//! # Design Decisions
//! - Emitters never see a half-built generation; the swap is the only publication point
//! - Setters are serialized by the settings lock, so the published generation
//!   always matches the latest settings
//! - Getters read the published generation and never take the settings lock,
//!   so listeners may query their notepad while it is being re-derived.
//!   A listener must not call a setter from `select`.
//! - Handles are snapshots: a retained `Arc<Logger>` keeps writing to the
//!   destinations it was derived with. Fetch the handle again after
//!   reconfiguring to follow the new configuration.
//! - Sinks are shared, never closed here

use std::fmt;
use std::panic::Location;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use arc_swap::ArcSwap;
use crate::config::loader::{build_settings, ConfigError};
use crate::config::NotepadConfig;
use crate::format::{Flags, Logger};
use crate::level::Threshold;
use crate::listener::SharedListener;
use crate::sink::SharedSink;

pub mod derive;
pub mod feedback;

pub use derive::{Handles, AUDIT_HEADER};
pub use feedback::Feedback;

/// Configuration a notepad derives its handles from.
///
/// Absent sinks behave like discard destinations.
#[derive(Clone)]
pub struct Settings {
    /// Interactive output.
    pub primary_sink: Option<SharedSink>,
    /// Durable or audit output.
    pub secondary_sink: Option<SharedSink>,
    pub primary_threshold: Threshold,
    pub secondary_threshold: Threshold,
    pub flags: Flags,
    /// Listeners, queried in order.
    pub listeners: Vec<SharedListener>,
    prefix: String,
}

impl Settings {
    /// The normalized prefix: empty, or `"[prefix] "`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Set the prefix. A non-empty prefix is rendered in brackets.
    pub fn set_prefix(&mut self, prefix: &str) {
        self.prefix = normalize_prefix(prefix);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            primary_sink: None,
            secondary_sink: None,
            primary_threshold: Threshold::Trace,
            secondary_threshold: Threshold::Info,
            flags: Flags::STANDARD,
            listeners: Vec::new(),
            prefix: String::new(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("primary_sink", &self.primary_sink.is_some())
            .field("secondary_sink", &self.secondary_sink.is_some())
            .field("primary_threshold", &self.primary_threshold)
            .field("secondary_threshold", &self.secondary_threshold)
            .field("flags", &self.flags)
            .field("listeners", &self.listeners.len())
            .field("prefix", &self.prefix)
            .finish()
    }
}

fn normalize_prefix(prefix: &str) -> String {
    if prefix.is_empty() {
        String::new()
    } else {
        format!("[{prefix}] ")
    }
}

/// Leveled logger routing each level to its admitted sinks and listeners.
pub struct Notepad {
    settings: Mutex<Settings>,
    handles: ArcSwap<Handles>,
}

impl Notepad {
    /// Create a notepad and derive its first generation of handles.
    pub fn new(
        primary_sink: Option<SharedSink>,
        secondary_sink: Option<SharedSink>,
        primary_threshold: Threshold,
        secondary_threshold: Threshold,
        prefix: &str,
        flags: Flags,
        listeners: Vec<SharedListener>,
    ) -> Self {
        let mut settings = Settings {
            primary_sink,
            secondary_sink,
            primary_threshold,
            secondary_threshold,
            flags,
            listeners,
            prefix: String::new(),
        };
        settings.set_prefix(prefix);
        Self::from_settings(settings)
    }

    /// Create a notepad from prepared settings.
    pub fn from_settings(settings: Settings) -> Self {
        let handles = derive::derive(&settings);
        Self {
            settings: Mutex::new(settings),
            handles: ArcSwap::from_pointee(handles),
        }
    }

    /// Create a notepad from a loaded configuration, opening its sinks.
    pub fn from_config(config: &NotepadConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_settings(build_settings(config)?))
    }

    /// Replace sinks, thresholds, prefix and flags from `config` in a single
    /// re-derivation. Listeners are kept.
    ///
    /// Sinks are opened before anything changes; on error the current
    /// configuration stays in place.
    pub fn apply_config(&self, config: &NotepadConfig) -> Result<(), ConfigError> {
        let fresh = build_settings(config)?;
        self.update(|settings| {
            settings.primary_sink = fresh.primary_sink;
            settings.secondary_sink = fresh.secondary_sink;
            settings.primary_threshold = fresh.primary_threshold;
            settings.secondary_threshold = fresh.secondary_threshold;
            settings.flags = fresh.flags;
            settings.prefix = fresh.prefix;
        });
        Ok(())
    }

    /// Apply any number of changes, then re-derive once.
    ///
    /// Listeners are queried while the settings lock is held; calling a setter
    /// from inside `Listener::select` blocks forever.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.lock_settings();
        f(&mut settings);
        self.handles.store(Arc::new(derive::derive(&settings)));
        tracing::debug!(
            primary_threshold = %settings.primary_threshold,
            secondary_threshold = %settings.secondary_threshold,
            listeners = settings.listeners.len(),
            "notepad handles re-derived"
        );
    }

    pub fn set_primary_sink(&self, sink: Option<SharedSink>) {
        self.update(|s| s.primary_sink = sink);
    }

    pub fn set_secondary_sink(&self, sink: Option<SharedSink>) {
        self.update(|s| s.secondary_sink = sink);
    }

    pub fn set_primary_threshold(&self, threshold: Threshold) {
        self.update(|s| s.primary_threshold = threshold);
    }

    pub fn set_secondary_threshold(&self, threshold: Threshold) {
        self.update(|s| s.secondary_threshold = threshold);
    }

    /// Set the prefix; an empty prefix disables bracketing.
    pub fn set_prefix(&self, prefix: &str) {
        self.update(|s| s.set_prefix(prefix));
    }

    pub fn set_flags(&self, flags: Flags) {
        self.update(|s| s.flags = flags);
    }

    /// Replace the whole listener set.
    pub fn set_listeners(&self, listeners: Vec<SharedListener>) {
        self.update(|s| s.listeners = listeners);
    }

    pub fn primary_threshold(&self) -> Threshold {
        self.handles.load().settings().primary_threshold
    }

    pub fn secondary_threshold(&self) -> Threshold {
        self.handles.load().settings().secondary_threshold
    }

    /// The normalized prefix.
    pub fn prefix(&self) -> String {
        self.handles.load().settings().prefix.clone()
    }

    pub fn flags(&self) -> Flags {
        self.handles.load().settings().flags
    }

    /// Copy of the settings behind the current generation.
    pub fn settings(&self) -> Settings {
        self.handles.load().settings().clone()
    }

    /// The current generation of handles.
    pub fn handles(&self) -> Arc<Handles> {
        self.handles.load_full()
    }

    /// Handle for `level` from the current generation.
    pub fn logger(&self, level: Threshold) -> Arc<Logger> {
        self.handles.load().level(level).clone()
    }

    pub fn trace(&self) -> Arc<Logger> {
        self.logger(Threshold::Trace)
    }

    pub fn debug(&self) -> Arc<Logger> {
        self.logger(Threshold::Debug)
    }

    pub fn info(&self) -> Arc<Logger> {
        self.logger(Threshold::Info)
    }

    pub fn warn(&self) -> Arc<Logger> {
        self.logger(Threshold::Warn)
    }

    pub fn error(&self) -> Arc<Logger> {
        self.logger(Threshold::Error)
    }

    pub fn critical(&self) -> Arc<Logger> {
        self.logger(Threshold::Critical)
    }

    pub fn fatal(&self) -> Arc<Logger> {
        self.logger(Threshold::Fatal)
    }

    /// Audit handle: secondary sink only, no listeners.
    pub fn audit(&self) -> Arc<Logger> {
        self.handles.load().audit().clone()
    }

    pub fn feedback(&self) -> Arc<Feedback> {
        self.handles.load().feedback().clone()
    }

    /// Emit at `level` through the current generation.
    #[track_caller]
    pub fn emit(&self, level: Threshold, args: fmt::Arguments<'_>) {
        let location = Location::caller();
        self.handles.load().level(level).output(location, &fmt::format(args));
    }

    fn lock_settings(&self) -> MutexGuard<'_, Settings> {
        self.settings.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Notepad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notepad")
            .field("settings", self.handles.load().settings())
            .finish_non_exhaustive()
    }
}
