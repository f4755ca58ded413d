//! Process-wide default notepad.
//!
//! A thin adapter over one shared [`Notepad`]: stdout at Trace, no secondary
//! sink (Info threshold), no prefix, date and time decoration. Every function
//! here delegates to the installed instance, so accessors always return the
//! current generation of handles.

use std::sync::Arc;
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use crate::format::{Flags, Logger};
use crate::level::Threshold;
use crate::listener::SharedListener;
use crate::notepad::{Feedback, Notepad};
use crate::sink::{self, SharedSink};

static DEFAULT: Lazy<ArcSwap<Notepad>> = Lazy::new(|| ArcSwap::from_pointee(default_notepad()));

fn default_notepad() -> Notepad {
    Notepad::new(
        Some(sink::shared(std::io::stdout())),
        None,
        Threshold::Trace,
        Threshold::Info,
        "",
        Flags::STANDARD,
        Vec::new(),
    )
}

/// The installed instance.
pub fn notepad() -> Arc<Notepad> {
    DEFAULT.load_full()
}

/// Install `notepad` as the process-wide instance.
pub fn init(notepad: Notepad) {
    DEFAULT.store(Arc::new(notepad));
}

/// Restore the default instance.
pub fn reset() {
    init(default_notepad());
}

pub fn set_primary_sink(sink: Option<SharedSink>) {
    DEFAULT.load().set_primary_sink(sink);
}

pub fn set_secondary_sink(sink: Option<SharedSink>) {
    DEFAULT.load().set_secondary_sink(sink);
}

pub fn set_primary_threshold(threshold: Threshold) {
    DEFAULT.load().set_primary_threshold(threshold);
}

pub fn set_secondary_threshold(threshold: Threshold) {
    DEFAULT.load().set_secondary_threshold(threshold);
}

pub fn set_prefix(prefix: &str) {
    DEFAULT.load().set_prefix(prefix);
}

pub fn set_flags(flags: Flags) {
    DEFAULT.load().set_flags(flags);
}

pub fn set_listeners(listeners: Vec<SharedListener>) {
    DEFAULT.load().set_listeners(listeners);
}

pub fn primary_threshold() -> Threshold {
    DEFAULT.load().primary_threshold()
}

pub fn secondary_threshold() -> Threshold {
    DEFAULT.load().secondary_threshold()
}

pub fn logger(level: Threshold) -> Arc<Logger> {
    DEFAULT.load().logger(level)
}

pub fn trace() -> Arc<Logger> {
    logger(Threshold::Trace)
}

pub fn debug() -> Arc<Logger> {
    logger(Threshold::Debug)
}

pub fn info() -> Arc<Logger> {
    logger(Threshold::Info)
}

pub fn warn() -> Arc<Logger> {
    logger(Threshold::Warn)
}

pub fn error() -> Arc<Logger> {
    logger(Threshold::Error)
}

pub fn critical() -> Arc<Logger> {
    logger(Threshold::Critical)
}

pub fn fatal() -> Arc<Logger> {
    logger(Threshold::Fatal)
}

pub fn audit() -> Arc<Logger> {
    DEFAULT.load().audit()
}

pub fn feedback() -> Arc<Feedback> {
    DEFAULT.load().feedback()
}
