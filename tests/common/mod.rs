//! Shared utilities for integration tests.

use std::sync::Arc;
use notepad::{Flags, MemorySink, Notepad, SharedListener, Threshold};

/// Captured output of both sinks.
pub struct Capture {
    pub primary: MemorySink,
    pub secondary: MemorySink,
}

/// Build a notepad writing both sinks to memory, with no decoration.
pub fn capture_notepad(
    primary_threshold: Threshold,
    secondary_threshold: Threshold,
    prefix: &str,
    listeners: Vec<SharedListener>,
) -> (Notepad, Capture) {
    let capture = Capture {
        primary: MemorySink::new(),
        secondary: MemorySink::new(),
    };
    let notepad = Notepad::new(
        Some(Arc::new(capture.primary.clone())),
        Some(Arc::new(capture.secondary.clone())),
        primary_threshold,
        secondary_threshold,
        prefix,
        Flags::NONE,
        listeners,
    );
    (notepad, capture)
}

/// Emit one line at every level, the message being the level name in lowercase.
#[allow(dead_code)]
pub fn emit_every_level(notepad: &Notepad) {
    for level in Threshold::ALL {
        notepad.logger(level).print(String::from(level));
    }
}
