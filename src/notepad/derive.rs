//! Re-derivation of the per-level handles.
//!
//! # Algorithm
//! ```text
//! for level in TRACE..=FATAL:
//!     base  = both sinks | secondary | primary | discard   (by the two thresholds)
//!     extra = listener.select(level) for each listener, in order, skipping None
//!     dest  = base                       if extra is empty
//!           = Broadcast[base, extra...]  otherwise
//!     handle = Logger(prefix + NAME + " ", dest, flags)
//! ```
//!
//! Thresholds gate only the sinks. Listeners are asked about every level.

use std::sync::Arc;
use crate::format::{Flags, Logger};
use crate::level::{Threshold, LEVEL_COUNT};
use crate::notepad::feedback::Feedback;
use crate::notepad::Settings;
use crate::sink::{self, Broadcast, SharedSink};

/// Header of the audit handle.
pub const AUDIT_HEADER: &str = "LOG:    ";

/// One complete generation of handles, built from a single settings snapshot.
///
/// A generation is immutable. Reconfiguring a notepad publishes a new one.
#[derive(Debug)]
pub struct Handles {
    levels: [Arc<Logger>; LEVEL_COUNT],
    audit: Arc<Logger>,
    feedback: Arc<Feedback>,
    settings: Settings,
}

impl Handles {
    /// Handle for `level`.
    pub fn level(&self, level: Threshold) -> &Arc<Logger> {
        &self.levels[level.index()]
    }

    /// Handle writing only to the secondary sink under [`AUDIT_HEADER`].
    pub fn audit(&self) -> &Arc<Logger> {
        &self.audit
    }

    pub fn feedback(&self) -> &Arc<Feedback> {
        &self.feedback
    }

    /// The settings this generation was derived from.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

pub(crate) fn derive(settings: &Settings) -> Handles {
    let levels = Threshold::ALL.map(|level| {
        let header = format!("{}{} ", settings.prefix(), level.name());
        Arc::new(Logger::new(destination(settings, level), header, settings.flags))
    });

    let audit = Arc::new(Logger::new(
        settings.secondary_sink.clone().unwrap_or_else(sink::discard),
        AUDIT_HEADER,
        settings.flags,
    ));
    let plain = settings
        .primary_sink
        .clone()
        .map(|sink| Arc::new(Logger::new(sink, "", Flags::NONE)));
    let feedback = Feedback::new(settings.secondary_sink.as_ref().map(|_| audit.clone()), plain);

    Handles {
        levels,
        audit,
        feedback: Arc::new(feedback),
        settings: settings.clone(),
    }
}

fn destination(settings: &Settings, level: Threshold) -> SharedSink {
    let base = base_destination(settings, level);
    let observers: Vec<SharedSink> = settings
        .listeners
        .iter()
        .filter_map(|listener| listener.select(level))
        .collect();

    if observers.is_empty() {
        return base;
    }
    let mut targets = Vec::with_capacity(observers.len() + 1);
    targets.push(base);
    targets.extend(observers);
    Arc::new(Broadcast::new(targets))
}

fn base_destination(settings: &Settings, level: Threshold) -> SharedSink {
    let admitted = [
        (level >= settings.primary_threshold, &settings.primary_sink),
        (level >= settings.secondary_threshold, &settings.secondary_sink),
    ];
    let mut targets: Vec<SharedSink> = admitted
        .into_iter()
        .filter(|(admit, _)| *admit)
        .filter_map(|(_, sink)| sink.clone())
        .collect();

    match targets.len() {
        0 => sink::discard(),
        1 => targets.remove(0),
        _ => Arc::new(Broadcast::new(targets)),
    }
}
