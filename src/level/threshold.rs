//! Severity thresholds.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of severity levels.
pub const LEVEL_COUNT: usize = 7;

/// A severity level, ordered from least to most severe.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Threshold {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Critical = 5,
    Fatal = 6,
}

/// Errors produced when converting raw input into a [`Threshold`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdError {
    /// Ordinal outside `0..=6`.
    #[error("threshold ordinal {0} is out of range (expected 0..={max})", max = LEVEL_COUNT - 1)]
    OutOfRange(u8),

    /// Name that matches no level.
    #[error("unknown threshold `{0}`; expected trace|debug|info|warn|error|critical|fatal")]
    UnknownName(String),
}

impl Threshold {
    /// All levels, lowest severity first.
    pub const ALL: [Threshold; LEVEL_COUNT] = [
        Threshold::Trace,
        Threshold::Debug,
        Threshold::Info,
        Threshold::Warn,
        Threshold::Error,
        Threshold::Critical,
        Threshold::Fatal,
    ];

    /// The fixed uppercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Threshold::Trace => "TRACE",
            Threshold::Debug => "DEBUG",
            Threshold::Info => "INFO",
            Threshold::Warn => "WARN",
            Threshold::Error => "ERROR",
            Threshold::Critical => "CRITICAL",
            Threshold::Fatal => "FATAL",
        }
    }

    /// Position of the level in [`Threshold::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Threshold {
    type Error = ThresholdError;

    fn try_from(value: u8) -> Result<Self, ThresholdError> {
        Threshold::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(ThresholdError::OutOfRange(value))
    }
}

impl TryFrom<String> for Threshold {
    type Error = ThresholdError;

    fn try_from(value: String) -> Result<Self, ThresholdError> {
        value.parse()
    }
}

impl From<Threshold> for String {
    fn from(level: Threshold) -> Self {
        level.name().to_ascii_lowercase()
    }
}

impl From<Threshold> for u8 {
    fn from(level: Threshold) -> Self {
        level as u8
    }
}

impl FromStr for Threshold {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, ThresholdError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Threshold::Trace),
            "debug" => Ok(Threshold::Debug),
            "info" => Ok(Threshold::Info),
            "warn" | "warning" => Ok(Threshold::Warn),
            "error" => Ok(Threshold::Error),
            "critical" => Ok(Threshold::Critical),
            "fatal" => Ok(Threshold::Fatal),
            other => Err(ThresholdError::UnknownName(other.to_string())),
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
