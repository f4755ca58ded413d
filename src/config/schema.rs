//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.
//! Every field has a default, so an empty file yields the default notepad.

use std::fmt;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::format::Flags;
use crate::level::Threshold;

/// Root configuration for a notepad.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NotepadConfig {
    /// Interactive output target.
    pub primary: SinkTarget,

    /// Durable or audit output target.
    pub secondary: SinkTarget,

    /// Lowest level written to the primary sink.
    pub primary_threshold: Threshold,

    /// Lowest level written to the secondary sink.
    pub secondary_threshold: Threshold,

    /// Prefix rendered as `[prefix] `; empty disables it.
    pub prefix: String,

    /// Line decoration.
    pub flags: FlagsConfig,
}

impl Default for NotepadConfig {
    fn default() -> Self {
        Self {
            primary: SinkTarget::Stdout,
            secondary: SinkTarget::Discard,
            primary_threshold: Threshold::Trace,
            secondary_threshold: Threshold::Info,
            prefix: String::new(),
            flags: FlagsConfig::default(),
        }
    }
}

/// Where a sink writes.
///
/// Written as a plain string: `"stdout"`, `"stderr"`, `"discard"`, or a file
/// path opened for append.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum SinkTarget {
    Stdout,
    Stderr,
    Discard,
    File(PathBuf),
}

impl From<String> for SinkTarget {
    fn from(value: String) -> Self {
        match value.trim() {
            "stdout" | "-" => SinkTarget::Stdout,
            "stderr" => SinkTarget::Stderr,
            "discard" | "none" => SinkTarget::Discard,
            _ => SinkTarget::File(PathBuf::from(value)),
        }
    }
}

impl From<SinkTarget> for String {
    fn from(target: SinkTarget) -> Self {
        target.to_string()
    }
}

impl fmt::Display for SinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkTarget::Stdout => f.write_str("stdout"),
            SinkTarget::Stderr => f.write_str("stderr"),
            SinkTarget::Discard => f.write_str("discard"),
            SinkTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Line decoration toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FlagsConfig {
    pub date: bool,
    pub time: bool,
    pub microseconds: bool,
    pub shortfile: bool,
    pub longfile: bool,
    pub utc: bool,
    pub prefix_at_line_start: bool,
}

impl Default for FlagsConfig {
    fn default() -> Self {
        Self::from(Flags::STANDARD)
    }
}

impl From<FlagsConfig> for Flags {
    fn from(config: FlagsConfig) -> Self {
        Flags::NONE
            .with(Flags::DATE, config.date)
            .with(Flags::TIME, config.time)
            .with(Flags::MICROSECONDS, config.microseconds)
            .with(Flags::SHORTFILE, config.shortfile)
            .with(Flags::LONGFILE, config.longfile)
            .with(Flags::UTC, config.utc)
            .with(Flags::PREFIX_AT_LINE_START, config.prefix_at_line_start)
    }
}

impl From<Flags> for FlagsConfig {
    fn from(flags: Flags) -> Self {
        Self {
            date: flags.contains(Flags::DATE),
            time: flags.contains(Flags::TIME),
            microseconds: flags.contains(Flags::MICROSECONDS),
            shortfile: flags.contains(Flags::SHORTFILE),
            longfile: flags.contains(Flags::LONGFILE),
            utc: flags.contains(Flags::UTC),
            prefix_at_line_start: flags.contains(Flags::PREFIX_AT_LINE_START),
        }
    }
}
