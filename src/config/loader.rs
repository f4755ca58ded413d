//! Configuration loading from disk.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::config::schema::{NotepadConfig, SinkTarget};
use crate::config::validation::{validate_config, ValidationError};
use crate::format::Flags;
use crate::notepad::Settings;
use crate::sink::{self, SharedSink};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("cannot open sink `{}`: {source}", path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<NotepadConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<NotepadConfig, ConfigError> {
    let config: NotepadConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Open the sinks named by `config` and build notepad settings from it.
pub fn build_settings(config: &NotepadConfig) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();
    settings.primary_sink = open_sink(&config.primary)?;
    settings.secondary_sink = open_sink(&config.secondary)?;
    settings.primary_threshold = config.primary_threshold;
    settings.secondary_threshold = config.secondary_threshold;
    settings.flags = Flags::from(config.flags);
    settings.set_prefix(&config.prefix);
    Ok(settings)
}

/// Open `target`. Discard maps to an absent sink.
pub fn open_sink(target: &SinkTarget) -> Result<Option<SharedSink>, ConfigError> {
    let sink = match target {
        SinkTarget::Stdout => sink::shared(io::stdout()),
        SinkTarget::Stderr => sink::shared(io::stderr()),
        SinkTarget::Discard => return Ok(None),
        SinkTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ConfigError::SinkOpen {
                    path: path.clone(),
                    source,
                })?;
            sink::shared(file)
        }
    };
    Ok(Some(sink))
}
