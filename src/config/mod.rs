//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → NotepadConfig (validated)
//!     → loader::build_settings opens the sinks
//!     → Notepad::from_config / Notepad::apply_config
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → Notepad::apply_config re-derives all handles at once
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - A failed reload leaves the running configuration untouched
//! - Listeners are code, not configuration; reloads keep them

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{FlagsConfig, NotepadConfig, SinkTarget};
pub use validation::ValidationError;
pub use watcher::ConfigWatcher;
