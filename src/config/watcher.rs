//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use crate::config::loader::{load_config, ConfigError};
use crate::notepad::Notepad;

/// Watches a configuration file and applies every valid revision to a notepad.
pub struct ConfigWatcher {
    path: PathBuf,
    notepad: Arc<Notepad>,
}

impl ConfigWatcher {
    pub fn new(path: &Path, notepad: Arc<Notepad>) -> Self {
        Self {
            path: path.to_path_buf(),
            notepad,
        }
    }

    /// Load the file once and apply it.
    pub fn reload(&self) -> Result<(), ConfigError> {
        reload(&self.path, &self.notepad)
    }

    /// Start watching the file on notify's background thread.
    ///
    /// The returned watcher must be kept alive; dropping it stops the watch.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();
        let notepad = self.notepad.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading...");
                        if let Err(e) = reload(&path, &notepad) {
                            tracing::error!(
                                "Failed to reload config: {}. Keeping current configuration.",
                                e
                            );
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

fn reload(path: &Path, notepad: &Notepad) -> Result<(), ConfigError> {
    let config = load_config(path)?;
    notepad.apply_config(&config)?;
    tracing::info!(
        path = ?path,
        primary_threshold = %config.primary_threshold,
        secondary_threshold = %config.secondary_threshold,
        "notepad configuration applied"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Threshold;
    use std::fs;

    #[test]
    fn test_reload_applies_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notepad.toml");
        fs::write(&path, "primary = \"discard\"\nprimary_threshold = \"error\"\nprefix = \"w\"").unwrap();

        let notepad = Arc::new(Notepad::from_settings(Default::default()));
        let watcher = ConfigWatcher::new(&path, notepad.clone());
        watcher.reload().unwrap();

        assert_eq!(notepad.primary_threshold(), Threshold::Error);
        assert_eq!(notepad.prefix(), "[w] ");
    }

    #[test]
    fn test_invalid_revision_keeps_current() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notepad.toml");
        fs::write(&path, "primary_threshold = \"loud\"").unwrap();

        let notepad = Arc::new(Notepad::from_settings(Default::default()));
        let watcher = ConfigWatcher::new(&path, notepad.clone());
        assert!(matches!(watcher.reload(), Err(ConfigError::Parse(_))));
        assert_eq!(notepad.primary_threshold(), Threshold::Trace);
    }
}
