//! Configuration files applied to a running notepad.

use std::fs;
use std::sync::Arc;
use notepad::config::{load_config, ConfigWatcher, SinkTarget};
use notepad::{level_counter, ConfigError, Counter, Notepad, Threshold};

#[test]
fn test_from_config_writes_file_sink() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("app.log");
    let config_path = dir.path().join("notepad.toml");
    fs::write(
        &config_path,
        format!(
            "primary = \"discard\"\nsecondary = {:?}\nsecondary_threshold = \"warn\"\nprefix = \"svc\"\n\n[flags]\ndate = false\ntime = false\n",
            log_path.display().to_string()
        ),
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();
    assert_eq!(config.secondary, SinkTarget::File(log_path.clone()));

    let notepad = Notepad::from_config(&config).unwrap();
    notepad.info().print("skipped");
    notepad.warn().print("kept");

    assert_eq!(fs::read_to_string(&log_path).unwrap(), "[svc] WARN kept\n");
}

#[test]
fn test_reload_keeps_listeners() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("notepad.toml");
    fs::write(&config_path, "primary = \"discard\"\n").unwrap();

    let counter = Arc::new(Counter::new());
    let notepad = Arc::new(Notepad::from_config(&load_config(&config_path).unwrap()).unwrap());
    notepad.set_listeners(vec![Arc::new(level_counter(counter.clone(), Threshold::Warn))]);

    fs::write(&config_path, "primary = \"discard\"\nprimary_threshold = \"fatal\"\n").unwrap();
    ConfigWatcher::new(&config_path, notepad.clone()).reload().unwrap();

    assert_eq!(notepad.primary_threshold(), Threshold::Fatal);
    notepad.warn().print("observed");
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_failed_reload_keeps_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("notepad.toml");
    fs::write(&config_path, "primary = \"discard\"\nprefix = \"one\"\n").unwrap();
    let notepad = Arc::new(Notepad::from_config(&load_config(&config_path).unwrap()).unwrap());

    fs::write(&config_path, "prefix = \"two\"\nsecondary = \"\"\n").unwrap();
    let err = ConfigWatcher::new(&config_path, notepad.clone()).reload().unwrap_err();

    assert!(matches!(err, ConfigError::Validation(_)));
    assert_eq!(notepad.prefix(), "[one] ");
}
