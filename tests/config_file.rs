// tests/config_file.rs
use std::fs;
use std::time::Duration;

use surebet_scrape::config::file::load;
use surebet_scrape::config::options::{AppOptions, ExportFormat};
use surebet_scrape::error::ConfigError;

#[test]
fn missing_file_means_defaults() {
    let path = std::env::temp_dir().join("surebet_cfg_does_not_exist.toml");
    let _ = fs::remove_file(&path);
    assert_eq!(load(&path).unwrap(), AppOptions::default());
}

#[test]
fn file_overrides_defaults() {
    let path = std::env::temp_dir().join("surebet_cfg_override.toml");
    fs::write(
        &path,
        "[wait]\ntimeout_secs = 7\npoll_interval_ms = 100\n\n[export]\nformat = \"tsv\"\n\n[log]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let opts = load(&path).unwrap();
    assert_eq!(opts.wait.timeout, Duration::from_secs(7));
    assert_eq!(opts.wait.poll_interval, Duration::from_millis(100));
    assert_eq!(opts.export.format, ExportFormat::Tsv);
    assert_eq!(opts.log.level, "debug");
    assert_eq!(opts.extract, AppOptions::default().extract);
}

#[test]
fn malformed_file_is_an_error() {
    let path = std::env::temp_dir().join("surebet_cfg_bad.toml");
    fs::write(&path, "[wait\ntimeout_secs = ").unwrap();
    assert!(matches!(load(&path), Err(ConfigError::Parse(_))));
}
