// src/config/file.rs
//
// Optional TOML config. Every key is optional; anything left out keeps its
// default. Example:
//
//   [wait]
//   table_id = "surebets-table"
//   timeout_secs = 20
//
//   [extract]
//   leg_event = "ignore"
//   [extract.markup]
//   terminator = "extra"
//
//   [export]
//   format = "csv"
//   out = "out/surebets.csv"
//   include_headers = true
//
//   [log]
//   level = "debug"
//   file = ".store/debug.log"

use std::{fs, path::Path, path::PathBuf, time::Duration};

use serde::Deserialize;

use super::options::{AppOptions, ExportFormat, LegEventPolicy, Markup};
use crate::error::ConfigError;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    wait: WaitSection,
    extract: ExtractSection,
    export: ExportSection,
    log: LogSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct WaitSection {
    table_id: Option<String>,
    timeout_secs: Option<u64>,
    poll_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ExtractSection {
    leg_event: Option<LegEventPolicy>,
    markup: Option<Markup>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ExportSection {
    format: Option<ExportFormat>,
    out: Option<PathBuf>,
    include_headers: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LogSection {
    level: Option<String>,
    file: Option<PathBuf>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Overlay the keys present in the file onto `opts`.
    pub fn apply(self, opts: &mut AppOptions) {
        let ConfigFile { wait, extract, export, log } = self;

        if let Some(id) = wait.table_id { opts.wait.table_id = id; }
        if let Some(secs) = wait.timeout_secs { opts.wait.timeout = Duration::from_secs(secs); }
        if let Some(ms) = wait.poll_interval_ms { opts.wait.poll_interval = Duration::from_millis(ms); }

        if let Some(policy) = extract.leg_event { opts.extract.leg_event = policy; }
        if let Some(markup) = extract.markup { opts.extract.markup = markup; }

        if let Some(format) = export.format { opts.export.format = format; }
        if let Some(out) = export.out { opts.export.out = Some(out); }
        if let Some(h) = export.include_headers { opts.export.include_headers = h; }

        if let Some(level) = log.level { opts.log.level = level; }
        if let Some(file) = log.file { opts.log.file = Some(file); }
    }
}

/// Load options from `path`. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<AppOptions, ConfigError> {
    let mut opts = AppOptions::default();
    if !path.exists() {
        logd!("Config {} not found; using defaults", path.display());
        return Ok(opts);
    }
    let text = fs::read_to_string(path)?;
    ConfigFile::parse(&text)?.apply(&mut opts);
    Ok(opts)
}
