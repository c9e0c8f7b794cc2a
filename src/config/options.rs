// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub wait: WaitOptions,
    pub extract: ExtractOptions,
    pub export: ExportOptions,
    pub log: LogOptions,
}

/* ---------------- Waiting for the page ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitOptions {
    pub table_id: String,
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            table_id: s!(TABLE_ID),
            timeout: Duration::from_secs(WAIT_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
        }
    }
}

/* ---------------- Extraction ---------------- */

/// Class names the extractor looks for. Swap these to follow markup changes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Markup {
    pub terminator: String,
    pub profit: String,
    pub age: String,
    pub event: String,
    pub booker: String,
    pub minor: String,
    pub coeff: String,
    pub value: String,
    pub value_link: String,
    pub time: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            terminator: s!(CLASS_TERMINATOR),
            profit: s!(CLASS_PROFIT),
            age: s!(CLASS_AGE),
            event: s!(CLASS_EVENT),
            booker: s!(CLASS_BOOKER),
            minor: s!(CLASS_MINOR),
            coeff: s!(CLASS_COEFF),
            value: s!(CLASS_VALUE),
            value_link: s!(CLASS_VALUE_LINK),
            time: s!(CLASS_TIME),
        }
    }
}

/// What to do with an event cell found on a leg row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegEventPolicy {
    /// Leg rows never carry an event.
    Ignore,
    /// Keep the leg's event only if it names something other than the summary.
    #[default]
    WhenDifferent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub markup: Markup,
    pub leg_event: LegEventPolicy,
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
    #[default]
    Text,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json | ExportFormat::Text => None,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" => Ok(ExportFormat::Text),
            other => Err(format!("Unknown format: {}", other)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Text => "text",
            other => other.ext(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// `None` writes to stdout.
    pub out: Option<PathBuf>,
    pub include_headers: bool,
}

impl ExportOptions {
    /// `surebets.<ext>` for the current format.
    pub fn file_name(&self) -> String {
        format!("{}.{}", DEFAULT_FILE, self.format.ext())
    }

    /// Default file location for the current format: `out/surebets.<ext>`.
    pub fn default_path(&self) -> PathBuf {
        PathBuf::from(DEFAULT_OUT_DIR).join(self.file_name())
    }
}

/* ---------------- Logging ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogOptions {
    pub level: String,
    /// `None` logs to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self { level: s!(LOG_LEVEL), file: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!(" tsv ".parse::<ExportFormat>(), Ok(ExportFormat::Tsv));
        assert_eq!("txt".parse::<ExportFormat>(), Ok(ExportFormat::Text));
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn default_path_follows_format() {
        let mut export = ExportOptions::default();
        export.format = ExportFormat::Json;
        assert!(export.default_path().to_string_lossy().ends_with("surebets.json"));
        export.format = ExportFormat::Tsv;
        assert!(export.default_path().to_string_lossy().ends_with("surebets.tsv"));
    }
}
