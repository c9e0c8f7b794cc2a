// src/error.rs
use std::io;
use std::time::Duration;

use thiserror::Error;

/// Failures of the page/row source. Only these abort a run.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("table #{table_id} not found after {waited:?}")]
    TableNotFound { table_id: String, waited: Duration },

    #[error("could not load page: {0}")]
    Load(#[from] io::Error),
}

/// A cell lookup that failed at the driver level (stale or detached handle).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lookup of .{class} failed: {reason}")]
pub struct LookupError {
    pub class: String,
    pub reason: String,
}

impl LookupError {
    pub fn new(class: &str, reason: impl Into<String>) -> Self {
        Self { class: s!(class), reason: reason.into() }
    }
}

/// Why a single row produced no leg. Caught at the row boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowExtractionFailure {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("no .{class} inside .{cell}")]
    MissingNested { cell: String, class: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Read(#[from] io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
