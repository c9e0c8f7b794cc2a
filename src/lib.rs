// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod source;

pub mod csv;
pub mod file;
pub mod progress;
pub mod report;
pub mod scrape;

#[cfg(feature = "cli")]
pub mod cli;

pub use data::{EventLabel, GroupSummary, Leg, Record};
pub use error::{LookupError, RowExtractionFailure, SourceError};
pub use scrape::{collect, extract_records, ExtractStats, Extraction};
