// src/config/consts.rs

// Placeholder for any field that could not be located
pub const UNKNOWN: &str = "N/A";

// Page
pub const TABLE_ID: &str = "surebets-table";

// Markup vocabulary (CSS classes)
pub const CLASS_TERMINATOR: &str = "extra";
pub const CLASS_PROFIT: &str = "profit";
pub const CLASS_AGE: &str = "age";
pub const CLASS_EVENT: &str = "event";
pub const CLASS_BOOKER: &str = "booker";
pub const CLASS_MINOR: &str = "minor";
pub const CLASS_COEFF: &str = "coeff";
pub const CLASS_VALUE: &str = "value";
pub const CLASS_VALUE_LINK: &str = "value_link";
pub const CLASS_TIME: &str = "time";

// Rendered-text line breaks
pub const BLOCK_TAGS: &[&str] = &["div", "p", "li", "tr", "table"];

// Waiting for the table
pub const WAIT_TIMEOUT_SECS: u64 = 20;
pub const POLL_INTERVAL_MS: u64 = 250;

// Logging
pub const LOG_LEVEL: &str = "info";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "surebets";
