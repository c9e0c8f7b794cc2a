// src/progress.rs
use crate::error::RowExtractionFailure;

/// Lightweight progress reporting for an extraction pass.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of rows in the table.
    fn begin(&mut self, _rows: usize) {}

    /// Free-form status line for human eyes (table wait, row count).
    fn log(&mut self, _msg: &str) {}

    /// Called when one group has been processed; `legs` may be zero.
    fn group_done(&mut self, _group: usize, _legs: usize) {}

    /// A row was dropped because it could not be read.
    fn row_failed(&mut self, _group: usize, _row: usize, _err: &RowExtractionFailure) {}

    /// Called at the end of the pass.
    fn finish(&mut self) {}
}
