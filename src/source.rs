// src/source.rs
//! Boundary between the extractor and whatever renders the page.
//!
//! The extractor only ever sees [`Row`]s and [`Cell`]s. Cells are looked up
//! by class and come back as a possibly-empty list: with rowspan, a cell
//! that belongs to several rows is physically present only in the first.
//!
//! Producing the page (driving a browser, waiting for scripts) happens
//! elsewhere; this module only polls a [`PageLoader`] until the table shows
//! up or the wait budget runs out.

use std::{fs, io, path::{Path, PathBuf}, thread, time::Instant};

use crate::config::options::WaitOptions;
use crate::core::html::HtmlTable;
use crate::error::{LookupError, SourceError};

/// One text-bearing element inside a row.
pub trait Cell: Sized {
    /// Rendered text, one visual line per `\n`, each line trimmed.
    fn text(&self) -> String;

    /// First nested element carrying `class`.
    fn find(&self, class: &str) -> Option<Self>;
}

/// One `<tr>` of the table.
pub trait Row {
    type Cell: Cell;

    fn has_class(&self, class: &str) -> bool;

    /// Every element of the row carrying `class`, in document order.
    /// Empty when the row has no such cell; `Err` only if the lookup itself broke.
    fn cells(&self, class: &str) -> Result<Vec<Self::Cell>, LookupError>;
}

/// Yields the current source of the page.
pub trait PageLoader {
    fn load(&mut self) -> io::Result<String>;
}

impl<F> PageLoader for F
where
    F: FnMut() -> io::Result<String>,
{
    fn load(&mut self) -> io::Result<String> {
        self()
    }
}

/// Reads a page dump from disk on every poll, so a browser process can
/// keep rewriting the file while we wait.
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl PageLoader for FileLoader {
    fn load(&mut self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

/// Poll `loader` until the table is present or `opts.timeout` elapses.
///
/// At least one load is always attempted. Load errors are retried; if no
/// load ever succeeded, the last error is returned instead of `TableNotFound`.
pub fn wait_for_table<L>(loader: &mut L, opts: &WaitOptions) -> Result<HtmlTable, SourceError>
where
    L: PageLoader + ?Sized,
{
    let started = Instant::now();
    let mut last_err: Option<io::Error> = None;
    let mut loaded = false;
    let mut attempts = 0usize;

    loop {
        attempts += 1;
        match loader.load() {
            Ok(page) => {
                loaded = true;
                if let Some(table) = HtmlTable::locate(&page, &opts.table_id) {
                    logf!("Table #{} present after {:?} ({} polls)", opts.table_id, started.elapsed(), attempts);
                    return Ok(table);
                }
            }
            Err(e) => {
                logd!("Page load failed (poll {}): {}", attempts, e);
                last_err = Some(e);
            }
        }

        let waited = started.elapsed();
        if waited >= opts.timeout {
            return Err(match last_err {
                Some(e) if !loaded => SourceError::Load(e),
                _ => {
                    loge!("Table #{} not found after {:?}", opts.table_id, waited);
                    SourceError::TableNotFound { table_id: opts.table_id.clone(), waited }
                }
            });
        }
        thread::sleep(opts.poll_interval.min(opts.timeout - waited));
    }
}
