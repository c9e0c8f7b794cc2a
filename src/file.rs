// src/file.rs

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::to_export_string;
use crate::data::Record;
use crate::report;

/// Render `records` in the configured format.
pub fn render_export(export: &ExportOptions, records: &[Record]) -> io::Result<String> {
    Ok(match export.format {
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = export.format.delimiter().unwrap_or(',');
            to_export_string(records, export.include_headers, sep)
        }
        ExportFormat::Json => {
            let mut s = serde_json::to_string_pretty(records)?;
            s.push('\n');
            s
        }
        ExportFormat::Text => report::render(records),
    })
}

/// Write the export to `export.out`, or stdout when unset.
/// Returns the path written to, if any.
pub fn export_records(export: &ExportOptions, records: &[Record]) -> io::Result<Option<PathBuf>> {
    let contents = render_export(export, records)?;

    let Some(hint) = &export.out else {
        let mut out = io::stdout().lock();
        out.write_all(contents.as_bytes())?;
        out.flush()?;
        return Ok(None);
    };

    let path = resolve_out_path(hint, export)?;
    fs::write(&path, contents)?;
    logf!("Wrote {} record(s) to {}", records.len(), path.display());
    Ok(Some(path))
}

/// A directory (existing, or spelled with a trailing separator) gets the
/// default file name for the format; parents are created either way.
pub fn resolve_out_path(hint: &Path, export: &ExportOptions) -> io::Result<PathBuf> {
    if hint.is_dir() || looks_like_dir_hint(hint) {
        ensure_directory(hint)?;
        return Ok(hint.join(export.file_name()));
    }
    if let Some(parent) = hint.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(hint.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
