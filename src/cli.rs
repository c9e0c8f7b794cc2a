// src/cli.rs
use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::Parser;

use crate::config::{self, options::{AppOptions, ExportFormat}};
use crate::error::{RowExtractionFailure, SourceError};
use crate::file;
use crate::progress::Progress;
use crate::scrape;
use crate::source::FileLoader;

/// Exit code when the table never showed up.
pub const EXIT_TABLE_NOT_FOUND: u8 = 2;

/// Extract surebet records from a rendered page dump.
#[derive(Debug, Parser)]
#[command(name = "surebet_scrape", version, about)]
pub struct Args {
    /// Rendered page source (re-read while waiting for the table)
    #[arg(short, long)]
    pub input: PathBuf,

    /// TOML config; a missing file means defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seconds to wait for the table to appear
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Id of the table element
    #[arg(long)]
    pub table_id: Option<String>,

    /// csv, tsv, json or text
    #[arg(short, long)]
    pub format: Option<ExportFormat>,

    /// Output file or directory (default: stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Write a header row (csv/tsv)
    #[arg(long)]
    pub include_headers: bool,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Command-line flags win over the config file.
    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(secs) = self.timeout { opts.wait.timeout = Duration::from_secs(secs); }
        if let Some(id) = &self.table_id { opts.wait.table_id = id.clone(); }
        if let Some(format) = self.format { opts.export.format = format; }
        if let Some(out) = &self.out { opts.export.out = Some(out.clone()); }
        if self.include_headers { opts.export.include_headers = true; }
        if let Some(path) = &self.log_file { opts.log.file = Some(path.clone()); }
    }
}

/// Prints per-group status to stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn begin(&mut self, rows: usize) {
        eprintln!("Scanning {} row(s)…", rows);
    }
    fn row_failed(&mut self, group: usize, row: usize, err: &RowExtractionFailure) {
        eprintln!("  group {}: row {} skipped ({})", group, row, err);
    }
}

pub fn run(args: Args) -> color_eyre::Result<ExitCode> {
    let mut opts = match &args.config {
        Some(path) => config::file::load(path)?,
        None => AppOptions::default(),
    };
    args.apply(&mut opts);
    crate::log::init(&opts.log)?;

    let mut loader = FileLoader::new(&args.input);
    let (records, code) = match scrape::collect(&mut loader, &opts, Some(&mut CliProgress)) {
        Ok(extraction) => {
            let st = &extraction.stats;
            eprintln!(
                "{} record(s), {} leg(s) from {} group(s); {} row(s) failed, {} empty group(s)",
                st.records, st.legs, st.groups, st.failed_rows, st.empty_groups
            );
            (extraction.records, ExitCode::SUCCESS)
        }
        Err(e @ SourceError::TableNotFound { .. }) => {
            eprintln!("Error: {}", e);
            (Vec::new(), ExitCode::from(EXIT_TABLE_NOT_FOUND))
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(path) = file::export_records(&opts.export, &records)? {
        eprintln!("Wrote {}", path.display());
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn tmp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("surebet_cli_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn run_on(dir: &std::path::Path, page: &str) -> ExitCode {
        let input = dir.join("page.html");
        fs::write(&input, page).unwrap();
        let out = dir.join("out.csv");
        let input = input.to_string_lossy().into_owned();
        let out = out.to_string_lossy().into_owned();
        let args = Args::parse_from([
            "surebet_scrape", "-i", &input, "--timeout", "0", "-f", "csv", "-o", &out,
        ]);
        run(args).unwrap()
    }

    #[test]
    fn missing_table_exits_with_its_own_code() {
        let dir = tmp_dir("missing");
        let code = run_on(&dir, "<html><body><p>loading</p></body></html>");
        assert_eq!(code, ExitCode::from(EXIT_TABLE_NOT_FOUND));
    }

    #[test]
    fn empty_table_is_a_success() {
        let dir = tmp_dir("empty");
        let code = run_on(&dir, r#"<html><body><table id="surebets-table"></table></body></html>"#);
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(dir.join("out.csv").exists());
    }

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from([
            "surebet_scrape", "-i", "page.html", "--timeout", "5", "-f", "tsv",
            "--include-headers", "-o", "out/",
        ]);
        let mut opts = AppOptions::default();
        args.apply(&mut opts);

        assert_eq!(opts.wait.timeout, Duration::from_secs(5));
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(opts.export.include_headers);
        assert_eq!(opts.export.out, Some(PathBuf::from("out/")));
        assert_eq!(opts.wait.table_id, "surebets-table");
    }

    #[test]
    fn bad_format_is_rejected() {
        let res = Args::try_parse_from(["surebet_scrape", "-i", "page.html", "-f", "xml"]);
        assert!(res.is_err());
    }
}
