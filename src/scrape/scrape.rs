// src/scrape/scrape.rs
use std::time::Instant;

use crate::{
    config::options::{AppOptions, ExtractOptions},
    data::Record,
    error::SourceError,
    progress::Progress,
    source::{wait_for_table, PageLoader, Row},
};

use super::{assemble::{self, GroupLegs}, legs, segment, summary};

/// Counters for one extraction pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub rows: usize,
    pub groups: usize,
    pub records: usize,
    /// Groups dropped because no leg could be extracted.
    pub empty_groups: usize,
    pub legs: usize,
    pub continuation_rows: usize,
    pub failed_rows: usize,
    /// Rows after the last terminator, never part of a group.
    pub trailing_rows: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Extraction {
    pub records: Vec<Record>,
    pub stats: ExtractStats,
}

/// Wait for the table, then extract. `TableNotFound` is the only failure
/// that stops a run; everything below it degrades per group or per row.
pub fn collect<L>(
    loader: &mut L,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Extraction, SourceError>
where
    L: PageLoader + ?Sized,
{
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Waiting up to {:?} for #{}", opts.wait.timeout, opts.wait.table_id));
    }
    let table = wait_for_table(loader, &opts.wait)?
        .with_line_classes([opts.extract.markup.minor.clone()]);
    let rows = table.rows();
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Table #{} found with {} row(s)", table.table_id(), rows.len()));
    }
    Ok(extract_records(&rows, &opts.extract, progress))
}

/// Rebuild records from the flat row stream, in row order.
pub fn extract_records<R: Row>(
    rows: &[R],
    opts: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Extraction {
    let t = Instant::now();
    let markup = &opts.markup;
    let mut stats = ExtractStats { rows: rows.len(), ..Default::default() };
    let mut records = Vec::new();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(rows.len());
    }

    let mut groups = segment::groups(rows, |r: &R| r.has_class(&markup.terminator));
    for (gi, group) in groups.by_ref().enumerate() {
        stats.groups += 1;
        let summary = summary::summarize(group, markup);

        let outcome: GroupLegs = group
            .iter()
            .enumerate()
            .map(|(ri, row)| (ri, legs::extract_leg(row, markup, &summary, opts.leg_event)))
            .collect();

        for (ri, err) in &outcome.failures {
            logd!("Group {}: row {} skipped: {}", gi, ri, err);
            if let Some(p) = progress.as_deref_mut() {
                p.row_failed(gi, *ri, err);
            }
        }
        stats.failed_rows += outcome.failures.len();
        stats.continuation_rows += outcome.continuation_rows;
        stats.legs += outcome.legs.len();

        if let Some(p) = progress.as_deref_mut() {
            p.group_done(gi, outcome.legs.len());
        }

        match assemble::assemble(summary, outcome) {
            Some(record) => records.push(record),
            None => {
                stats.empty_groups += 1;
                logd!("Group {}: no legs, dropped", gi);
            }
        }
    }

    stats.trailing_rows = groups.trailing().len();
    if stats.trailing_rows > 0 {
        logw!("{} row(s) after the last .{} row discarded", stats.trailing_rows, markup.terminator);
    }
    stats.records = records.len();

    logf!(
        "Extracted {} record(s) / {} leg(s) from {} group(s) in {:?} ({} row(s) failed)",
        stats.records, stats.legs, stats.groups, t.elapsed(), stats.failed_rows
    );
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Extraction { records, stats }
}
