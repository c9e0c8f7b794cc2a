// src/scrape/legs.rs
//! Per-row leg extraction.
//!
//! `Ok(None)` means the row carries no leg of its own (terminator, or a
//! rowspan continuation missing its bookmaker or odds cell). `Err` means
//! the row looked like a leg but could not be read: a broken lookup, or a
//! value cell without its odds link.

use crate::config::consts::UNKNOWN;
use crate::config::options::{LegEventPolicy, Markup};
use crate::core::sanitize::{first_line, join_lines};
use crate::data::{EventLabel, GroupSummary, Leg};
use crate::error::RowExtractionFailure;
use crate::source::{Cell, Row};

use super::summary::parse_event;

pub fn extract_leg<R: Row>(
    row: &R,
    markup: &Markup,
    summary: &GroupSummary,
    policy: LegEventPolicy,
) -> Result<Option<Leg>, RowExtractionFailure> {
    if row.has_class(&markup.terminator) {
        return Ok(None);
    }

    let bookers = row.cells(&markup.booker)?;
    let values = row.cells(&markup.value)?;
    let (Some(booker), Some(value)) = (bookers.first(), values.first()) else {
        return Ok(None);
    };
    let coeffs = row.cells(&markup.coeff)?;
    let times = row.cells(&markup.time)?;

    let link = value.find(&markup.value_link).ok_or_else(|| RowExtractionFailure::MissingNested {
        cell: markup.value.clone(),
        class: markup.value_link.clone(),
    })?;

    let event = match policy {
        LegEventPolicy::Ignore => None,
        LegEventPolicy::WhenDifferent => leg_event(row, markup, summary)?,
    };

    Ok(Some(Leg {
        bookmaker: or_unknown(first_line(&booker.text())),
        market: text_or_unknown(coeffs.first()),
        odds: or_unknown(join_lines(&link.text())),
        timestamp: text_or_unknown(times.first()),
        event,
    }))
}

/// Blank text (a logo-only bookmaker cell, an empty link) still makes a leg.
fn or_unknown(text: String) -> String {
    if text.is_empty() { s!(UNKNOWN) } else { text }
}

fn text_or_unknown<C: Cell>(cell: Option<&C>) -> String {
    or_unknown(cell.map(|c| join_lines(&c.text())).unwrap_or_default())
}

fn leg_event<R: Row>(
    row: &R,
    markup: &Markup,
    summary: &GroupSummary,
) -> Result<Option<EventLabel>, RowExtractionFailure> {
    let events = row.cells(&markup.event)?;
    Ok(events
        .first()
        .and_then(|c| parse_event(&c.text()))
        .filter(|e| e.name != summary.primary_event))
}
