// src/scrape/summary.rs
//! Group-level attributes, read from the first row of a group.
//!
//! Each field is looked up on its own; a missing or unreadable cell only
//! puts the sentinel into that one field.

use crate::config::options::Markup;
use crate::core::sanitize::{clean_lines, join_lines};
use crate::data::{EventLabel, GroupSummary};
use crate::source::{Cell, Row};

pub fn summarize<R: Row>(group: &[R], markup: &Markup) -> GroupSummary {
    let mut summary = GroupSummary::default();
    let Some(first) = group.first() else {
        return summary;
    };

    match profit_age(first, markup) {
        Some(v) => summary.profit_age = v,
        None => logd!("Group field missing: .{} / .{}", markup.profit, markup.age),
    }

    match first_cell(first, &markup.event).and_then(|c| parse_event(&c.text())) {
        Some(EventLabel { name, league }) => {
            summary.primary_event = name;
            summary.league = league;
        }
        None => logd!("Group field missing: .{}", markup.event),
    }

    match category(first, markup) {
        Some(v) => summary.category = v,
        None => logd!("Group field missing: .{} .{}", markup.booker, markup.minor),
    }

    summary
}

/// Split an event cell's text: first line is the event, second the league.
pub fn parse_event(text: &str) -> Option<EventLabel> {
    let mut lines = clean_lines(text).into_iter();
    let name = lines.next()?;
    let league = lines.next().unwrap_or_default();
    Some(EventLabel { name, league })
}

/// First cell of `class`; a failed lookup counts as absent here.
fn first_cell<R: Row>(row: &R, class: &str) -> Option<R::Cell> {
    match row.cells(class) {
        Ok(cells) => cells.into_iter().next(),
        Err(e) => {
            logd!("Summary lookup failed: {}", e);
            None
        }
    }
}

/// `"<profit> / <age>"`. `None` only when either cell is missing; blank
/// texts are kept as they are, so an empty profit reads `" / 5m"`.
fn profit_age<R: Row>(row: &R, markup: &Markup) -> Option<String> {
    let profit = join_lines(&first_cell(row, &markup.profit)?.text());
    let age = join_lines(&first_cell(row, &markup.age)?.text());
    Some(format!("{} / {}", profit, age))
}

fn category<R: Row>(row: &R, markup: &Markup) -> Option<String> {
    let minor = first_cell(row, &markup.booker)?.find(&markup.minor)?;
    Some(join_lines(&minor.text())).filter(|s| !s.is_empty())
}
