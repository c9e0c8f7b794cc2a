// src/csv.rs
use std::io::{self, Write};

use crate::data::Record;

pub const HEADERS: [&str; 9] = [
    "Profit/Age", "Event", "League", "Sport",
    "Bookmaker", "Market", "Odds", "Time", "Leg event",
];

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Flatten records: one row per leg, group columns repeated on every row.
pub fn records_to_rows(records: &[Record]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for rec in records {
        let s = &rec.summary;
        for leg in rec.legs() {
            let leg_event = leg
                .event
                .as_ref()
                .map(|e| if e.league.is_empty() { e.name.clone() } else { format!("{} ({})", e.name, e.league) })
                .unwrap_or_default();
            rows.push(vec![
                s.profit_age.clone(),
                s.primary_event.clone(),
                s.league.clone(),
                s.category.clone(),
                leg.bookmaker.clone(),
                leg.market.clone(),
                leg.odds.clone(),
                leg.timestamp.clone(),
                leg_event,
            ]);
        }
    }
    rows
}

/// Full delimited export as a string.
pub fn to_export_string(records: &[Record], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &HEADERS, sep);
    }
    for r in records_to_rows(records) {
        let _ = write_row(&mut buf, &r[..], sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
