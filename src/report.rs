// src/report.rs
//! Plain-text rendering of extracted records, for the terminal or a mail body.

use std::fmt::Write;

use crate::data::Record;

pub const NO_DATA: &str = "No surebets extracted.";

pub fn render(records: &[Record]) -> String {
    if records.is_empty() {
        return format!("{}\n", NO_DATA);
    }

    let mut out = String::new();
    for (i, rec) in records.iter().enumerate() {
        let s = &rec.summary;
        if i > 0 { out.push('\n'); }
        let _ = writeln!(out, "Profit/Age: {}", s.profit_age);
        if s.league.is_empty() {
            let _ = writeln!(out, "Event: {}", s.primary_event);
        } else {
            let _ = writeln!(out, "Event: {} ({})", s.primary_event, s.league);
        }
        let _ = writeln!(out, "Sport: {}", s.category);
        for leg in rec.legs() {
            let _ = write!(out, "  {} @ {} | {} | {}", leg.bookmaker, leg.odds, leg.market, leg.timestamp);
            if let Some(ev) = &leg.event {
                let _ = write!(out, " | {}", ev.name);
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{EventLabel, GroupSummary, Leg};

    fn leg(bookmaker: &str, odds: &str) -> Leg {
        Leg {
            bookmaker: s!(bookmaker),
            market: s!("1X2"),
            odds: s!(odds),
            timestamp: s!("12:00"),
            event: None,
        }
    }

    #[test]
    fn empty_report_says_so() {
        assert_eq!(render(&[]), "No surebets extracted.\n");
    }

    #[test]
    fn one_block_per_record() {
        let summary = GroupSummary {
            profit_age: s!("2.3% / 5m"),
            primary_event: s!("Team A vs Team B"),
            league: s!("League X"),
            category: s!("Soccer"),
        };
        let mut second = leg("Pinnacle", "2.05");
        second.event = Some(EventLabel { name: s!("Team A - Team B"), league: s!() });
        let rec = Record::new(summary, vec![leg("Bet365", "1.95"), second]).unwrap();

        let text = render(&[rec]);
        assert_eq!(
            text,
            "Profit/Age: 2.3% / 5m\n\
             Event: Team A vs Team B (League X)\n\
             Sport: Soccer\n  \
             Bet365 @ 1.95 | 1X2 | 12:00\n  \
             Pinnacle @ 2.05 | 1X2 | 12:00 | Team A - Team B\n"
        );
    }
}
