// src/data.rs
//
// Output shapes of one extraction pass. Everything here is built fresh per
// pass and owned by the caller afterwards.

use serde::Serialize;

pub use crate::config::consts::UNKNOWN;

/// Group-level attributes shared (via rowspan) by every leg of a surebet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    /// `"{profit} / {age}"`, or [`UNKNOWN`] if either half is missing.
    pub profit_age: String,
    pub primary_event: String,
    /// Empty when the event cell has no second line.
    pub league: String,
    pub category: String,
}

impl Default for GroupSummary {
    fn default() -> Self {
        Self {
            profit_age: s!(UNKNOWN),
            primary_event: s!(UNKNOWN),
            league: s!(),
            category: s!(UNKNOWN),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventLabel {
    pub name: String,
    pub league: String,
}

/// One bookmaker entry within a surebet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Leg {
    pub bookmaker: String,
    pub market: String,
    pub odds: String,
    pub timestamp: String,
    /// Set only when the row names an event other than the summary's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventLabel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Record {
    pub summary: GroupSummary,
    legs: Vec<Leg>,
}

impl Record {
    /// `None` when `legs` is empty: a surebet without legs is never emitted.
    pub fn new(summary: GroupSummary, legs: Vec<Leg>) -> Option<Self> {
        if legs.is_empty() {
            return None;
        }
        Some(Self { summary, legs })
    }

    /// Never empty.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }
}
