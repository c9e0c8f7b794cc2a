// src/scrape/assemble.rs
use crate::data::{GroupSummary, Leg, Record};
use crate::error::RowExtractionFailure;

/// Per-row results of one group, folded: successes kept, failures set aside.
#[derive(Debug, Default)]
pub struct GroupLegs {
    pub legs: Vec<Leg>,
    /// Rows that held no leg of their own.
    pub continuation_rows: usize,
    /// `(row index within the group, reason)`
    pub failures: Vec<(usize, RowExtractionFailure)>,
}

impl FromIterator<(usize, Result<Option<Leg>, RowExtractionFailure>)> for GroupLegs {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (usize, Result<Option<Leg>, RowExtractionFailure>)>,
    {
        let mut out = GroupLegs::default();
        for (i, res) in iter {
            match res {
                Ok(Some(leg)) => out.legs.push(leg),
                Ok(None) => out.continuation_rows += 1,
                Err(e) => out.failures.push((i, e)),
            }
        }
        out
    }
}

/// One record per group, or nothing if no leg survived.
pub fn assemble(summary: GroupSummary, group: GroupLegs) -> Option<Record> {
    Record::new(summary, group.legs)
}
