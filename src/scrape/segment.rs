// src/scrape/segment.rs
//! Splitting the flat row stream into groups.
//!
//! A group is every row since the previous terminator row, terminator
//! excluded. Rows after the last terminator never close and are dropped;
//! [`Groups::trailing`] exposes them for accounting.

/// Lazy iterator over terminator-delimited groups of `rows`.
pub struct Groups<'a, R, F> {
    rows: &'a [R],
    pos: usize,
    is_terminator: F,
}

pub fn groups<R, F>(rows: &[R], is_terminator: F) -> Groups<'_, R, F>
where
    F: FnMut(&R) -> bool,
{
    Groups { rows, pos: 0, is_terminator }
}

impl<'a, R, F> Groups<'a, R, F> {
    /// Rows not consumed by any group. After the iterator is exhausted these
    /// are exactly the unterminated tail.
    pub fn trailing(&self) -> &'a [R] {
        &self.rows[self.pos..]
    }
}

impl<'a, R, F> Iterator for Groups<'a, R, F>
where
    F: FnMut(&R) -> bool,
{
    type Item = &'a [R];

    fn next(&mut self) -> Option<&'a [R]> {
        loop {
            let rows = self.rows;
            let rest = &rows[self.pos..];
            let end = rest.iter().position(|r| (self.is_terminator)(r))?;
            self.pos += end + 1;
            if end > 0 {
                return Some(&rest[..end]);
            }
            // Back-to-back terminators: nothing between them.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(rows: &[&'static str]) -> (Vec<Vec<&'static str>>, Vec<&'static str>) {
        let mut it = groups(rows, |r| *r == "|");
        let found: Vec<Vec<&str>> = it.by_ref().map(|g| g.to_vec()).collect();
        (found, it.trailing().to_vec())
    }

    #[test]
    fn splits_on_terminators_preserving_order() {
        let (found, tail) = split(&["a", "b", "|", "c", "|"]);
        assert_eq!(found, vec![vec!["a", "b"], vec!["c"]]);
        assert!(tail.is_empty());
    }

    #[test]
    fn variable_group_sizes() {
        let (found, _) = split(&["a", "|", "b", "c", "d", "|", "e", "f", "|"]);
        let sizes: Vec<usize> = found.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![1, 3, 2]);
    }

    #[test]
    fn empty_groups_yield_nothing() {
        let (found, tail) = split(&["|", "|", "a", "|", "|"]);
        assert_eq!(found, vec![vec!["a"]]);
        assert!(tail.is_empty());
    }

    #[test]
    fn unterminated_tail_is_discarded() {
        let (found, tail) = split(&["a", "|", "b", "c"]);
        assert_eq!(found, vec![vec!["a"]]);
        assert_eq!(tail, vec!["b", "c"]);
    }

    #[test]
    fn no_rows_no_groups() {
        let (found, tail) = split(&[]);
        assert!(found.is_empty());
        assert!(tail.is_empty());
    }
}
