// src/core/sanitize.rs

/// Collapse runs of whitespace (incl. NBSP) into single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Normalize each line and drop the blank ones.
pub fn clean_lines(s: &str) -> Vec<String> {
    s.split('\n')
        .map(normalize_ws)
        .filter(|l| !l.is_empty())
        .collect()
}

/// First non-blank line of a multi-line text, or "" if there is none.
/// Leading blank lines (an icon rendered before the name) are skipped.
pub fn first_line(s: &str) -> String {
    s.split('\n')
        .map(normalize_ws)
        .find(|l| !l.is_empty())
        .unwrap_or_default()
}

/// All lines on one line, separated by single spaces.
pub fn join_lines(s: &str) -> String {
    clean_lines(s).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_collapses() {
        assert_eq!(normalize_ws("  Team\u{a0} A \t vs  B "), "Team A vs B");
    }

    #[test]
    fn lines_skip_blanks() {
        let text = "\n  Bet365 \n\n Soccer\n";
        assert_eq!(clean_lines(text), vec!["Bet365", "Soccer"]);
        assert_eq!(first_line(text), "Bet365");
        assert_eq!(join_lines("12:00\n 05/11 "), "12:00 05/11");
        assert_eq!(first_line("   \n "), "");
    }
}
