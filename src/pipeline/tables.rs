//! Pipe tables: header row, separator row, one or more body rows.
//!
//! ```text
//! | Day | Miles |        <table><thead><tr><th>Day</th><th>Miles</th></tr></thead>
//! |-----|:-----:|   ──▶  <tbody><tr><td>Mon</td><td>3</td></tr></tbody></table>
//! | Mon | 3     |
//! ```
//!
//! The whole table collapses to a single output line; lines around it are
//! left untouched. Alignment colons are accepted and ignored, and rows may
//! have any number of cells.

use super::escape::escape_html;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_SEPARATOR_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|(?:\s*:?-+:?\s*\|)+$").unwrap());

/// Replace every header + separator + body block with a `<table>` line.
pub fn group_tables(input: &str) -> String {
    let lines: Vec<&str> = input.split('\n').collect();
    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let has_separator = lines.get(i + 1).is_some_and(|next| is_separator_row(next));

        if is_table_row(line) && has_separator {
            let body_rows = lines[i + 2..]
                .iter()
                .take_while(|row| is_table_row(row))
                .count();
            if body_rows > 0 {
                result.push(render_table(line, &lines[i + 2..i + 2 + body_rows]));
                i += 2 + body_rows;
                continue;
            }
        }

        result.push(line.to_string());
        i += 1;
    }

    result.join("\n")
}

/// `|…|` with at least one character between the outer pipes.
fn is_table_row(line: &str) -> bool {
    let line = line.trim_end();
    line.len() > 2 && line.starts_with('|') && line.ends_with('|')
}

fn is_separator_row(line: &str) -> bool {
    RE_SEPARATOR_ROW.is_match(line.trim_end())
}

/// Split a row on `|`, dropping the fragments outside the outer pipes.
fn split_cells(line: &str) -> Vec<&str> {
    let mut s = line.trim_end();
    if let Some(stripped) = s.strip_prefix('|') {
        s = stripped;
    }
    if let Some(stripped) = s.strip_suffix('|') {
        s = stripped;
    }
    s.split('|').map(str::trim).collect()
}

fn render_table(header: &str, body: &[&str]) -> String {
    let mut html = String::from("<table><thead><tr>");
    for cell in split_cells(header) {
        html.push_str(&format!("<th>{}</th>", escape_html(cell)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in body {
        html.push_str("<tr>");
        for cell in split_cells(row) {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn two_by_two_table() {
        let input = "| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |";
        assert_eq!(
            group_tables(input),
            "<table><thead><tr><th>A</th><th>B</th></tr></thead>\
             <tbody><tr><td>1</td><td>2</td></tr><tr><td>3</td><td>4</td></tr></tbody></table>"
        );
    }

    #[test]
    fn cells_are_escaped() {
        let out = group_tables("|x|\n|-|\n|a<b & c|");
        assert!(out.contains("<td>a&lt;b &amp; c</td>"), "got: {out}");
    }

    #[test]
    fn alignment_markers_accepted() {
        let out = group_tables("| a | b | c |\n|:--|:-:|--:|\n| 1 | 2 | 3 |");
        assert!(out.starts_with("<table>"), "got: {out}");
        assert_eq!(out.matches("<td>").count(), 3);
    }

    #[test]
    fn surrounding_lines_are_kept() {
        let out = group_tables("before\n|h|\n|-|\n|b|\n\nafter");
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "before");
        assert!(lines[1].starts_with("<table>"));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "after");
    }

    #[test]
    fn header_without_body_is_not_a_table() {
        let input = "| A | B |\n|---|---|\nplain";
        assert_eq!(group_tables(input), input);
    }

    #[test]
    fn missing_separator_is_not_a_table() {
        let input = "| A | B |\n| 1 | 2 |";
        assert_eq!(group_tables(input), input);
    }

    #[test]
    fn ragged_rows_render_their_own_cells() {
        let out = group_tables("|a|b|\n|-|-|\n|1|\n|1|2|3|");
        assert!(out.contains("<tr><td>1</td></tr>"));
        assert!(out.contains("<tr><td>1</td><td>2</td><td>3</td></tr>"));
    }

    #[test]
    fn interior_empty_cells_are_kept() {
        assert_eq!(split_cells("|a||b|"), vec!["a", "", "b"]);
    }

    #[test]
    fn separator_detection() {
        assert!(is_separator_row("| --- | :---: |"));
        assert!(is_separator_row("|-|"));
        assert!(!is_separator_row("| a |"));
        assert!(!is_separator_row("|  |"));
    }
}
