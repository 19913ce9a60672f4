//! List grouping: a two-state line scanner per list kind.
//!
//! ```text
//!            item line                 item line
//!   Outside ───────────▶ InsideList ◀──────────┐
//!      ▲                    │  └───────────────┘
//!      └────────────────────┘
//!         other line / EOF: emit <ul>/<ol>, items, close tag, then the line
//! ```
//!
//! Unordered items start with `-` or `*`, ordered items with `N.`; both need
//! whitespace and content after the marker. The two kinds run as separate
//! passes, unordered first.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s+(.+)").unwrap());
static RE_ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)\.\s+(.+)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Outside,
    InsideList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(self, number: Option<&str>) -> String {
        match (self, number.map(normalise_number)) {
            (ListKind::Ordered, Some(n)) if n != "1" => format!(r#"<ol start="{n}">"#),
            (ListKind::Ordered, _) => "<ol>".to_string(),
            (ListKind::Unordered, _) => "<ul>".to_string(),
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// One matched item line.
struct ListItem<'a> {
    number: Option<&'a str>,
    content: &'a str,
}

// ── Passes ───────────────────────────────────────────────────────────────────

/// Group runs of `- item` / `* item` lines into `<ul>` lists.
pub fn group_unordered_lists(input: &str) -> String {
    group_runs(input, ListKind::Unordered, |line| {
        RE_UNORDERED_ITEM.captures(line).map(|caps| ListItem {
            number: None,
            content: caps.get(1).map_or("", |m| m.as_str()),
        })
    })
}

/// Group runs of `N. item` lines into `<ol>` lists.
///
/// The first item's number becomes the `start` attribute unless it is 1;
/// the numbers of later items are ignored.
pub fn group_ordered_lists(input: &str) -> String {
    group_runs(input, ListKind::Ordered, |line| {
        RE_ORDERED_ITEM.captures(line).map(|caps| ListItem {
            number: caps.get(1).map(|m| m.as_str()),
            content: caps.get(2).map_or("", |m| m.as_str()),
        })
    })
}

// ── Scanner ──────────────────────────────────────────────────────────────────

fn group_runs<'a, F>(input: &'a str, kind: ListKind, mut match_item: F) -> String
where
    F: FnMut(&'a str) -> Option<ListItem<'a>>,
{
    let mut out: Vec<String> = Vec::new();
    let mut buffered: Vec<String> = Vec::new();
    let mut state = ListState::Outside;

    for line in input.split('\n') {
        match (state, match_item(line)) {
            (ListState::Outside, Some(item)) => {
                buffered.push(kind.open_tag(item.number));
                buffered.push(format!("<li>{}</li>", item.content));
                state = ListState::InsideList;
            }
            (ListState::InsideList, Some(item)) => {
                buffered.push(format!("<li>{}</li>", item.content));
            }
            (ListState::InsideList, None) => {
                close_list(&mut out, &mut buffered, kind);
                out.push(line.to_string());
                state = ListState::Outside;
            }
            (ListState::Outside, None) => out.push(line.to_string()),
        }
    }

    if state == ListState::InsideList {
        close_list(&mut out, &mut buffered, kind);
    }

    out.join("\n")
}

fn close_list(out: &mut Vec<String>, buffered: &mut Vec<String>, kind: ListKind) {
    out.append(buffered);
    out.push(kind.close_tag().to_string());
}

/// `"007"` → `"7"`, `"0"` → `"0"`. Keeps arbitrarily long numbers exact.
fn normalise_number(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unordered_run_is_grouped() {
        assert_eq!(
            group_unordered_lists("intro\n- a\n* b\nafter"),
            "intro\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\nafter"
        );
    }

    #[test]
    fn list_at_end_of_input_is_closed() {
        assert_eq!(
            group_unordered_lists("- only"),
            "<ul>\n<li>only</li>\n</ul>"
        );
    }

    #[test]
    fn blank_line_splits_lists() {
        assert_eq!(
            group_unordered_lists("- a\n\n- b"),
            "<ul>\n<li>a</li>\n</ul>\n\n<ul>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn marker_needs_whitespace_and_content() {
        for input in ["-a", "---", "-", "*bold*"] {
            assert_eq!(group_unordered_lists(input), input);
        }
    }

    #[test]
    fn ordered_from_one_has_no_start() {
        assert_eq!(
            group_ordered_lists("1. a\n2. b"),
            "<ol>\n<li>a</li>\n<li>b</li>\n</ol>"
        );
    }

    #[test]
    fn ordered_start_is_preserved() {
        assert_eq!(
            group_ordered_lists("5. a\n6. b"),
            "<ol start=\"5\">\n<li>a</li>\n<li>b</li>\n</ol>"
        );
    }

    #[test]
    fn later_numbers_are_ignored() {
        assert_eq!(
            group_ordered_lists("3. a\n1. b\n99. c"),
            "<ol start=\"3\">\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ol>"
        );
    }

    #[test]
    fn leading_zeros_and_huge_numbers() {
        assert!(group_ordered_lists("01. a").starts_with("<ol>\n"));
        assert!(group_ordered_lists("0. a").starts_with("<ol start=\"0\">"));
        let huge = "123456789012345678901234567890. a";
        assert!(group_ordered_lists(huge)
            .starts_with("<ol start=\"123456789012345678901234567890\">"));
    }

    #[test]
    fn ordered_pass_ignores_unordered_markup() {
        let once = group_unordered_lists("- a\n1. b");
        assert_eq!(
            group_ordered_lists(&once),
            "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>"
        );
    }

    #[test]
    fn trailing_newline_is_kept() {
        assert_eq!(group_unordered_lists("- a\n"), "<ul>\n<li>a</li>\n</ul>\n");
    }
}
