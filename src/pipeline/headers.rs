//! Header lines: 1–6 `#`, whitespace, then content.

use crate::config::HeadingStyle;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]+(.+)").unwrap());

/// Mark every header line according to `style`.
///
/// With [`HeadingStyle::BoldLine`] the whole line, `#` markers included, is
/// wrapped in `<b>`. With [`HeadingStyle::Leveled`] the markers are dropped
/// and the content becomes an `<hN>` element.
pub fn mark_headers(input: &str, style: HeadingStyle) -> String {
    match style {
        HeadingStyle::BoldLine => RE_HEADER.replace_all(input, "<b>${0}</b>").into_owned(),
        HeadingStyle::Leveled => RE_HEADER
            .replace_all(input, |caps: &Captures<'_>| {
                let level = caps[1].len();
                format!("<h{level}>{}</h{level}>", caps[2].trim_end())
            })
            .into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_line_keeps_markers() {
        assert_eq!(
            mark_headers("## Notes", HeadingStyle::BoldLine),
            "<b>## Notes</b>"
        );
    }

    #[test]
    fn leveled_strips_markers() {
        assert_eq!(
            mark_headers("### Notes  ", HeadingStyle::Leveled),
            "<h3>Notes</h3>"
        );
        assert_eq!(
            mark_headers("###### deep", HeadingStyle::Leveled),
            "<h6>deep</h6>"
        );
    }

    #[test]
    fn only_line_starts_are_headers() {
        let input = "text # not a header\n# yes";
        assert_eq!(
            mark_headers(input, HeadingStyle::BoldLine),
            "text # not a header\n<b># yes</b>"
        );
    }

    #[test]
    fn seven_markers_or_no_space_is_not_a_header() {
        for input in ["####### seven", "#hashtag", "#"] {
            assert_eq!(mark_headers(input, HeadingStyle::BoldLine), input);
        }
    }

    #[test]
    fn marker_never_pairs_with_next_line() {
        let input = "#\ncontent";
        assert_eq!(mark_headers(input, HeadingStyle::BoldLine), input);
    }
}
