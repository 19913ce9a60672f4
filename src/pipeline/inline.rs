//! Inline spans: code, bold, italic, strikethrough, images, links.
//!
//! Each rule is one global regex substitution. They must run in the order
//! listed in [`crate::pipeline::Pass::ORDER`]:
//!
//! - `**` before `*`, otherwise bold markers are eaten as two italics.
//! - images before links, since `[alt](url)` is a suffix of `![alt](url)`.
//!
//! Spans do not nest and delimiters cannot be escaped. Emphasis never spans
//! a line break.

use super::escape::escape_html;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static RE_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static RE_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static RE_STRIKETHROUGH: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.+?)~~").unwrap());
static RE_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.+?)\)").unwrap());
static RE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap());

// ── Inline code ──────────────────────────────────────────────────────────────

pub fn inline_code(input: &str) -> String {
    RE_INLINE_CODE
        .replace_all(input, |caps: &Captures<'_>| {
            format!("<code>{}</code>", escape_html(&caps[1]))
        })
        .into_owned()
}

// ── Emphasis ─────────────────────────────────────────────────────────────────

pub fn bold(input: &str) -> String {
    RE_BOLD
        .replace_all(input, "<strong>${1}</strong>")
        .into_owned()
}

pub fn italic(input: &str) -> String {
    RE_ITALIC.replace_all(input, "<em>${1}</em>").into_owned()
}

pub fn strikethrough(input: &str) -> String {
    RE_STRIKETHROUGH
        .replace_all(input, "<del>${1}</del>")
        .into_owned()
}

// ── Images and links ─────────────────────────────────────────────────────────

pub fn images(input: &str) -> String {
    RE_IMAGE
        .replace_all(input, r#"<img src="${2}" alt="${1}" />"#)
        .into_owned()
}

pub fn links(input: &str) -> String {
    RE_LINK
        .replace_all(input, r#"<a href="${2}">${1}</a>"#)
        .into_owned()
}
