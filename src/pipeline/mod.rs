//! The rewrite pipeline: thirteen whole-document passes in a fixed order.
//!
//! Each submodule implements one family of passes. Every pass is a pure
//! `&str → String` function, except the first and last, which also touch
//! the call-scoped placeholder table.
//!
//! ## Data Flow
//!
//! ```text
//! markdown ──▶ fences ──▶ headers ──▶ inline ──▶ lists ──▶ tables ──▶ paragraphs ──▶ fences ──▶ html
//!             (extract)             (6 passes) (ul, ol)                            (resolve)
//! ```
//!
//! 1. [`fences`]    : lift fenced code out behind opaque tokens
//! 2. [`headers`]   : mark `#` lines
//! 3. [`inline`]    : code, bold, italic, strikethrough, images, links
//! 4. [`lists`]     : unordered then ordered list grouping
//! 5. [`tables`]    : pipe tables
//! 6. [`paragraphs`]: wrap remaining line runs
//! 7. [`fences`]    : put escaped code back in place of the tokens

pub mod escape;
pub mod fences;
pub mod headers;
pub mod inline;
pub mod lists;
pub mod paragraphs;
pub mod placeholder;
pub mod tables;

use crate::config::HeadingStyle;
use fences::CodeBlock;
use placeholder::Placeholders;
use std::fmt;
use tracing::trace;

/// One named step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    ExtractCodeFences,
    MarkHeaders,
    InlineCode,
    Bold,
    Italic,
    Strikethrough,
    Images,
    Links,
    UnorderedLists,
    OrderedLists,
    Tables,
    Paragraphs,
    ResolveCodeFences,
}

impl Pass {
    /// Every pass, in the order it runs.
    pub const ORDER: [Pass; 13] = [
        Pass::ExtractCodeFences,
        Pass::MarkHeaders,
        Pass::InlineCode,
        Pass::Bold,
        Pass::Italic,
        Pass::Strikethrough,
        Pass::Images,
        Pass::Links,
        Pass::UnorderedLists,
        Pass::OrderedLists,
        Pass::Tables,
        Pass::Paragraphs,
        Pass::ResolveCodeFences,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pass::ExtractCodeFences => "extract-code-fences",
            Pass::MarkHeaders => "mark-headers",
            Pass::InlineCode => "inline-code",
            Pass::Bold => "bold",
            Pass::Italic => "italic",
            Pass::Strikethrough => "strikethrough",
            Pass::Images => "images",
            Pass::Links => "links",
            Pass::UnorderedLists => "unordered-lists",
            Pass::OrderedLists => "ordered-lists",
            Pass::Tables => "tables",
            Pass::Paragraphs => "paragraphs",
            Pass::ResolveCodeFences => "resolve-code-fences",
        }
    }

    /// Run this pass over `input`.
    pub fn apply(self, input: &str, state: &mut PassState) -> String {
        match self {
            Pass::ExtractCodeFences => fences::extract_code_fences(input, &mut state.fences),
            Pass::MarkHeaders => headers::mark_headers(input, state.heading_style),
            Pass::InlineCode => inline::inline_code(input),
            Pass::Bold => inline::bold(input),
            Pass::Italic => inline::italic(input),
            Pass::Strikethrough => inline::strikethrough(input),
            Pass::Images => inline::images(input),
            Pass::Links => inline::links(input),
            Pass::UnorderedLists => lists::group_unordered_lists(input),
            Pass::OrderedLists => lists::group_ordered_lists(input),
            Pass::Tables => tables::group_tables(input),
            Pass::Paragraphs => paragraphs::wrap_paragraphs(input),
            Pass::ResolveCodeFences => fences::resolve_code_fences(input, &mut state.fences),
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State owned by a single run of the pipeline.
///
/// Created fresh by [`run`]; never stored anywhere that outlives the call.
#[derive(Debug)]
pub struct PassState {
    pub heading_style: HeadingStyle,
    pub fences: Placeholders<CodeBlock>,
    /// Number of code fences extracted during this run.
    pub code_blocks: usize,
}

impl PassState {
    pub fn new(heading_style: HeadingStyle) -> Self {
        Self {
            heading_style,
            fences: Placeholders::new(),
            code_blocks: 0,
        }
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub code_blocks: usize,
}

/// Run every pass in [`Pass::ORDER`] over `markdown`.
pub fn run(markdown: &str, heading_style: HeadingStyle) -> Rendered {
    let mut state = PassState::new(heading_style);
    let mut text = markdown.to_string();

    for pass in Pass::ORDER {
        text = pass.apply(&text, &mut state);
        if pass == Pass::ExtractCodeFences {
            state.code_blocks = state.fences.len();
        }
        trace!(pass = %pass, bytes = text.len(), "pass complete");
    }

    debug_assert!(state.fences.is_empty(), "unresolved code fence tokens");
    Rendered {
        html: text,
        code_blocks: state.code_blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(pass: Pass) -> usize {
        Pass::ORDER.iter().position(|p| *p == pass).unwrap()
    }

    #[test]
    fn fences_bracket_the_pipeline() {
        assert_eq!(Pass::ORDER[0], Pass::ExtractCodeFences);
        assert_eq!(Pass::ORDER[12], Pass::ResolveCodeFences);
    }

    #[test]
    fn relative_order_constraints() {
        assert!(position(Pass::MarkHeaders) < position(Pass::InlineCode));
        assert!(position(Pass::Bold) < position(Pass::Italic));
        assert!(position(Pass::Images) < position(Pass::Links));
        assert!(position(Pass::UnorderedLists) < position(Pass::OrderedLists));
        assert!(position(Pass::Tables) < position(Pass::Paragraphs));
    }

    #[test]
    fn pass_names_are_unique() {
        let mut names: Vec<&str> = Pass::ORDER.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Pass::ORDER.len());
    }

    #[test]
    fn run_counts_and_resolves_fences() {
        let out = run("```\na\n```\n\n```sh\nb\n```", HeadingStyle::BoldLine);
        assert_eq!(out.code_blocks, 2);
        assert!(!out.html.contains("urnalslot"));
        assert!(out.html.contains(r#"class="codeblock language-sh""#));
    }

    #[test]
    fn run_on_empty_input() {
        let out = run("", HeadingStyle::BoldLine);
        assert_eq!(out.html, "");
        assert_eq!(out.code_blocks, 0);
    }
}
