//! Fenced code blocks: lifted out first, put back last.
//!
//! ````text
//! ```rust            ┐
//! let x = **y**;     │ ──▶ urnalslot3f9c…   ──▶ <pre><code class="codeblock language-rust">…
//! ```                ┘
//! ````
//!
//! The opening fence must start a line and may carry a language tag
//! (`[A-Za-z0-9+]+`, no space). The block ends at the first following
//! ```` ``` ````. An unterminated fence matches nothing and stays literal.

use super::escape::escape_html;
use super::placeholder::Placeholders;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

/// Language tag used when the opening fence has none.
pub const DEFAULT_LANGUAGE: &str = "plaintext";

static RE_CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^```([A-Za-z0-9+]+)?\n(.*?)```").unwrap());

/// A fenced block captured verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: String,
    pub code: String,
}

impl CodeBlock {
    /// Final markup; the only place code text is escaped.
    pub fn to_html(&self) -> String {
        format!(
            r#"<pre><code class="codeblock language-{}">{}</code></pre>"#,
            self.language,
            escape_html(&self.code)
        )
    }
}

/// Replace every fenced block in `input` with a placeholder token.
pub fn extract_code_fences(input: &str, fences: &mut Placeholders<CodeBlock>) -> String {
    RE_CODE_FENCE
        .replace_all(input, |caps: &Captures<'_>| {
            let block = CodeBlock {
                language: caps
                    .get(1)
                    .map_or(DEFAULT_LANGUAGE, |m| m.as_str())
                    .to_string(),
                code: caps[2].to_string(),
            };
            debug!(
                language = %block.language,
                bytes = block.code.len(),
                "protected code fence"
            );
            fences.insert(input, block)
        })
        .into_owned()
}

/// Swap every token back for its escaped `<pre><code>` block.
pub fn resolve_code_fences(input: &str, fences: &mut Placeholders<CodeBlock>) -> String {
    fences.restore(input, CodeBlock::to_html)
}
