//! Conversion entry points.
//!
//! [`convert`] is the core: one entry's markdown in, one HTML fragment out.
//! It never fails and takes no options. Everything else here builds on it:
//! [`Converter`] carries a [`ConversionConfig`], [`convert_entry`] and
//! [`convert_entries`] add per-entry results and stats, and
//! [`convert_file`] / [`convert_to_file`] add file I/O.

use crate::config::ConversionConfig;
use crate::error::UrnalError;
use crate::journal::split_entries;
use crate::output::{ConversionOutput, ConversionStats, EntryResult};
use crate::pipeline;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert one entry of markdown to an HTML fragment.
///
/// Uses the default configuration. Total: every input yields a string, and
/// the empty string yields the empty string.
///
/// ```rust
/// let html = urnal_md::convert("**hi**");
/// assert_eq!(html, "<p>\n<strong>hi</strong>\n</p>");
/// ```
pub fn convert(markdown: &str) -> String {
    convert_with(markdown, &ConversionConfig::default())
}

/// Convert one entry using the heading style from `config`.
pub fn convert_with(markdown: &str, config: &ConversionConfig) -> String {
    pipeline::run(markdown, config.heading_style).html
}

/// A reusable converter.
///
/// Holds only immutable configuration; all per-call state (the code-fence
/// placeholder table) is created inside each [`Converter::convert`] call, so
/// one instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert one entry.
    pub fn convert(&self, markdown: &str) -> String {
        convert_with(markdown, &self.config)
    }

    /// Convert every entry in a month file. See [`convert_entries`].
    pub fn convert_entries(&self, text: &str) -> ConversionOutput {
        convert_entries(text, &self.config)
    }
}

/// Split `text` on the configured entry delimiter and convert each entry.
///
/// Entries are wrapped in `<article>` (unless disabled) and joined with a
/// blank line.
pub fn convert_entries(text: &str, config: &ConversionConfig) -> ConversionOutput {
    let entries = split_entries(text, &config.entry_delimiter);
    render_entries(text, &entries, config.wrap_entries, config)
}

/// Convert `text` as one entry: no splitting, no `<article>` wrapper.
pub fn convert_entry(text: &str, config: &ConversionConfig) -> ConversionOutput {
    render_entries(text, &[text], false, config)
}

fn render_entries(
    text: &str,
    entries: &[&str],
    wrap: bool,
    config: &ConversionConfig,
) -> ConversionOutput {
    let start = Instant::now();

    let entries: Vec<EntryResult> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let rendered = pipeline::run(entry, config.heading_style);
            EntryResult {
                index,
                html: rendered.html,
                code_blocks: rendered.code_blocks,
            }
        })
        .collect();

    let html = assemble_entries(&entries, wrap);
    let stats = ConversionStats {
        entries: entries.len(),
        code_blocks: entries.iter().map(|e| e.code_blocks).sum(),
        input_bytes: text.len(),
        output_bytes: html.len(),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    debug!(
        entries = stats.entries,
        code_blocks = stats.code_blocks,
        "converted entries"
    );

    ConversionOutput {
        html,
        entries,
        stats,
    }
}

/// Read a month file (or single entry file) and convert it.
pub fn convert_file(
    path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, UrnalError> {
    let path = path.as_ref();
    info!("Converting {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|e| UrnalError::from_read(path, e))?;
    Ok(convert_entries(&text, config))
}

/// Convert `input` and write the HTML to `output`.
pub fn convert_to_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, UrnalError> {
    let output = output.as_ref();
    let result = convert_file(input, config)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| UrnalError::OutputWriteFailed {
            path: output.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(output, result.html.as_bytes()).map_err(|e| {
        UrnalError::OutputWriteFailed {
            path: output.to_path_buf(),
            source: e,
        }
    })?;

    info!(
        "Wrote {} entries ({} bytes) to {}",
        result.stats.entries,
        result.stats.output_bytes,
        output.display()
    );
    Ok(result.stats)
}

/// Join rendered entries into the final fragment.
fn assemble_entries(entries: &[EntryResult], wrap: bool) -> String {
    entries
        .iter()
        .map(|entry| {
            if wrap {
                format!("<article>{}</article>", entry.html)
            } else {
                entry.html.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
