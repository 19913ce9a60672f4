//! Output types for entry and month-file conversion.

use serde::{Deserialize, Serialize};

/// The result of converting a month file (or a single entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Assembled HTML fragment for all entries.
    pub html: String,
    /// Per-entry results, in file order.
    pub entries: Vec<EntryResult>,
    pub stats: ConversionStats,
}

/// One rendered entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryResult {
    /// 0-based position of the entry in its file.
    pub index: usize,
    /// HTML for this entry alone, without the `<article>` wrapper.
    pub html: String,
    /// Fenced code blocks found in the entry.
    pub code_blocks: usize,
}

/// Aggregate counters for a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    pub entries: usize,
    pub code_blocks: usize,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub duration_ms: u64,
}
