//! # urnal-md
//!
//! Render journal entries written in a small markdown dialect to HTML
//! fragments.
//!
//! The dialect is deliberately narrow: fenced code, `#` header lines, inline
//! code, bold, italic, strikethrough, images, links, flat lists and pipe
//! tables. Anything else passes through as text. Conversion never fails.
//!
//! ## Pipeline Overview
//!
//! ```text
//! markdown
//!  │
//!  ├─ 1. Fences      lift ``` blocks out behind opaque tokens
//!  ├─ 2. Headers     mark `#` lines
//!  ├─ 3. Inline      code, bold, italic, strikethrough, images, links
//!  ├─ 4. Blocks      unordered lists, ordered lists, tables
//!  ├─ 5. Paragraphs  wrap remaining line runs in <p>
//!  └─ 6. Resolve     escaped <pre><code> back in place of each token
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use urnal_md::convert;
//!
//! let html = convert("Ran **5k** today\n\n```sh\necho '<done>'\n```");
//! assert!(html.contains("<strong>5k</strong>"));
//! assert!(html.contains("echo &#39;&lt;done&gt;&#39;"));
//! ```
//!
//! Whole month files (entries separated by `\n--\n`) go through
//! [`convert_entries`] or [`convert_file`]; the [`journal`] module finds
//! month files on disk.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `urnal` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod journal;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, HeadingStyle};
pub use convert::{
    convert, convert_entries, convert_entry, convert_file, convert_to_file, convert_with,
    Converter,
};
pub use error::UrnalError;
pub use journal::{scan_journal, split_entries, Month, MonthFile, YearGroup};
pub use output::{ConversionOutput, ConversionStats, EntryResult};
pub use pipeline::Pass;
