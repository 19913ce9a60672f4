//! Configuration types for markdown-to-HTML conversion.
//!
//! The core pipeline has exactly one behavioural knob, the heading style.
//! Everything else here concerns how whole month files are split into
//! entries and assembled. All of it lives in [`ConversionConfig`], built via
//! its [`ConversionConfigBuilder`], so a single value can be shared across
//! threads and logged as-is.

use crate::error::UrnalError;
use serde::{Deserialize, Serialize};

/// Delimiter between entries inside a month file.
pub const DEFAULT_ENTRY_DELIMITER: &str = "\n--\n";

/// Configuration for a conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use urnal_md::{ConversionConfig, HeadingStyle};
///
/// let config = ConversionConfig::builder()
///     .heading_style(HeadingStyle::Leveled)
///     .wrap_entries(false)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// How header lines (`# Title`) are rendered. Default: [`HeadingStyle::BoldLine`].
    pub heading_style: HeadingStyle,

    /// Separator between entries in a month file. Default: `"\n--\n"`.
    pub entry_delimiter: String,

    /// Wrap each rendered entry in `<article>…</article>`. Default: true.
    pub wrap_entries: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            heading_style: HeadingStyle::default(),
            entry_delimiter: DEFAULT_ENTRY_DELIMITER.to_string(),
            wrap_entries: true,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn heading_style(mut self, style: HeadingStyle) -> Self {
        self.config.heading_style = style;
        self
    }

    pub fn entry_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.entry_delimiter = delimiter.into();
        self
    }

    pub fn wrap_entries(mut self, v: bool) -> Self {
        self.config.wrap_entries = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, UrnalError> {
        if self.config.entry_delimiter.is_empty() {
            return Err(UrnalError::InvalidConfig(
                "entry delimiter must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Rendering of lines that start with 1–6 `#` markers.
///
/// | Style | `## Notes` renders as |
/// |-------|-----------------------|
/// | `BoldLine` | `<b>## Notes</b>` |
/// | `Leveled`  | `<h2>Notes</h2>` |
///
/// `BoldLine` is what existing journal pages look like, so it stays the
/// default; `Leveled` is conventional markdown heading output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadingStyle {
    /// Bold-wrap the whole line, markers included. (default)
    #[default]
    BoldLine,
    /// Strip the markers and emit `<h1>`–`<h6>`.
    Leveled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_month_file_format() {
        let c = ConversionConfig::default();
        assert_eq!(c.heading_style, HeadingStyle::BoldLine);
        assert_eq!(c.entry_delimiter, "\n--\n");
        assert!(c.wrap_entries);
    }

    #[test]
    fn builder_sets_fields() {
        let c = ConversionConfig::builder()
            .heading_style(HeadingStyle::Leveled)
            .entry_delimiter("\n===\n")
            .wrap_entries(false)
            .build()
            .unwrap();
        assert_eq!(c.heading_style, HeadingStyle::Leveled);
        assert_eq!(c.entry_delimiter, "\n===\n");
        assert!(!c.wrap_entries);
    }

    #[test]
    fn empty_delimiter_is_rejected() {
        let err = ConversionConfig::builder()
            .entry_delimiter("")
            .build()
            .unwrap_err();
        assert!(matches!(err, UrnalError::InvalidConfig(_)));
    }

    #[test]
    fn heading_style_serialises_kebab_case() {
        let json = serde_json::to_string(&HeadingStyle::BoldLine).unwrap();
        assert_eq!(json, "\"bold-line\"");
        let back: HeadingStyle = serde_json::from_str("\"leveled\"").unwrap();
        assert_eq!(back, HeadingStyle::Leveled);
    }
}
