//! Paragraph wrapping, the last structural pass.
//!
//! Purely textual: any run of non-blank lines becomes a paragraph, including
//! lines that earlier passes already turned into markup.

/// Wrap each maximal run of non-blank lines in `<p>` … `</p>`.
///
/// Blank (whitespace-only) lines close the open paragraph and are dropped.
pub fn wrap_paragraphs(input: &str) -> String {
    let mut result: Vec<&str> = Vec::new();
    let mut inside_paragraph = false;

    for line in input.split('\n') {
        if line.trim().is_empty() {
            if inside_paragraph {
                result.push("</p>");
                inside_paragraph = false;
            }
        } else {
            if !inside_paragraph {
                result.push("<p>");
                inside_paragraph = true;
            }
            result.push(line);
        }
    }

    if inside_paragraph {
        result.push("</p>");
    }

    result.join("\n")
}
