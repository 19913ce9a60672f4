//! Literal HTML escaping for code text and table cells.

/// Escape the five HTML-significant characters.
///
/// `&` is replaced first so the entities introduced by the later
/// replacements are not escaped twice.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
