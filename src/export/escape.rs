//! Minimal HTML escaping for code cells.

/// Escapes the five reserved HTML characters.
///
/// The ampersand is replaced first so the entity text inserted by the later
/// replacements is never escaped a second time.
///
/// # Examples
///
/// ```
/// use qvhtml::export::html_escape;
///
/// assert_eq!(html_escape(r#"<b>"x"</b>"#), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
/// assert_eq!(html_escape("a & b"), "a &amp; b");
/// ```
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
