//! HTML escaping for attacker-controlled fields.

/// Escape HTML special characters.
///
/// Safe for both text content and double- or single-quoted attribute values.
///
/// # Examples
///
/// ```
/// use card_render::escape_html;
///
/// assert_eq!(escape_html("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
