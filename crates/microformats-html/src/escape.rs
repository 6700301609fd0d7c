//! HTML text escaping.

/// Escapes text for use in HTML content or a quoted attribute.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity forms.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_plain_text_unchanged() {
        assert_eq!(escape_html("hello world"), "hello world");
    }

    #[test]
    fn escape_markup() {
        assert_eq!(
            escape_html("<b>Tom & \"Jerry's\"</b>"),
            "&lt;b&gt;Tom &amp; &quot;Jerry&#039;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn escape_keeps_unicode() {
        assert_eq!(escape_html("née"), "née");
    }
}
