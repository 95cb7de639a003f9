/// Escape text for use in element content and double-quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Percent-encode the characters that would end or break a quoted CSS
/// `url('...')`. HTML entities are decoded before CSS parses the attribute,
/// so `escape` alone is not enough inside `style`.
pub fn css_url(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\'' => out.push_str("%27"),
            '"' => out.push_str("%22"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '\\' => out.push_str("%5C"),
            c if c.is_whitespace() => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{:02X}", byte));
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_urls_untouched() {
        let url = "https://github.com/shameem8ods/Amazon_clone";
        assert_eq!(escape(url), url);
    }

    #[test]
    fn test_css_url_encodes_quote_parens_and_spaces() {
        assert_eq!(css_url("image/it's (1).png"), "image/it%27s%20%281%29.png");
        assert_eq!(css_url("image/amazon.png"), "image/amazon.png");
        assert_eq!(css_url("a\tb\\c\"d"), "a%09b%5Cc%22d");
    }
}
