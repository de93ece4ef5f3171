//! Escaping for serialized output
//!
//! `quick_xml::escape::escape` covers the five markup characters. A reader
//! additionally normalizes line breaks everywhere and all whitespace in
//! attribute values, so those characters are written as character
//! references where they would otherwise not survive a re-read.

use std::borrow::Cow;

use quick_xml::escape::escape;

/// Escape character data
pub fn escape_text(raw: &str) -> Cow<'_, str> {
    let escaped = escape(raw);
    if escaped.contains('\r') {
        Cow::Owned(escaped.replace('\r', "&#xD;"))
    } else {
        escaped
    }
}

/// Escape an attribute or pseudo-attribute value
pub fn escape_attribute(raw: &str) -> Cow<'_, str> {
    let escaped = escape(raw);
    if !escaped.contains(|c| matches!(c, '\t' | '\n' | '\r')) {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 8);
    for c in escaped.chars() {
        match c {
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_text("line\r\nbreak\tkept"), "line&#xD;\nbreak\tkept");
        assert!(matches!(escape_text("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("\"q\""), "&quot;q&quot;");
        assert_eq!(escape_attribute("a\tb\nc\rd"), "a&#x9;b&#xA;c&#xD;d");
    }
}
