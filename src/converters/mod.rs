//! Text converters
//!
//! A converter is the caller-supplied text transform applied to an
//! assembled fragment at serialization time, typically to adapt the
//! output to a target character encoding. The serializer calls it at
//! most once per `serialize` call, on the outermost fragment only.
//!
//! Any `Fn(&str) -> String` is a converter.

/// Transform applied to serialized output
pub trait TextConverter {
    /// Convert an assembled fragment
    fn convert(&self, text: &str) -> String;
}

impl<F> TextConverter for F
where
    F: Fn(&str) -> String,
{
    fn convert(&self, text: &str) -> String {
        self(text)
    }
}

/// Converter returning its input unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl TextConverter for Identity {
    fn convert(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Converter rewriting every non-ASCII character as a hexadecimal numeric
/// character reference, for ASCII-only output channels.
///
/// Only safe on text where non-ASCII characters occur in character data
/// or attribute values, not in element names.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterReferences;

impl TextConverter for CharacterReferences {
    fn convert(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii() {
                out.push(c);
            } else {
                out.push_str(&format!("&#x{:X};", u32::from(c)));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(Identity.convert("<a>é</a>"), "<a>é</a>");
    }

    #[test]
    fn test_character_references() {
        assert_eq!(
            CharacterReferences.convert("<title>Café ☕</title>"),
            "<title>Caf&#xE9; &#x2615;</title>"
        );
    }

    #[test]
    fn test_closure_converter() {
        let upper = |text: &str| text.to_uppercase();
        assert_eq!(upper.convert("abc"), "ABC");
    }
}
