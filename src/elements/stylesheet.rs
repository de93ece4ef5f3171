//! `xml-stylesheet` processing instructions

use std::borrow::Cow;

use once_cell::sync::Lazy;
use quick_xml::escape::unescape;
use regex::Regex;

use crate::escape::escape_attribute;

static PSEUDO_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_][\w.-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("pseudo-attribute pattern is valid")
});

/// A stylesheet association written before the root element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlStyleSheet {
    /// Stylesheet location
    pub href: Option<String>,
    /// Stylesheet media type
    pub r#type: Option<String>,
    /// Stylesheet title
    pub title: Option<String>,
    /// Target media
    pub media: Option<String>,
    /// Stylesheet character encoding
    pub charset: Option<String>,
    /// `yes` for alternate stylesheets
    pub alternate: Option<String>,
}

impl XmlStyleSheet {
    /// Create an association for `href`, guessing the type from its
    /// extension (`.xsl` and `.css` are recognized).
    pub fn new(href: impl Into<String>) -> Self {
        let href = href.into();
        let r#type = guess_type(&href).map(str::to_string);
        Self {
            href: Some(href),
            r#type,
            ..Self::default()
        }
    }

    /// Parse the content of a `xml-stylesheet` processing instruction.
    ///
    /// Unknown pseudo-attributes are ignored.
    pub fn parse(content: &str) -> Self {
        let mut sheet = Self::default();
        for caps in PSEUDO_ATTRIBUTE.captures_iter(content) {
            let raw = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            let value = unescape(raw).unwrap_or(Cow::Borrowed(raw)).into_owned();
            match &caps[1] {
                "href" => sheet.href = Some(value),
                "type" => sheet.r#type = Some(value),
                "title" => sheet.title = Some(value),
                "media" => sheet.media = Some(value),
                "charset" => sheet.charset = Some(value),
                "alternate" => sheet.alternate = Some(value),
                _ => {}
            }
        }
        sheet
    }

    fn pseudo_attributes(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("href", self.href.as_deref()),
            ("type", self.r#type.as_deref()),
            ("title", self.title.as_deref()),
            ("media", self.media.as_deref()),
            ("charset", self.charset.as_deref()),
            ("alternate", self.alternate.as_deref()),
        ]
    }

    /// Render as a processing instruction
    pub fn to_pi(&self) -> String {
        let mut pi = String::from("<?xml-stylesheet");
        for (name, value) in self.pseudo_attributes() {
            if let Some(value) = value {
                pi.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
            }
        }
        pi.push_str("?>");
        pi
    }
}

fn guess_type(href: &str) -> Option<&'static str> {
    let (_, extension) = href.rsplit_once('.')?;
    match extension.to_ascii_lowercase().as_str() {
        "xsl" => Some("text/xsl"),
        "css" => Some("text/css"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_type() {
        assert_eq!(XmlStyleSheet::new("feed.XSL").r#type.as_deref(), Some("text/xsl"));
        assert_eq!(XmlStyleSheet::new("feed.css").r#type.as_deref(), Some("text/css"));
        assert_eq!(XmlStyleSheet::new("feed").r#type, None);
    }

    #[test]
    fn test_to_pi() {
        let mut sheet = XmlStyleSheet::new("a.xsl");
        sheet.title = Some("A & B".into());
        assert_eq!(
            sheet.to_pi(),
            r#"<?xml-stylesheet href="a.xsl" type="text/xsl" title="A &amp; B"?>"#
        );
    }

    #[test]
    fn test_parse() {
        let sheet = XmlStyleSheet::parse(r#"type='text/css' href="s.css" media="screen" foo="bar""#);
        assert_eq!(sheet.href.as_deref(), Some("s.css"));
        assert_eq!(sheet.r#type.as_deref(), Some("text/css"));
        assert_eq!(sheet.media.as_deref(), Some("screen"));
        assert_eq!(sheet.title, None);
    }

    #[test]
    fn test_parse_unescapes_values() {
        let sheet = XmlStyleSheet::parse(r#"href="a.xsl?x=1&amp;y=2""#);
        assert_eq!(sheet.href.as_deref(), Some("a.xsl?x=1&y=2"));
        assert_eq!(XmlStyleSheet::parse(&sheet.to_pi()[17..]).href, sheet.href);
    }
}
