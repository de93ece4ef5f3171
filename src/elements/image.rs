//! Top-level `image`

use super::{rdf_attr, rss_local, text_slot, ForeignElement, RssNode, Slot};
use crate::namespaces::QName;
use crate::validators::{AttributeTable, ElementKind};

/// An image the channel can be rendered with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    /// Declared attributes (`rdf:about`)
    pub attributes: AttributeTable,
    /// Alternative text
    pub title: Option<String>,
    /// Location of the image file
    pub url: Option<String>,
    /// Where the image links to
    pub link: Option<String>,
    /// Undeclared children
    pub others: Vec<ForeignElement>,
}

impl Image {
    /// Create an image identified by `about`
    pub fn new(about: impl Into<String>) -> Self {
        let mut image = Self::default();
        image.set_about(Some(about.into()));
        image
    }

    /// The `rdf:about` URI
    pub fn about(&self) -> Option<&str> {
        self.attributes.get(&rdf_attr("about"))
    }

    /// Set or clear the `rdf:about` URI
    pub fn set_about(&mut self, about: Option<String>) {
        self.attributes.set_opt(rdf_attr("about"), about);
    }

    /// Append an undeclared child
    pub fn add_other(&mut self, other: ForeignElement) {
        self.others.push(other);
    }
}

impl RssNode for Image {
    fn kind(&self) -> ElementKind {
        ElementKind::Image
    }

    fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    fn slots(&self, tag: &QName) -> Vec<Slot<'_>> {
        match rss_local(tag) {
            Some("title") => text_slot(&self.title),
            Some("url") => text_slot(&self.url),
            Some("link") => text_slot(&self.link),
            _ => Vec::new(),
        }
    }

    fn others(&self) -> &[ForeignElement] {
        &self.others
    }
}
