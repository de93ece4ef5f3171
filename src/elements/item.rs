//! `item`

use super::{rdf_attr, rss_local, text_slot, ForeignElement, RssNode, Slot};
use crate::namespaces::QName;
use crate::validators::{AttributeTable, ElementKind};

/// A single feed entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    /// Declared attributes (`rdf:about`)
    pub attributes: AttributeTable,
    /// `title`
    pub title: Option<String>,
    /// `link`
    pub link: Option<String>,
    /// `description` (optional)
    pub description: Option<String>,
    /// Undeclared children
    pub others: Vec<ForeignElement>,
}

impl Item {
    /// Create an item identified by `about`
    pub fn new(about: impl Into<String>) -> Self {
        let mut item = Self::default();
        item.set_about(Some(about.into()));
        item
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

impl RssNode for Item {
    fn kind(&self) -> ElementKind {
        ElementKind::Item
    }

    fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    fn slots(&self, tag: &QName) -> Vec<Slot<'_>> {
        match rss_local(tag) {
            Some("title") => text_slot(&self.title),
            Some("link") => text_slot(&self.link),
            Some("description") => text_slot(&self.description),
            _ => Vec::new(),
        }
    }

    fn others(&self) -> &[ForeignElement] {
        &self.others
    }
}
