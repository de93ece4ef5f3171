//! Top-level `textinput`

use super::{rdf_attr, rss_local, text_slot, ForeignElement, RssNode, Slot};
use crate::namespaces::QName;
use crate::validators::{AttributeTable, ElementKind};

/// A form for submitting a query to the channel's site
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Textinput {
    /// Declared attributes (`rdf:about`)
    pub attributes: AttributeTable,
    /// Label of the submit button
    pub title: Option<String>,
    /// Explanation of the input
    pub description: Option<String>,
    /// Name of the text object
    pub name: Option<String>,
    /// URL of the processing script
    pub link: Option<String>,
    /// Undeclared children
    pub others: Vec<ForeignElement>,
}

impl Textinput {
    /// Create a text input identified by `about`
    pub fn new(about: impl Into<String>) -> Self {
        let mut textinput = Self::default();
        textinput.set_about(Some(about.into()));
        textinput
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

impl RssNode for Textinput {
    fn kind(&self) -> ElementKind {
        ElementKind::Textinput
    }

    fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    fn slots(&self, tag: &QName) -> Vec<Slot<'_>> {
        match rss_local(tag) {
            Some("title") => text_slot(&self.title),
            Some("description") => text_slot(&self.description),
            Some("name") => text_slot(&self.name),
            Some("link") => text_slot(&self.link),
            _ => Vec::new(),
        }
    }

    fn others(&self) -> &[ForeignElement] {
        &self.others
    }
}
