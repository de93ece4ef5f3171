//! The feed document tree
//!
//! Every element type is a typed struct with named slots for its declared
//! children, an [`AttributeTable`] for its declared attributes and, for
//! composites, an ordered list of [`ForeignElement`]s holding everything
//! its schema does not declare. The [`RssNode`] trait gives the validator
//! and the serializer a generic, schema-driven view over all of them.

mod channel;
mod image;
mod item;
mod rdf;
mod seq;
mod stylesheet;
mod textinput;

pub use channel::{Channel, ChannelImage, ChannelTextinput, Items};
pub use image::Image;
pub use item::Item;
pub use rdf::Rdf;
pub use seq::{Li, Seq};
pub use stylesheet::XmlStyleSheet;
pub use textinput::Textinput;

use std::fmt;

use crate::error::ValidationError;
use crate::escape::escape_text;
use crate::namespaces::QName;
use crate::validators::{self, AttributeTable, ElementKind, ElementSchema};
use crate::{RDF_NAMESPACE, RSS_NAMESPACE};

/// Content found in a declared child slot
#[derive(Debug, Clone, Copy)]
pub enum Slot<'a> {
    /// Text leaf content
    Text(&'a str),
    /// Nested element
    Node(&'a dyn RssNode),
}

/// Generic view over any element of the tree.
pub trait RssNode: fmt::Debug {
    /// Element kind, which selects the schema
    fn kind(&self) -> ElementKind;

    /// Declared attribute values
    fn attributes(&self) -> &AttributeTable;

    /// Content held for the declared child `tag`, in order.
    ///
    /// Returns an empty list for absent or undeclared children.
    fn slots(&self, tag: &QName) -> Vec<Slot<'_>>;

    /// Undeclared children, in append order
    fn others(&self) -> &[ForeignElement] {
        &[]
    }

    /// Downcast to the document root
    fn as_rdf(&self) -> Option<&Rdf> {
        None
    }

    /// Schema for this node
    fn schema(&self) -> &'static ElementSchema {
        self.kind().schema()
    }

    /// Tags of the declared children present, in schema order
    fn present_tags(&self) -> Vec<QName> {
        let mut tags = Vec::new();
        for entry in self.schema().entries() {
            for _ in self.slots(&entry.tag) {
                tags.push(entry.tag.clone());
            }
        }
        tags
    }

    /// Nested element children, in schema order
    fn child_nodes(&self) -> Vec<&dyn RssNode> {
        self.schema()
            .entries()
            .flat_map(|entry| self.slots(&entry.tag))
            .filter_map(|slot| match slot {
                Slot::Node(node) => Some(node),
                Slot::Text(_) => None,
            })
            .collect()
    }

    /// Validate this node and its subtree
    fn validate(&self) -> Result<(), ValidationError>
    where
        Self: Sized,
    {
        validators::validate(self)
    }
}

/// A child element outside the owner's declared content model.
///
/// The markup is kept verbatim and written back unchanged after the
/// declared children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignElement {
    /// Qualified name of the element
    pub name: QName,
    /// Complete markup of the element, start tag to end tag
    pub markup: String,
}

impl ForeignElement {
    /// Wrap existing markup
    pub fn new(name: QName, markup: impl Into<String>) -> Self {
        Self {
            name,
            markup: markup.into(),
        }
    }

    /// Build a simple text element, e.g. `<dc:date>2004-01-01</dc:date>`.
    ///
    /// `prefixed_name` is written as given; the prefix must be declared
    /// on the document root.
    pub fn text(name: QName, prefixed_name: &str, text: &str) -> Self {
        let markup = format!("<{0}>{1}</{0}>", prefixed_name, escape_text(text));
        Self { name, markup }
    }
}

pub(crate) fn rss_tag(local_name: &str) -> QName {
    QName::namespaced(RSS_NAMESPACE, local_name)
}

pub(crate) fn rdf_attr(local_name: &str) -> QName {
    QName::namespaced(RDF_NAMESPACE, local_name)
}

pub(crate) fn text_slot(value: &Option<String>) -> Vec<Slot<'_>> {
    value.as_deref().map(Slot::Text).into_iter().collect()
}

pub(crate) fn node_slot<T: RssNode>(value: &Option<T>) -> Vec<Slot<'_>> {
    value
        .as_ref()
        .map(|node| Slot::Node(node as &dyn RssNode))
        .into_iter()
        .collect()
}

/// Local name of `tag` if it belongs to the RSS vocabulary
pub(crate) fn rss_local(tag: &QName) -> Option<&str> {
    tag.is_in(RSS_NAMESPACE).then_some(tag.local_name.as_str())
}
