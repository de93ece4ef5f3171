//! The `rdf:RDF` document root

use super::{node_slot, rss_local, ForeignElement, RssNode, Slot};
use super::{Channel, Image, Item, Textinput, XmlStyleSheet};
use crate::error::Result;
use crate::escape::escape_attribute;
use crate::namespaces::{NamespaceDeclarations, QName};
use crate::validators::{AttributeTable, ElementKind};

/// The RSS 1.0 document.
///
/// Besides its content, the root carries the XML declaration metadata,
/// the stylesheet associations and the namespace bindings rendered on the
/// root tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rdf {
    /// XML version written in the declaration
    pub version: String,
    /// Declared encoding
    pub encoding: Option<String>,
    /// Declared standalone status
    pub standalone: Option<String>,
    /// Stylesheet associations, in output order
    pub stylesheets: Vec<XmlStyleSheet>,
    /// The channel
    pub channel: Option<Channel>,
    /// Top-level image
    pub image: Option<Image>,
    /// Items, in document order
    pub items: Vec<Item>,
    /// Top-level text input
    pub textinput: Option<Textinput>,
    /// Undeclared children
    pub others: Vec<ForeignElement>,
    attributes: AttributeTable,
    namespaces: NamespaceDeclarations,
}

impl Rdf {
    /// Version of the RSS format this root models
    pub const RSS_VERSION: &'static str = "1.0";

    /// Create an empty document with the RSS 1.0 namespace bindings
    pub fn new() -> Self {
        Self {
            version: "1.0".to_string(),
            encoding: None,
            standalone: None,
            stylesheets: Vec::new(),
            channel: None,
            image: None,
            items: Vec::new(),
            textinput: None,
            others: Vec::new(),
            attributes: AttributeTable::new(),
            namespaces: NamespaceDeclarations::rss10(),
        }
    }

    /// Create a document with XML declaration metadata
    pub fn with_declaration(
        version: Option<String>,
        encoding: Option<String>,
        standalone: Option<String>,
    ) -> Self {
        let mut rdf = Self::new();
        if let Some(version) = version {
            rdf.version = version;
        }
        rdf.encoding = encoding;
        rdf.standalone = standalone;
        rdf
    }

    /// The RSS format version, always `1.0`
    pub fn rss_version(&self) -> &'static str {
        Self::RSS_VERSION
    }

    /// Namespace bindings rendered on the root tag
    pub fn namespaces(&self) -> &NamespaceDeclarations {
        &self.namespaces
    }

    /// Bind `prefix` to `uri` on the root tag
    pub fn install_namespace(&mut self, prefix: &str, uri: &str) -> Result<()> {
        self.namespaces.install(prefix, uri)
    }

    /// Append an undeclared child
    pub fn add_other(&mut self, other: ForeignElement) {
        self.others.push(other);
    }

    /// The XML declaration line
    pub fn xml_declaration(&self) -> String {
        let mut decl = format!("<?xml version=\"{}\"", escape_attribute(&self.version));
        if let Some(ref encoding) = self.encoding {
            decl.push_str(&format!(" encoding=\"{}\"", escape_attribute(encoding)));
        }
        if let Some(ref standalone) = self.standalone {
            decl.push_str(&format!(" standalone=\"{}\"", escape_attribute(standalone)));
        }
        decl.push_str("?>");
        decl
    }
}

impl Default for Rdf {
    fn default() -> Self {
        Self::new()
    }
}

impl RssNode for Rdf {
    fn kind(&self) -> ElementKind {
        ElementKind::Rdf
    }

    fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    fn slots(&self, tag: &QName) -> Vec<Slot<'_>> {
        match rss_local(tag) {
            Some("channel") => node_slot(&self.channel),
            Some("image") => node_slot(&self.image),
            Some("item") => self
                .items
                .iter()
                .map(|item| Slot::Node(item as &dyn RssNode))
                .collect(),
            Some("textinput") => node_slot(&self.textinput),
            _ => Vec::new(),
        }
    }

    fn others(&self) -> &[ForeignElement] {
        &self.others
    }

    fn as_rdf(&self) -> Option<&Rdf> {
        Some(self)
    }
}
