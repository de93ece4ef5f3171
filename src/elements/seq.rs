//! `rdf:Seq` and `rdf:li`

use super::{rdf_attr, ForeignElement, RssNode, Slot};
use crate::namespaces::QName;
use crate::validators::{AttributeTable, ElementKind};
use crate::RDF_NAMESPACE;

/// Ordered list of resource references. The order of `li` is the
/// advertised item order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seq {
    /// Declared attributes (none)
    pub attributes: AttributeTable,
    /// List members
    pub li: Vec<Li>,
    /// Undeclared children
    pub others: Vec<ForeignElement>,
}

impl Seq {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member referencing `resource`
    pub fn push(&mut self, resource: impl Into<String>) {
        self.li.push(Li::new(resource));
    }

    /// Append an undeclared child
    pub fn add_other(&mut self, other: ForeignElement) {
        self.others.push(other);
    }
}

impl RssNode for Seq {
    fn kind(&self) -> ElementKind {
        ElementKind::Seq
    }

    fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    fn slots(&self, tag: &QName) -> Vec<Slot<'_>> {
        if tag.is_in(RDF_NAMESPACE) && tag.local_name == "li" {
            self.li.iter().map(|li| Slot::Node(li as &dyn RssNode)).collect()
        } else {
            Vec::new()
        }
    }

    fn others(&self) -> &[ForeignElement] {
        &self.others
    }
}

/// `rdf:li`, a single reference to the `about` of another element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Li {
    /// Declared attributes (`rdf:resource`)
    pub attributes: AttributeTable,
}

impl Li {
    /// Create a member referencing `resource`
    pub fn new(resource: impl Into<String>) -> Self {
        let mut li = Self::default();
        li.set_resource(Some(resource.into()));
        li
    }

    /// The referenced URI
    pub fn resource(&self) -> Option<&str> {
        self.attributes.get(&rdf_attr("resource"))
    }

    /// Set or clear the referenced URI
    pub fn set_resource(&mut self, resource: Option<String>) {
        self.attributes.set_opt(rdf_attr("resource"), resource);
    }
}

impl RssNode for Li {
    fn kind(&self) -> ElementKind {
        ElementKind::Li
    }

    fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    fn slots(&self, _tag: &QName) -> Vec<Slot<'_>> {
        Vec::new()
    }
}
