//! The RSS 1.0 schema table
//!
//! Each element type is described once, here, by an [`ElementSchema`]:
//! its qualified name, its ordered content model, its attributes and an
//! optional nested model bound to a foreign namespace. The validator and
//! the serializer both read this table, so they can never disagree about
//! the shape of an element.

use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::particles::Occurs;
use crate::namespaces::QName;
use crate::{RDF_NAMESPACE, RSS_NAMESPACE};

/// Element types of the RSS 1.0 vocabulary.
///
/// `image` and `textinput` occur twice in the format: as full
/// descriptions under the root and as resource references inside
/// `channel`. They are distinct kinds with distinct schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ElementKind {
    /// `rdf:RDF`, the document root
    Rdf,
    /// `channel`
    Channel,
    /// `channel/image`, a reference to the top-level image
    ChannelImage,
    /// `channel/textinput`, a reference to the top-level text input
    ChannelTextinput,
    /// `channel/items`, wrapper around the item sequence
    Items,
    /// `rdf:Seq`
    Seq,
    /// `rdf:li`
    Li,
    /// Top-level `image`
    Image,
    /// `item`
    Item,
    /// Top-level `textinput`
    Textinput,
}

impl ElementKind {
    /// Every element kind, root first
    pub const ALL: [ElementKind; 10] = [
        ElementKind::Rdf,
        ElementKind::Channel,
        ElementKind::ChannelImage,
        ElementKind::ChannelTextinput,
        ElementKind::Items,
        ElementKind::Seq,
        ElementKind::Li,
        ElementKind::Image,
        ElementKind::Item,
        ElementKind::Textinput,
    ];

    /// The schema describing this kind
    pub fn schema(self) -> &'static ElementSchema {
        SCHEMAS.get(self)
    }

    /// The qualified tag name of this kind
    pub fn tag(self) -> &'static QName {
        &self.schema().name
    }

    /// Short human-readable name used in messages
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Rdf => "rdf:RDF",
            ElementKind::Channel => "channel",
            ElementKind::ChannelImage => "channel/image",
            ElementKind::ChannelTextinput => "channel/textinput",
            ElementKind::Items => "items",
            ElementKind::Seq => "rdf:Seq",
            ElementKind::Li => "rdf:li",
            ElementKind::Image => "image",
            ElementKind::Item => "item",
            ElementKind::Textinput => "textinput",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a content model entry holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    /// A text leaf such as `title`
    Text,
    /// A nested element of the given kind
    Element(ElementKind),
}

/// One `(child tag, occurrence)` pair of a content model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEntry {
    /// Child tag
    pub tag: QName,
    /// Occurrence bound
    pub occurs: Occurs,
    /// Leaf text or nested element
    pub content: Content,
}

/// Attribute declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDecl {
    /// Qualified attribute name
    pub name: QName,
    /// Whether the attribute must be present and non-empty
    pub required: bool,
    /// Whether the unqualified spelling is accepted on input
    pub accepts_unqualified: bool,
}

/// A content model bound to a namespace other than the host element's.
///
/// Every child of the host in `namespace`, declared or not, is checked
/// against `model` after the host's own model passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubModel {
    /// Namespace the nested vocabulary lives in
    pub namespace: String,
    /// Ordered content model for that namespace
    pub model: Vec<ModelEntry>,
}

/// Schema of a single element type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSchema {
    /// Element kind
    pub kind: ElementKind,
    /// Qualified tag name
    pub name: QName,
    /// Ordered content model over the host vocabulary
    pub model: Vec<ModelEntry>,
    /// Declared attributes in output order
    pub attributes: Vec<AttributeDecl>,
    /// Nested model delegated to another namespace
    pub sub_model: Option<SubModel>,
    /// Resource-only leaf written as a single self-closing tag
    pub empty: bool,
}

impl ElementSchema {
    /// Iterate over every declared entry, host model first, in output order
    pub fn entries(&self) -> impl Iterator<Item = &ModelEntry> {
        self.model
            .iter()
            .chain(self.sub_model.iter().flat_map(|sub| sub.model.iter()))
    }

    /// Look up the entry declaring `tag`
    pub fn entry(&self, tag: &QName) -> Option<&ModelEntry> {
        self.entries().find(|entry| &entry.tag == tag)
    }

    /// Check whether `tag` belongs to the host content model
    pub fn declares(&self, tag: &QName) -> bool {
        self.model.iter().any(|entry| &entry.tag == tag)
    }

    /// Check whether `tag` falls under the delegated namespace
    pub fn delegates(&self, tag: &QName) -> bool {
        match (&self.sub_model, tag.namespace()) {
            (Some(sub), Some(ns)) => sub.namespace == ns,
            _ => false,
        }
    }

    /// Look up an attribute declaration by local name
    pub fn attribute(&self, local_name: &str) -> Option<&AttributeDecl> {
        self.attributes
            .iter()
            .find(|decl| decl.name.local_name == local_name)
    }

    /// Declared attributes that must be present
    pub fn required_attributes(&self) -> impl Iterator<Item = &AttributeDecl> {
        self.attributes.iter().filter(|decl| decl.required)
    }
}

struct SchemaTable {
    rdf: ElementSchema,
    channel: ElementSchema,
    channel_image: ElementSchema,
    channel_textinput: ElementSchema,
    items: ElementSchema,
    seq: ElementSchema,
    li: ElementSchema,
    image: ElementSchema,
    item: ElementSchema,
    textinput: ElementSchema,
}

impl SchemaTable {
    fn get(&self, kind: ElementKind) -> &ElementSchema {
        match kind {
            ElementKind::Rdf => &self.rdf,
            ElementKind::Channel => &self.channel,
            ElementKind::ChannelImage => &self.channel_image,
            ElementKind::ChannelTextinput => &self.channel_textinput,
            ElementKind::Items => &self.items,
            ElementKind::Seq => &self.seq,
            ElementKind::Li => &self.li,
            ElementKind::Image => &self.image,
            ElementKind::Item => &self.item,
            ElementKind::Textinput => &self.textinput,
        }
    }
}

fn rss(local_name: &str) -> QName {
    QName::namespaced(RSS_NAMESPACE, local_name)
}

fn rdf(local_name: &str) -> QName {
    QName::namespaced(RDF_NAMESPACE, local_name)
}

fn text(local_name: &str, occurs: Occurs) -> ModelEntry {
    ModelEntry {
        tag: rss(local_name),
        occurs,
        content: Content::Text,
    }
}

fn child(tag: QName, occurs: Occurs, kind: ElementKind) -> ModelEntry {
    ModelEntry {
        tag,
        occurs,
        content: Content::Element(kind),
    }
}

fn required(local_name: &str) -> AttributeDecl {
    AttributeDecl {
        name: rdf(local_name),
        required: true,
        accepts_unqualified: false,
    }
}

fn schema(
    kind: ElementKind,
    name: QName,
    model: Vec<ModelEntry>,
    attributes: Vec<AttributeDecl>,
) -> ElementSchema {
    ElementSchema {
        kind,
        name,
        model,
        attributes,
        sub_model: None,
        empty: false,
    }
}

fn reference(kind: ElementKind, local_name: &str) -> ElementSchema {
    ElementSchema {
        empty: true,
        ..schema(kind, rss(local_name), vec![], vec![required("resource")])
    }
}

fn rdf_sub_model(model: Vec<ModelEntry>) -> Option<SubModel> {
    Some(SubModel {
        namespace: RDF_NAMESPACE.to_string(),
        model,
    })
}

static SCHEMAS: Lazy<SchemaTable> = Lazy::new(|| SchemaTable {
    rdf: ElementSchema {
        // Nothing from the RDF vocabulary may appear directly under the root.
        sub_model: rdf_sub_model(vec![]),
        ..schema(
            ElementKind::Rdf,
            rdf("RDF"),
            vec![
                child(rss("channel"), Occurs::once(), ElementKind::Channel),
                child(rss("image"), Occurs::optional(), ElementKind::Image),
                child(rss("item"), Occurs::one_or_more(), ElementKind::Item),
                child(rss("textinput"), Occurs::optional(), ElementKind::Textinput),
            ],
            vec![],
        )
    },
    channel: schema(
        ElementKind::Channel,
        rss("channel"),
        vec![
            text("title", Occurs::once()),
            text("link", Occurs::once()),
            text("description", Occurs::once()),
            child(rss("image"), Occurs::optional(), ElementKind::ChannelImage),
            child(rss("items"), Occurs::once(), ElementKind::Items),
            child(rss("textinput"), Occurs::optional(), ElementKind::ChannelTextinput),
        ],
        vec![required("about")],
    ),
    channel_image: reference(ElementKind::ChannelImage, "image"),
    channel_textinput: reference(ElementKind::ChannelTextinput, "textinput"),
    items: ElementSchema {
        sub_model: rdf_sub_model(vec![child(rdf("Seq"), Occurs::once(), ElementKind::Seq)]),
        ..schema(ElementKind::Items, rss("items"), vec![], vec![])
    },
    seq: ElementSchema {
        sub_model: rdf_sub_model(vec![child(rdf("li"), Occurs::zero_or_more(), ElementKind::Li)]),
        ..schema(ElementKind::Seq, rdf("Seq"), vec![], vec![])
    },
    li: ElementSchema {
        empty: true,
        ..schema(
            ElementKind::Li,
            rdf("li"),
            vec![],
            vec![AttributeDecl {
                accepts_unqualified: true,
                ..required("resource")
            }],
        )
    },
    image: schema(
        ElementKind::Image,
        rss("image"),
        vec![
            text("title", Occurs::once()),
            text("url", Occurs::once()),
            text("link", Occurs::once()),
        ],
        vec![required("about")],
    ),
    item: schema(
        ElementKind::Item,
        rss("item"),
        vec![
            text("title", Occurs::once()),
            text("link", Occurs::once()),
            text("description", Occurs::optional()),
        ],
        vec![required("about")],
    ),
    textinput: schema(
        ElementKind::Textinput,
        rss("textinput"),
        vec![
            text("title", Occurs::once()),
            text("description", Occurs::once()),
            text("name", Occurs::once()),
            text("link", Occurs::once()),
        ],
        vec![required("about")],
    ),
});
