//! `channel` and the reference elements it carries

use super::{
    node_slot, rdf_attr, rss_local, text_slot, ForeignElement, Image, Item, Li, RssNode, Seq,
    Slot, Textinput,
};
use crate::namespaces::QName;
use crate::validators::{AttributeTable, ElementKind};
use crate::RDF_NAMESPACE;

/// The channel description.
///
/// `image`, `items` and `textinput` are value links to top-level elements
/// of the same document: they hold the `about` of their target, not the
/// target itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    /// Declared attributes (`rdf:about`)
    pub attributes: AttributeTable,
    /// `title`
    pub title: Option<String>,
    /// `link`
    pub link: Option<String>,
    /// `description`
    pub description: Option<String>,
    /// Reference to the top-level image
    pub image: Option<ChannelImage>,
    /// Advertised item ordering
    pub items: Option<Items>,
    /// Reference to the top-level text input
    pub textinput: Option<ChannelTextinput>,
    /// Undeclared children
    pub others: Vec<ForeignElement>,
}

impl Channel {
    /// Create a channel identified by `about`
    pub fn new(about: impl Into<String>) -> Self {
        let mut channel = Self::default();
        channel.set_about(Some(about.into()));
        channel
    }

    /// The `rdf:about` URI
    pub fn about(&self) -> Option<&str> {
        self.attributes.get(&rdf_attr("about"))
    }

    /// Set or clear the `rdf:about` URI
    pub fn set_about(&mut self, about: Option<String>) {
        self.attributes.set_opt(rdf_attr("about"), about);
    }

    /// Point the image reference at `image`
    pub fn set_image_reference(&mut self, image: &Image) {
        self.image = Some(ChannelImage::from_about(image.about()));
    }

    /// Point the text input reference at `textinput`
    pub fn set_textinput_reference(&mut self, textinput: &Textinput) {
        self.textinput = Some(ChannelTextinput::from_about(textinput.about()));
    }

    /// Append `item` to the advertised item sequence
    pub fn add_item_reference(&mut self, item: &Item) {
        let items = self.items.get_or_insert_with(Items::new);
        let seq = items.seq.get_or_insert_with(Seq::new);
        let mut li = Li::default();
        li.set_resource(item.about().map(str::to_string));
        seq.li.push(li);
    }

    /// Append an undeclared child
    pub fn add_other(&mut self, other: ForeignElement) {
        self.others.push(other);
    }
}

impl RssNode for Channel {
    fn kind(&self) -> ElementKind {
        ElementKind::Channel
    }

    fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    fn slots(&self, tag: &QName) -> Vec<Slot<'_>> {
        match rss_local(tag) {
            Some("title") => text_slot(&self.title),
            Some("link") => text_slot(&self.link),
            Some("description") => text_slot(&self.description),
            Some("image") => node_slot(&self.image),
            Some("items") => node_slot(&self.items),
            Some("textinput") => node_slot(&self.textinput),
            _ => Vec::new(),
        }
    }

    fn others(&self) -> &[ForeignElement] {
        &self.others
    }
}

/// `channel/image`: `<image rdf:resource="..."/>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelImage {
    /// Declared attributes (`rdf:resource`)
    pub attributes: AttributeTable,
}

/// `channel/textinput`: `<textinput rdf:resource="..."/>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelTextinput {
    /// Declared attributes (`rdf:resource`)
    pub attributes: AttributeTable,
}

macro_rules! resource_reference {
    ($name:ident, $kind:expr) => {
        impl $name {
            /// Create a reference to `resource`
            pub fn new(resource: impl Into<String>) -> Self {
                let resource: String = resource.into();
                Self::from_about(Some(&resource))
            }

            fn from_about(about: Option<&str>) -> Self {
                let mut reference = Self::default();
                reference.set_resource(about.map(str::to_string));
                reference
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

        impl RssNode for $name {
            fn kind(&self) -> ElementKind {
                $kind
            }

            fn attributes(&self) -> &AttributeTable {
                &self.attributes
            }

            fn slots(&self, _tag: &QName) -> Vec<Slot<'_>> {
                Vec::new()
            }
        }
    };
}

resource_reference!(ChannelImage, ElementKind::ChannelImage);
resource_reference!(ChannelTextinput, ElementKind::ChannelTextinput);

/// `channel/items`: wrapper around the `rdf:Seq` listing the items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Items {
    /// Declared attributes (none)
    pub attributes: AttributeTable,
    /// The item sequence
    pub seq: Option<Seq>,
    /// Undeclared children
    pub others: Vec<ForeignElement>,
}

impl Items {
    /// Create a wrapper holding an empty sequence
    pub fn new() -> Self {
        Self::with_seq(Seq::new())
    }

    /// Create a wrapper holding `seq`
    pub fn with_seq(seq: Seq) -> Self {
        Self {
            seq: Some(seq),
            ..Self::default()
        }
    }

    /// Append an undeclared child
    pub fn add_other(&mut self, other: ForeignElement) {
        self.others.push(other);
    }
}

impl RssNode for Items {
    fn kind(&self) -> ElementKind {
        ElementKind::Items
    }

    fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    fn slots(&self, tag: &QName) -> Vec<Slot<'_>> {
        if tag.is_in(RDF_NAMESPACE) && tag.local_name == "Seq" {
            node_slot(&self.seq)
        } else {
            Vec::new()
        }
    }

    fn others(&self) -> &[ForeignElement] {
        &self.others
    }
}
