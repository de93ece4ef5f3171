//! Document reader
//!
//! Builds an [`Rdf`] tree from XML text. Children the schema declares are
//! read into their typed slots; everything else is kept verbatim as a
//! [`ForeignElement`]. With validation on (the default), each node's
//! attributes and its child tags, in source order, are checked as soon as
//! the node is complete, so duplicated or misordered children are caught
//! before the typed tree absorbs them.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use roxmltree::{Document, Node};
use tracing::debug;

use crate::elements::{
    Channel, ChannelImage, ChannelTextinput, ForeignElement, Image, Item, Items, Li, Rdf, Seq,
    Textinput, XmlStyleSheet,
};
use crate::error::{Error, ParseError, Result};
use crate::escape::escape_attribute;
use crate::limits::Limits;
use crate::namespaces::QName;
use crate::validators::{self, AttributeTable, Content, ElementKind};
use crate::{RSS_NAMESPACE, XML_NAMESPACE};

static XML_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^\u{FEFF}?\s*<\?xml\s+version\s*=\s*["']([^"']*)["'](?:\s+encoding\s*=\s*["']([^"']*)["'])?(?:\s+standalone\s*=\s*["']([^"']*)["'])?\s*\?>"#,
    )
    .expect("XML declaration pattern is valid")
});

static START_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^<[^\s/>]+((?:\s+[^\s=/>]+\s*=\s*(?:"[^"]*"|'[^']*'))*)"#)
        .expect("start tag pattern is valid")
});

static ATTRIBUTE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\s+([^\s=/>]+)\s*=\s*(?:"[^"]*"|'[^']*')"#)
        .expect("attribute pattern is valid")
});

static UNPREFIXED_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^\s/>!?:]+[\s/>]").expect("unprefixed tag pattern is valid")
});

/// Reads RSS 1.0 documents
#[derive(Debug, Clone)]
pub struct RssReader {
    limits: Limits,
    validate: bool,
}

impl Default for RssReader {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            validate: true,
        }
    }
}

/// Read and validate a document with the default settings
pub fn parse(text: &str) -> Result<Rdf> {
    RssReader::new().parse(text)
}

impl RssReader {
    /// Create a validating reader with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Turn validation on or off
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Read a document from a file
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Rdf> {
        let text = fs::read_to_string(path)?;
        self.parse(&text)
    }

    /// Read a document
    pub fn parse(&self, text: &str) -> Result<Rdf> {
        self.limits.check_xml_size(text.len())?;

        let doc = Document::parse(text).map_err(|e| Error::Xml(e.to_string()))?;
        let (version, encoding, standalone) = read_declaration(text);
        let mut rdf = Rdf::with_declaration(version, encoding, standalone);

        for node in doc.root().children() {
            if node.is_element() {
                break;
            }
            if let Some(pi) = node.pi() {
                if pi.target == "xml-stylesheet" {
                    rdf.stylesheets
                        .push(XmlStyleSheet::parse(pi.value.unwrap_or_default()));
                }
            }
        }

        let root = doc.root_element();
        if qname_of(root) != *ElementKind::Rdf.tag() {
            let pos = doc.text_pos_at(root.range().start);
            return Err(ParseError::new(format!(
                "root element must be rdf:RDF, found '{}'",
                qname_of(root)
            ))
            .with_location(pos.to_string())
            .into());
        }

        let mut bindings = Vec::new();
        collect_bindings(root, ElementKind::Rdf, &mut bindings);
        for (prefix, uri) in &bindings {
            rdf.install_namespace(prefix, uri)?;
        }
        self.limits.check_namespaces(rdf.namespaces().len())?;

        self.read_rdf(&mut rdf, root, text)?;
        debug!(items = rdf.items.len(), "document read");
        Ok(rdf)
    }

    fn read_rdf(&self, rdf: &mut Rdf, node: Node<'_, '_>, src: &str) -> Result<()> {
        self.read_attributes(node, ElementKind::Rdf)?;
        let depth = 1;

        let others = self.read_children(node, ElementKind::Rdf, src, depth, |content, child| {
            match content {
                Content::Element(ElementKind::Channel) => {
                    rdf.channel = Some(self.read_channel(child, src, depth + 1)?);
                }
                Content::Element(ElementKind::Image) => {
                    rdf.image = Some(self.read_image(child, src, depth + 1)?);
                }
                Content::Element(ElementKind::Item) => {
                    rdf.items.push(self.read_item(child, src, depth + 1)?);
                    self.limits.check_items(rdf.items.len())?;
                }
                Content::Element(ElementKind::Textinput) => {
                    rdf.textinput = Some(self.read_textinput(child, src, depth + 1)?);
                }
                _ => {}
            }
            Ok(())
        })?;
        rdf.others = others;
        Ok(())
    }

    fn read_channel(&self, node: Node<'_, '_>, src: &str, depth: usize) -> Result<Channel> {
        let mut channel = Channel {
            attributes: self.read_attributes(node, ElementKind::Channel)?,
            ..Channel::default()
        };

        let others = self.read_children(node, ElementKind::Channel, src, depth, |content, child| {
            match (content, child.tag_name().name()) {
                (Content::Text, "title") => channel.title = Some(text_of(child)),
                (Content::Text, "link") => channel.link = Some(text_of(child)),
                (Content::Text, "description") => channel.description = Some(text_of(child)),
                (Content::Element(ElementKind::ChannelImage), _) => {
                    channel.image = Some(ChannelImage {
                        attributes: self.read_leaf(child, ElementKind::ChannelImage)?,
                    });
                }
                (Content::Element(ElementKind::Items), _) => {
                    channel.items = Some(self.read_items(child, src, depth + 1)?);
                }
                (Content::Element(ElementKind::ChannelTextinput), _) => {
                    channel.textinput = Some(ChannelTextinput {
                        attributes: self.read_leaf(child, ElementKind::ChannelTextinput)?,
                    });
                }
                _ => {}
            }
            Ok(())
        })?;
        channel.others = others;
        Ok(channel)
    }

    fn read_items(&self, node: Node<'_, '_>, src: &str, depth: usize) -> Result<Items> {
        let mut items = Items {
            attributes: self.read_attributes(node, ElementKind::Items)?,
            ..Items::default()
        };

        let others = self.read_children(node, ElementKind::Items, src, depth, |content, child| {
            if content == Content::Element(ElementKind::Seq) {
                items.seq = Some(self.read_seq(child, src, depth + 1)?);
            }
            Ok(())
        })?;
        items.others = others;
        Ok(items)
    }

    fn read_seq(&self, node: Node<'_, '_>, src: &str, depth: usize) -> Result<Seq> {
        let mut seq = Seq {
            attributes: self.read_attributes(node, ElementKind::Seq)?,
            ..Seq::default()
        };

        let others = self.read_children(node, ElementKind::Seq, src, depth, |content, child| {
            if content == Content::Element(ElementKind::Li) {
                seq.li.push(Li {
                    attributes: self.read_leaf(child, ElementKind::Li)?,
                });
            }
            Ok(())
        })?;
        seq.others = others;
        Ok(seq)
    }

    fn read_image(&self, node: Node<'_, '_>, src: &str, depth: usize) -> Result<Image> {
        let mut image = Image {
            attributes: self.read_attributes(node, ElementKind::Image)?,
            ..Image::default()
        };

        let others = self.read_children(node, ElementKind::Image, src, depth, |_, child| {
            match child.tag_name().name() {
                "title" => image.title = Some(text_of(child)),
                "url" => image.url = Some(text_of(child)),
                "link" => image.link = Some(text_of(child)),
                _ => {}
            }
            Ok(())
        })?;
        image.others = others;
        Ok(image)
    }

    fn read_item(&self, node: Node<'_, '_>, src: &str, depth: usize) -> Result<Item> {
        let mut item = Item {
            attributes: self.read_attributes(node, ElementKind::Item)?,
            ..Item::default()
        };

        let others = self.read_children(node, ElementKind::Item, src, depth, |_, child| {
            match child.tag_name().name() {
                "title" => item.title = Some(text_of(child)),
                "link" => item.link = Some(text_of(child)),
                "description" => item.description = Some(text_of(child)),
                _ => {}
            }
            Ok(())
        })?;
        item.others = others;
        Ok(item)
    }

    fn read_textinput(&self, node: Node<'_, '_>, src: &str, depth: usize) -> Result<Textinput> {
        let mut textinput = Textinput {
            attributes: self.read_attributes(node, ElementKind::Textinput)?,
            ..Textinput::default()
        };

        let others = self.read_children(node, ElementKind::Textinput, src, depth, |_, child| {
            match child.tag_name().name() {
                "title" => textinput.title = Some(text_of(child)),
                "description" => textinput.description = Some(text_of(child)),
                "name" => textinput.name = Some(text_of(child)),
                "link" => textinput.link = Some(text_of(child)),
                _ => {}
            }
            Ok(())
        })?;
        textinput.others = others;
        Ok(textinput)
    }

    /// Resource-only leaves: attributes only, any content is ignored.
    fn read_leaf(&self, node: Node<'_, '_>, kind: ElementKind) -> Result<AttributeTable> {
        self.read_attributes(node, kind)
    }

    /// Visit the element children of `node`: declared ones go to
    /// `declared`, the rest are returned as foreign elements.
    fn read_children<'a, 'input, F>(
        &self,
        node: Node<'a, 'input>,
        kind: ElementKind,
        src: &str,
        depth: usize,
        mut declared: F,
    ) -> Result<Vec<ForeignElement>>
    where
        F: FnMut(Content, Node<'a, 'input>) -> Result<()>,
    {
        self.limits.check_xml_depth(depth)?;
        let schema = kind.schema();
        let mut tags = Vec::new();
        let mut others = Vec::new();

        for child in node.children().filter(|n| n.is_element()) {
            let tag = qname_of(child);
            match schema.entry(&tag) {
                Some(entry) => declared(entry.content, child)?,
                None => {
                    debug!(parent = %kind, tag = %tag, "keeping foreign element");
                    let markup = src.get(child.range()).unwrap_or_default();
                    let markup = rebase_default_namespace(markup, node.lookup_namespace_uri(None));
                    others.push(ForeignElement::new(tag.clone(), markup));
                }
            }
            tags.push(tag);
        }

        if self.validate {
            validators::validate_content(kind, &tags)?;
        }
        Ok(others)
    }

    fn read_attributes(&self, node: Node<'_, '_>, kind: ElementKind) -> Result<AttributeTable> {
        self.limits.check_attributes(node.attributes().count())?;
        let schema = kind.schema();
        let mut table = AttributeTable::new();

        for attr in node.attributes() {
            let name = QName::new(attr.namespace(), attr.name());
            match schema.attribute(attr.name()) {
                Some(decl)
                    if decl.name == name
                        || (decl.accepts_unqualified && attr.namespace().is_none()) =>
                {
                    table.set(decl.name.clone(), attr.value());
                }
                _ => debug!(element = %kind, attribute = %name, "dropping undeclared attribute"),
            }
        }

        if self.validate {
            validators::validate_attributes(kind, &table)?;
        }
        Ok(table)
    }
}

fn qname_of(node: Node<'_, '_>) -> QName {
    let tag = node.tag_name();
    QName::new(tag.namespace(), tag.name())
}

fn text_of(node: Node<'_, '_>) -> String {
    if node.children().any(|child| child.is_element()) {
        debug!(tag = %qname_of(node), "ignoring markup inside text element");
    }
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}

/// Gather the prefix bindings in scope on every schema-declared composite,
/// so foreign children keep resolvable prefixes once re-rooted.
fn collect_bindings(node: Node<'_, '_>, kind: ElementKind, out: &mut Vec<(String, String)>) {
    for ns in node.namespaces() {
        if ns.uri() == XML_NAMESPACE {
            continue;
        }
        // Output always binds the RSS vocabulary as default namespace.
        let Some(prefix) = ns.name() else {
            continue;
        };
        let binding = (prefix.to_string(), ns.uri().to_string());
        if !out.contains(&binding) {
            out.push(binding);
        }
    }

    for child in node.children().filter(|n| n.is_element()) {
        if let Some(Content::Element(child_kind)) =
            kind.schema().entry(&qname_of(child)).map(|entry| entry.content)
        {
            collect_bindings(child, child_kind, out);
        }
    }
}

/// Foreign markup is written under the RSS default namespace. When it
/// inherited another default (or none) and uses unprefixed element names,
/// declare the inherited default on its own start tag.
fn rebase_default_namespace<'m>(markup: &'m str, inherited: Option<&str>) -> Cow<'m, str> {
    if inherited == Some(RSS_NAMESPACE) || !UNPREFIXED_TAG.is_match(markup) {
        return Cow::Borrowed(markup);
    }
    let Some(start) = START_TAG.captures(markup) else {
        return Cow::Borrowed(markup);
    };
    let Some(attributes) = start.get(1) else {
        return Cow::Borrowed(markup);
    };
    let declares_default = ATTRIBUTE_NAME
        .captures_iter(attributes.as_str())
        .any(|caps| &caps[1] == "xmlns");
    if declares_default {
        return Cow::Borrowed(markup);
    }

    let at = attributes.start();
    Cow::Owned(format!(
        "{} xmlns=\"{}\"{}",
        &markup[..at],
        escape_attribute(inherited.unwrap_or_default()),
        &markup[at..]
    ))
}

fn read_declaration(text: &str) -> (Option<String>, Option<String>, Option<String>) {
    match XML_DECLARATION.captures(text) {
        Some(caps) => {
            let group = |i| caps.get(i).map(|m| m.as_str().to_string());
            (group(1), group(2), group(3))
        }
        None => (None, None, None),
    }
}
