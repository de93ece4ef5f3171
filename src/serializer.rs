//! Canonical serializer
//!
//! Output is driven entirely by the schema table: attributes in declared
//! order, declared children in content model order, then foreign children
//! in the order they were appended. The tree is never mutated and the
//! serializer never fails; a structurally invalid tree simply renders
//! without its missing parts. Validate first when conformant output
//! matters.

use once_cell::sync::Lazy;
use tracing::trace;

use crate::converters::TextConverter;
use crate::escape::{escape_attribute, escape_text};
use crate::elements::{Rdf, RssNode, Slot};
use crate::namespaces::NamespaceDeclarations;
use crate::validators::{AttributeTable, ElementSchema};

static DEFAULT_NAMESPACES: Lazy<NamespaceDeclarations> = Lazy::new(NamespaceDeclarations::rss10);

/// Serializer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializerConfig {
    /// Indentation unit, repeated once per nesting level
    pub indent: String,
    /// Whether documents start with an XML declaration
    pub xml_declaration: bool,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            xml_declaration: true,
        }
    }
}

impl SerializerConfig {
    /// Set the indentation unit
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set whether documents start with an XML declaration
    pub fn with_xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }
}

/// Writes trees as XML text
#[derive(Default)]
pub struct Serializer {
    config: SerializerConfig,
    converter: Option<Box<dyn TextConverter + Send + Sync>>,
}

impl std::fmt::Debug for Serializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Serializer")
            .field("config", &self.config)
            .field("converter", &self.converter.is_some())
            .finish()
    }
}

impl Serializer {
    /// Create a serializer with the default configuration and no converter
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: SerializerConfig) -> Self {
        self.config = config;
        self
    }

    /// Install the text transform applied by `serialize(_, true)`
    pub fn with_converter<C>(mut self, converter: C) -> Self
    where
        C: TextConverter + Send + Sync + 'static,
    {
        self.converter = Some(Box::new(converter));
        self
    }

    /// The active configuration
    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    /// Serialize `node` to XML text.
    ///
    /// With `apply_transform`, the converter (if any) runs exactly once,
    /// on the complete fragment; nested elements are never converted on
    /// their own. A document root yields a full document ending in a
    /// newline, any other node a bare fragment.
    pub fn serialize(&self, node: &dyn RssNode, apply_transform: bool) -> String {
        let mut out = String::new();

        match node.as_rdf() {
            Some(rdf) => self.write_document(rdf, &mut out),
            None => {
                self.write_node(node, &DEFAULT_NAMESPACES, 0, &mut out);
                if out.ends_with('\n') {
                    out.pop();
                }
            }
        }

        match (&self.converter, apply_transform) {
            (Some(converter), true) => converter.convert(&out),
            _ => out,
        }
    }

    fn write_document(&self, rdf: &Rdf, out: &mut String) {
        if self.config.xml_declaration {
            out.push_str(&rdf.xml_declaration());
            out.push('\n');
        }
        for sheet in &rdf.stylesheets {
            out.push_str(&sheet.to_pi());
            out.push('\n');
        }
        self.write_node(rdf, rdf.namespaces(), 0, out);
    }

    fn write_node(
        &self,
        node: &dyn RssNode,
        namespaces: &NamespaceDeclarations,
        depth: usize,
        out: &mut String,
    ) {
        let schema = node.schema();
        trace!(kind = %schema.kind, depth, "serializing");

        let pad = self.config.indent.repeat(depth);
        let name = namespaces.prefixed(&schema.name);
        let attributes = render_attributes(schema, node.attributes(), namespaces);

        if schema.empty {
            // Resource-only leaves vanish entirely without their reference.
            let complete = schema
                .required_attributes()
                .all(|decl| node.attributes().get(&decl.name).is_some());
            if complete {
                out.push_str(&format!("{}<{}{}/>\n", pad, name, attributes));
            }
            return;
        }

        out.push_str(&format!("{}<{}{}", pad, name, attributes));
        if let Some(rdf) = node.as_rdf() {
            out.push_str(&render_namespace_declarations(rdf.namespaces()));
        }
        out.push_str(">\n");

        let inner = self.config.indent.repeat(depth + 1);
        for entry in schema.entries() {
            for slot in node.slots(&entry.tag) {
                match slot {
                    Slot::Node(child) => self.write_node(child, namespaces, depth + 1, out),
                    Slot::Text(text) => {
                        let tag = namespaces.prefixed(&entry.tag);
                        out.push_str(&format!("{}<{}>{}</{}>\n", inner, tag, escape_text(text), tag));
                    }
                }
            }
        }

        for other in node.others() {
            out.push_str(&inner);
            out.push_str(&other.markup);
            out.push('\n');
        }

        out.push_str(&format!("{}</{}>\n", pad, name));
    }
}

fn render_attributes(
    schema: &ElementSchema,
    attributes: &AttributeTable,
    namespaces: &NamespaceDeclarations,
) -> String {
    let mut rendered = String::new();
    for decl in &schema.attributes {
        if let Some(value) = attributes.get(&decl.name) {
            rendered.push_str(&format!(
                " {}=\"{}\"",
                namespaces.prefixed_attribute(&decl.name),
                escape_attribute(value)
            ));
        }
    }
    rendered
}

fn render_namespace_declarations(namespaces: &NamespaceDeclarations) -> String {
    let mut rendered = String::new();
    for (prefix, uri) in namespaces.iter() {
        if prefix.is_empty() {
            rendered.push_str(&format!(" xmlns=\"{}\"", escape_attribute(uri)));
        } else {
            rendered.push_str(&format!(" xmlns:{}=\"{}\"", prefix, escape_attribute(uri)));
        }
    }
    rendered
}
