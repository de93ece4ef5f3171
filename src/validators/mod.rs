//! Structural validators
//!
//! This module contains the schema table and the content model checks.
//! Validation is never implicit: construction and serialization accept
//! any tree, and callers ask for a verdict with [`validate`].
//!
//! A node passes when
//! - every required attribute is present and non-empty,
//! - its declared children satisfy its content model (foreign children
//!   are not counted),
//! - every child in a delegated namespace satisfies the nested model,
//! - and every nested element passes, depth-first in schema order.
//!
//! The first violation is returned.

pub mod attributes;
pub mod models;
pub mod particles;
pub mod schemas;

pub use attributes::AttributeTable;
pub use particles::Occurs;
pub use schemas::{AttributeDecl, Content, ElementKind, ElementSchema, ModelEntry, SubModel};

use tracing::{debug, trace};

use crate::elements::RssNode;
use crate::error::ValidationError;
use crate::namespaces::QName;

/// Validate `node` and its whole subtree
pub fn validate(node: &dyn RssNode) -> Result<(), ValidationError> {
    validate_node(node).map_err(|err| {
        debug!(kind = %node.kind(), error = %err, "validation failed");
        err
    })
}

fn validate_node(node: &dyn RssNode) -> Result<(), ValidationError> {
    let kind = node.kind();
    validate_attributes(kind, node.attributes())?;

    let mut tags = node.present_tags();
    tags.extend(node.others().iter().map(|other| other.name.clone()));
    validate_content(kind, &tags)?;

    for child in node.child_nodes() {
        validate_node(child)?;
    }
    Ok(())
}

/// Check the required attributes of an element of kind `kind`
pub fn validate_attributes(
    kind: ElementKind,
    attributes: &AttributeTable,
) -> Result<(), ValidationError> {
    attributes::check_required(kind.schema(), attributes)
}

/// Check the child tags of an element of kind `kind`, in the order they
/// actually occur.
///
/// This is the hook a streaming reader calls once all children of a node
/// are known; it sees duplicates and misordered children that a typed tree
/// cannot hold. Tags neither declared by the host model nor in a
/// delegated namespace are ignored.
pub fn validate_content(kind: ElementKind, tags: &[QName]) -> Result<(), ValidationError> {
    let schema = kind.schema();
    trace!(%kind, children = tags.len(), "checking content model");

    let own: Vec<&QName> = tags.iter().filter(|tag| schema.declares(tag)).collect();
    models::check_sequence(kind, &schema.model, &own)?;

    if let Some(sub) = &schema.sub_model {
        let nested: Vec<&QName> = tags.iter().filter(|tag| schema.delegates(tag)).collect();
        models::check_sequence(kind, &sub.model, &nested).map_err(|source| {
            ValidationError::InvalidSubModel {
                parent: kind,
                namespace: sub.namespace.clone(),
                source: Box::new(source),
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Channel, ForeignElement, Item, Items, Li, Rdf, Seq};
    use crate::{RDF_NAMESPACE, RSS_NAMESPACE};

    fn rss(name: &str) -> QName {
        QName::namespaced(RSS_NAMESPACE, name)
    }

    fn rdf(name: &str) -> QName {
        QName::namespaced(RDF_NAMESPACE, name)
    }

    fn channel() -> Channel {
        let mut channel = Channel::new("urn:c");
        channel.title = Some("t".into());
        channel.link = Some("http://example.com/".into());
        channel.description = Some("d".into());
        channel.items = Some(Items::new());
        channel
    }

    fn item() -> Item {
        let mut item = Item::new("urn:i");
        item.title = Some("t".into());
        item.link = Some("http://example.com/i".into());
        item
    }

    fn document() -> Rdf {
        let mut rdf = Rdf::new();
        rdf.channel = Some(channel());
        rdf.items.push(item());
        rdf
    }

    #[test]
    fn test_minimal_document_is_valid() {
        assert!(validate(&document()).is_ok());
    }

    #[test]
    fn test_validation_is_repeatable() {
        let mut rdf = document();
        rdf.items.clear();
        let first = validate(&rdf);
        assert_eq!(first, validate(&rdf));
        assert!(first.is_err());
    }

    #[test]
    fn test_root_needs_an_item() {
        let mut rdf = document();
        rdf.items.clear();
        assert_eq!(
            validate(&rdf),
            Err(ValidationError::MissingRequiredElement {
                parent: ElementKind::Rdf,
                tag: rss("item"),
            })
        );
    }

    #[test]
    fn test_depth_first_reports_nested_failure() {
        let mut rdf = document();
        if let Some(channel) = rdf.channel.as_mut() {
            channel.link = None;
        }
        assert_eq!(
            validate(&rdf),
            Err(ValidationError::MissingRequiredElement {
                parent: ElementKind::Channel,
                tag: rss("link"),
            })
        );
    }

    #[test]
    fn test_li_requires_resource() {
        let mut channel = channel();
        channel.items = Some(Items::with_seq(Seq {
            li: vec![Li::default()],
            ..Seq::default()
        }));
        assert_eq!(
            validate(&channel),
            Err(ValidationError::MissingRequiredAttribute {
                parent: ElementKind::Li,
                attribute: rdf("resource"),
            })
        );
    }

    #[test]
    fn test_rdf_children_of_root_fail_sub_model() {
        let mut rdf = document();
        rdf.add_other(ForeignElement::new(
            QName::namespaced(RDF_NAMESPACE, "Description"),
            "<rdf:Description/>",
        ));
        assert!(matches!(
            validate(&rdf),
            Err(ValidationError::InvalidSubModel {
                parent: ElementKind::Rdf,
                ..
            })
        ));
    }

    #[test]
    fn test_stream_hook_sees_duplicates() {
        let tags = vec![rss("title"), rss("title"), rss("link")];
        assert_eq!(
            validate_content(ElementKind::Item, &tags),
            Err(ValidationError::TooManyOccurrences {
                parent: ElementKind::Item,
                tag: rss("title"),
            })
        );
    }

    #[test]
    fn test_stream_hook_ignores_foreign_tags() {
        let tags = vec![
            QName::namespaced("http://purl.org/dc/elements/1.1/", "date"),
            rss("title"),
            rss("link"),
        ];
        assert!(validate_content(ElementKind::Item, &tags).is_ok());
    }

    #[test]
    fn test_stream_hook_items_requires_seq() {
        let err = validate_content(ElementKind::Items, &[]).unwrap_err();
        match err {
            ValidationError::InvalidSubModel { parent, namespace, source } => {
                assert_eq!(parent, ElementKind::Items);
                assert_eq!(namespace, RDF_NAMESPACE);
                assert_eq!(
                    *source,
                    ValidationError::MissingRequiredElement {
                        parent: ElementKind::Items,
                        tag: rdf("Seq"),
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
