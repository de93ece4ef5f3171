//! Structural validation tests
//!
//! These exercise the validator through the public API on trees built in
//! code and on documents read from text.

use rss10::elements::{
    Channel, ChannelImage, ForeignElement, Image, Item, Items, Li, Rdf, Seq, Textinput,
};
use rss10::{
    parse, validate, ElementKind, Error, QName, RssNode, ValidationError, RDF_NAMESPACE,
    RSS_NAMESPACE,
};

const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";

fn rss(name: &str) -> QName {
    QName::namespaced(RSS_NAMESPACE, name)
}

fn rdf_tag(name: &str) -> QName {
    QName::namespaced(RDF_NAMESPACE, name)
}

fn item(about: &str) -> Item {
    let mut item = Item::new(about);
    item.title = Some("Item".into());
    item.link = Some(about.to_string());
    item
}

fn channel() -> Channel {
    let mut channel = Channel::new("urn:c");
    channel.title = Some("Channel".into());
    channel.link = Some("http://example.com/".into());
    channel.description = Some("Description".into());
    channel
}

fn document() -> Rdf {
    let item = item("urn:i");
    let mut channel = channel();
    channel.add_item_reference(&item);

    let mut rdf = Rdf::new();
    rdf.channel = Some(channel);
    rdf.items.push(item);
    rdf
}

// ============================================================================
// Documents
// ============================================================================

#[test]
fn test_minimal_document() {
    assert_eq!(validate(&document()), Ok(()));
}

#[test]
fn test_full_document() {
    let mut rdf = document();
    let image = {
        let mut image = Image::new("urn:img");
        image.title = Some("Logo".into());
        image.url = Some("http://example.com/logo.png".into());
        image.link = Some("http://example.com/".into());
        image
    };
    let textinput = {
        let mut textinput = Textinput::new("urn:search");
        textinput.title = Some("Search".into());
        textinput.description = Some("Search the site".into());
        textinput.name = Some("q".into());
        textinput.link = Some("http://example.com/search".into());
        textinput
    };
    if let Some(channel) = rdf.channel.as_mut() {
        channel.set_image_reference(&image);
        channel.set_textinput_reference(&textinput);
    }
    rdf.image = Some(image);
    rdf.textinput = Some(textinput);

    assert_eq!(validate(&rdf), Ok(()));
}

#[test]
fn test_document_without_channel() {
    let mut rdf = document();
    rdf.channel = None;
    assert_eq!(
        validate(&rdf),
        Err(ValidationError::MissingRequiredElement {
            parent: ElementKind::Rdf,
            tag: rss("channel"),
        })
    );
}

#[test]
fn test_validation_is_idempotent() {
    let mut rdf = document();
    assert_eq!(validate(&rdf), validate(&rdf));

    rdf.items.clear();
    let first = validate(&rdf);
    assert!(first.is_err());
    assert_eq!(first, validate(&rdf));
}

// ============================================================================
// Attributes
// ============================================================================

#[test]
fn test_channel_without_about() {
    let mut channel = channel();
    channel.items = Some(Items::new());
    channel.set_about(None);

    assert_eq!(
        validate(&channel),
        Err(ValidationError::MissingRequiredAttribute {
            parent: ElementKind::Channel,
            attribute: rdf_tag("about"),
        })
    );
}

#[test]
fn test_empty_about_is_missing() {
    let mut item = item("urn:i");
    item.set_about(Some(String::new()));
    assert!(matches!(
        validate(&item),
        Err(ValidationError::MissingRequiredAttribute {
            parent: ElementKind::Item,
            ..
        })
    ));
}

#[test]
fn test_channel_image_reference_requires_resource() {
    let mut rdf = document();
    if let Some(channel) = rdf.channel.as_mut() {
        channel.image = Some(ChannelImage::default());
    }
    assert_eq!(
        validate(&rdf),
        Err(ValidationError::MissingRequiredAttribute {
            parent: ElementKind::ChannelImage,
            attribute: rdf_tag("resource"),
        })
    );
}

// ============================================================================
// Content models
// ============================================================================

#[test]
fn test_missing_text_leaves() {
    for (strip, missing) in [("title", "title"), ("link", "link")] {
        let mut item = item("urn:i");
        match strip {
            "title" => item.title = None,
            _ => item.link = None,
        }
        assert_eq!(
            validate(&item),
            Err(ValidationError::MissingRequiredElement {
                parent: ElementKind::Item,
                tag: rss(missing),
            })
        );
    }
}

#[test]
fn test_channel_without_items() {
    assert_eq!(
        validate(&channel()),
        Err(ValidationError::MissingRequiredElement {
            parent: ElementKind::Channel,
            tag: rss("items"),
        })
    );
}

#[test]
fn test_empty_seq_is_valid() {
    let mut channel = channel();
    channel.items = Some(Items::new());
    assert_eq!(validate(&channel), Ok(()));
}

#[test]
fn test_items_with_bag_fails_sub_model() {
    let mut items = Items {
        seq: None,
        ..Items::default()
    };
    items.add_other(ForeignElement::new(rdf_tag("Bag"), "<rdf:Bag/>"));

    let mut channel = channel();
    channel.items = Some(items);

    match validate(&channel) {
        Err(ValidationError::InvalidSubModel {
            parent,
            namespace,
            source,
        }) => {
            assert_eq!(parent, ElementKind::Items);
            assert_eq!(namespace, RDF_NAMESPACE);
            assert_eq!(
                *source,
                ValidationError::MissingRequiredElement {
                    parent: ElementKind::Items,
                    tag: rdf_tag("Seq"),
                }
            );
        }
        other => panic!("expected an invalid sub-model, got {other:?}"),
    }
}

#[test]
fn test_seq_with_foreign_rdf_child_fails_sub_model() {
    let mut seq = Seq::new();
    seq.push("urn:i");
    seq.add_other(ForeignElement::new(rdf_tag("Description"), "<rdf:Description/>"));

    assert!(matches!(
        validate(&seq),
        Err(ValidationError::InvalidSubModel {
            parent: ElementKind::Seq,
            ..
        })
    ));
}

#[test]
fn test_foreign_children_are_not_counted() {
    let mut rdf = document();
    if let Some(channel) = rdf.channel.as_mut() {
        channel.add_other(ForeignElement::text(
            QName::namespaced(DC_NAMESPACE, "title"),
            "dc:title",
            "A second title",
        ));
        channel.add_other(ForeignElement::text(
            QName::namespaced(DC_NAMESPACE, "date"),
            "dc:date",
            "2004-01-01",
        ));
    }
    assert_eq!(validate(&rdf), Ok(()));
}

#[test]
fn test_nested_failures_are_depth_first() {
    let mut rdf = document();
    rdf.items.push(Item::new("urn:broken"));
    if let Some(channel) = rdf.channel.as_mut() {
        channel.description = None;
    }

    // channel precedes item in the root model
    assert_eq!(
        validate(&rdf).map_err(|e| e.parent()),
        Err(ElementKind::Channel)
    );
}

#[test]
fn test_li_unqualified_resource_is_not_accepted_in_tree() {
    let mut li = Li::default();
    li.attributes
        .set(QName::local("resource"), "urn:i".to_string());
    assert!(validate(&li).is_err());
}

// ============================================================================
// Reading
// ============================================================================

const FEED: &str = include_str!("fixtures/feed.rdf");
const INVALID: &str = include_str!("fixtures/invalid.rdf");

#[test]
fn test_fixture_reads_and_validates() {
    let rdf = parse(FEED).unwrap();
    assert_eq!(validate(&rdf), Ok(()));
    assert_eq!(rdf.items.len(), 2);
    assert!(rdf.kind() == ElementKind::Rdf);
}

#[test]
fn test_invalid_fixture_is_rejected_while_reading() {
    match parse(INVALID) {
        Err(Error::Validation(ValidationError::MissingRequiredElement { parent, tag })) => {
            assert_eq!(parent, ElementKind::Channel);
            assert_eq!(tag, rss("link"));
        }
        other => panic!("expected a missing link, got {other:?}"),
    }
}

#[test]
fn test_misordered_children_are_rejected_while_reading() {
    let text = FEED.replace(
        "<title>Second</title>\n\t\t<link>http://example.com/2</link>",
        "<link>http://example.com/2</link>\n\t\t<title>Second</title>",
    );
    assert!(matches!(
        parse(&text),
        Err(Error::Validation(ValidationError::UnexpectedElementOrder {
            parent: ElementKind::Item,
            ..
        }))
    ));
}

#[test]
fn test_items_with_bag_is_rejected_while_reading() {
    let text = FEED
        .replace("<rdf:Seq>", "<rdf:Bag>")
        .replace("</rdf:Seq>", "</rdf:Bag>");
    assert!(matches!(
        parse(&text),
        Err(Error::Validation(ValidationError::InvalidSubModel {
            parent: ElementKind::Items,
            ..
        }))
    ));
}

#[test]
fn test_unqualified_li_resource_is_read() {
    let text = FEED.replace(
        "<rdf:li rdf:resource=\"http://example.com/2\"/>",
        "<rdf:li resource=\"http://example.com/2\"/>",
    );
    let rdf = parse(&text).unwrap();
    let seq = rdf
        .channel
        .as_ref()
        .and_then(|c| c.items.as_ref())
        .and_then(|i| i.seq.as_ref())
        .unwrap();
    assert_eq!(seq.li[1].resource(), Some("http://example.com/2"));
    assert_eq!(validate(&rdf), Ok(()));
}
