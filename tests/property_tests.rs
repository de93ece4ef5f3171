//! Property tests for validation and serialization

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;
use rss10::elements::{Channel, Item, Rdf};
use rss10::validators::validate_content;
use rss10::{parse, validate, ElementKind, QName, Serializer, RSS_NAMESPACE};

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \t\r\n&<>\"'.,!?-]{0,24}"
}

fn document(items: &[(String, String)], description: Option<String>) -> Rdf {
    let mut channel = Channel::new("urn:channel");
    channel.title = Some("Channel".into());
    channel.link = Some("http://example.com/".into());
    channel.description = description;

    let mut rdf = Rdf::new();
    for (n, (title, link)) in items.iter().enumerate() {
        let mut item = Item::new(format!("urn:item:{n}"));
        item.title = Some(title.clone());
        item.link = Some(link.clone());
        channel.add_item_reference(&item);
        rdf.items.push(item);
    }
    rdf.channel = Some(channel);
    rdf
}

proptest! {
    #[test]
    fn prop_item_model_accepts_only_its_sequences(
        picks in prop::collection::vec(0usize..3, 0..6)
    ) {
        let names = ["title", "link", "description"];
        let tags: Vec<QName> = picks
            .iter()
            .map(|&i| QName::namespaced(RSS_NAMESPACE, names[i]))
            .collect();

        let expected = picks == [0, 1] || picks == [0, 1, 2];
        prop_assert_eq!(validate_content(ElementKind::Item, &tags).is_ok(), expected);
    }

    #[test]
    fn prop_round_trip_is_stable(
        items in prop::collection::vec((text(), text()), 1..8),
        description in prop::option::of(text()),
    ) {
        let rdf = document(&items, description.clone());
        let serializer = Serializer::new();
        let first = serializer.serialize(&rdf, true);

        let reread = parse(&first);
        if description.is_some() {
            let reread = reread.unwrap();
            prop_assert_eq!(&reread, &rdf);
            prop_assert_eq!(serializer.serialize(&reread, true), first);
        } else {
            prop_assert!(reread.is_err());
        }
    }

    #[test]
    fn prop_transform_runs_once(count in 1usize..40) {
        let items: Vec<(String, String)> = (0..count)
            .map(|n| (format!("Item {n}"), format!("http://example.com/{n}")))
            .collect();
        let rdf = document(&items, Some("d".into()));
        prop_assert_eq!(validate(&rdf), Ok(()));

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let serializer = Serializer::new().with_converter(move |text: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            text.to_string()
        });

        serializer.serialize(&rdf, true);
        prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
