//! # rss10
//!
//! Typed RSS 1.0 (RDF Site Summary) documents with schema-driven
//! validation and canonical serialization.
//!
//! ## Features
//!
//! - A typed tree for `rdf:RDF`, `channel`, `image`, `item`, `textinput`,
//!   `items` and `rdf:Seq`, with foreign children kept verbatim
//! - One static schema table drives both validation and output order
//! - Occurrence-aware content model checks with nested RDF sub-models
//! - Canonical output with an optional caller-supplied text transform
//! - A reader that validates children in source order as it builds
//! - Protection against oversized or deeply nested input
//!
//! ## Example
//!
//! ```rust
//! use rss10::elements::{Channel, Item, Rdf};
//! use rss10::{validators, Serializer};
//!
//! let mut item = Item::new("http://example.com/1");
//! item.title = Some("First".into());
//! item.link = Some("http://example.com/1".into());
//!
//! let mut channel = Channel::new("http://example.com/");
//! channel.title = Some("Example".into());
//! channel.link = Some("http://example.com/".into());
//! channel.description = Some("An example channel".into());
//! channel.add_item_reference(&item);
//!
//! let mut rdf = Rdf::new();
//! rdf.channel = Some(channel);
//! rdf.items.push(item);
//!
//! validators::validate(&rdf).unwrap();
//! let xml = Serializer::new().serialize(&rdf, true);
//! assert!(xml.contains("<rdf:li rdf:resource=\"http://example.com/1\"/>"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;
pub mod limits;

// Names and namespaces
pub mod names;
pub mod namespaces;

// Schema table and validation
pub mod validators;

// Document tree
pub mod elements;

// Output and input
pub mod converters;
pub mod escape;
pub mod reader;
pub mod serializer;

// Re-exports for convenience
pub use converters::{CharacterReferences, Identity, TextConverter};
pub use elements::{Rdf, RssNode};
pub use error::{Error, ParseError, Result, ValidationError};
pub use limits::Limits;
pub use namespaces::{NamespaceDeclarations, QName};
pub use reader::{parse, RssReader};
pub use serializer::{Serializer, SerializerConfig};
pub use validators::{validate, ElementKind};

/// Version of the rss10 library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// RSS 1.0 namespace
pub const RSS_NAMESPACE: &str = "http://purl.org/rss/1.0/";

/// RDF syntax namespace
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Conventional prefix of the RDF namespace
pub const RDF_PREFIX: &str = "rdf";

/// XML namespace
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";
