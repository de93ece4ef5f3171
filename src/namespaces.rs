//! XML namespace handling
//!
//! This module provides qualified names (QNames) and the namespace
//! declaration set a document carries on its root element.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::names::validate_ncname;

/// XML Namespace URI
pub type NamespaceUri = String;

/// Namespace prefix
pub type Prefix = String;

/// Qualified name (QName) - combination of namespace and local name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct QName {
    /// Namespace URI (None for no namespace)
    pub namespace: Option<NamespaceUri>,
    /// Local name
    pub local_name: String,
}

impl QName {
    /// Create a new QName
    pub fn new(namespace: Option<impl Into<String>>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(|s| s.into()),
            local_name: local_name.into(),
        }
    }

    /// Create a QName without a namespace
    pub fn local(local_name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local_name: local_name.into(),
        }
    }

    /// Create a QName with a namespace
    pub fn namespaced(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local_name: local_name.into(),
        }
    }

    /// Namespace URI as a string slice
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Check whether this name lives in the given namespace
    pub fn is_in(&self, namespace: &str) -> bool {
        self.namespace.as_deref() == Some(namespace)
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local_name),
            None => write!(f, "{}", self.local_name),
        }
    }
}

/// The set of prefix bindings active for a document.
///
/// Bindings keep their installation order, which is also the order they
/// are rendered in on the root tag. The empty prefix is the default
/// namespace. Lookups work in both directions without scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceDeclarations {
    by_prefix: IndexMap<Prefix, NamespaceUri>,
    by_uri: HashMap<NamespaceUri, Prefix>,
}

impl NamespaceDeclarations {
    /// Create a new empty declaration set
    pub fn new() -> Self {
        Self::default()
    }

    /// The bindings every RSS 1.0 document carries: the RSS vocabulary as
    /// default namespace and the RDF syntax namespace under `rdf`.
    pub fn rss10() -> Self {
        let mut decls = Self::new();
        decls.insert(String::new(), crate::RSS_NAMESPACE.to_string());
        decls.insert(crate::RDF_PREFIX.to_string(), crate::RDF_NAMESPACE.to_string());
        decls
    }

    /// Install a binding.
    ///
    /// Re-installing an identical binding is a no-op. Rebinding a prefix
    /// that already maps to another URI is rejected.
    pub fn install(&mut self, prefix: &str, uri: &str) -> Result<()> {
        if !prefix.is_empty() {
            validate_ncname(prefix)?;
        }

        match self.by_prefix.get(prefix) {
            Some(existing) if existing == uri => Ok(()),
            Some(existing) => Err(Error::Namespace(format!(
                "prefix '{}' is already bound to '{}'",
                prefix, existing
            ))),
            None => {
                self.insert(prefix.to_string(), uri.to_string());
                Ok(())
            }
        }
    }

    fn insert(&mut self, prefix: Prefix, uri: NamespaceUri) {
        // The first prefix installed for a URI is the one used on output.
        self.by_uri.entry(uri.clone()).or_insert_with(|| prefix.clone());
        self.by_prefix.insert(prefix, uri);
    }

    /// Get the namespace for a prefix
    pub fn get_namespace(&self, prefix: &str) -> Option<&str> {
        self.by_prefix.get(prefix).map(|s| s.as_str())
    }

    /// Get the prefix bound to a namespace
    pub fn get_prefix(&self, uri: &str) -> Option<&str> {
        self.by_uri.get(uri).map(|s| s.as_str())
    }

    /// Get the default namespace
    pub fn get_default_namespace(&self) -> Option<&str> {
        self.get_namespace("")
    }

    /// Iterate over `(prefix, uri)` bindings in installation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_prefix.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.by_prefix.len()
    }

    /// Check whether no binding is installed
    pub fn is_empty(&self) -> bool {
        self.by_prefix.is_empty()
    }

    /// Render a QName as `prefix:local` (or bare `local` for the default
    /// namespace and for unqualified names).
    ///
    /// Names whose namespace has no binding render as their local name.
    pub fn prefixed(&self, qname: &QName) -> String {
        match qname.namespace() {
            Some(ns) => match self.get_prefix(ns) {
                Some("") | None => qname.local_name.clone(),
                Some(prefix) => format!("{}:{}", prefix, qname.local_name),
            },
            None => qname.local_name.clone(),
        }
    }

    /// Render a QName used as an attribute name.
    ///
    /// Unprefixed attributes carry no namespace, so a namespaced attribute
    /// always needs a non-empty prefix.
    pub fn prefixed_attribute(&self, qname: &QName) -> String {
        match qname.namespace().and_then(|ns| self.get_prefix(ns)) {
            Some(prefix) if !prefix.is_empty() => format!("{}:{}", prefix, qname.local_name),
            _ => qname.local_name.clone(),
        }
    }
}
