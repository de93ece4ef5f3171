//! Error types for rss10
//!
//! This module defines all error types used throughout the library.
//! Structural validation failures have their own taxonomy in
//! [`ValidationError`]; everything else (reading, namespaces, limits)
//! is folded into [`Error`].

use std::fmt;
use thiserror::Error;

use crate::namespaces::QName;
use crate::validators::ElementKind;

/// Result type alias using rss10 Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rss10 operations
#[derive(Error, Debug)]
pub enum Error {
    /// Structural validation error
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Document reading error
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Namespace error (unknown prefix, conflicting binding)
    #[error("namespace error: {0}")]
    Namespace(String),

    /// Name error (invalid XML name)
    #[error("name error: {0}")]
    Name(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// XML well-formedness error reported by the underlying reader
    #[error("XML error: {0}")]
    Xml(String),
}

/// Structural validation error.
///
/// The validator is fail-fast: it reports the first violation found,
/// depth-first over declared children in schema order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A mandatory child element is absent
    #[error("missing required element '{tag}' in <{parent}>")]
    MissingRequiredElement {
        /// Element whose content is incomplete
        parent: ElementKind,
        /// The missing child tag
        tag: QName,
    },

    /// A required attribute is absent or empty
    #[error("missing required attribute '{attribute}' on <{parent}>")]
    MissingRequiredAttribute {
        /// Element carrying the attribute
        parent: ElementKind,
        /// The missing attribute
        attribute: QName,
    },

    /// A declared child appears out of schema order
    #[error("element '{tag}' is out of order in <{parent}>")]
    UnexpectedElementOrder {
        /// Element whose content is misordered
        parent: ElementKind,
        /// The child tag found in the wrong place
        tag: QName,
    },

    /// A declared child appears more often than allowed
    #[error("element '{tag}' occurs too many times in <{parent}>")]
    TooManyOccurrences {
        /// Element whose content has too many children
        parent: ElementKind,
        /// The repeated child tag
        tag: QName,
    },

    /// The content bound to a delegated namespace fails its own schema
    #[error("content of <{parent}> in namespace '{namespace}' is invalid: {source}")]
    InvalidSubModel {
        /// Element hosting the nested vocabulary
        parent: ElementKind,
        /// Namespace the nested schema is bound to
        namespace: String,
        /// Failure reported by the nested schema
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// The element kind the violation was reported on
    pub fn parent(&self) -> ElementKind {
        match self {
            Self::MissingRequiredElement { parent, .. }
            | Self::MissingRequiredAttribute { parent, .. }
            | Self::UnexpectedElementOrder { parent, .. }
            | Self::TooManyOccurrences { parent, .. }
            | Self::InvalidSubModel { parent, .. } => *parent,
        }
    }
}

/// Document reading error
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Error message
    pub message: String,
    /// Location in the source document (line:column)
    pub location: Option<String>,
}

impl ParseError {
    /// Create a new parse error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref loc) = self.location {
            write!(f, " (at {})", loc)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RSS_NAMESPACE;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::MissingRequiredElement {
            parent: ElementKind::Channel,
            tag: QName::namespaced(RSS_NAMESPACE, "title"),
        };

        let msg = format!("{}", err);
        assert!(msg.contains("missing required element"));
        assert!(msg.contains("title"));
        assert!(msg.contains("<channel>"));
    }

    #[test]
    fn test_sub_model_error_keeps_source() {
        let inner = ValidationError::MissingRequiredElement {
            parent: ElementKind::Items,
            tag: QName::namespaced(crate::RDF_NAMESPACE, "Seq"),
        };
        let err = ValidationError::InvalidSubModel {
            parent: ElementKind::Items,
            namespace: crate::RDF_NAMESPACE.to_string(),
            source: Box::new(inner.clone()),
        };

        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source, Some(inner.to_string()));
        assert_eq!(err.parent(), ElementKind::Items);
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new("root element is not rdf:RDF").with_location("1:1");

        let msg = format!("{}", err);
        assert!(msg.contains("root element"));
        assert!(msg.contains("(at 1:1)"));
    }

    #[test]
    fn test_error_conversion() {
        let val_err = ValidationError::TooManyOccurrences {
            parent: ElementKind::Item,
            tag: QName::namespaced(RSS_NAMESPACE, "link"),
        };
        let err: Error = val_err.into();
        assert!(matches!(err, Error::Validation(_)));
    }
}
