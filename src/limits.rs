//! Limits and constraints for feed reading
//!
//! This module defines the resource limits the reader enforces before it
//! hands a tree to the validator, protecting against oversized or
//! pathologically nested input.

use crate::error::{Error, Result};

/// Reader limits configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth of schema-declared elements
    pub max_xml_depth: usize,

    /// Maximum document size in bytes
    pub max_xml_size: usize,

    /// Maximum number of attributes per element
    pub max_attributes: usize,

    /// Maximum number of namespace bindings on the root element
    pub max_namespaces: usize,

    /// Maximum number of `item` elements per document
    pub max_items: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_xml_depth: 64,
            max_xml_size: 16 * 1024 * 1024, // 16 MB
            max_attributes: 256,
            max_namespaces: 256,
            max_items: 10_000,
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_xml_depth: 16,
            max_xml_size: 1024 * 1024, // 1 MB
            max_attributes: 32,
            max_namespaces: 32,
            max_items: 500,
        }
    }

    /// Create permissive limits (less restrictive, use with caution)
    pub fn permissive() -> Self {
        Self {
            max_xml_depth: 1024,
            max_xml_size: 512 * 1024 * 1024, // 512 MB
            max_attributes: 10_000,
            max_namespaces: 10_000,
            max_items: 1_000_000,
        }
    }

    /// Check if XML depth is within limits
    pub fn check_xml_depth(&self, depth: usize) -> Result<()> {
        check("XML depth", depth, self.max_xml_depth)
    }

    /// Check if XML size is within limits
    pub fn check_xml_size(&self, size: usize) -> Result<()> {
        if size > self.max_xml_size {
            Err(Error::LimitExceeded(format!(
                "XML size {} bytes exceeds maximum {} bytes",
                size, self.max_xml_size
            )))
        } else {
            Ok(())
        }
    }

    /// Check if number of attributes is within limits
    pub fn check_attributes(&self, count: usize) -> Result<()> {
        check("Attribute count", count, self.max_attributes)
    }

    /// Check if number of namespaces is within limits
    pub fn check_namespaces(&self, count: usize) -> Result<()> {
        check("Namespace count", count, self.max_namespaces)
    }

    /// Check if number of items is within limits
    pub fn check_items(&self, count: usize) -> Result<()> {
        check("Item count", count, self.max_items)
    }
}

fn check(what: &str, value: usize, max: usize) -> Result<()> {
    if value > max {
        Err(Error::LimitExceeded(format!(
            "{} {} exceeds maximum {}",
            what, value, max
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_xml_depth, 64);
        assert!(limits.check_xml_depth(10).is_ok());
        assert!(limits.check_xml_depth(65).is_err());
    }

    #[test]
    fn test_strict_limits() {
        let limits = Limits::strict();
        assert!(limits.max_xml_depth < Limits::default().max_xml_depth);
        assert!(limits.check_items(501).is_err());
    }

    #[test]
    fn test_permissive_limits() {
        let limits = Limits::permissive();
        assert!(limits.max_items > Limits::default().max_items);
        assert!(limits.check_items(50_000).is_ok());
    }

    #[test]
    fn test_check_xml_size() {
        let limits = Limits::default();
        assert!(limits.check_xml_size(1024).is_ok());

        let err = limits.check_xml_size(32 * 1024 * 1024).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_check_attributes_and_namespaces() {
        let limits = Limits::strict();
        assert!(limits.check_attributes(32).is_ok());
        assert!(limits.check_attributes(33).is_err());
        assert!(limits.check_namespaces(40).is_err());
    }
}
