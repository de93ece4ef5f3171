//! Attribute tables and required-attribute checks

use indexmap::IndexMap;

use super::schemas::ElementSchema;
use crate::error::ValidationError;
use crate::namespaces::QName;

/// Per-element mapping from qualified attribute name to value.
///
/// Insertion order is preserved, but output order always follows the
/// schema's attribute declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeTable {
    values: IndexMap<QName, String>,
}

impl AttributeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by qualified name
    pub fn get(&self, name: &QName) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }

    /// Set a value, replacing any previous one
    pub fn set(&mut self, name: QName, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    /// Set or clear a value
    pub fn set_opt(&mut self, name: QName, value: Option<String>) {
        match value {
            Some(value) => self.set(name, value),
            None => {
                self.values.shift_remove(&name);
            }
        }
    }

    /// Remove a value
    pub fn remove(&mut self, name: &QName) -> Option<String> {
        self.values.shift_remove(name)
    }

    /// Iterate over `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&QName, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Number of attributes set
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether no attribute is set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Check that every attribute the schema marks as required is present and
/// non-empty.
pub fn check_required(
    schema: &ElementSchema,
    attributes: &AttributeTable,
) -> Result<(), ValidationError> {
    for decl in schema.required_attributes() {
        match attributes.get(&decl.name) {
            Some(value) if !value.is_empty() => {}
            _ => {
                return Err(ValidationError::MissingRequiredAttribute {
                    parent: schema.kind,
                    attribute: decl.name.clone(),
                })
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::ElementKind;
    use crate::RDF_NAMESPACE;

    fn about() -> QName {
        QName::namespaced(RDF_NAMESPACE, "about")
    }

    #[test]
    fn test_table_set_and_remove() {
        let mut table = AttributeTable::new();
        assert!(table.is_empty());

        table.set(about(), "urn:a");
        table.set(about(), "urn:b");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&about()), Some("urn:b"));

        table.set_opt(about(), None);
        assert!(table.get(&about()).is_none());
    }

    #[test]
    fn test_required_attribute_present() {
        let mut table = AttributeTable::new();
        table.set(about(), "urn:c");
        assert!(check_required(ElementKind::Channel.schema(), &table).is_ok());
    }

    #[test]
    fn test_required_attribute_missing_or_empty() {
        let expected = ValidationError::MissingRequiredAttribute {
            parent: ElementKind::Item,
            attribute: about(),
        };

        let table = AttributeTable::new();
        assert_eq!(
            check_required(ElementKind::Item.schema(), &table),
            Err(expected.clone())
        );

        let mut table = AttributeTable::new();
        table.set(about(), "");
        assert_eq!(check_required(ElementKind::Item.schema(), &table), Err(expected));
    }

    #[test]
    fn test_no_required_attributes() {
        let table = AttributeTable::new();
        assert!(check_required(ElementKind::Seq.schema(), &table).is_ok());
    }
}
