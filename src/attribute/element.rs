use crate::{attribute::*, error::*};
use std::collections::HashMap;

/// Attribute access shared by graphs, nodes and edges.
///
/// Each element owns its own [`Attributes`];
/// nothing here reaches across elements.
pub trait Element {
    fn id(&self) -> &str;
    fn attributes(&self) -> &Attributes;
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Adds an attribute, overwriting any value under the same key.
    /// Fails with [`GraphError::InvalidKey`] on an empty key.
    fn add_attribute<V>(&mut self, key: &str, value: V) -> Result<()>
    where
        V: Into<AttributeValue>,
    {
        self.attributes_mut().insert(key, value)?;
        Ok(())
    }

    /// Replaces the value under `key`, inserting it when absent.
    fn change_attribute<V>(&mut self, key: &str, value: V) -> Result<()>
    where
        V: Into<AttributeValue>,
    {
        self.attributes_mut().insert(key, value)?;
        Ok(())
    }

    fn set_attribute<V>(&mut self, key: &str, value: V) -> Result<()>
    where
        V: Into<AttributeValue>,
    {
        self.change_attribute(key, value)
    }

    /// Removes an attribute. A missing key is a no-op returning `None`.
    fn remove_attribute(&mut self, key: &str) -> Option<AttributeValue> {
        self.attributes_mut().remove(key)
    }

    fn clear_attributes(&mut self) {
        self.attributes_mut().clear();
    }

    /// Reads an attribute.
    ///
    /// A missing key gives `Ok(None)`, unless the owning graph treats null attributes
    /// as errors, in which case it fails with [`GraphError::MissingAttribute`].
    fn attribute(&self, key: &str) -> Result<Option<&AttributeValue>> {
        self.attributes().get(key)
    }

    fn attribute_count(&self) -> usize {
        self.attributes().len()
    }

    fn attribute_keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.attributes().keys())
    }

    fn has_attribute(&self, key: &str) -> bool {
        self.attributes().contains(key)
    }

    fn has_attribute_of(&self, key: &str, kind: AttributeKind) -> bool {
        self.attributes()
            .peek(key)
            .map_or(false, |v| v.kind() == kind)
    }

    /// Same as [`Element::has_attribute`]; the name is historical.
    fn has_label(&self, key: &str) -> bool {
        self.has_attribute(key)
    }

    fn has_number(&self, key: &str) -> bool {
        self.has_attribute_of(key, AttributeKind::Number)
    }

    fn has_vector(&self, key: &str) -> bool {
        self.has_attribute_of(key, AttributeKind::Vector)
    }

    fn has_array(&self, key: &str) -> bool {
        self.has_attribute_of(key, AttributeKind::Array)
    }

    fn has_hash(&self, key: &str) -> bool {
        self.has_attribute_of(key, AttributeKind::Hash)
    }

    fn label(&self, key: &str) -> Option<&str> {
        self.attributes().peek(key).and_then(AttributeValue::as_str)
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.attributes().peek(key).and_then(AttributeValue::as_number)
    }

    fn vector(&self, key: &str) -> Option<&[AttributeValue]> {
        self.attributes().peek(key).and_then(AttributeValue::as_vector)
    }

    fn array(&self, key: &str) -> Option<&[AttributeValue]> {
        self.attributes().peek(key).and_then(AttributeValue::as_array)
    }

    fn hash(&self, key: &str) -> Option<&HashMap<String, AttributeValue>> {
        self.attributes().peek(key).and_then(AttributeValue::as_hash)
    }
}
