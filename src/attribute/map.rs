use crate::{attribute::*, error::*};
use std::collections::BTreeMap;

/// The attributes of one graph element.
///
/// Keys iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: BTreeMap<String, AttributeValue>,
    null_is_error: bool,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_null_is_error(null_is_error: bool) -> Self {
        Self {
            entries: BTreeMap::new(),
            null_is_error,
        }
    }

    pub(crate) fn set_null_is_error(&mut self, on: bool) {
        self.null_is_error = on;
    }

    /// Whether reading a missing key fails with [`GraphError::MissingAttribute`].
    pub fn null_is_error(&self) -> bool {
        self.null_is_error
    }

    /// Inserts or overwrites, returning the previous value.
    pub fn insert<V>(&mut self, key: &str, value: V) -> Result<Option<AttributeValue>>
    where
        V: Into<AttributeValue>,
    {
        if key.is_empty() {
            return Err(GraphError::InvalidKey);
        }
        Ok(self.entries.insert(key.to_owned(), value.into()))
    }

    pub fn get(&self, key: &str) -> Result<Option<&AttributeValue>> {
        match self.entries.get(key) {
            Some(v) => Ok(Some(v)),
            None if self.null_is_error => Err(GraphError::MissingAttribute(key.to_owned())),
            None => Ok(None),
        }
    }

    /// Like [`Attributes::get`] but never fails.
    pub fn peek(&self, key: &str) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut AttributeValue> {
        self.entries.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_rejected() {
        let mut attrs = Attributes::new();
        assert!(matches!(attrs.insert("", "KeyValue"), Err(GraphError::InvalidKey)));
        assert!(attrs.is_empty());
    }

    #[test]
    fn missing_key_depends_on_mode() {
        let mut attrs = Attributes::new();
        assert!(attrs.get("AttrKey").unwrap().is_none());
        attrs.set_null_is_error(true);
        match attrs.get("AttrKey") {
            Err(GraphError::MissingAttribute(key)) => assert_eq!(key, "AttrKey"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(attrs.peek("AttrKey").is_none());
    }

    #[test]
    fn insert_overwrites() {
        let mut attrs = Attributes::new();
        assert_eq!(attrs.insert("k", 1).unwrap(), None);
        assert_eq!(attrs.insert("k", 2).unwrap(), Some(AttributeValue::Number(1.0)));
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["k"]);
    }
}
