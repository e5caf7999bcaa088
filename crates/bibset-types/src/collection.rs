//! An ordered collection of records plus collection-level attributes.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Insertion-ordered map of collection-level attribute name to value list.
///
/// Attributes describe a collection as a whole (accumulated search-query
/// metadata, provenance notes), never an individual record. Name order is
/// first-appearance order; it survives serialization and merging.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes(Vec<(String, Vec<String>)>);

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attribute names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The value list for a name, `None` when absent.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Append a value to a name's list, creating the name if needed.
    pub fn push_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1.push(value),
            None => self.0.push((name, vec![value])),
        }
    }

    /// Replace a name's entire value list, creating the name if needed.
    pub fn set(&mut self, name: impl Into<String>, values: Vec<String>) {
        let name = name.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = values,
            None => self.0.push((name, values)),
        }
    }

    /// Iterate over `(name, values)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    /// Iterate over attribute names in first-appearance order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }
}

/// An ordered sequence of [`Record`]s plus collection-level [`Attributes`].
///
/// Record order is significant and preserved by every operation except
/// explicit de-duplication. Collections are built by upstream readers and
/// query clients; merging treats them as immutable inputs and produces a
/// fresh collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    records: Vec<Record>,
    #[serde(default)]
    attributes: Attributes,
}

impl Collection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from an ordered list of records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            attributes: Attributes::new(),
        }
    }

    /// Create a collection from records and attributes.
    pub fn with_attributes(records: Vec<Record>, attributes: Attributes) -> Self {
        Self {
            records,
            attributes,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the collection has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The record keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.key())
    }

    /// Returns `true` if any record has the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.records.iter().any(|r| r.key() == key)
    }

    /// The collection-level attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable access to the collection-level attributes.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}
