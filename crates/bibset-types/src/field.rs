//! Field values and the insertion-ordered field map of a record.

use serde::{Deserialize, Serialize};

/// The value of a single record field.
///
/// Bibliographic fields hold either one string (a title, a year) or an
/// ordered list of strings (authors, keywords). Comparison is exact string
/// equality; [`FieldValue::fold_case`] produces the case-folded variant used
/// for case-insensitive matching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single string value.
    Single(String),
    /// An ordered list of string values.
    List(Vec<String>),
}

impl FieldValue {
    /// A copy of this value with every contained string lowercased.
    pub fn fold_case(&self) -> FieldValue {
        match self {
            FieldValue::Single(s) => FieldValue::Single(s.to_lowercase()),
            FieldValue::List(items) => {
                FieldValue::List(items.iter().map(|s| s.to_lowercase()).collect())
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Single(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Single(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// Insertion-ordered map of field name to [`FieldValue`].
///
/// Backed by a `Vec` of pairs: collections run tens to low thousands of
/// records with a handful of fields each, so linear lookup is fine and the
/// field order of the source entry is preserved exactly. Setting a name
/// that already exists replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fields(Vec<(String, FieldValue)>);

impl Fields {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get a field's value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Returns `true` if the field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set a field, replacing the value in place if the name exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Iterate over field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }
}
