//! A single bibliographic record.

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::field::{FieldValue, Fields};

/// One bibliographic entry.
///
/// Every record carries two mandatory pieces of identity — the `key`
/// (unique within a collection) and the `bibtype` (the entry category,
/// e.g. `"article"` or `"book"`) — plus an insertion-ordered map of named
/// fields.
///
/// Records are immutable once constructed. Merging never edits a record's
/// fields; the only change it may make is replacing the key of a record
/// that would otherwise collide, via [`Record::with_key`]. Whole-record
/// equality is the derived `PartialEq`: key, bibtype, and fields including
/// their order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    key: String,
    bibtype: String,
    #[serde(default)]
    fields: Fields,
}

impl Record {
    /// Create a record with the given key and bibtype and no fields.
    ///
    /// Both the key and the bibtype must be non-empty.
    pub fn new(key: impl Into<String>, bibtype: impl Into<String>) -> Result<Self, TypeError> {
        let key = key.into();
        let bibtype = bibtype.into();
        if key.is_empty() {
            return Err(TypeError::EmptyKey);
        }
        if bibtype.is_empty() {
            return Err(TypeError::EmptyBibtype);
        }
        Ok(Self {
            key,
            bibtype,
            fields: Fields::new(),
        })
    }

    /// Builder-style field addition. Setting an existing name replaces it.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.set(name, value);
        self
    }

    /// A copy of this record with a different key.
    ///
    /// This is the only mutation merging performs, and only on records
    /// whose original key collides with an earlier one.
    pub fn with_key(&self, key: impl Into<String>) -> Record {
        Record {
            key: key.into(),
            bibtype: self.bibtype.clone(),
            fields: self.fields.clone(),
        }
    }

    /// The record's identifying key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The record's entry category.
    pub fn bibtype(&self) -> &str {
        &self.bibtype
    }

    /// The record's named fields, in insertion order.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Get a named field's value, `None` when absent.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_key() {
        assert!(matches!(Record::new("", "article"), Err(TypeError::EmptyKey)));
    }

    #[test]
    fn new_rejects_empty_bibtype() {
        assert!(matches!(
            Record::new("knuth84", ""),
            Err(TypeError::EmptyBibtype)
        ));
    }

    #[test]
    fn with_key_keeps_everything_else() {
        let rec = Record::new("knuth84", "book")
            .unwrap()
            .with_field("title", "The TeXbook")
            .with_field("year", "1984");
        let rekeyed = rec.with_key("knuth84-1");

        assert_eq!(rekeyed.key(), "knuth84-1");
        assert_eq!(rekeyed.bibtype(), rec.bibtype());
        assert_eq!(rekeyed.fields(), rec.fields());
    }

    #[test]
    fn whole_record_equality_includes_fields() {
        let a = Record::new("k", "article").unwrap().with_field("title", "T");
        let b = Record::new("k", "article").unwrap().with_field("title", "T");
        let c = Record::new("k", "article").unwrap().with_field("title", "U");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn serde_roundtrip() {
        let rec = Record::new("doe01", "article")
            .unwrap()
            .with_field("title", "An Article")
            .with_field("author", vec!["Doe, J.".to_string(), "Roe, R.".to_string()]);
        let json = serde_json::to_string(&rec).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rec);
    }
}
