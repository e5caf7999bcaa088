//! The merge options and their per-call override form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Reserved field name selecting a record's identifying key.
pub const FIELD_KEY: &str = "key";

/// Reserved field name selecting a record's entry category.
pub const FIELD_BIBTYPE: &str = "bibtype";

/// Reserved field name requesting whole-record equality instead of a
/// field-subset comparison.
pub const FIELD_ALL: &str = "all";

/// The two options the merge algorithm consumes.
///
/// `fields_to_check` names the fields that define record equivalence.
/// The reserved names [`FIELD_KEY`] and [`FIELD_BIBTYPE`] refer to the
/// mandatory record fields; [`FIELD_ALL`] switches to whole-record
/// equality. An empty set disables duplicate detection entirely.
///
/// `ignore_case` case-folds string comparison for the non-reserved fields
/// (key and bibtype are always compared exactly).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Field names defining record equivalence.
    pub fields_to_check: BTreeSet<String>,
    /// Case-fold string comparison for non-reserved fields.
    pub ignore_case: bool,
}

impl MergeOptions {
    /// Options checking the given fields, case-sensitive.
    pub fn checking<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields_to_check: fields.into_iter().map(Into::into).collect(),
            ignore_case: false,
        }
    }

    /// Builder-style toggle for case-insensitive comparison.
    pub fn ignore_case(mut self, value: bool) -> Self {
        self.ignore_case = value;
        self
    }

    /// Returns `true` if duplicate detection is disabled.
    pub fn detection_disabled(&self) -> bool {
        self.fields_to_check.is_empty()
    }

    /// Returns `true` if whole-record equality was requested.
    pub fn whole_record(&self) -> bool {
        self.fields_to_check.contains(FIELD_ALL)
    }
}

impl Default for MergeOptions {
    /// Key-and-bibtype comparison, case-sensitive: the natural rule for
    /// keyed bibliographic collections.
    fn default() -> Self {
        Self::checking([FIELD_KEY, FIELD_BIBTYPE])
    }
}

/// A partial override of [`MergeOptions`].
///
/// Each field left as `None` keeps the base value. This is the
/// named-parameter surface of the merge entry points: callers override
/// only what they name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsOverride {
    /// Replacement for `fields_to_check`, if any.
    pub fields_to_check: Option<BTreeSet<String>>,
    /// Replacement for `ignore_case`, if any.
    pub ignore_case: Option<bool>,
}

impl OptionsOverride {
    /// An override that changes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Override only the fields to check.
    pub fn fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields_to_check: Some(fields.into_iter().map(Into::into).collect()),
            ignore_case: None,
        }
    }

    /// Builder-style toggle for overriding `ignore_case`.
    pub fn ignore_case(mut self, value: bool) -> Self {
        self.ignore_case = Some(value);
        self
    }

    /// Apply this override on top of base options.
    pub fn apply(&self, base: &MergeOptions) -> MergeOptions {
        MergeOptions {
            fields_to_check: self
                .fields_to_check
                .clone()
                .unwrap_or_else(|| base.fields_to_check.clone()),
            ignore_case: self.ignore_case.unwrap_or(base.ignore_case),
        }
    }
}
