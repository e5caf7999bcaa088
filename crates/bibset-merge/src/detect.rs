//! Field-subset duplicate detection between two collections.
//!
//! Comparison runs in two tiers. The key/bibtype tier narrows the second
//! collection down to candidates using exact (never case-folded) equality
//! on the mandatory fields named in the configured set. The
//! remaining-fields tier then confirms a candidate only if its values for
//! every other configured field, taken as one tuple, equal the
//! corresponding tuple of some record in the first collection.
//!
//! A field absent from a record compares as absent: it matches only a
//! record where the field is also absent. Unknown field names are
//! therefore not an error.

use std::collections::BTreeSet;

use bibset_config::{FIELD_BIBTYPE, FIELD_KEY};
use bibset_types::{Collection, FieldValue, Record};

/// The positions (0-based) of records in `second` that duplicate some
/// record in `first` under the configured field subset.
///
/// An empty `fields_to_check` disables detection and yields the empty
/// set. The reserved name `"all"` (whole-record mode) never reaches this
/// function through the orchestrator; passed directly, it is treated as
/// an ordinary field name.
pub fn find_duplicates(
    first: &Collection,
    second: &Collection,
    fields_to_check: &BTreeSet<String>,
    ignore_case: bool,
) -> BTreeSet<usize> {
    let mut duplicates = BTreeSet::new();
    if fields_to_check.is_empty() {
        return duplicates;
    }

    let check_key = fields_to_check.contains(FIELD_KEY);
    let check_bibtype = fields_to_check.contains(FIELD_BIBTYPE);
    let rest: Vec<&str> = fields_to_check
        .iter()
        .map(String::as_str)
        .filter(|name| *name != FIELD_KEY && *name != FIELD_BIBTYPE)
        .collect();

    // Tuples of the first collection's values for the remaining fields,
    // computed once; candidates are confirmed against these.
    let first_tuples: Vec<Vec<Option<FieldValue>>> = if rest.is_empty() {
        Vec::new()
    } else {
        first
            .records()
            .iter()
            .map(|rec| field_tuple(rec, &rest, ignore_case))
            .collect()
    };

    for (pos, rec) in second.records().iter().enumerate() {
        let candidate = match (check_key, check_bibtype) {
            (true, true) => first
                .records()
                .iter()
                .any(|f| f.key() == rec.key() && f.bibtype() == rec.bibtype()),
            (true, false) => first.records().iter().any(|f| f.key() == rec.key()),
            (false, true) => first
                .records()
                .iter()
                .any(|f| f.bibtype() == rec.bibtype()),
            (false, false) => true,
        };
        if !candidate {
            continue;
        }

        if rest.is_empty() {
            duplicates.insert(pos);
            continue;
        }

        let tuple = field_tuple(rec, &rest, ignore_case);
        if first_tuples.iter().any(|t| *t == tuple) {
            duplicates.insert(pos);
        }
    }

    duplicates
}

/// A record's values for the given fields, in set order, absent as `None`.
fn field_tuple(record: &Record, fields: &[&str], ignore_case: bool) -> Vec<Option<FieldValue>> {
    fields
        .iter()
        .map(|name| {
            record.field(name).map(|value| {
                if ignore_case {
                    value.fold_case()
                } else {
                    value.clone()
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn rec(key: &str, bibtype: &str) -> Record {
        Record::new(key, bibtype).unwrap()
    }

    fn coll(records: Vec<Record>) -> Collection {
        Collection::from_records(records)
    }

    #[test]
    fn empty_field_set_detects_nothing() {
        let first = coll(vec![rec("a", "article")]);
        let second = coll(vec![rec("a", "article")]);
        let dupes = find_duplicates(&first, &second, &fields(&[]), false);
        assert!(dupes.is_empty());
    }

    #[test]
    fn key_and_bibtype_must_match_the_same_record() {
        let first = coll(vec![rec("a", "article"), rec("b", "book")]);
        // Key of one record, bibtype of the other: not a duplicate.
        let second = coll(vec![rec("a", "book"), rec("b", "book")]);

        let dupes = find_duplicates(&first, &second, &fields(&["key", "bibtype"]), false);
        assert_eq!(dupes, BTreeSet::from([1]));
    }

    #[test]
    fn key_only_matches_any_key() {
        let first = coll(vec![rec("a", "article")]);
        let second = coll(vec![rec("a", "book"), rec("c", "article")]);

        let dupes = find_duplicates(&first, &second, &fields(&["key"]), false);
        assert_eq!(dupes, BTreeSet::from([0]));
    }

    #[test]
    fn bibtype_only_matches_any_bibtype() {
        let first = coll(vec![rec("a", "article")]);
        let second = coll(vec![rec("x", "article"), rec("y", "book")]);

        let dupes = find_duplicates(&first, &second, &fields(&["bibtype"]), false);
        assert_eq!(dupes, BTreeSet::from([0]));
    }

    #[test]
    fn remaining_fields_compare_as_one_tuple() {
        // title matches one record, year matches another; no single record
        // carries the whole tuple.
        let first = coll(vec![
            rec("a", "article")
                .with_field("title", "Alpha")
                .with_field("year", "2000"),
            rec("b", "article")
                .with_field("title", "Beta")
                .with_field("year", "2001"),
        ]);
        let second = coll(vec![rec("c", "article")
            .with_field("title", "Alpha")
            .with_field("year", "2001")]);

        let dupes = find_duplicates(&first, &second, &fields(&["title", "year"]), false);
        assert!(dupes.is_empty());
    }

    #[test]
    fn no_reserved_names_makes_everything_a_candidate() {
        let first = coll(vec![rec("a", "article").with_field("title", "Alpha")]);
        let second = coll(vec![
            rec("x", "book").with_field("title", "Alpha"),
            rec("y", "book").with_field("title", "Gamma"),
        ]);

        let dupes = find_duplicates(&first, &second, &fields(&["title"]), false);
        assert_eq!(dupes, BTreeSet::from([0]));
    }

    #[test]
    fn case_folding_applies_only_when_asked() {
        let first = coll(vec![rec("a", "article").with_field("title", "Foo")]);
        let second = coll(vec![rec("b", "article").with_field("title", "FOO")]);

        let exact = find_duplicates(&first, &second, &fields(&["title"]), false);
        assert!(exact.is_empty());

        let folded = find_duplicates(&first, &second, &fields(&["title"]), true);
        assert_eq!(folded, BTreeSet::from([0]));
    }

    #[test]
    fn key_comparison_is_never_case_folded() {
        let first = coll(vec![rec("Knuth84", "book")]);
        let second = coll(vec![rec("knuth84", "book")]);

        let dupes = find_duplicates(&first, &second, &fields(&["key"]), true);
        assert!(dupes.is_empty());
    }

    #[test]
    fn absent_field_matches_only_absent() {
        let first = coll(vec![
            rec("a", "article").with_field("title", "Alpha"),
            rec("b", "article"),
        ]);
        let second = coll(vec![
            rec("x", "article"),
            rec("y", "article").with_field("doi", "10.1/x"),
        ]);

        // "doi" exists on no record of `first`: absent == absent for x,
        // but y carries a value and matches nothing.
        let dupes = find_duplicates(&first, &second, &fields(&["doi"]), false);
        assert_eq!(dupes, BTreeSet::from([0]));
    }

    #[test]
    fn list_valued_fields_compare_elementwise() {
        let authors = vec!["Doe, J.".to_string(), "Roe, R.".to_string()];
        let first = coll(vec![rec("a", "article").with_field("author", authors.clone())]);
        let second = coll(vec![
            rec("b", "article").with_field("author", authors),
            rec("c", "article").with_field("author", vec!["Doe, J.".to_string()]),
        ]);

        let dupes = find_duplicates(&first, &second, &fields(&["author"]), false);
        assert_eq!(dupes, BTreeSet::from([0]));
    }

    #[test]
    fn all_positions_can_be_duplicates() {
        let first = coll(vec![rec("a", "article"), rec("b", "book")]);
        let second = coll(vec![rec("a", "article"), rec("b", "book")]);

        let dupes = find_duplicates(&first, &second, &fields(&["key", "bibtype"]), false);
        assert_eq!(dupes, BTreeSet::from([0, 1]));
    }
}
