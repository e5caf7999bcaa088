//! Order-preserving union of collection-level attribute maps.

use bibset_types::Attributes;

/// Merge two attribute maps.
///
/// Names from `first` come first in their original order, followed by
/// names only present in `second`. Per name the merged list is `first`'s
/// values then `second`'s, with exact duplicates dropped keeping the
/// first occurrence. A name absent from one side contributes an empty
/// list for that side.
pub fn merge_attributes(first: &Attributes, second: &Attributes) -> Attributes {
    let mut merged = Attributes::new();

    for (name, values) in first.iter() {
        let tail = second.get(name).unwrap_or(&[]);
        merged.set(name, dedup_preserving_order(values, tail));
    }
    for (name, values) in second.iter() {
        if first.get(name).is_none() {
            merged.set(name, dedup_preserving_order(values, &[]));
        }
    }

    merged
}

/// `head ++ tail` with exact duplicates removed, first occurrence kept.
fn dedup_preserving_order(head: &[String], tail: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(head.len() + tail.len());
    for value in head.iter().chain(tail) {
        if !out.iter().any(|seen| seen == value) {
            out.push(value.clone());
        }
    }
    out
}
