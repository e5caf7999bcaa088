//! Key uniquification over a concatenated record sequence.

use std::collections::HashSet;

use bibset_types::Record;

/// Rewrite colliding keys so every record's key is distinct.
///
/// Length and order are preserved. For each group of records sharing a
/// key, the first occurrence keeps it; each later occurrence gets
/// `"{key}-{n}"` with `n` scanned upward from 1 until the candidate
/// collides with no key in the input and no key generated so far.
/// Records whose key was already unique come back unchanged, so running
/// this twice is the same as running it once.
pub fn uniquify_keys(records: Vec<Record>) -> Vec<Record> {
    let original: HashSet<String> = records.iter().map(|r| r.key().to_string()).collect();
    let mut assigned: HashSet<String> = HashSet::with_capacity(records.len());

    records
        .into_iter()
        .map(|record| {
            if assigned.insert(record.key().to_string()) {
                return record;
            }
            let fresh = next_free_key(record.key(), &original, &assigned);
            assigned.insert(fresh.clone());
            record.with_key(fresh)
        })
        .collect()
}

/// The first `"{base}-{n}"` absent from both key sets.
fn next_free_key(base: &str, original: &HashSet<String>, assigned: &HashSet<String>) -> String {
    for n in 1.. {
        let candidate = format!("{base}-{n}");
        if !original.contains(&candidate) && !assigned.contains(&candidate) {
            return candidate;
        }
    }
    unreachable!("suffix scan is unbounded")
}
