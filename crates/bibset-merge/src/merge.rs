//! The merge orchestrator and its entry points.
//!
//! [`merge`] is the core: explicit options, pure, infallible. The other
//! entry points layer the configuration store on top: the operator-style
//! [`merge_with_defaults`] reads both options from a caller-supplied
//! [`ConfigStore`], and the named-parameter [`merge_with`] installs a
//! scoped override first and restores the previous defaults on every exit
//! path.

use bibset_config::{ConfigStore, MergeOptions, OptionsOverride};
use bibset_types::{Collection, Record};
use tracing::{debug, info};

use crate::attrs::merge_attributes;
use crate::detect::find_duplicates;
use crate::error::MergeResult;
use crate::report::MergeReport;
use crate::uniquify::uniquify_keys;

/// The result of a merge: the combined collection and an advisory report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Merged {
    /// The merged collection.
    pub collection: Collection,
    /// What was dropped from the second collection.
    pub report: MergeReport,
}

/// Merge `second` into `first` under the given options.
///
/// Records of `first` always win: a record in `second` judged equivalent
/// to one in `first` is dropped, never reconciled field by field. The
/// surviving records keep their order, `first`'s before `second`'s, and
/// come out with pairwise-distinct keys. Collection-level attributes are
/// combined as an order-preserving union.
///
/// When every record of a non-empty `second` is a duplicate, `first` is
/// returned unchanged — `second`'s attributes are discarded along with
/// its records. Inputs are never mutated.
pub fn merge(first: &Collection, second: &Collection, options: &MergeOptions) -> Merged {
    let mut report = MergeReport::Clean;
    let mut survivors: Vec<Record> = first.records().to_vec();

    if options.whole_record() {
        debug!("whole-record de-duplication over concatenated collections");
        survivors.extend(second.records().iter().cloned());
        survivors = dedup_whole_records(survivors);
    } else if !options.detection_disabled() {
        let duplicates = find_duplicates(
            first,
            second,
            &options.fields_to_check,
            options.ignore_case,
        );
        debug!(
            found = duplicates.len(),
            of = second.len(),
            "duplicate detection complete"
        );

        if !second.is_empty() && duplicates.len() == second.len() {
            info!("{}", MergeReport::AllDuplicates);
            return Merged {
                collection: first.clone(),
                report: MergeReport::AllDuplicates,
            };
        }

        if !duplicates.is_empty() {
            report = MergeReport::DuplicatesAt(duplicates.iter().map(|p| p + 1).collect());
            info!("{report}");
        }
        survivors.extend(
            second
                .records()
                .iter()
                .enumerate()
                .filter(|(pos, _)| !duplicates.contains(pos))
                .map(|(_, rec)| rec.clone()),
        );
    } else {
        debug!("duplicate detection disabled, concatenating");
        survivors.extend(second.records().iter().cloned());
    }

    let records = uniquify_keys(survivors);
    let attributes = merge_attributes(first.attributes(), second.attributes());

    Merged {
        collection: Collection::with_attributes(records, attributes),
        report,
    }
}

/// Operator-style entry point: both options come from the store.
pub fn merge_with_defaults(
    first: &Collection,
    second: &Collection,
    store: &ConfigStore,
) -> MergeResult<Merged> {
    let options = store.get()?;
    Ok(merge(first, second, &options))
}

/// Named-parameter entry point: override the store's defaults for the
/// duration of this call.
///
/// The previous defaults are restored before returning, on every exit
/// path including panics.
pub fn merge_with(
    first: &Collection,
    second: &Collection,
    store: &ConfigStore,
    overrides: OptionsOverride,
) -> MergeResult<Merged> {
    let _guard = store.scoped(overrides)?;
    let options = store.get()?;
    Ok(merge(first, second, &options))
}

/// Remove exact whole-record duplicates, keeping first occurrences.
fn dedup_whole_records(records: Vec<Record>) -> Vec<Record> {
    let mut out: Vec<Record> = Vec::with_capacity(records.len());
    for record in records {
        if !out.contains(&record) {
            out.push(record);
        }
    }
    out
}
