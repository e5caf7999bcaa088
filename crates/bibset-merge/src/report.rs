//! The advisory merge report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a merge dropped from the second collection.
///
/// Reports are advisory notifications, never failures. Positions are
/// 1-based and ascending, matching how the source entries are numbered in
/// user-facing tooling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeReport {
    /// Nothing was dropped.
    Clean,
    /// Every record of the second collection duplicated one in the first;
    /// the second collection was discarded entirely.
    AllDuplicates,
    /// The listed positions (1-based) of the second collection were
    /// dropped as duplicates.
    DuplicatesAt(Vec<usize>),
}

impl MergeReport {
    /// Returns `true` if nothing was dropped.
    pub fn is_clean(&self) -> bool {
        matches!(self, MergeReport::Clean)
    }

    /// The advisory message, `None` when the merge was clean.
    pub fn message(&self) -> Option<String> {
        match self {
            MergeReport::Clean => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeReport::Clean => Ok(()),
            MergeReport::AllDuplicates => {
                write!(f, "Only duplicates in second collection")
            }
            MergeReport::DuplicatesAt(positions) => {
                let joined = positions
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "Duplicate entries found in second collection at position(s): {joined}"
                )
            }
        }
    }
}
