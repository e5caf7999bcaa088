//! Merge engine for bibset.
//!
//! Merges two ordered collections of bibliographic records into one,
//! suppressing records from the second collection judged duplicates of
//! records in the first, reconciling collection-level attributes, and
//! re-keying the result so every surviving record has a unique key.
//!
//! The pipeline is strictly linear: detect duplicates, filter the second
//! collection, concatenate, optionally de-duplicate whole records,
//! uniquify keys, merge attributes. No component calls back into another.
//!
//! # Key Types
//!
//! - [`merge`] / [`merge_with_defaults`] / [`merge_with`] — The entry points
//! - [`Merged`] — Result pair: merged collection + advisory report
//! - [`MergeReport`] — What was dropped, as a human-readable advisory
//! - [`find_duplicates`] — Field-subset duplicate detection
//! - [`uniquify_keys`] — Collision-free re-keying
//! - [`merge_attributes`] — Order-preserving attribute union

pub mod attrs;
pub mod detect;
pub mod error;
pub mod merge;
pub mod report;
pub mod uniquify;

pub use attrs::merge_attributes;
pub use detect::find_duplicates;
pub use error::{MergeError, MergeResult};
pub use merge::{merge, merge_with, merge_with_defaults, Merged};
pub use report::MergeReport;
pub use uniquify::uniquify_keys;
