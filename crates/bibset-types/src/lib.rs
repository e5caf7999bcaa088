//! Foundation types for bibset.
//!
//! This crate provides the bibliographic data model shared by every other
//! bibset crate: records, their field values, ordered collections, and the
//! collection-level attribute maps that describe a collection as a whole.
//!
//! # Key Types
//!
//! - [`Record`] — A single bibliographic entry: key, bibtype, named fields
//! - [`FieldValue`] — A field's value: one string or an ordered list of strings
//! - [`Fields`] — Insertion-ordered field map of a record
//! - [`Collection`] — Ordered sequence of records plus attributes
//! - [`Attributes`] — Insertion-ordered collection-level attribute map
//!
//! Ordering is part of the contract everywhere: records keep the order they
//! were added in, fields keep the order they were set in, and attribute
//! names keep the order they first appeared in.

pub mod collection;
pub mod error;
pub mod field;
pub mod record;

pub use collection::{Attributes, Collection};
pub use error::TypeError;
pub use field::{FieldValue, Fields};
pub use record::Record;
