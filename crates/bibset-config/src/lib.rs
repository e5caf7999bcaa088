//! Merge configuration for bibset.
//!
//! Configuration is threaded explicitly: every merge call takes a
//! [`MergeOptions`] value, and callers who want process-wide defaults own a
//! [`ConfigStore`] and pass it where needed. There is no global mutable
//! state. The scoped-override pattern of the original system survives as
//! [`OptionsGuard`], an RAII guard that installs replacement defaults and
//! restores the previous ones when dropped, on every exit path.
//!
//! # Key Types
//!
//! - [`MergeOptions`] — The two options the merge algorithm consumes
//! - [`OptionsOverride`] — Partial per-call override of [`MergeOptions`]
//! - [`ConfigStore`] — Default options behind an `RwLock`
//! - [`OptionsGuard`] — Scoped override with guaranteed restoration

pub mod error;
pub mod options;
pub mod store;

pub use error::{ConfigError, ConfigResult};
pub use options::{MergeOptions, OptionsOverride, FIELD_ALL, FIELD_BIBTYPE, FIELD_KEY};
pub use store::{ConfigStore, OptionsGuard};
