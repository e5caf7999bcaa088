//! Error types for the merge crate.
//!
//! The merge core itself is total over well-formed inputs; errors only
//! arise at the entry points that consult a configuration store.

use bibset_config::ConfigError;

/// Errors that can occur during a merge call.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// Reading or overriding the default options failed.
    #[error("configuration store error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
