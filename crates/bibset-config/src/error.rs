//! Error types for the configuration store.

/// Errors that can occur while reading or writing the default options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The store's lock was poisoned by a panic in another holder.
    #[error("options store lock poisoned: {0}")]
    Poisoned(String),
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
