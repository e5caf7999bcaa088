//! Error types for the data model.

/// Errors that can occur while constructing data-model values.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// A record was constructed with an empty key.
    #[error("record key must not be empty")]
    EmptyKey,

    /// A record was constructed with an empty bibtype.
    #[error("record bibtype must not be empty")]
    EmptyBibtype,
}
