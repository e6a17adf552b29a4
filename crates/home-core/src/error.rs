//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading seed data.
///
/// Lookups never fail; only reading a seed override from disk does.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Seed file could not be read.
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not valid JSON for the expected shape.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
