//! Error types for statement serialization.

use std::io;
use std::path::PathBuf;

/// Errors raised while converting objects or writing statement files.
///
/// None of these are recoverable within a run: the caller is expected to
/// report the error and stop.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// Zero output files were requested
    #[error("at least one output file is required")]
    NoDestinations,

    /// An output file could not be created
    #[error("could not open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Appending to a shard failed
    #[error("could not write into shard {shard}: {source}")]
    Write { shard: usize, source: io::Error },

    /// Flushing a shard at the end of the run failed
    #[error("could not close shard {shard}: {source}")]
    Close { shard: usize, source: io::Error },

    /// A cross-reference the generator guarantees was missing
    #[error("unresolved reference: {0}")]
    UnresolvedReference(String),

    /// An epoch-millisecond timestamp outside the calendar range
    #[error("timestamp {0} is out of range")]
    InvalidTimestamp(i64),

    /// The parent chain of a product type is longer than any real hierarchy
    #[error("type hierarchy above ProductType{product_type} exceeds {max} levels")]
    TypeHierarchyTooDeep { product_type: u32, max: usize },
}

/// Result type for serialization operations
pub type Result<T> = std::result::Result<T, SerializeError>;
