use crate::registry::MapHandle;
use thiserror::Error;

/// Errors surfaced by the map and its handle registry
///
/// A missing key is never an error; lookups report absence as `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// Batch insert received key and value sequences of different lengths
    #[error("Length mismatch: {keys} keys but {values} values")]
    LengthMismatch {
        /// Number of keys supplied
        keys: usize,
        /// Number of values supplied
        values: usize,
    },

    /// A host value that is not an integer, float or text reached the boundary
    #[error("Unsupported variant: {0}")]
    UnsupportedVariant(String),

    /// The handle is null, was never issued, or has already been finalized
    #[error("Invalid map handle: {0}")]
    InvalidHandle(MapHandle),

    /// The map configuration was rejected
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}
