use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Errors returned by vector math primitives.
pub enum VectorError {
    /// An operation that needs at least one vector received none.
    #[error("empty input: at least one vector is required")]
    EmptyInput,

    /// Two vectors of different lengths met in one computation.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension of the first (reference) vector.
        expected: usize,
        /// Dimension of the offending vector.
        actual: usize,
    },

    /// A similarity came out NaN or infinite, usually from a non-finite input component.
    #[error("non-finite similarity: {value}")]
    NonFinite {
        /// The offending value.
        value: f32,
    },

    /// Bucket boundaries were not usable.
    #[error("invalid bucket edges: {reason}")]
    InvalidBucketEdges {
        /// Error message.
        reason: String,
    },
}

/// Result alias for vector math.
pub type VectorResult<T> = Result<T, VectorError>;
