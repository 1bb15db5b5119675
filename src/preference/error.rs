use thiserror::Error;

use crate::vector::VectorError;

#[derive(Debug, Clone, PartialEq, Error)]
/// Errors building or using a preference centroid.
pub enum PreferenceError {
    /// The user has no saved embeddings yet. Expected for new users.
    #[error("insufficient data: no saved embeddings to build a preference centroid")]
    InsufficientData,

    /// Underlying vector math failed.
    #[error("vector error: {0}")]
    Vector(#[from] VectorError),
}

pub type PreferenceResult<T> = Result<T, PreferenceError>;
