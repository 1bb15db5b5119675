use thiserror::Error;

use crate::model::ChunkId;
use crate::preference::PreferenceError;
use crate::vector::VectorError;

#[derive(Debug, Clone, PartialEq, Error)]
/// Errors returned while scoring a candidate.
pub enum ScoringError {
    /// The candidate has no embedding. Never replaced by a default score.
    #[error("missing embedding for chunk {chunk_id}")]
    MissingEmbedding {
        /// Candidate chunk.
        chunk_id: ChunkId,
    },

    /// The cold-start collaborator produced a score outside `[0, 1]`.
    #[error("cold-start scorer '{scorer}' returned invalid score {score} for chunk {chunk_id}")]
    InvalidColdStartScore {
        scorer: String,
        chunk_id: ChunkId,
        score: f32,
    },

    /// The cold-start collaborator failed.
    #[error("cold-start scoring failed: {reason}")]
    ColdStartFailed {
        /// Error message.
        reason: String,
    },

    /// Centroid could not be built.
    #[error("preference error: {0}")]
    Preference(#[from] PreferenceError),

    /// Similarity computation failed.
    #[error("vector error: {0}")]
    Vector(#[from] VectorError),
}

impl ScoringError {
    /// Returns `true` for errors caused by inconsistent embedding dimensions.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            ScoringError::Vector(VectorError::DimensionMismatch { .. })
                | ScoringError::Preference(PreferenceError::Vector(
                    VectorError::DimensionMismatch { .. }
                ))
        )
    }
}

pub type ScoringResult<T> = Result<T, ScoringError>;
