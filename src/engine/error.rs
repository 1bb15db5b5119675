use thiserror::Error;

use crate::diagnostics::DiagnosticsError;
use crate::scoring::ScoringError;
use crate::store::StoreError;

#[derive(Debug, Clone, PartialEq, Error)]
/// Errors returned by [`RelevanceEngine`](super::RelevanceEngine) operations.
pub enum EngineError {
    /// The storage collaborator failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Scoring rejected the candidate.
    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),

    /// Diagnostics could not be computed.
    #[error("diagnostics error: {0}")]
    Diagnostics(#[from] DiagnosticsError),
}

impl EngineError {
    /// Returns `true` if the candidate was rejected for lacking an embedding.
    pub fn is_missing_embedding(&self) -> bool {
        matches!(
            self,
            EngineError::Scoring(ScoringError::MissingEmbedding { .. })
        )
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
