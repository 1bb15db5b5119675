use thiserror::Error;

use crate::model::{ChunkId, FeedbackError, UserId};

#[derive(Debug, Clone, PartialEq, Error)]
/// Errors reported by the storage collaborator.
pub enum StoreError {
    /// The chunk does not exist (as opposed to existing without an embedding).
    #[error("chunk not found: {chunk_id}")]
    ChunkNotFound {
        /// Requested chunk.
        chunk_id: ChunkId,
    },

    /// The storage backend could not be reached or failed.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Error message.
        message: String,
    },

    /// A feedback transition was rejected.
    #[error("invalid feedback for user {user_id}, chunk {chunk_id}: {source}")]
    InvalidFeedback {
        user_id: UserId,
        chunk_id: ChunkId,
        #[source]
        source: FeedbackError,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
