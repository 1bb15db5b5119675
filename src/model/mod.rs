//! Domain types shared by every component.
//!
//! - [`Embedding`] is the immutable vector attached to one content chunk.
//! - [`FeedbackLabel`] is the user's save/skip decision, the only supervision signal.
//! - [`LabeledChunk`] pairs the two, with a missing embedding modelled as `None`.

/// Embedding newtype and f16 codec.
pub mod embedding;
mod error;
/// Feedback labels and their transitions.
pub mod feedback;


pub use embedding::Embedding;
pub use error::{EmbeddingCodecError, FeedbackError};
pub use feedback::{FeedbackAction, FeedbackLabel};

use serde::{Deserialize, Serialize};

/// Identifier of a user as assigned by the storage collaborator.
pub type UserId = u64;

/// Identifier of a content chunk (podcast transcript or article excerpt).
pub type ChunkId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A chunk with its current label for one user.
pub struct LabeledChunk {
    pub chunk_id: ChunkId,
    pub label: FeedbackLabel,
    pub embedding: Option<Embedding>,
}

impl LabeledChunk {
    pub fn new(chunk_id: ChunkId, label: FeedbackLabel, embedding: Option<Embedding>) -> Self {
        Self {
            chunk_id,
            label,
            embedding,
        }
    }

    /// Returns `true` if the chunk is saved and carries an embedding.
    pub fn is_trainable(&self) -> bool {
        self.label == FeedbackLabel::Saved && self.embedding.is_some()
    }
}
