use std::future::Future;

use crate::model::{ChunkId, Embedding, LabeledChunk, UserId};
use crate::scoring::RelevanceScore;

use super::error::StoreError;

/// Storage collaborator consumed by the [`RelevanceEngine`](crate::engine::RelevanceEngine).
///
/// Implementations fetch fresh data on every call; the engine keeps no copy between calls.
pub trait SignalStore: Send + Sync {
    /// Embeddings of the user's saved chunks. Chunks without an embedding are omitted.
    fn fetch_saved_embeddings(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Embedding>, StoreError>> + Send;

    /// Up to `limit` embeddings drawn from the whole corpus, regardless of user or label.
    fn fetch_random_embedding_sample(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Embedding>, StoreError>> + Send;

    /// The candidate's embedding; `Ok(None)` if the chunk exists without one.
    fn fetch_candidate_embedding(
        &self,
        chunk_id: ChunkId,
    ) -> impl Future<Output = Result<Option<Embedding>, StoreError>> + Send;

    /// Number of saved chunks with an embedding. Drives the learning phase.
    fn count_saved_for_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<usize, StoreError>> + Send;

    /// Every chunk the user has been shown, with its label.
    fn fetch_labeled_chunks(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<LabeledChunk>, StoreError>> + Send;

    /// The score snapshot recorded when the chunk was first presented, if any.
    fn fetch_score(
        &self,
        user_id: UserId,
        chunk_id: ChunkId,
    ) -> impl Future<Output = Result<Option<RelevanceScore>, StoreError>> + Send;

    /// Records a presentation-time score snapshot.
    fn record_score(
        &self,
        user_id: UserId,
        score: RelevanceScore,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
