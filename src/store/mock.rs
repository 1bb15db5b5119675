use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::model::{ChunkId, Embedding, FeedbackAction, FeedbackLabel, LabeledChunk, UserId};
use crate::scoring::RelevanceScore;
use crate::store::{SignalStore, StoreError, StoreResult};

/// In-memory [`SignalStore`] for tests and demos.
#[derive(Default)]
pub struct MockSignalStore {
    chunks: RwLock<BTreeMap<ChunkId, Option<Embedding>>>,
    labels: RwLock<BTreeMap<(UserId, ChunkId), FeedbackLabel>>,
    scores: RwLock<HashMap<(UserId, ChunkId), RelevanceScore>>,
    sample_seed: u64,
    unavailable: AtomicBool,
}

impl MockSignalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `seed` to pick the random corpus sample.
    pub fn with_sample_seed(seed: u64) -> Self {
        Self {
            sample_seed: seed,
            ..Default::default()
        }
    }

    pub fn insert_chunk(&self, chunk_id: ChunkId, embedding: Option<Embedding>) {
        self.chunks.write().insert(chunk_id, embedding);
    }

    /// Marks the chunk as shown to the user (label `Unlabeled`).
    pub fn present(&self, user_id: UserId, chunk_id: ChunkId) -> StoreResult<()> {
        self.ensure_chunk(chunk_id)?;
        self.labels
            .write()
            .entry((user_id, chunk_id))
            .or_insert(FeedbackLabel::Unlabeled);
        Ok(())
    }

    /// Applies a save/skip/undo action and returns the new label.
    pub fn apply_feedback(
        &self,
        user_id: UserId,
        chunk_id: ChunkId,
        action: FeedbackAction,
    ) -> StoreResult<FeedbackLabel> {
        self.ensure_chunk(chunk_id)?;

        let mut labels = self.labels.write();
        let label = labels.entry((user_id, chunk_id)).or_default();
        let next = label
            .apply(action)
            .map_err(|source| StoreError::InvalidFeedback {
                user_id,
                chunk_id,
                source,
            })?;
        *label = next;
        Ok(next)
    }

    /// Inserts a chunk and saves it for the user in one step.
    pub fn insert_saved(
        &self,
        user_id: UserId,
        chunk_id: ChunkId,
        embedding: Option<Embedding>,
    ) -> StoreResult<()> {
        self.insert_chunk(chunk_id, embedding);
        self.apply_feedback(user_id, chunk_id, FeedbackAction::Save)
            .map(|_| ())
    }

    /// Makes every call fail with [`StoreError::Unavailable`] while `true`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.read().len()
    }

    pub fn score_count(&self, user_id: UserId) -> usize {
        self.scores
            .read()
            .keys()
            .filter(|(u, _)| *u == user_id)
            .count()
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                message: "mock store marked unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn ensure_chunk(&self, chunk_id: ChunkId) -> StoreResult<()> {
        if self.chunks.read().contains_key(&chunk_id) {
            Ok(())
        } else {
            Err(StoreError::ChunkNotFound { chunk_id })
        }
    }

    fn sample_key(&self, chunk_id: ChunkId) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.sample_seed.to_le_bytes());
        hasher.update(&chunk_id.to_le_bytes());
        *hasher.finalize().as_bytes()
    }

    fn saved_embeddings(&self, user_id: UserId) -> Vec<Embedding> {
        let chunks = self.chunks.read();
        self.labels
            .read()
            .iter()
            .filter(|((u, _), label)| *u == user_id && **label == FeedbackLabel::Saved)
            .filter_map(|((_, chunk_id), _)| chunks.get(chunk_id).cloned().flatten())
            .collect()
    }
}

impl SignalStore for MockSignalStore {
    async fn fetch_saved_embeddings(&self, user_id: UserId) -> StoreResult<Vec<Embedding>> {
        self.check_available()?;
        Ok(self.saved_embeddings(user_id))
    }

    async fn fetch_random_embedding_sample(&self, limit: usize) -> StoreResult<Vec<Embedding>> {
        self.check_available()?;

        let chunks = self.chunks.read();
        let mut keyed: Vec<([u8; 32], &Embedding)> = chunks
            .iter()
            .filter_map(|(id, emb)| emb.as_ref().map(|e| (self.sample_key(*id), e)))
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(keyed
            .into_iter()
            .take(limit)
            .map(|(_, e)| e.clone())
            .collect())
    }

    async fn fetch_candidate_embedding(&self, chunk_id: ChunkId) -> StoreResult<Option<Embedding>> {
        self.check_available()?;
        self.chunks
            .read()
            .get(&chunk_id)
            .cloned()
            .ok_or(StoreError::ChunkNotFound { chunk_id })
    }

    async fn count_saved_for_user(&self, user_id: UserId) -> StoreResult<usize> {
        self.check_available()?;
        Ok(self.saved_embeddings(user_id).len())
    }

    async fn fetch_labeled_chunks(&self, user_id: UserId) -> StoreResult<Vec<LabeledChunk>> {
        self.check_available()?;

        let chunks = self.chunks.read();
        Ok(self
            .labels
            .read()
            .iter()
            .filter(|((u, _), _)| *u == user_id)
            .map(|((_, chunk_id), label)| {
                LabeledChunk::new(
                    *chunk_id,
                    *label,
                    chunks.get(chunk_id).cloned().flatten(),
                )
            })
            .collect())
    }

    async fn fetch_score(
        &self,
        user_id: UserId,
        chunk_id: ChunkId,
    ) -> StoreResult<Option<RelevanceScore>> {
        self.check_available()?;
        Ok(self.scores.read().get(&(user_id, chunk_id)).cloned())
    }

    async fn record_score(&self, user_id: UserId, score: RelevanceScore) -> StoreResult<()> {
        self.check_available()?;
        self.scores
            .write()
            .entry((user_id, score.chunk_id))
            .or_insert(score);
        Ok(())
    }
}
