//! Test fixtures for integration tests.

#![allow(dead_code)]

use relevance::{ChunkId, Embedding, FeedbackAction, MockSignalStore, UserId};

pub const DEFAULT_USER_ID: UserId = 1000;

pub const FIXTURE_DIM: usize = 64;

/// First chunk id handed out to random corpus chunks.
pub const CORPUS_ID_BASE: ChunkId = 1_000_000;

/// Deterministic pseudo-random embedding with components in `[-1, 1)`.
pub fn generate_deterministic_embedding(seed: u64, dim: usize) -> Embedding {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1);
    let values = (0..dim)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            ((state >> 40) as f32 / (1u64 << 24) as f32) * 2.0 - 1.0
        })
        .collect();
    Embedding::new(values)
}

/// Embedding near the `anchor` axis: a unit spike plus small seeded noise.
pub fn generate_clustered_embedding(anchor: usize, seed: u64, dim: usize) -> Embedding {
    let noise = generate_deterministic_embedding(seed, dim);
    let values = noise
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, n)| if i == anchor { 1.0 } else { n * 0.05 })
        .collect();
    Embedding::new(values)
}

/// Builds a [`MockSignalStore`] with saved, skipped, presented and corpus chunks.
#[derive(Default)]
pub struct SignalStoreBuilder {
    user_id: Option<UserId>,
    dim: Option<usize>,
    sample_seed: u64,
    saved: Vec<(ChunkId, Option<Embedding>)>,
    skipped: Vec<(ChunkId, Option<Embedding>)>,
    presented: Vec<(ChunkId, Option<Embedding>)>,
    corpus: Vec<(ChunkId, Option<Embedding>)>,
}

impl SignalStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(mut self, id: UserId) -> Self {
        self.user_id = Some(id);
        self
    }

    pub fn dim(mut self, dim: usize) -> Self {
        self.dim = Some(dim);
        self
    }

    pub fn sample_seed(mut self, seed: u64) -> Self {
        self.sample_seed = seed;
        self
    }

    pub fn saved(mut self, chunk_id: ChunkId, embedding: Option<Embedding>) -> Self {
        self.saved.push((chunk_id, embedding));
        self
    }

    pub fn skipped(mut self, chunk_id: ChunkId, embedding: Option<Embedding>) -> Self {
        self.skipped.push((chunk_id, embedding));
        self
    }

    pub fn presented(mut self, chunk_id: ChunkId, embedding: Option<Embedding>) -> Self {
        self.presented.push((chunk_id, embedding));
        self
    }

    /// Saves `count` chunks clustered around `anchor`, ids starting at `first_id`.
    pub fn with_clustered_saves(mut self, anchor: usize, first_id: ChunkId, count: usize) -> Self {
        let dim = self.dim_or_default();
        for i in 0..count as u64 {
            let id = first_id + i;
            self.saved
                .push((id, Some(generate_clustered_embedding(anchor, id, dim))));
        }
        self
    }

    /// Adds `count` unlabeled corpus chunks with random embeddings.
    pub fn with_random_corpus(mut self, count: usize) -> Self {
        let dim = self.dim_or_default();
        for i in 0..count as u64 {
            let id = CORPUS_ID_BASE + i;
            self.corpus
                .push((id, Some(generate_deterministic_embedding(id, dim))));
        }
        self
    }

    pub fn build(self) -> MockSignalStore {
        let user_id = self.user_id.unwrap_or(DEFAULT_USER_ID);
        let store = MockSignalStore::with_sample_seed(self.sample_seed);

        for (id, embedding) in self.corpus {
            store.insert_chunk(id, embedding);
        }
        for (id, embedding) in self.presented {
            store.insert_chunk(id, embedding);
            store.present(user_id, id).expect("present fixture chunk");
        }
        for (id, embedding) in self.saved {
            store
                .insert_saved(user_id, id, embedding)
                .expect("save fixture chunk");
        }
        for (id, embedding) in self.skipped {
            store.insert_chunk(id, embedding);
            store
                .apply_feedback(user_id, id, FeedbackAction::Skip)
                .expect("skip fixture chunk");
        }

        store
    }

    fn dim_or_default(&self) -> usize {
        self.dim.unwrap_or(FIXTURE_DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relevance::cosine_similarity;

    #[test]
    fn test_deterministic_embedding_is_stable() {
        assert_eq!(
            generate_deterministic_embedding(7, 16),
            generate_deterministic_embedding(7, 16)
        );
        assert_ne!(
            generate_deterministic_embedding(7, 16),
            generate_deterministic_embedding(8, 16)
        );
        assert!(
            generate_deterministic_embedding(3, 256)
                .as_slice()
                .iter()
                .all(|v| (-1.0..1.0).contains(v))
        );
    }

    #[test]
    fn test_clustered_embeddings_are_close() {
        let a = generate_clustered_embedding(0, 1, FIXTURE_DIM);
        let b = generate_clustered_embedding(0, 2, FIXTURE_DIM);
        let sim = cosine_similarity(a.as_slice(), b.as_slice()).unwrap();
        assert!(sim > 0.8, "clustered similarity too low: {sim}");
    }

    #[test]
    fn test_builder_defaults() {
        let store = SignalStoreBuilder::new().build();
        assert_eq!(store.chunk_count(), 0);
    }
}
