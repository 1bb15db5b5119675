//! Cold-start score sources.
//!
//! While a user has too few saved examples the centroid is not trusted. Scores then come
//! from a [`ColdStartScorer`], typically an external relevance judgment. The built-ins here
//! cover tests and deployments without such a collaborator.

use crate::model::{ChunkId, Embedding, UserId};

use super::error::ScoringResult;

/// Source of scores during the cold-start phase.
///
/// Implementations must return a value in `[0, 1]`; anything else is rejected by the scorer.
pub trait ColdStartScorer: Send + Sync {
    fn cold_start_score(
        &self,
        user_id: UserId,
        chunk_id: ChunkId,
        candidate: &Embedding,
    ) -> ScoringResult<f32>;

    /// Name used in logs and errors.
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default)]
/// Deterministic, roughly uniform scores in `[0, 1)` keyed by user and chunk.
///
/// Spreads early candidates across the whole range so the user sees a wide sample.
pub struct UniformColdStart {
    seed: u64,
}

impl UniformColdStart {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Maps `(seed, user, chunk)` to `[0, 1)` using the top 53 bits of a blake3 hash.
    pub fn score_for(&self, user_id: UserId, chunk_id: ChunkId) -> f32 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.seed.to_le_bytes());
        hasher.update(&user_id.to_le_bytes());
        hasher.update(&chunk_id.to_le_bytes());
        let hash = hasher.finalize();

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        let bits = u64::from_le_bytes(bytes) >> 11;

        let score = (bits as f64 / (1u64 << 53) as f64) as f32;
        // f64 -> f32 rounding can reach 1.0
        score.min(1.0 - f32::EPSILON)
    }
}

impl ColdStartScorer for UniformColdStart {
    fn cold_start_score(
        &self,
        user_id: UserId,
        chunk_id: ChunkId,
        _candidate: &Embedding,
    ) -> ScoringResult<f32> {
        Ok(self.score_for(user_id, chunk_id))
    }

    fn name(&self) -> &str {
        "uniform"
    }
}

#[derive(Debug, Clone, Copy)]
/// Returns the same score for every candidate.
pub struct FixedColdStart {
    score: f32,
}

impl FixedColdStart {
    pub fn new(score: f32) -> Self {
        Self { score }
    }
}

impl ColdStartScorer for FixedColdStart {
    fn cold_start_score(
        &self,
        _user_id: UserId,
        _chunk_id: ChunkId,
        _candidate: &Embedding,
    ) -> ScoringResult<f32> {
        Ok(self.score)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
