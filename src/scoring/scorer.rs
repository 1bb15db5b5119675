use std::cmp::Ordering;
use tracing::{debug, warn};

use crate::model::{ChunkId, Embedding, UserId};
use crate::preference::PreferenceCentroid;

use super::cold_start::ColdStartScorer;
use super::config::ScorerConfig;
use super::error::{ScoringError, ScoringResult};
use super::types::{Confidence, LearningPhase, RelevanceScore};

#[derive(Debug, Clone, Copy)]
/// Everything needed to score one candidate for one user.
pub struct ScoreRequest<'a> {
    pub user_id: UserId,
    pub chunk_id: ChunkId,
    /// `None` when the chunk has no embedding yet.
    pub candidate: Option<&'a Embedding>,
    /// Saved examples the user has accumulated; selects the phase.
    pub saved_count: usize,
    /// Saved embeddings. Only read in the learned phase.
    pub saved: &'a [Embedding],
}

#[derive(Debug, Clone, Default)]
/// Output of [`RelevanceScorer::rank`].
pub struct RankedCandidates {
    /// Scored candidates, best first.
    pub scored: Vec<RelevanceScore>,
    /// Candidates rejected for lacking an embedding.
    pub missing_embeddings: Vec<ChunkId>,
}

#[derive(Debug, Clone, Default)]
/// Scores candidates against the user's preference centroid, or via the cold-start
/// collaborator while the saved set is too small.
pub struct RelevanceScorer {
    config: ScorerConfig,
}

impl RelevanceScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn phase_for(&self, saved_count: usize) -> LearningPhase {
        LearningPhase::from_saved_count(saved_count, self.config.cold_start_threshold)
    }

    pub fn classify_confidence(&self, score: f32) -> Confidence {
        self.config.confidence.classify(score)
    }

    /// Scores one candidate.
    ///
    /// A missing candidate embedding is rejected in both phases. In the cold-start phase the
    /// saved set is never read, so an unusable centroid cannot fail the call.
    pub fn score(
        &self,
        request: &ScoreRequest<'_>,
        cold_start: &dyn ColdStartScorer,
    ) -> ScoringResult<RelevanceScore> {
        let candidate = request.candidate.ok_or(ScoringError::MissingEmbedding {
            chunk_id: request.chunk_id,
        })?;

        let phase = self.phase_for(request.saved_count);
        let score = match phase {
            LearningPhase::ColdStart => self.cold_start_score(request, candidate, cold_start)?,
            LearningPhase::Learned => {
                let centroid = PreferenceCentroid::build(request.saved)?;
                self.similarity_score(candidate, &centroid)?
            }
        };

        let scored = self.finish(request.chunk_id, score, phase, request.saved_count);

        debug!(
            chunk_id = request.chunk_id,
            score = scored.score,
            phase = %scored.phase,
            confidence = %scored.confidence,
            "Scored candidate"
        );

        Ok(scored)
    }

    /// Maps the candidate's cosine similarity to `centroid` into `[0, 1]`.
    ///
    /// With [`ScoreMapping::Clamped`](super::ScoreMapping::Clamped) this relies on
    /// natural-language embeddings rarely having negative cosine similarity; a new embedding
    /// source must re-validate that before trusting the confidence thresholds.
    pub fn similarity_score(
        &self,
        candidate: &Embedding,
        centroid: &PreferenceCentroid,
    ) -> ScoringResult<f32> {
        let cosine = centroid.similarity(candidate)?;
        Ok(self.config.mapping.apply(cosine))
    }

    /// Scores a batch and sorts it best first.
    ///
    /// The centroid is built once for the whole batch. Candidates without an embedding are
    /// reported in [`RankedCandidates::missing_embeddings`] instead of being scored.
    pub fn rank(
        &self,
        user_id: UserId,
        candidates: &[(ChunkId, Option<Embedding>)],
        saved: &[Embedding],
        cold_start: &dyn ColdStartScorer,
    ) -> ScoringResult<RankedCandidates> {
        let saved_count = saved.len();
        let phase = self.phase_for(saved_count);
        let centroid = match phase {
            LearningPhase::Learned => Some(PreferenceCentroid::build(saved)?),
            LearningPhase::ColdStart => None,
        };

        let mut ranked = RankedCandidates::default();

        for (chunk_id, embedding) in candidates {
            let Some(candidate) = embedding else {
                warn!(chunk_id, "Rejecting candidate: missing embedding");
                ranked.missing_embeddings.push(*chunk_id);
                continue;
            };

            let score = match &centroid {
                Some(centroid) => self.similarity_score(candidate, centroid)?,
                None => {
                    let request = ScoreRequest {
                        user_id,
                        chunk_id: *chunk_id,
                        candidate: Some(candidate),
                        saved_count,
                        saved,
                    };
                    self.cold_start_score(&request, candidate, cold_start)?
                }
            };

            ranked
                .scored
                .push(self.finish(*chunk_id, score, phase, saved_count));
        }

        ranked
            .scored
            .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        Ok(ranked)
    }

    fn cold_start_score(
        &self,
        request: &ScoreRequest<'_>,
        candidate: &Embedding,
        cold_start: &dyn ColdStartScorer,
    ) -> ScoringResult<f32> {
        let score = cold_start.cold_start_score(request.user_id, request.chunk_id, candidate)?;

        if !(0.0..=1.0).contains(&score) {
            return Err(ScoringError::InvalidColdStartScore {
                scorer: cold_start.name().to_string(),
                chunk_id: request.chunk_id,
                score,
            });
        }

        Ok(score)
    }

    fn finish(
        &self,
        chunk_id: ChunkId,
        score: f32,
        phase: LearningPhase,
        saved_count: usize,
    ) -> RelevanceScore {
        RelevanceScore {
            chunk_id,
            score,
            confidence: self.classify_confidence(score),
            phase,
            saved_count,
        }
    }
}
