use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error, instrument, warn};

use crate::config::Config;
use crate::diagnostics::{self, EmbeddingCoverage, SimilarityHistogram, ValidationReport};
use crate::model::{ChunkId, UserId};
use crate::reporting::{self, ConfidenceBreakdown, ScoreDistribution};
use crate::scoring::{
    ColdStartScorer, LearningPhase, RelevanceScore, RelevanceScorer, ScoreRequest, ScoringError,
    UniformColdStart,
};
use crate::store::SignalStore;
use crate::vector::VectorError;

use super::error::{EngineError, EngineResult};

/// Scores candidates and reports diagnostics for one [`SignalStore`].
pub struct RelevanceEngine<S: SignalStore> {
    config: Config,
    store: S,
    scorer: RelevanceScorer,
    cold_start: Arc<dyn ColdStartScorer>,
    missing_embedding_rejections: AtomicU64,
}

impl<S: SignalStore> std::fmt::Debug for RelevanceEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelevanceEngine")
            .field("config", &self.config)
            .field("cold_start", &self.cold_start.name())
            .field(
                "missing_embedding_rejections",
                &self.missing_embedding_rejections(),
            )
            .finish_non_exhaustive()
    }
}

impl<S: SignalStore> RelevanceEngine<S> {
    /// Creates an engine with the [`UniformColdStart`] collaborator.
    pub fn new(config: Config, store: S) -> Self {
        Self::with_cold_start(config, store, Arc::new(UniformColdStart::default()))
    }

    pub fn with_cold_start(config: Config, store: S, cold_start: Arc<dyn ColdStartScorer>) -> Self {
        Self {
            scorer: RelevanceScorer::new(config.scorer),
            config,
            store,
            cold_start,
            missing_embedding_rejections: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scorer(&self) -> &RelevanceScorer {
        &self.scorer
    }

    /// Candidates rejected for lacking an embedding since the engine was created.
    pub fn missing_embedding_rejections(&self) -> u64 {
        self.missing_embedding_rejections.load(Ordering::Relaxed)
    }

    /// Scores `chunk_id` for `user_id` against the user's current saved set.
    ///
    /// Saved embeddings are only fetched in the learned phase.
    #[instrument(skip(self))]
    pub async fn score_candidate(
        &self,
        user_id: UserId,
        chunk_id: ChunkId,
    ) -> EngineResult<RelevanceScore> {
        let saved_count = self.store.count_saved_for_user(user_id).await?;

        // The saved set may shrink between the two reads; score against what was fetched.
        let (saved_count, saved) = match self.scorer.phase_for(saved_count) {
            LearningPhase::ColdStart => (saved_count, Vec::new()),
            LearningPhase::Learned => {
                let saved = self.store.fetch_saved_embeddings(user_id).await?;
                (saved.len(), saved)
            }
        };

        let candidate = self.store.fetch_candidate_embedding(chunk_id).await?;

        let request = ScoreRequest {
            user_id,
            chunk_id,
            candidate: candidate.as_ref(),
            saved_count,
            saved: &saved,
        };

        self.scorer
            .score(&request, self.cold_start.as_ref())
            .map_err(|e| self.observe_scoring_error(user_id, chunk_id, e))
    }

    /// Returns the snapshot recorded when the chunk was first presented, scoring and recording
    /// one if there is none.
    #[instrument(skip(self))]
    pub async fn present_candidate(
        &self,
        user_id: UserId,
        chunk_id: ChunkId,
    ) -> EngineResult<RelevanceScore> {
        if let Some(existing) = self.store.fetch_score(user_id, chunk_id).await? {
            debug!(score = existing.score, "Returning recorded score snapshot");
            return Ok(existing);
        }

        let scored = self.score_candidate(user_id, chunk_id).await?;
        self.store.record_score(user_id, scored.clone()).await?;
        debug!(score = scored.score, phase = %scored.phase, "Recorded score snapshot");

        Ok(scored)
    }

    /// Compares the user's saved embeddings with a random corpus sample.
    #[instrument(skip(self))]
    pub async fn validation_report(&self, user_id: UserId) -> EngineResult<ValidationReport> {
        let saved = self.store.fetch_saved_embeddings(user_id).await?;
        if saved.is_empty() {
            return Ok(ValidationReport::NoSavedChunks);
        }

        let random = self
            .store
            .fetch_random_embedding_sample(self.config.validation.random_sample)
            .await?;

        let report = diagnostics::validate(saved.len(), &saved, &random, &self.config.validation)
            .inspect_err(|e| error!(user_id, error = %e, "Validation report failed"))?;

        Ok(report)
    }

    /// Mapped centroid similarity histograms for saved and random samples.
    ///
    /// `None` when the user has no saved embeddings.
    #[instrument(skip(self))]
    pub async fn similarity_histogram(
        &self,
        user_id: UserId,
    ) -> EngineResult<Option<SimilarityHistogram>> {
        let saved = self.store.fetch_saved_embeddings(user_id).await?;
        if saved.is_empty() {
            return Ok(None);
        }

        let random = self
            .store
            .fetch_random_embedding_sample(self.config.validation.random_sample)
            .await?;

        Ok(diagnostics::similarity_histogram(
            &saved,
            &random,
            self.config.scorer.mapping,
        )?)
    }

    /// Embedding coverage over every chunk the user has been shown.
    #[instrument(skip(self))]
    pub async fn embedding_coverage(&self, user_id: UserId) -> EngineResult<EmbeddingCoverage> {
        let chunks = self.store.fetch_labeled_chunks(user_id).await?;
        Ok(EmbeddingCoverage::from_chunks(&chunks, self.config.dims))
    }

    /// Decile distribution of already-computed scores.
    pub fn score_distribution(&self, scores: &[f32]) -> ScoreDistribution {
        reporting::distribution(scores)
    }

    /// Low/Medium/High counts using the engine's confidence thresholds.
    pub fn confidence_breakdown(&self, scores: &[f32]) -> ConfidenceBreakdown {
        reporting::confidence_breakdown(scores, &self.config.scorer.confidence)
    }

    fn observe_scoring_error(
        &self,
        user_id: UserId,
        chunk_id: ChunkId,
        err: ScoringError,
    ) -> EngineError {
        if matches!(err, ScoringError::MissingEmbedding { .. }) {
            let total = self
                .missing_embedding_rejections
                .fetch_add(1, Ordering::Relaxed)
                + 1;
            warn!(
                user_id,
                chunk_id,
                rejections = total,
                "Rejecting candidate: missing embedding"
            );
        } else if err.is_dimension_mismatch() {
            error!(user_id, chunk_id, error = %err, "Embedding dimension mismatch");
        } else if matches!(err, ScoringError::Vector(VectorError::NonFinite { .. })) {
            error!(user_id, chunk_id, error = %err, "Non-finite embedding");
        }
        EngineError::Scoring(err)
    }
}
