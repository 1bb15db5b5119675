use serde::Serialize;
use tracing::{debug, warn};

use crate::constants::{DimConfig, validate_embedding_dim};
use crate::model::{FeedbackLabel, LabeledChunk};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// How many of a user's chunks can take part in scoring.
///
/// Chunks saved without an embedding do not crash anything; they just silently fall out of
/// the centroid. This report makes that state visible.
pub struct EmbeddingCoverage {
    pub total_chunks: usize,
    pub with_embedding: usize,
    pub missing_embedding: usize,
    pub saved_total: usize,
    pub saved_missing_embedding: usize,
    /// Embeddings whose dimension differs from the configured one.
    pub dimension_mismatches: usize,
}

impl EmbeddingCoverage {
    pub fn from_chunks(chunks: &[LabeledChunk], dims: DimConfig) -> Self {
        let mut coverage = Self {
            total_chunks: chunks.len(),
            ..Default::default()
        };

        for chunk in chunks {
            let saved = chunk.label == FeedbackLabel::Saved;
            if saved {
                coverage.saved_total += 1;
            }

            match &chunk.embedding {
                Some(embedding) => {
                    coverage.with_embedding += 1;
                    if let Err(e) = validate_embedding_dim(embedding.dim(), dims.embedding_dim) {
                        debug!(chunk_id = chunk.chunk_id, error = %e, "Chunk embedding unusable");
                        coverage.dimension_mismatches += 1;
                    }
                }
                None => {
                    coverage.missing_embedding += 1;
                    if saved {
                        coverage.saved_missing_embedding += 1;
                    }
                }
            }
        }

        if !coverage.is_healthy() {
            warn!(
                missing = coverage.missing_embedding,
                saved_missing = coverage.saved_missing_embedding,
                dimension_mismatches = coverage.dimension_mismatches,
                "Embedding coverage degraded"
            );
        }

        coverage
    }

    /// Fraction of chunks without an embedding. `0.0` when there are no chunks.
    pub fn missing_ratio(&self) -> f32 {
        if self.total_chunks == 0 {
            0.0
        } else {
            self.missing_embedding as f32 / self.total_chunks as f32
        }
    }

    /// Returns `true` if every chunk has an embedding of the configured dimension.
    pub fn is_healthy(&self) -> bool {
        self.missing_embedding == 0 && self.dimension_mismatches == 0
    }
}
