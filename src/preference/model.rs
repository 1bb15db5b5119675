use serde::Serialize;
use tracing::{debug, warn};

use super::error::{PreferenceError, PreferenceResult};
use crate::model::{Embedding, FeedbackLabel, LabeledChunk};
use crate::vector::{VectorResult, centroid, cosine_similarity, l2_norm};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Mean of a set of saved embeddings.
pub struct PreferenceCentroid {
    vector: Embedding,
    source_count: usize,
}

impl PreferenceCentroid {
    /// Builds the centroid of `saved`.
    pub fn build(saved: &[Embedding]) -> PreferenceResult<Self> {
        if saved.is_empty() {
            return Err(PreferenceError::InsufficientData);
        }

        let vector = Embedding::new(centroid(saved)?);
        Ok(Self {
            vector,
            source_count: saved.len(),
        })
    }

    pub fn vector(&self) -> &Embedding {
        &self.vector
    }

    /// Number of embeddings averaged into this centroid.
    pub fn source_count(&self) -> usize {
        self.source_count
    }

    pub fn dim(&self) -> usize {
        self.vector.dim()
    }

    pub fn norm(&self) -> f32 {
        self.vector.norm()
    }

    /// Returns `true` if the norm is below `epsilon`, i.e. the saved set cancels itself out.
    pub fn is_collapsed(&self, epsilon: f32) -> bool {
        self.norm() < epsilon
    }

    /// Cosine similarity of `embedding` to this centroid.
    pub fn similarity(&self, embedding: &Embedding) -> VectorResult<f32> {
        cosine_similarity(embedding.as_slice(), self.vector.as_slice())
    }
}

/// Builds the preference centroid from saved embeddings.
pub fn build_centroid(saved: &[Embedding]) -> PreferenceResult<PreferenceCentroid> {
    PreferenceCentroid::build(saved)
}

/// Euclidean norm of the centroid. Diagnostic only.
pub fn centroid_norm(centroid: &PreferenceCentroid) -> f32 {
    l2_norm(centroid.vector.as_slice())
}

pub fn similarity_to_centroid(
    embedding: &Embedding,
    centroid: &PreferenceCentroid,
) -> VectorResult<f32> {
    centroid.similarity(embedding)
}

#[derive(Debug, Clone)]
/// Centroid built from a user's labeled chunks.
pub struct PreferenceModel {
    centroid: PreferenceCentroid,
    saved_without_embedding: usize,
}

impl PreferenceModel {
    /// Builds the model from all `Saved` chunks that carry an embedding.
    ///
    /// Saved chunks without an embedding are excluded and counted; they are logged because
    /// they silently weaken the model.
    pub fn from_chunks(chunks: &[LabeledChunk]) -> PreferenceResult<Self> {
        let mut saved_without_embedding = 0usize;
        let saved: Vec<Embedding> = chunks
            .iter()
            .filter(|c| c.label == FeedbackLabel::Saved)
            .filter_map(|c| match &c.embedding {
                Some(e) => Some(e.clone()),
                None => {
                    saved_without_embedding += 1;
                    None
                }
            })
            .collect();

        if saved_without_embedding > 0 {
            warn!(
                saved_without_embedding,
                "Saved chunks without embeddings excluded from preference centroid"
            );
        }

        let centroid = PreferenceCentroid::build(&saved)?;

        debug!(
            saved = centroid.source_count(),
            norm = centroid.norm(),
            "Built preference model"
        );

        Ok(Self {
            centroid,
            saved_without_embedding,
        })
    }

    pub fn centroid(&self) -> &PreferenceCentroid {
        &self.centroid
    }

    pub fn saved_count(&self) -> usize {
        self.centroid.source_count()
    }

    pub fn saved_without_embedding(&self) -> usize {
        self.saved_without_embedding
    }

    pub fn score(&self, embedding: &Embedding) -> VectorResult<f32> {
        self.centroid.similarity(embedding)
    }
}
