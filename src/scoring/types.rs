use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONFIDENCE_HIGH, DEFAULT_CONFIDENCE_MEDIUM};
use crate::model::ChunkId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Which scoring path applies, derived from the saved-example count.
pub enum LearningPhase {
    /// Too few saved examples for a trustworthy centroid.
    ColdStart,
    /// Centroid similarity drives the score.
    Learned,
}

impl LearningPhase {
    /// `ColdStart` below `threshold` saved examples, `Learned` at or above it.
    pub fn from_saved_count(saved_count: usize, threshold: usize) -> Self {
        if saved_count < threshold {
            LearningPhase::ColdStart
        } else {
            LearningPhase::Learned
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LearningPhase::ColdStart => "cold-start",
            LearningPhase::Learned => "learned",
        }
    }
}

impl std::fmt::Display for LearningPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Confidence bucket of a relevance score.
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Low => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Lower bounds (inclusive) of the medium and high confidence buckets.
pub struct ConfidenceThresholds {
    pub medium: f32,
    pub high: f32,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            medium: DEFAULT_CONFIDENCE_MEDIUM,
            high: DEFAULT_CONFIDENCE_HIGH,
        }
    }
}

impl ConfidenceThresholds {
    pub fn new(medium: f32, high: f32) -> Self {
        Self { medium, high }
    }

    /// `score < medium` is low, `medium <= score < high` is medium, otherwise high.
    /// NaN classifies as low.
    pub fn classify(&self, score: f32) -> Confidence {
        if !(score >= self.medium) {
            Confidence::Low
        } else if score < self.high {
            Confidence::Medium
        } else {
            Confidence::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Maps cosine similarity (`[-1, 1]`) into a relevance score (`[0, 1]`).
///
/// Applied to every similarity that becomes a score or lands in a histogram, so the two
/// never disagree.
pub enum ScoreMapping {
    /// Raw cosine, negatives clamped to zero. Keeps the historical confidence thresholds
    /// meaningful.
    #[default]
    Clamped,
    /// `(cos + 1) / 2`.
    Rescaled,
}

impl ScoreMapping {
    #[inline]
    pub fn apply(&self, cosine: f32) -> f32 {
        match self {
            ScoreMapping::Clamped => cosine.clamp(0.0, 1.0),
            ScoreMapping::Rescaled => ((cosine + 1.0) / 2.0).clamp(0.0, 1.0),
        }
    }
}

impl std::str::FromStr for ScoreMapping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clamped" | "raw" => Ok(Self::Clamped),
            "rescaled" | "shifted" => Ok(Self::Rescaled),
            _ => Err(format!("Unknown score mapping: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Relevance of one chunk for one user, snapshotted at presentation time.
pub struct RelevanceScore {
    pub chunk_id: ChunkId,
    /// Score in `[0, 1]`.
    pub score: f32,
    pub confidence: Confidence,
    pub phase: LearningPhase,
    /// Saved examples the phase decision was based on.
    pub saved_count: usize,
}

impl RelevanceScore {
    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match (self.phase, self.confidence) {
            (LearningPhase::ColdStart, _) => "COLD_START",
            (LearningPhase::Learned, Confidence::High) => "LEARNED_HIGH",
            (LearningPhase::Learned, Confidence::Medium) => "LEARNED_MEDIUM",
            (LearningPhase::Learned, Confidence::Low) => "LEARNED_LOW",
        }
    }
}

impl std::fmt::Display for RelevanceScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "chunk {} {:.4} ({}, {})",
            self.chunk_id, self.score, self.confidence, self.phase
        )
    }
}
