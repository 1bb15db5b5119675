use crate::constants::DEFAULT_COLD_START_THRESHOLD;

use super::types::{ConfidenceThresholds, ScoreMapping};

#[derive(Debug, Clone, Copy, PartialEq)]
/// Policy knobs of the [`RelevanceScorer`](super::RelevanceScorer).
pub struct ScorerConfig {
    /// Saved examples needed before the learned phase applies. Default: `10`.
    pub cold_start_threshold: usize,
    /// Confidence bucket boundaries. Default: `0.40` / `0.65`.
    pub confidence: ConfidenceThresholds,
    /// Cosine-to-score mapping. Default: [`ScoreMapping::Clamped`].
    pub mapping: ScoreMapping,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            cold_start_threshold: DEFAULT_COLD_START_THRESHOLD,
            confidence: ConfidenceThresholds::default(),
            mapping: ScoreMapping::default(),
        }
    }
}

impl ScorerConfig {
    pub fn with_cold_start_threshold(cold_start_threshold: usize) -> Self {
        Self {
            cold_start_threshold,
            ..Default::default()
        }
    }
}
