use crate::constants::{
    COLLAPSED_CENTROID_NORM, DEFAULT_VALIDATION_RANDOM_SAMPLE, DEFAULT_VALIDATION_SAVED_SAMPLE,
};

use super::types::VerdictThresholds;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Sample caps and verdict policy for validation reports.
pub struct ValidationConfig {
    /// Max saved embeddings analysed. Default: `50`.
    pub saved_sample: usize,
    /// Max random corpus embeddings used as the baseline. Default: `50`.
    pub random_sample: usize,
    pub verdict: VerdictThresholds,
    /// Centroid norm below which the centroid is reported as collapsed.
    pub collapsed_norm: f32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            saved_sample: DEFAULT_VALIDATION_SAVED_SAMPLE,
            random_sample: DEFAULT_VALIDATION_RANDOM_SAMPLE,
            verdict: VerdictThresholds::default(),
            collapsed_norm: COLLAPSED_CENTROID_NORM,
        }
    }
}
