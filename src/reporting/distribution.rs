use serde::{Deserialize, Serialize};

use crate::constants::{DECILE_EDGES, DECILE_LABELS};
use crate::scoring::{Confidence, ConfidenceThresholds};
use crate::vector::math::bucket_counts;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One labelled histogram bucket.
pub struct DistributionBucket {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Ten decile buckets, `"0-10%"` through `"90-100%"`, always all present and in order.
pub struct ScoreDistribution {
    buckets: Vec<DistributionBucket>,
}

impl ScoreDistribution {
    pub fn buckets(&self) -> &[DistributionBucket] {
        &self.buckets
    }

    pub fn counts(&self) -> Vec<usize> {
        self.buckets.iter().map(|b| b.count).collect()
    }

    /// Number of scores across all buckets.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    pub fn count_for(&self, label: &str) -> Option<usize> {
        self.buckets
            .iter()
            .find(|b| b.label == label)
            .map(|b| b.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.buckets.iter().map(|b| (b.label.as_str(), b.count))
    }
}

/// Buckets `scores` into the ten decile buckets.
///
/// Scores below zero count toward `"0-10%"`, scores above one toward `"90-100%"`.
pub fn distribution(scores: &[f32]) -> ScoreDistribution {
    let counts = bucket_counts(scores, &DECILE_EDGES);

    ScoreDistribution {
        buckets: DECILE_LABELS
            .iter()
            .zip(counts)
            .map(|(label, count)| DistributionBucket {
                label: (*label).to_string(),
                count,
            })
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Scores per confidence bucket.
pub struct ConfidenceBreakdown {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl ConfidenceBreakdown {
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }

    pub fn get(&self, confidence: Confidence) -> usize {
        match confidence {
            Confidence::Low => self.low,
            Confidence::Medium => self.medium,
            Confidence::High => self.high,
        }
    }
}

pub fn confidence_breakdown(
    scores: &[f32],
    thresholds: &ConfidenceThresholds,
) -> ConfidenceBreakdown {
    scores
        .iter()
        .fold(ConfidenceBreakdown::default(), |mut acc, &score| {
            match thresholds.classify(score) {
                Confidence::Low => acc.low += 1,
                Confidence::Medium => acc.medium += 1,
                Confidence::High => acc.high += 1,
            }
            acc
        })
}
