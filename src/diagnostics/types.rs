use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_VERDICT_PROMISING_RATIO, DEFAULT_VERDICT_WORKING_RATIO};
use crate::reporting::ScoreDistribution;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Summary of a set of similarities.
pub struct SimilarityStats {
    pub avg: f32,
    pub min: f32,
    pub max: f32,
    pub count: usize,
}

impl SimilarityStats {
    /// Returns `None` for an empty input.
    pub fn from_values<I: IntoIterator<Item = f32>>(values: I) -> Option<Self> {
        let mut sum = 0.0f64;
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut count = 0usize;

        for value in values {
            sum += f64::from(value);
            min = min.min(value);
            max = max.max(value);
            count += 1;
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            avg: (sum / count as f64) as f32,
            min,
            max,
            count,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Similarity of a random corpus sample to the centroid: the control group.
pub struct RandomBaseline {
    #[serde(flatten)]
    pub stats: SimilarityStats,
    pub sample_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Interpretation of the positive-vs-random separation.
pub enum Verdict {
    WorkingWell,
    NeedsMoreData,
    NotWorking,
}

impl Verdict {
    pub fn interpretation(&self) -> &'static str {
        match self {
            Verdict::WorkingWell => {
                "Working well: saved content sits clearly closer to the centroid than random content"
            }
            Verdict::NeedsMoreData => {
                "Needs more data: saved content is only slightly closer to the centroid than random content"
            }
            Verdict::NotWorking => {
                "Not working: the centroid does not separate saved content from random content"
            }
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::WorkingWell => write!(f, "working well"),
            Verdict::NeedsMoreData => write!(f, "needs more data"),
            Verdict::NotWorking => write!(f, "not working"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Minimum separation ratios for each verdict tier.
pub struct VerdictThresholds {
    /// Ratio at or above which the model is working well. Default: `1.2`.
    pub working: f32,
    /// Ratio at or above which the model needs more data. Default: `1.05`.
    pub promising: f32,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            working: DEFAULT_VERDICT_WORKING_RATIO,
            promising: DEFAULT_VERDICT_PROMISING_RATIO,
        }
    }
}

impl VerdictThresholds {
    pub fn verdict(&self, ratio: f32) -> Verdict {
        if ratio >= self.working {
            Verdict::WorkingWell
        } else if ratio >= self.promising {
            Verdict::NeedsMoreData
        } else {
            Verdict::NotWorking
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Positive-vs-random comparison and its verdict.
pub struct Separation {
    /// `positive.avg / random.avg`. `None` when the random average is not positive.
    pub ratio: Option<f32>,
    pub verdict: Verdict,
    pub interpretation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Diagnostics for a user with at least one saved embedding.
pub struct ValidationSummary {
    /// Saved chunks the user has in total.
    pub saved_chunk_count: usize,
    /// Saved embeddings actually analysed (capped).
    pub sampled_saved_count: usize,
    /// `None` with fewer than two sampled embeddings.
    pub pairwise_similarity: Option<SimilarityStats>,
    pub positive_to_centroid: SimilarityStats,
    /// `None` when the corpus sample was empty.
    pub random_to_centroid: Option<RandomBaseline>,
    pub centroid_norm: f32,
    pub centroid_collapsed: bool,
    /// `None` without a random baseline.
    pub separation: Option<Separation>,
}

#[derive(Debug, Clone, PartialEq)]
/// Answer to "is the learned model discriminative?".
pub enum ValidationReport {
    /// The user has no saved embeddings yet. Render as "not enough data yet".
    NoSavedChunks,
    Ready(Box<ValidationSummary>),
}

impl ValidationReport {
    pub fn has_saved_chunks(&self) -> bool {
        matches!(self, ValidationReport::Ready(_))
    }

    pub fn summary(&self) -> Option<&ValidationSummary> {
        match self {
            ValidationReport::Ready(summary) => Some(&**summary),
            ValidationReport::NoSavedChunks => None,
        }
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.summary()
            .and_then(|s| s.separation.as_ref())
            .map(|s| s.verdict)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadyWire<'a> {
    has_saved_chunks: bool,
    #[serde(flatten)]
    summary: &'a ValidationSummary,
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValidationReport::NoSavedChunks => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("hasSavedChunks", &false)?;
                map.end()
            }
            ValidationReport::Ready(summary) => ReadyWire {
                has_saved_chunks: true,
                summary,
            }
            .serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Distribution of mapped centroid similarity for saved and random samples.
pub struct SimilarityHistogram {
    pub saved: ScoreDistribution,
    pub random: ScoreDistribution,
}
