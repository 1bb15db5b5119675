use tracing::{debug, info, warn};

use crate::model::Embedding;
use crate::preference::{PreferenceCentroid, centroid_norm};
use crate::reporting::distribution;
use crate::scoring::ScoreMapping;
use crate::vector::{VectorResult, cosine_similarity};

use super::config::ValidationConfig;
use super::error::DiagnosticsResult;
use super::types::{
    RandomBaseline, Separation, SimilarityHistogram, SimilarityStats, ValidationReport,
    ValidationSummary, Verdict, VerdictThresholds,
};

/// Similarity over all unordered pairs of `saved`.
///
/// Exact O(n²); callers cap `n`. `None` with fewer than two embeddings.
pub fn pairwise_similarity(saved: &[Embedding]) -> VectorResult<Option<SimilarityStats>> {
    let mut similarities = Vec::with_capacity(saved.len() * saved.len().saturating_sub(1) / 2);

    for (i, a) in saved.iter().enumerate() {
        for b in &saved[i + 1..] {
            similarities.push(cosine_similarity(a.as_slice(), b.as_slice())?);
        }
    }

    Ok(SimilarityStats::from_values(similarities))
}

/// Similarity of each saved embedding to a centroid built from the same set.
///
/// No leave-one-out: every point contributes to the centroid it is compared against, which
/// inflates the result slightly. The verdict ratios were tuned against this metric.
pub fn positive_to_centroid(
    saved: &[Embedding],
    centroid: &PreferenceCentroid,
) -> VectorResult<Option<SimilarityStats>> {
    let similarities = saved
        .iter()
        .map(|e| centroid.similarity(e))
        .collect::<VectorResult<Vec<f32>>>()?;

    Ok(SimilarityStats::from_values(similarities))
}

/// Similarity of a random corpus sample to the centroid. `None` for an empty sample.
pub fn random_to_centroid(
    sample: &[Embedding],
    centroid: &PreferenceCentroid,
) -> VectorResult<Option<RandomBaseline>> {
    let stats = positive_to_centroid(sample, centroid)?;
    Ok(stats.map(|stats| RandomBaseline {
        stats,
        sample_size: sample.len(),
    }))
}

/// Compares positive and random averages.
///
/// When the random average is not positive the ratio is undefined; the model then counts as
/// working only if the positive average is positive.
pub fn separation(
    positive: &SimilarityStats,
    random: &SimilarityStats,
    thresholds: &VerdictThresholds,
) -> Separation {
    let (ratio, verdict) = if random.avg > 0.0 {
        let ratio = positive.avg / random.avg;
        (Some(ratio), thresholds.verdict(ratio))
    } else if positive.avg > 0.0 {
        (None, Verdict::WorkingWell)
    } else {
        (None, Verdict::NotWorking)
    };

    Separation {
        ratio,
        verdict,
        interpretation: verdict.interpretation(),
    }
}

/// Builds the validation report.
///
/// `saved_count` is the user's total saved chunk count; `saved` and `random` are capped to
/// the configured sample sizes. An empty `saved` yields [`ValidationReport::NoSavedChunks`].
pub fn validate(
    saved_count: usize,
    saved: &[Embedding],
    random: &[Embedding],
    config: &ValidationConfig,
) -> DiagnosticsResult<ValidationReport> {
    let saved = &saved[..saved.len().min(config.saved_sample)];
    let random = &random[..random.len().min(config.random_sample)];

    if saved.is_empty() {
        debug!(saved_count, "No saved embeddings, validation not possible yet");
        return Ok(ValidationReport::NoSavedChunks);
    }

    let centroid = PreferenceCentroid::build(saved)?;
    let norm = centroid_norm(&centroid);
    let centroid_collapsed = centroid.is_collapsed(config.collapsed_norm);
    if centroid_collapsed {
        warn!(
            norm,
            sampled = saved.len(),
            "Preference centroid collapsed: saved embeddings cancel each other out"
        );
    }

    let pairwise = pairwise_similarity(saved)?;
    let positive = positive_to_centroid(saved, &centroid)?.unwrap_or(SimilarityStats {
        avg: 0.0,
        min: 0.0,
        max: 0.0,
        count: 0,
    });
    let baseline = random_to_centroid(random, &centroid)?;
    let comparison = baseline
        .as_ref()
        .map(|b| separation(&positive, &b.stats, &config.verdict));

    if let Some(sep) = &comparison {
        info!(
            saved_count,
            positive_avg = positive.avg,
            random_avg = baseline.as_ref().map(|b| b.stats.avg),
            ratio = sep.ratio,
            verdict = %sep.verdict,
            "Validation report computed"
        );
    }

    Ok(ValidationReport::Ready(Box::new(ValidationSummary {
        saved_chunk_count: saved_count.max(saved.len()),
        sampled_saved_count: saved.len(),
        pairwise_similarity: pairwise,
        positive_to_centroid: positive,
        random_to_centroid: baseline,
        centroid_norm: norm,
        centroid_collapsed,
        separation: comparison,
    })))
}

/// Histograms of mapped centroid similarity for saved and random samples.
///
/// Uses the same [`ScoreMapping`] as scoring so the histogram matches what scores would be.
/// `None` when there are no saved embeddings.
pub fn similarity_histogram(
    saved: &[Embedding],
    random: &[Embedding],
    mapping: ScoreMapping,
) -> DiagnosticsResult<Option<SimilarityHistogram>> {
    if saved.is_empty() {
        return Ok(None);
    }

    let centroid = PreferenceCentroid::build(saved)?;
    let mapped = |set: &[Embedding]| -> VectorResult<Vec<f32>> {
        set.iter()
            .map(|e| centroid.similarity(e).map(|s| mapping.apply(s)))
            .collect()
    };

    Ok(Some(SimilarityHistogram {
        saved: distribution(&mapped(saved)?),
        random: distribution(&mapped(random)?),
    }))
}
