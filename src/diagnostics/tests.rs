use super::*;
use crate::constants::DimConfig;
use crate::model::{Embedding, FeedbackLabel, LabeledChunk};
use crate::preference::build_centroid;
use crate::scoring::ScoreMapping;
use crate::vector::VectorError;

const DIM: usize = 16;

fn axis(i: usize, scale: f32) -> Vec<f32> {
    let mut v = vec![0.0; DIM];
    v[i] = scale;
    v
}

/// Tight cluster around axis 0, each point nudged along a different off-axis direction.
fn clustered(n: usize) -> Vec<Embedding> {
    (0..n)
        .map(|i| {
            let mut v = axis(0, 1.0);
            v[1 + i % (DIM - 1)] = 0.05;
            Embedding::new(v)
        })
        .collect()
}

/// Points along the off-axis directions, nearly orthogonal to the cluster.
fn scattered(n: usize) -> Vec<Embedding> {
    (0..n)
        .map(|i| Embedding::new(axis(1 + i % (DIM - 1), 1.0)))
        .collect()
}

fn stats(avg: f32) -> SimilarityStats {
    SimilarityStats {
        avg,
        min: avg,
        max: avg,
        count: 1,
    }
}

#[test]
fn test_similarity_stats_from_values() {
    let s = SimilarityStats::from_values([0.2, 0.4, 0.9]).unwrap();
    assert!((s.avg - 0.5).abs() < 1e-6);
    assert_eq!(s.min, 0.2);
    assert_eq!(s.max, 0.9);
    assert_eq!(s.count, 3);
    assert!(SimilarityStats::from_values(Vec::<f32>::new()).is_none());
}

#[test]
fn test_pairwise_similarity_all_pairs() {
    let saved = vec![
        Embedding::new(vec![1.0, 0.0]),
        Embedding::new(vec![0.0, 1.0]),
        Embedding::new(vec![1.0, 0.0]),
    ];
    let s = pairwise_similarity(&saved).unwrap().unwrap();
    assert_eq!(s.count, 3);
    assert_eq!(s.min, 0.0);
    assert!((s.max - 1.0).abs() < 1e-6);
    assert!((s.avg - 1.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_pairwise_similarity_needs_two() {
    let one = vec![Embedding::new(vec![1.0, 0.0])];
    assert_eq!(pairwise_similarity(&one).unwrap(), None);
    assert_eq!(pairwise_similarity(&[]).unwrap(), None);
}

#[test]
fn test_positive_and_random_to_centroid() {
    let saved = clustered(10);
    let centroid = build_centroid(&saved).unwrap();

    let positive = positive_to_centroid(&saved, &centroid).unwrap().unwrap();
    assert!(positive.min > 0.99);

    let random = random_to_centroid(&scattered(5), &centroid).unwrap().unwrap();
    assert_eq!(random.sample_size, 5);
    assert!(random.stats.avg < 0.05);

    assert_eq!(random_to_centroid(&[], &centroid).unwrap(), None);
}

#[test]
fn test_verdict_tiers() {
    let thresholds = VerdictThresholds::default();
    assert_eq!(thresholds.verdict(1.2), Verdict::WorkingWell);
    assert_eq!(thresholds.verdict(3.0), Verdict::WorkingWell);
    assert_eq!(thresholds.verdict(1.19), Verdict::NeedsMoreData);
    assert_eq!(thresholds.verdict(1.05), Verdict::NeedsMoreData);
    assert_eq!(thresholds.verdict(1.04), Verdict::NotWorking);
    assert_eq!(thresholds.verdict(0.5), Verdict::NotWorking);
}

#[test]
fn test_separation_ratio() {
    let thresholds = VerdictThresholds::default();

    let sep = separation(&stats(0.8), &stats(0.5), &thresholds);
    assert!((sep.ratio.unwrap() - 1.6).abs() < 1e-6);
    assert_eq!(sep.verdict, Verdict::WorkingWell);

    let sep = separation(&stats(0.55), &stats(0.5), &thresholds);
    assert_eq!(sep.verdict, Verdict::NeedsMoreData);
    assert!(sep.interpretation.starts_with("Needs more data"));

    let sep = separation(&stats(0.5), &stats(0.5), &thresholds);
    assert_eq!(sep.verdict, Verdict::NotWorking);
}

#[test]
fn test_separation_with_non_positive_baseline() {
    let thresholds = VerdictThresholds::default();

    let sep = separation(&stats(0.7), &stats(-0.1), &thresholds);
    assert_eq!(sep.ratio, None);
    assert_eq!(sep.verdict, Verdict::WorkingWell);

    let sep = separation(&stats(0.0), &stats(0.0), &thresholds);
    assert_eq!(sep.verdict, Verdict::NotWorking);
}

#[test]
fn test_validate_zero_saved_is_not_an_error() {
    let report = validate(0, &[], &scattered(10), &ValidationConfig::default()).unwrap();
    assert_eq!(report, ValidationReport::NoSavedChunks);
    assert!(!report.has_saved_chunks());
    assert_eq!(report.verdict(), None);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json, serde_json::json!({ "hasSavedChunks": false }));
}

#[test]
fn test_validate_clustered_saved_is_working_well() {
    let saved = clustered(50);
    let random = scattered(50);

    let report = validate(50, &saved, &random, &ValidationConfig::default()).unwrap();
    let summary = report.summary().unwrap();

    let pairwise = summary.pairwise_similarity.unwrap();
    assert_eq!(pairwise.count, 50 * 49 / 2);
    assert!(pairwise.min > 0.9);

    let baseline = summary.random_to_centroid.unwrap();
    assert_eq!(baseline.sample_size, 50);
    assert!(baseline.stats.avg <= 0.3);

    let sep = summary.separation.as_ref().unwrap();
    assert!(sep.ratio.unwrap() > 1.2);
    assert_eq!(report.verdict(), Some(Verdict::WorkingWell));
    assert!(!summary.centroid_collapsed);
}

#[test]
fn test_validate_indistinguishable_is_not_working() {
    let saved = scattered(15);
    let random = scattered(15);

    let report = validate(15, &saved, &random, &ValidationConfig::default()).unwrap();
    assert_eq!(report.verdict(), Some(Verdict::NotWorking));
}

#[test]
fn test_validate_caps_samples() {
    let saved = clustered(80);
    let random = scattered(70);

    let report = validate(80, &saved, &random, &ValidationConfig::default()).unwrap();
    let summary = report.summary().unwrap();

    assert_eq!(summary.saved_chunk_count, 80);
    assert_eq!(summary.sampled_saved_count, 50);
    assert_eq!(summary.positive_to_centroid.count, 50);
    assert_eq!(summary.random_to_centroid.unwrap().sample_size, 50);
}

#[test]
fn test_validate_without_random_sample() {
    let report = validate(3, &clustered(3), &[], &ValidationConfig::default()).unwrap();
    let summary = report.summary().unwrap();
    assert!(summary.random_to_centroid.is_none());
    assert!(summary.separation.is_none());
    assert_eq!(report.verdict(), None);
}

#[test]
fn test_validate_reports_collapsed_centroid() {
    let saved = vec![Embedding::new(axis(0, 1.0)), Embedding::new(axis(0, -1.0))];
    let report = validate(2, &saved, &scattered(4), &ValidationConfig::default()).unwrap();
    let summary = report.summary().unwrap();
    assert!(summary.centroid_collapsed);
    assert!(summary.centroid_norm < 1e-3);
}

#[test]
fn test_validate_dimension_mismatch_is_an_error() {
    let saved = clustered(3);
    let random = vec![Embedding::new(vec![1.0, 0.0])];
    let err = validate(3, &saved, &random, &ValidationConfig::default()).unwrap_err();
    assert!(matches!(err, DiagnosticsError::Vector(_)));
}

#[test]
fn test_validation_report_json_shape() {
    let report = validate(4, &clustered(4), &scattered(4), &ValidationConfig::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["hasSavedChunks"], true);
    assert_eq!(json["savedChunkCount"], 4);
    assert!(json["pairwiseSimilarity"]["avg"].is_number());
    assert!(json["positiveToCentroid"]["max"].is_number());
    assert_eq!(json["randomToCentroid"]["sampleSize"], 4);
    assert!(json["randomToCentroid"]["avg"].is_number());
    assert!(json["centroidNorm"].is_number());
    assert_eq!(json["separation"]["verdict"], "working-well");
}

#[test]
fn test_similarity_histogram_uses_mapping() {
    let saved = clustered(10);
    let random = vec![Embedding::new(axis(0, -1.0))];

    let clamped = similarity_histogram(&saved, &random, ScoreMapping::Clamped)
        .unwrap()
        .unwrap();
    assert_eq!(clamped.saved.count_for("90-100%"), Some(10));
    assert_eq!(clamped.random.count_for("0-10%"), Some(1));

    let rescaled = similarity_histogram(&saved, &random, ScoreMapping::Rescaled)
        .unwrap()
        .unwrap();
    assert_eq!(rescaled.saved.count_for("90-100%"), Some(10));
    assert_eq!(rescaled.random.count_for("0-10%"), Some(1));

    assert_eq!(
        similarity_histogram(&[], &random, ScoreMapping::Clamped).unwrap(),
        None
    );
}

#[test]
fn test_embedding_coverage() {
    let emb = |dim: usize| Some(Embedding::new(vec![0.5; dim]));
    let chunks = vec![
        LabeledChunk::new(1, FeedbackLabel::Saved, emb(4)),
        LabeledChunk::new(2, FeedbackLabel::Saved, None),
        LabeledChunk::new(3, FeedbackLabel::Skipped, None),
        LabeledChunk::new(4, FeedbackLabel::Unlabeled, emb(3)),
    ];

    let coverage = EmbeddingCoverage::from_chunks(&chunks, DimConfig::new(4));
    assert_eq!(coverage.total_chunks, 4);
    assert_eq!(coverage.with_embedding, 2);
    assert_eq!(coverage.missing_embedding, 2);
    assert_eq!(coverage.saved_total, 2);
    assert_eq!(coverage.saved_missing_embedding, 1);
    assert_eq!(coverage.dimension_mismatches, 1);
    assert!((coverage.missing_ratio() - 0.5).abs() < 1e-6);
    assert!(!coverage.is_healthy());
}

#[test]
fn test_embedding_coverage_empty() {
    let coverage = EmbeddingCoverage::from_chunks(&[], DimConfig::default());
    assert_eq!(coverage.missing_ratio(), 0.0);
    assert!(coverage.is_healthy());
}

#[test]
fn test_validate_non_finite_embedding_is_an_error() {
    let mut saved = clustered(5);
    let mut poisoned = axis(0, 1.0);
    poisoned[3] = f32::NAN;
    saved.push(Embedding::new(poisoned));

    let err = validate(6, &saved, &scattered(5), &ValidationConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        DiagnosticsError::Vector(VectorError::NonFinite { .. })
    ));
}

#[test]
fn test_non_finite_random_sample_is_an_error() {
    let saved = clustered(5);
    let centroid = build_centroid(&saved).unwrap();
    let random = vec![Embedding::new(vec![f32::NAN; DIM])];

    assert!(matches!(
        random_to_centroid(&random, &centroid),
        Err(VectorError::NonFinite { .. })
    ));
}
