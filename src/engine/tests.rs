use std::sync::Arc;

use super::*;
use crate::config::Config;
use crate::diagnostics::{ValidationReport, Verdict};
use crate::model::{ChunkId, Embedding, FeedbackAction, UserId};
use crate::scoring::{
    ColdStartScorer, Confidence, FixedColdStart, LearningPhase, ScoringError, ScoringResult,
};
use crate::vector::VectorError;
use crate::store::{MockSignalStore, SignalStore, StoreError};

const USER: u64 = 1;
const DIM: usize = 8;

fn axis(i: usize) -> Embedding {
    let mut v = vec![0.0; DIM];
    v[i] = 1.0;
    Embedding::new(v)
}

fn near_axis0(i: usize) -> Embedding {
    let mut v = vec![0.0; DIM];
    v[0] = 1.0;
    v[1 + i % (DIM - 1)] = 0.05;
    Embedding::new(v)
}

/// Saves `n` chunks (ids `1..=n`) clustered around axis 0.
fn store_with_saved(n: u64) -> MockSignalStore {
    let store = MockSignalStore::new();
    for id in 1..=n {
        store
            .insert_saved(USER, id, Some(near_axis0(id as usize)))
            .unwrap();
    }
    store
}

/// Cold-start collaborator whose backing service is down.
struct UnreachableColdStart;

impl ColdStartScorer for UnreachableColdStart {
    fn cold_start_score(
        &self,
        _user_id: UserId,
        _chunk_id: ChunkId,
        _candidate: &Embedding,
    ) -> ScoringResult<f32> {
        Err(ScoringError::ColdStartFailed {
            reason: "judge service unreachable".to_string(),
        })
    }

    fn name(&self) -> &str {
        "unreachable"
    }
}

fn engine(store: MockSignalStore) -> RelevanceEngine<MockSignalStore> {
    RelevanceEngine::with_cold_start(
        Config::default(),
        store,
        Arc::new(FixedColdStart::new(0.25)),
    )
}

#[tokio::test]
async fn test_score_candidate_cold_start() {
    let store = store_with_saved(9);
    store.insert_chunk(100, Some(axis(0)));
    let engine = engine(store);

    let scored = engine.score_candidate(USER, 100).await.unwrap();
    assert_eq!(scored.phase, LearningPhase::ColdStart);
    assert_eq!(scored.score, 0.25);
    assert_eq!(scored.confidence, Confidence::Low);
    assert_eq!(scored.saved_count, 9);
}

#[tokio::test]
async fn test_score_candidate_learned() {
    let store = store_with_saved(10);
    store.insert_chunk(100, Some(axis(0)));
    store.insert_chunk(101, Some(axis(5)));
    let engine = engine(store);

    let close = engine.score_candidate(USER, 100).await.unwrap();
    assert_eq!(close.phase, LearningPhase::Learned);
    assert!(close.score > 0.99);
    assert_eq!(close.confidence, Confidence::High);
    assert_eq!(close.saved_count, 10);

    let far = engine.score_candidate(USER, 101).await.unwrap();
    assert!(far.score < 0.1);
    assert_eq!(far.confidence, Confidence::Low);
}

#[tokio::test]
async fn test_saved_chunks_without_embedding_do_not_count() {
    let store = store_with_saved(9);
    store.insert_saved(USER, 50, None).unwrap();
    store.insert_chunk(100, Some(axis(0)));
    let engine = engine(store);

    let scored = engine.score_candidate(USER, 100).await.unwrap();
    assert_eq!(scored.phase, LearningPhase::ColdStart);
}

#[tokio::test]
async fn test_missing_embedding_is_counted() {
    let store = store_with_saved(12);
    store.insert_chunk(100, None);
    let engine = engine(store);

    assert_eq!(engine.missing_embedding_rejections(), 0);
    for _ in 0..2 {
        let err = engine.score_candidate(USER, 100).await.unwrap_err();
        assert!(err.is_missing_embedding());
        assert_eq!(
            err,
            EngineError::Scoring(ScoringError::MissingEmbedding { chunk_id: 100 })
        );
    }
    assert_eq!(engine.missing_embedding_rejections(), 2);
}

#[tokio::test]
async fn test_unknown_chunk_is_store_error() {
    let engine = engine(store_with_saved(3));
    let err = engine.score_candidate(USER, 999).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::Store(StoreError::ChunkNotFound { chunk_id: 999 })
    );
    assert_eq!(engine.missing_embedding_rejections(), 0);
}

#[tokio::test]
async fn test_dimension_mismatch_propagates() {
    let store = store_with_saved(10);
    store.insert_chunk(100, Some(Embedding::new(vec![1.0, 0.0])));
    let engine = engine(store);

    let err = engine.score_candidate(USER, 100).await.unwrap_err();
    match err {
        EngineError::Scoring(e) => assert!(e.is_dimension_mismatch()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_score_reflects_new_saves() {
    let store = store_with_saved(10);
    store.insert_chunk(100, Some(axis(3)));
    let engine = engine(store);

    let before = engine.score_candidate(USER, 100).await.unwrap();

    for id in 200..230 {
        engine
            .store()
            .insert_saved(USER, id, Some(axis(3)))
            .unwrap();
    }
    let after = engine.score_candidate(USER, 100).await.unwrap();

    assert!(after.score > before.score);
    assert_eq!(after.saved_count, 40);
}

#[tokio::test]
async fn test_present_candidate_keeps_first_snapshot() {
    let store = store_with_saved(10);
    store.insert_chunk(100, Some(axis(3)));
    let engine = engine(store);

    let first = engine.present_candidate(USER, 100).await.unwrap();

    for id in 200..230 {
        engine
            .store()
            .insert_saved(USER, id, Some(axis(3)))
            .unwrap();
    }

    let again = engine.present_candidate(USER, 100).await.unwrap();
    assert_eq!(again, first);
    assert_eq!(engine.store().score_count(USER), 1);

    let rescored = engine.score_candidate(USER, 100).await.unwrap();
    assert!(rescored.score > first.score);
}

#[tokio::test]
async fn test_validation_report_without_saves() {
    let store = MockSignalStore::new();
    store.insert_chunk(1, Some(axis(0)));
    let engine = engine(store);

    let report = engine.validation_report(USER).await.unwrap();
    assert_eq!(report, ValidationReport::NoSavedChunks);
}

#[tokio::test]
async fn test_validation_report_working_well() {
    let store = store_with_saved(20);
    for id in 1000..1040 {
        store.insert_chunk(id, Some(axis(1 + id as usize % (DIM - 1))));
    }
    let engine = engine(store);

    let report = engine.validation_report(USER).await.unwrap();
    let summary = report.summary().unwrap();
    assert_eq!(summary.saved_chunk_count, 20);
    assert_eq!(report.verdict(), Some(Verdict::WorkingWell));
}

#[tokio::test]
async fn test_validation_report_after_undo() {
    let store = store_with_saved(1);
    store.apply_feedback(USER, 1, FeedbackAction::Undo).unwrap();
    let engine = engine(store);

    let report = engine.validation_report(USER).await.unwrap();
    assert!(!report.has_saved_chunks());
}

#[tokio::test]
async fn test_similarity_histogram() {
    let store = store_with_saved(10);
    let engine = engine(store);

    let histogram = engine.similarity_histogram(USER).await.unwrap().unwrap();
    assert_eq!(histogram.saved.count_for("90-100%"), Some(10));
    assert_eq!(histogram.random.total(), 10);

    assert!(engine.similarity_histogram(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_embedding_coverage() {
    let store = store_with_saved(4);
    store.insert_saved(USER, 10, None).unwrap();
    store.insert_chunk(11, Some(Embedding::new(vec![1.0; 3])));
    store.present(USER, 11).unwrap();

    let config = Config {
        dims: crate::constants::DimConfig::new(DIM),
        ..Default::default()
    };
    let engine = RelevanceEngine::new(config, store);

    let coverage = engine.embedding_coverage(USER).await.unwrap();
    assert_eq!(coverage.total_chunks, 6);
    assert_eq!(coverage.saved_total, 5);
    assert_eq!(coverage.saved_missing_embedding, 1);
    assert_eq!(coverage.dimension_mismatches, 1);
}

#[tokio::test]
async fn test_store_unavailable() {
    let store = store_with_saved(3);
    store.set_unavailable(true);
    let engine = engine(store);

    let err = engine.validation_report(USER).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Store(StoreError::Unavailable { .. })
    ));
}

#[test]
fn test_score_distribution_and_breakdown() {
    let engine = engine(MockSignalStore::new());
    let scores = [0.05, 0.12, 0.39, 0.4, 0.64, 0.65, 1.0];

    let dist = engine.score_distribution(&scores);
    assert_eq!(dist.buckets().len(), 10);
    assert_eq!(dist.total(), scores.len());
    assert_eq!(dist.count_for("90-100%"), Some(1));

    let breakdown = engine.confidence_breakdown(&scores);
    assert_eq!(breakdown.low, 3);
    assert_eq!(breakdown.medium, 2);
    assert_eq!(breakdown.high, 2);
}

#[tokio::test]
async fn test_counts_match_store() {
    let store = store_with_saved(5);
    assert_eq!(store.count_saved_for_user(USER).await.unwrap(), 5);
}

#[tokio::test]
async fn test_cold_start_failure_propagates() {
    let store = store_with_saved(3);
    store.insert_chunk(100, Some(axis(0)));
    let engine =
        RelevanceEngine::with_cold_start(Config::default(), store, Arc::new(UnreachableColdStart));

    let err = engine.present_candidate(USER, 100).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::Scoring(ScoringError::ColdStartFailed {
            reason: "judge service unreachable".to_string()
        })
    );
    assert_eq!(
        err.to_string(),
        "scoring error: cold-start scoring failed: judge service unreachable"
    );
    assert_eq!(engine.store().score_count(USER), 0);
    assert_eq!(engine.missing_embedding_rejections(), 0);
}

#[tokio::test]
async fn test_non_finite_candidate_is_not_recorded() {
    let store = store_with_saved(10);
    let mut poisoned = vec![0.0; DIM];
    poisoned[0] = f32::NAN;
    poisoned[1] = 1.0;
    store.insert_chunk(100, Some(Embedding::new(poisoned)));
    let engine = engine(store);

    let err = engine.present_candidate(USER, 100).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Scoring(ScoringError::Vector(VectorError::NonFinite { .. }))
    ));
    assert_eq!(engine.store().score_count(USER), 0);
}
