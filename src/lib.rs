//! Relevance library crate: preference-centroid scoring of content chunks.
//!
//! A user's saved chunks define a preference centroid. Candidates are scored by cosine
//! similarity to it once enough examples exist, and by a cold-start collaborator before that.
//! Validation diagnostics report whether the centroid actually separates saved content from
//! the rest of the corpus.
//!
//! # Public API Surface
//!
//! ## Engine
//! - [`RelevanceEngine`], [`EngineError`] - Store-backed scoring and diagnostics
//! - [`SignalStore`] - Storage collaborator trait
//! - [`Config`], [`ConfigError`] - Environment-backed configuration
//!
//! ## Pure Components
//! - [`vector`] - Centroid, cosine similarity, bucketing
//! - [`PreferenceCentroid`], [`PreferenceModel`] - Preference model
//! - [`RelevanceScorer`], [`ColdStartScorer`] - Two-phase scoring
//! - [`validate`], [`ValidationReport`], [`EmbeddingCoverage`] - Validation diagnostics
//! - [`distribution`], [`confidence_breakdown`] - Score population reports
//!
//! ## Test/Mock Support
//! [`MockSignalStore`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod engine;
pub mod model;
pub mod preference;
pub mod reporting;
pub mod scoring;
pub mod store;
pub mod vector;

pub use config::{Config, ConfigError};
pub use constants::{DimConfig, DimValidationError, validate_embedding_dim};
pub use diagnostics::{
    DiagnosticsError, EmbeddingCoverage, RandomBaseline, Separation, SimilarityHistogram,
    SimilarityStats, ValidationConfig, ValidationReport, ValidationSummary, Verdict,
    VerdictThresholds, validate,
};
pub use engine::{EngineError, EngineResult, RelevanceEngine};
pub use model::{
    ChunkId, Embedding, EmbeddingCodecError, FeedbackAction, FeedbackError, FeedbackLabel,
    LabeledChunk, UserId,
};
pub use preference::{PreferenceCentroid, PreferenceError, PreferenceModel};
pub use reporting::{
    ConfidenceBreakdown, DistributionBucket, ScoreDistribution, confidence_breakdown,
    distribution,
};
pub use scoring::{
    ColdStartScorer, Confidence, ConfidenceThresholds, FixedColdStart, LearningPhase,
    RankedCandidates, RelevanceScore, RelevanceScorer, ScoreMapping, ScoreRequest, ScorerConfig,
    ScoringError, UniformColdStart,
};
#[cfg(any(test, feature = "mock"))]
pub use store::MockSignalStore;
pub use store::{SignalStore, StoreError, StoreResult};
pub use vector::{VectorError, bucketize, centroid, cosine_similarity, l2_norm};
