//! Relevance scoring of candidate chunks.
//!
//! Two phases, selected by how many saved examples the user has:
//!
//! - **cold-start** (fewer than [`DEFAULT_COLD_START_THRESHOLD`](crate::constants::DEFAULT_COLD_START_THRESHOLD)):
//!   the centroid is not consulted. Scores come from a [`ColdStartScorer`].
//! - **learned**: the centroid is rebuilt from all saved embeddings and the candidate's
//!   cosine similarity to it, mapped by [`ScoreMapping`], is the score.
//!
//! # Score range assumption
//!
//! With the default [`ScoreMapping::Clamped`] the score is raw cosine similarity with
//! negatives clamped to zero. That is only a good `[0, 1]` score because natural-language
//! embeddings rarely point away from each other. Replacing the embedding source means
//! re-validating that assumption (or switching to [`ScoreMapping::Rescaled`] and re-tuning
//! [`ConfidenceThresholds`]).
//!
//! A candidate without an embedding is always rejected with
//! [`ScoringError::MissingEmbedding`]; there is no default score.

/// Cold-start score sources.
pub mod cold_start;
/// Scorer policy configuration.
pub mod config;
/// Scoring errors.
pub mod error;
/// Relevance scorer.
pub mod scorer;
/// Phase, confidence and score types.
pub mod types;


pub use cold_start::{ColdStartScorer, FixedColdStart, UniformColdStart};
pub use config::ScorerConfig;
pub use error::{ScoringError, ScoringResult};
pub use scorer::{RankedCandidates, RelevanceScorer, ScoreRequest};
pub use types::{Confidence, ConfidenceThresholds, LearningPhase, RelevanceScore, ScoreMapping};
