//! Validation diagnostics: is the learned centroid actually discriminative?
//!
//! The core comparison is saved-to-centroid similarity against random-to-centroid
//! similarity. Indistinguishable averages mean the model has learned nothing, and the report
//! says so with an explicit [`Verdict`] rather than leaving the numbers to interpretation.
//!
//! These are read-only views, invoked on demand and never on the scoring path.

pub mod config;
/// Embedding coverage (missing / mismatched embeddings).
pub mod coverage;
pub mod error;
pub mod types;
/// Pairwise, positive and random similarity plus the verdict.
pub mod validation;

#[cfg(test)]
mod tests;

pub use config::ValidationConfig;
pub use coverage::EmbeddingCoverage;
pub use error::{DiagnosticsError, DiagnosticsResult};
pub use types::{
    RandomBaseline, Separation, SimilarityHistogram, SimilarityStats, ValidationReport,
    ValidationSummary, Verdict, VerdictThresholds,
};
pub use validation::{
    pairwise_similarity, positive_to_centroid, random_to_centroid, separation,
    similarity_histogram, validate,
};
