//! Cross-cutting, shared constants.
//!
//! Policy constants (phase threshold, confidence cut-offs, verdict ratios) are defaults only;
//! [`Config`](crate::config::Config) can override every one of them at runtime.
//!
//! # Dimension Invariants
//!
//! All embeddings that meet in one computation must share a dimension. The historical
//! embedding model produces [`DEFAULT_EMBEDDING_DIM`] floats. If you swap the embedding
//! source:
//!
//! 1. Use [`DimConfig`] to pass the new dimension through initialization
//! 2. Use [`validate_embedding_dim`] at collaborator boundaries to catch mismatches early
//! 3. Re-check the non-negative cosine assumption documented in [`crate::scoring`]

pub const DEFAULT_EMBEDDING_DIM: usize = 1536;

/// Saved examples required before the learned (centroid) phase applies.
pub const DEFAULT_COLD_START_THRESHOLD: usize = 10;

pub const DEFAULT_CONFIDENCE_MEDIUM: f32 = 0.40;
pub const DEFAULT_CONFIDENCE_HIGH: f32 = 0.65;

/// Upper bound on saved embeddings fed to the O(n²) pairwise diagnostic.
pub const DEFAULT_VALIDATION_SAVED_SAMPLE: usize = 50;
pub const DEFAULT_VALIDATION_RANDOM_SAMPLE: usize = 50;

pub const DEFAULT_VERDICT_WORKING_RATIO: f32 = 1.20;
pub const DEFAULT_VERDICT_PROMISING_RATIO: f32 = 1.05;

/// Norm below which a centroid is reported as collapsed.
pub const COLLAPSED_CENTROID_NORM: f32 = 1e-3;

/// Boundaries of the ten decile buckets used by score distributions.
pub const DECILE_EDGES: [f32; 11] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

pub const DECILE_LABELS: [&str; 10] = [
    "0-10%", "10-20%", "20-30%", "30-40%", "40-50%", "50-60%", "60-70%", "70-80%", "80-90%",
    "90-100%",
];

/// Runtime dimension configuration for modules that accept embeddings from collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimConfig {
    /// The embedding vector dimension (number of floats).
    pub embedding_dim: usize,
}

impl Default for DimConfig {
    fn default() -> Self {
        Self {
            embedding_dim: DEFAULT_EMBEDDING_DIM,
        }
    }
}

impl DimConfig {
    pub fn new(embedding_dim: usize) -> Self {
        Self { embedding_dim }
    }

    /// Returns an error if `embedding_dim` is zero.
    pub fn validate(&self) -> Result<(), DimValidationError> {
        if self.embedding_dim == 0 {
            return Err(DimValidationError::ZeroDimension);
        }
        Ok(())
    }
}

/// Error returned when dimension validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimValidationError {
    /// Embedding dimension cannot be zero.
    ZeroDimension,
    /// Runtime dimension does not match expected dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DimValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "embedding dimension cannot be zero"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for DimValidationError {}

/// Validates that a runtime embedding dimension matches the expected dimension.
///
/// # Example
///
/// ```
/// use relevance::constants::{validate_embedding_dim, DEFAULT_EMBEDDING_DIM};
///
/// let embedder_dim = 1536;
/// validate_embedding_dim(embedder_dim, DEFAULT_EMBEDDING_DIM).unwrap();
/// ```
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
