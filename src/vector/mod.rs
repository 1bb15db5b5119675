//! Numeric primitives shared by every scoring and reporting path.
//!
//! Functions here take plain `f32` slices so they stay independent of the
//! domain types in [`crate::model`].

/// Vector math errors.
pub mod error;
/// Centroid, cosine similarity, norms and bucketing.
pub mod math;


pub use error::{VectorError, VectorResult};
pub use math::{bucketize, centroid, cosine_similarity, l2_norm};
