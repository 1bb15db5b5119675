//! Score population reports for observability.
//!
//! Every report uses the single [`bucketize`](crate::vector::bucketize) and
//! [`ConfidenceThresholds::classify`](crate::scoring::ConfidenceThresholds::classify)
//! implementations, so tables rendered from different call sites cannot drift apart.

pub mod distribution;


pub use distribution::{
    ConfidenceBreakdown, DistributionBucket, ScoreDistribution, confidence_breakdown,
    distribution,
};
