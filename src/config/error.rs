//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// Confidence thresholds are out of `[0, 1]` or out of order.
    #[error("invalid confidence thresholds: medium {medium}, high {high} (need 0 <= medium <= high <= 1)")]
    InvalidConfidenceThresholds { medium: f32, high: f32 },

    /// Verdict ratios are non-positive or out of order.
    #[error("invalid verdict ratios: working {working}, promising {promising} (need 0 < promising <= working)")]
    InvalidVerdictRatios { working: f32, promising: f32 },

    /// A count that must be at least one was zero.
    #[error("{name} must be at least 1")]
    ZeroValue { name: &'static str },
}
