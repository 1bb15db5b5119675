//! Environment-backed configuration.
//!
//! Every policy constant has a default. Override with `RELEVANCE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::str::FromStr;

use crate::constants::DimConfig;
use crate::diagnostics::ValidationConfig;
use crate::scoring::{ScoreMapping, ScorerConfig};

/// Engine configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RELEVANCE_*` overrides on top of defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    /// Phase threshold, confidence thresholds and score mapping.
    pub scorer: ScorerConfig,

    /// Sample caps and verdict ratios for validation reports.
    pub validation: ValidationConfig,

    /// Expected embedding dimension. Default: `1536`.
    pub dims: DimConfig,
}

impl Config {
    const ENV_COLD_START_THRESHOLD: &'static str = "RELEVANCE_COLD_START_THRESHOLD";
    const ENV_CONFIDENCE_MEDIUM: &'static str = "RELEVANCE_CONFIDENCE_MEDIUM";
    const ENV_CONFIDENCE_HIGH: &'static str = "RELEVANCE_CONFIDENCE_HIGH";
    const ENV_SCORE_MAPPING: &'static str = "RELEVANCE_SCORE_MAPPING";
    const ENV_VALIDATION_SAVED_SAMPLE: &'static str = "RELEVANCE_VALIDATION_SAVED_SAMPLE";
    const ENV_VALIDATION_RANDOM_SAMPLE: &'static str = "RELEVANCE_VALIDATION_RANDOM_SAMPLE";
    const ENV_VERDICT_WORKING_RATIO: &'static str = "RELEVANCE_VERDICT_WORKING_RATIO";
    const ENV_VERDICT_PROMISING_RATIO: &'static str = "RELEVANCE_VERDICT_PROMISING_RATIO";
    const ENV_EMBEDDING_DIM: &'static str = "RELEVANCE_EMBEDDING_DIM";

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// Does not call [`Config::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        config.scorer.cold_start_threshold = Self::parse_from_env(
            Self::ENV_COLD_START_THRESHOLD,
            config.scorer.cold_start_threshold,
        )?;
        config.scorer.confidence.medium =
            Self::parse_from_env(Self::ENV_CONFIDENCE_MEDIUM, config.scorer.confidence.medium)?;
        config.scorer.confidence.high =
            Self::parse_from_env(Self::ENV_CONFIDENCE_HIGH, config.scorer.confidence.high)?;
        config.scorer.mapping = Self::parse_mapping_from_env(config.scorer.mapping)?;

        config.validation.saved_sample = Self::parse_from_env(
            Self::ENV_VALIDATION_SAVED_SAMPLE,
            config.validation.saved_sample,
        )?;
        config.validation.random_sample = Self::parse_from_env(
            Self::ENV_VALIDATION_RANDOM_SAMPLE,
            config.validation.random_sample,
        )?;
        config.validation.verdict.working = Self::parse_from_env(
            Self::ENV_VERDICT_WORKING_RATIO,
            config.validation.verdict.working,
        )?;
        config.validation.verdict.promising = Self::parse_from_env(
            Self::ENV_VERDICT_PROMISING_RATIO,
            config.validation.verdict.promising,
        )?;

        config.dims.embedding_dim =
            Self::parse_from_env(Self::ENV_EMBEDDING_DIM, config.dims.embedding_dim)?;

        Ok(config)
    }

    /// Checks thresholds, ratios and caps for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let confidence = self.scorer.confidence;
        let in_unit = |v: f32| (0.0..=1.0).contains(&v);
        if !in_unit(confidence.medium)
            || !in_unit(confidence.high)
            || confidence.medium > confidence.high
        {
            return Err(ConfigError::InvalidConfidenceThresholds {
                medium: confidence.medium,
                high: confidence.high,
            });
        }

        let verdict = self.validation.verdict;
        if !verdict.working.is_finite()
            || verdict.promising.is_nan()
            || verdict.promising <= 0.0
            || verdict.promising > verdict.working
        {
            return Err(ConfigError::InvalidVerdictRatios {
                working: verdict.working,
                promising: verdict.promising,
            });
        }

        if self.scorer.cold_start_threshold == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_COLD_START_THRESHOLD,
            });
        }
        if self.validation.saved_sample == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_VALIDATION_SAVED_SAMPLE,
            });
        }
        if self.validation.random_sample == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_VALIDATION_RANDOM_SAMPLE,
            });
        }
        if self.dims.validate().is_err() {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_EMBEDDING_DIM,
            });
        }

        Ok(())
    }

    fn parse_from_env<T>(name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidValue {
                    name,
                    value: value.clone(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_mapping_from_env(default: ScoreMapping) -> Result<ScoreMapping, ConfigError> {
        Self::parse_from_env(Self::ENV_SCORE_MAPPING, default)
    }
}
