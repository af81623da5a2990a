use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::super::features::FeatureVector;

/// Failures raised while loading or invoking a trained artifact.
///
/// Prediction-time variants are recovered locally by the rule-based fallback
/// and never surfaced to callers of the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact file unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("artifact payload malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("artifact expects {expected} features, pipeline produces {found}")]
    FeatureCountMismatch { expected: usize, found: usize },
    #[error("artifact feature '{artifact}' at position {position} does not match pipeline feature '{pipeline}'")]
    FeatureOrderMismatch {
        position: usize,
        artifact: String,
        pipeline: String,
    },
    #[error("artifact produced a non-finite probability")]
    NonFiniteOutput,
}

/// Opaque, versioned scorer produced by offline training.
///
/// Loaded once at process start and read-only thereafter, so implementations
/// need no interior synchronization.
pub trait ModelArtifact: Send + Sync {
    fn version(&self) -> &str;

    /// Per-class probabilities `[no_default, default]` for one feature vector.
    fn predict(&self, features: &[f64]) -> Result<[f64; 2], ArtifactError>;
}

/// Binary logistic-regression artifact persisted as versioned JSON.
///
/// The embedded `feature_names` double as the feature-column companion: they
/// are checked against [`FeatureVector::FEATURE_NAMES`] at load time so an
/// incompatible artifact is refused before it can serve traffic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticArtifact {
    pub version: String,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticArtifact {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let file = File::open(path)?;
        let artifact: Self = serde_json::from_reader(BufReader::new(file))?;
        artifact.check_feature_layout()?;
        Ok(artifact)
    }

    fn check_feature_layout(&self) -> Result<(), ArtifactError> {
        let expected = FeatureVector::FEATURE_NAMES.len();
        if self.feature_names.len() != expected || self.coefficients.len() != expected {
            return Err(ArtifactError::FeatureCountMismatch {
                expected: self.feature_names.len().max(self.coefficients.len()),
                found: expected,
            });
        }

        for (position, (artifact, pipeline)) in self
            .feature_names
            .iter()
            .zip(FeatureVector::FEATURE_NAMES)
            .enumerate()
        {
            if artifact != pipeline {
                return Err(ArtifactError::FeatureOrderMismatch {
                    position,
                    artifact: artifact.clone(),
                    pipeline: pipeline.to_string(),
                });
            }
        }

        Ok(())
    }
}

impl ModelArtifact for LogisticArtifact {
    fn version(&self) -> &str {
        &self.version
    }

    fn predict(&self, features: &[f64]) -> Result<[f64; 2], ArtifactError> {
        if features.len() != self.coefficients.len() {
            return Err(ArtifactError::FeatureCountMismatch {
                expected: self.coefficients.len(),
                found: features.len(),
            });
        }

        let logit: f64 = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(weight, value)| weight * value)
                .sum::<f64>();

        let default_probability = 1.0 / (1.0 + (-logit).exp());
        if !default_probability.is_finite() {
            return Err(ArtifactError::NonFiniteOutput);
        }

        Ok([1.0 - default_probability, default_probability])
    }
}
