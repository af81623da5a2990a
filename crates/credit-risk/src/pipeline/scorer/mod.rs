mod artifact;
mod rules;

pub use artifact::{ArtifactError, LogisticArtifact, ModelArtifact};

use std::sync::Arc;

use tracing::warn;

use super::domain::{LoanApplication, ScoreResult, ScoreSource};
use super::features::FeatureVector;

/// Confidence reported whenever the rule-based path produces the estimate.
pub(crate) const FALLBACK_CONFIDENCE: f64 = 0.6;

/// Scoring strategy selected by artifact availability.
///
/// With an artifact loaded the trained model scores each request; any artifact
/// failure is caught here and degrades that single request to the rule-based
/// estimate. Without an artifact the pipeline runs rule-based for the process
/// lifetime.
pub struct Scorer {
    artifact: Option<Arc<dyn ModelArtifact>>,
}

impl Scorer {
    pub fn new(artifact: Option<Arc<dyn ModelArtifact>>) -> Self {
        Self { artifact }
    }

    pub fn rule_based() -> Self {
        Self::new(None)
    }

    pub fn model_loaded(&self) -> bool {
        self.artifact.is_some()
    }

    pub fn model_version(&self) -> Option<&str> {
        self.artifact.as_deref().map(ModelArtifact::version)
    }

    pub fn score(&self, application: &LoanApplication, features: &FeatureVector) -> ScoreResult {
        if let Some(artifact) = &self.artifact {
            match artifact.predict(&features.values()) {
                Ok([no_default, default]) => {
                    return ScoreResult {
                        probability: default,
                        confidence: no_default.max(default),
                        source: ScoreSource::Model,
                    };
                }
                Err(error) => {
                    warn!(
                        %error,
                        version = artifact.version(),
                        "artifact prediction failed, degrading to rule-based estimate"
                    );
                }
            }
        }

        ScoreResult {
            probability: rules::rule_based_probability(application, features),
            confidence: FALLBACK_CONFIDENCE,
            source: ScoreSource::RuleFallback,
        }
    }
}
