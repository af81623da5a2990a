use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::domain::{ApplicationId, BatchEntry, BatchResult, LoanApplication, PredictionRecord};
use super::explain::explain;
use super::features::FeatureVector;
use super::policy::{decide, risk_category};
use super::scorer::{ModelArtifact, Scorer};
use super::validation::{self, ValidationError};

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("APP-{id:06}"))
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Service composing validation, feature derivation, scoring, and policy.
///
/// Construction takes the optionally loaded artifact explicitly so evaluations
/// stay free of hidden global state; the service itself is stateless apart
/// from the shared read-only artifact and is safe to share across workers.
pub struct CreditRiskService {
    scorer: Scorer,
}

impl CreditRiskService {
    pub fn new(artifact: Option<Arc<dyn ModelArtifact>>) -> Self {
        Self {
            scorer: Scorer::new(artifact),
        }
    }

    /// Service running permanently on the rule-based estimate.
    pub fn rule_based() -> Self {
        Self::new(None)
    }

    pub fn model_loaded(&self) -> bool {
        self.scorer.model_loaded()
    }

    pub fn model_version(&self) -> Option<&str> {
        self.scorer.model_version()
    }

    /// Evaluate one application end to end.
    ///
    /// Classification and the decision run on the unrounded probability; the
    /// record carries probability and confidence rounded to four decimals.
    pub fn evaluate(
        &self,
        application: &LoanApplication,
    ) -> Result<PredictionRecord, EvaluationError> {
        validation::validate(application)?;

        let features = FeatureVector::derive(application);
        let score = self.scorer.score(application, &features);

        Ok(PredictionRecord {
            application_id: next_application_id(),
            default_probability: round4(score.probability),
            risk_category: risk_category(score.probability),
            decision: decide(score.probability, score.confidence),
            confidence: round4(score.confidence),
            source: score.source,
            explanation: explain(application),
            evaluated_at: Utc::now(),
        })
    }

    /// Evaluate a batch, isolating per-item failures.
    ///
    /// Each element runs through the full single-item pipeline independently
    /// and in input order; a failed element becomes a positional error marker
    /// and never aborts its siblings.
    pub fn evaluate_batch(&self, applications: &[LoanApplication]) -> BatchResult {
        let mut predictions = Vec::with_capacity(applications.len());
        let mut successful = 0usize;

        for application in applications {
            match self.evaluate(application) {
                Ok(record) => {
                    successful += 1;
                    predictions.push(BatchEntry::Prediction(record));
                }
                Err(error) => {
                    warn!(%error, "batch element failed, continuing with remainder");
                    predictions.push(BatchEntry::Failure {
                        error: error.to_string(),
                    });
                }
            }
        }

        BatchResult {
            total: applications.len(),
            successful,
            predictions,
        }
    }
}

/// Failure of a single (non-batch) evaluation, reported to the caller rather
/// than silently defaulted. Scoring degradation is not an error; it is
/// recorded on the result's `source` field.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
