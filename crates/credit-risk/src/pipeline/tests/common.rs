use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::pipeline::domain::{EmploymentStatus, LoanApplication};
use crate::pipeline::features::FeatureVector;
use crate::pipeline::scorer::{ArtifactError, LogisticArtifact, ModelArtifact};
use crate::pipeline::service::CreditRiskService;

/// Worked example: Employed applicant, credit 680, no delinquencies. The
/// rule-based estimate lands on 0.15 (base 0.10 + 0.05 for the 650-700
/// credit tier).
pub(super) fn baseline_application() -> LoanApplication {
    LoanApplication {
        age: 35,
        annual_income: 50_000.0,
        employment_status: EmploymentStatus::Employed,
        employment_duration_months: 48,
        credit_score: 680,
        existing_debt: 15_000.0,
        loan_amount: 10_000.0,
        loan_term_months: 36,
        loan_purpose: "Home".to_string(),
        num_credit_accounts: 3,
        credit_utilization: 0.45,
        num_delinquencies: 0,
        payment_history_months: 60,
    }
}

/// Worked example: every rule-based factor fires and the sum caps at 0.95.
pub(super) fn risky_application() -> LoanApplication {
    LoanApplication {
        age: 41,
        annual_income: 40_000.0,
        employment_status: EmploymentStatus::Unemployed,
        employment_duration_months: 0,
        credit_score: 550,
        existing_debt: 30_000.0,
        loan_amount: 12_000.0,
        loan_term_months: 48,
        loan_purpose: "Debt consolidation".to_string(),
        num_credit_accounts: 6,
        credit_utilization: 0.9,
        num_delinquencies: 3,
        payment_history_months: 24,
    }
}

/// Rejected at the validation gate: annual income must be positive.
pub(super) fn invalid_application() -> LoanApplication {
    LoanApplication {
        annual_income: 0.0,
        ..baseline_application()
    }
}

pub(super) fn derived(application: &LoanApplication) -> FeatureVector {
    FeatureVector::derive(application)
}

pub(super) fn rule_based_service() -> CreditRiskService {
    CreditRiskService::rule_based()
}

pub(super) fn model_service(probabilities: [f64; 2]) -> CreditRiskService {
    CreditRiskService::new(Some(Arc::new(StubArtifact { probabilities })))
}

pub(super) fn failing_model_service() -> CreditRiskService {
    CreditRiskService::new(Some(Arc::new(FailingArtifact)))
}

/// Artifact returning a fixed class-probability pair.
pub(super) struct StubArtifact {
    pub(super) probabilities: [f64; 2],
}

impl ModelArtifact for StubArtifact {
    fn version(&self) -> &str {
        "stub-v1"
    }

    fn predict(&self, _features: &[f64]) -> Result<[f64; 2], ArtifactError> {
        Ok(self.probabilities)
    }
}

/// Artifact failing on every invocation, exercising the fallback path.
pub(super) struct FailingArtifact;

impl ModelArtifact for FailingArtifact {
    fn version(&self) -> &str {
        "failing-v1"
    }

    fn predict(&self, _features: &[f64]) -> Result<[f64; 2], ArtifactError> {
        Err(ArtifactError::NonFiniteOutput)
    }
}

pub(super) fn sample_artifact() -> LogisticArtifact {
    LogisticArtifact {
        version: "logistic-v1".to_string(),
        feature_names: FeatureVector::FEATURE_NAMES
            .iter()
            .map(|name| name.to_string())
            .collect(),
        coefficients: vec![0.0; FeatureVector::FEATURE_NAMES.len()],
        intercept: 0.0,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}
