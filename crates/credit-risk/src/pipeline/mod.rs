//! Request-to-decision pipeline for credit-default risk.
//!
//! A validated [`LoanApplication`] flows through feature derivation, the
//! scoring strategy, risk classification, and the decision policy before the
//! service assembles an immutable [`PredictionRecord`]. Batch evaluation wraps
//! the same path per element with partial-failure tolerance.

pub mod domain;
pub mod explain;
pub mod features;
pub mod intake;
pub mod policy;
pub mod router;
pub mod scorer;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationId, BatchEntry, BatchResult, Decision, EmploymentStatus, Explanation, ImpactLevel,
    LoanApplication, PredictionRecord, RiskCategory, ScoreResult, ScoreSource,
};
pub use features::FeatureVector;
pub use router::prediction_router;
pub use scorer::{ArtifactError, LogisticArtifact, ModelArtifact, Scorer};
pub use service::{CreditRiskService, EvaluationError};
pub use validation::ValidationError;
