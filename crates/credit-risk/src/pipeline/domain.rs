use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for evaluated applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Raw loan application as submitted by the front end.
///
/// Field domains are enforced once at ingestion by [`super::validation::validate`];
/// no pipeline stage runs against an unvalidated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub age: u8,
    pub annual_income: f64,
    pub employment_status: EmploymentStatus,
    pub employment_duration_months: u32,
    pub credit_score: u16,
    pub existing_debt: f64,
    pub loan_amount: f64,
    pub loan_term_months: u32,
    pub loan_purpose: String,
    pub num_credit_accounts: u32,
    pub credit_utilization: f64,
    pub num_delinquencies: u32,
    pub payment_history_months: u32,
}

/// Employment category used by feature encoding and the rule-based scorer.
///
/// Unrecognized labels collapse into `Other`, which encodes the same as
/// `Employed`; the original intake behaved this way and the ambiguity is kept
/// rather than promoted to a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Employed,
    #[serde(rename = "Self-Employed")]
    SelfEmployed,
    Unemployed,
    #[serde(other)]
    Other,
}

impl EmploymentStatus {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Employed" => Self::Employed,
            "Self-Employed" => Self::SelfEmployed,
            "Unemployed" => Self::Unemployed,
            _ => Self::Other,
        }
    }

    /// Ordinal encoding fed to trained artifacts.
    pub const fn encoded(self) -> f64 {
        match self {
            EmploymentStatus::Employed | EmploymentStatus::Other => 0.0,
            EmploymentStatus::SelfEmployed => 1.0,
            EmploymentStatus::Unemployed => 2.0,
        }
    }
}

/// Which scoring strategy produced a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Model,
    RuleFallback,
}

/// Probability estimate with the scorer's self-reported certainty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub probability: f64,
    pub confidence: f64,
    pub source: ScoreSource,
}

/// Ordered risk tier; variants are declared in increasing probability order so
/// the derived `Ord` matches the band ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCategory {
    LowRisk,
    ModerateRisk,
    HighRisk,
    VeryHighRisk,
}

impl RiskCategory {
    pub const fn label(self) -> &'static str {
        match self {
            RiskCategory::LowRisk => "LOW_RISK",
            RiskCategory::ModerateRisk => "MODERATE_RISK",
            RiskCategory::HighRisk => "HIGH_RISK",
            RiskCategory::VeryHighRisk => "VERY_HIGH_RISK",
        }
    }
}

/// Lending decision emitted by the decision policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Approved,
    ConditionalApproval,
    Rejected,
    ManualReview,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Approved => "APPROVED",
            Decision::ConditionalApproval => "CONDITIONAL_APPROVAL",
            Decision::Rejected => "REJECTED",
            Decision::ManualReview => "MANUAL_REVIEW",
        }
    }
}

/// Binary impact flag used by the explanation generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    High,
    Low,
}

/// Diagnostic factor flags derived from the raw application fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub credit_score_impact: ImpactLevel,
    pub debt_ratio_impact: ImpactLevel,
    pub employment_impact: ImpactLevel,
    pub delinquency_impact: ImpactLevel,
}

/// The unit returned to the caller for one application; immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub application_id: ApplicationId,
    pub default_probability: f64,
    pub risk_category: RiskCategory,
    pub decision: Decision,
    pub confidence: f64,
    pub source: ScoreSource,
    pub explanation: Explanation,
    pub evaluated_at: DateTime<Utc>,
}

/// One positional outcome inside a batch; failures serialize as
/// `{"error": "..."}` alongside full prediction records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Prediction(PredictionRecord),
    Failure { error: String },
}

impl BatchEntry {
    pub const fn is_failure(&self) -> bool {
        matches!(self, BatchEntry::Failure { .. })
    }

    pub fn record(&self) -> Option<&PredictionRecord> {
        match self {
            BatchEntry::Prediction(record) => Some(record),
            BatchEntry::Failure { .. } => None,
        }
    }
}

/// Ordered batch outcome; entry order matches input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub predictions: Vec<BatchEntry>,
    pub total: usize,
    pub successful: usize,
}
