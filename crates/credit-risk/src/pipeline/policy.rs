use super::domain::{Decision, RiskCategory};

const MODERATE_RISK_FLOOR: f64 = 0.20;
const HIGH_RISK_FLOOR: f64 = 0.40;
const VERY_HIGH_RISK_FLOOR: f64 = 0.60;

const MANUAL_REVIEW_CONFIDENCE: f64 = 0.7;
const APPROVAL_CEILING: f64 = 0.30;
const CONDITIONAL_CEILING: f64 = 0.50;

/// Map a default probability onto its risk tier.
///
/// Bands are lower-inclusive and upper-exclusive: a probability sitting
/// exactly on a threshold falls into the higher tier.
pub fn risk_category(probability: f64) -> RiskCategory {
    if probability < MODERATE_RISK_FLOOR {
        RiskCategory::LowRisk
    } else if probability < HIGH_RISK_FLOOR {
        RiskCategory::ModerateRisk
    } else if probability < VERY_HIGH_RISK_FLOOR {
        RiskCategory::HighRisk
    } else {
        RiskCategory::VeryHighRisk
    }
}

/// Lending decision from (probability, confidence), evaluated in fixed
/// priority order. The confidence gate dominates: an uncertain scorer routes
/// to manual review no matter how favorable the probability looks.
pub fn decide(probability: f64, confidence: f64) -> Decision {
    if confidence < MANUAL_REVIEW_CONFIDENCE {
        Decision::ManualReview
    } else if probability < APPROVAL_CEILING {
        Decision::Approved
    } else if probability < CONDITIONAL_CEILING {
        Decision::ConditionalApproval
    } else {
        Decision::Rejected
    }
}
