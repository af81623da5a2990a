use super::super::domain::{EmploymentStatus, LoanApplication};
use super::super::features::FeatureVector;

pub(crate) const BASE_PROBABILITY: f64 = 0.10;
pub(crate) const PROBABILITY_CAP: f64 = 0.95;

/// Deterministic additive default-probability estimate.
///
/// Each factor contributes one mutually exclusive tier; the increments are
/// independent with no interaction terms. The debt-to-income tiers read the
/// deriver's smoothed ratio, not the raw one used by the explanation flags.
pub(crate) fn rule_based_probability(
    application: &LoanApplication,
    features: &FeatureVector,
) -> f64 {
    let mut probability = BASE_PROBABILITY;

    if application.credit_score < 600 {
        probability += 0.25;
    } else if application.credit_score < 650 {
        probability += 0.15;
    } else if application.credit_score < 700 {
        probability += 0.05;
    }

    if features.debt_to_income > 0.5 {
        probability += 0.20;
    } else if features.debt_to_income > 0.4 {
        probability += 0.10;
    }

    match application.employment_status {
        EmploymentStatus::Unemployed => probability += 0.15,
        EmploymentStatus::SelfEmployed => probability += 0.05,
        EmploymentStatus::Employed | EmploymentStatus::Other => {}
    }

    if application.num_delinquencies > 2 {
        probability += 0.20;
    } else if application.num_delinquencies > 0 {
        probability += 0.10;
    }

    if application.credit_utilization > 0.8 {
        probability += 0.10;
    } else if application.credit_utilization > 0.6 {
        probability += 0.05;
    }

    probability.min(PROBABILITY_CAP)
}
