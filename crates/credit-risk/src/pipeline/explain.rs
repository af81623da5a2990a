use super::domain::{EmploymentStatus, Explanation, ImpactLevel, LoanApplication};

fn flag(high: bool) -> ImpactLevel {
    if high {
        ImpactLevel::High
    } else {
        ImpactLevel::Low
    }
}

/// Produce the diagnostic factor flags for one application.
///
/// Flags read the raw fields: the debt ratio here is the unsmoothed
/// `existing_debt / annual_income`, which deliberately differs from the
/// deriver's `+ 1`-smoothed `debt_to_income` consumed by the rule-based
/// scorer. The two formulas are kept distinct on purpose. Output is a
/// diagnostic aid only and never feeds back into scoring or decisions.
pub fn explain(application: &LoanApplication) -> Explanation {
    Explanation {
        credit_score_impact: flag(application.credit_score < 600),
        debt_ratio_impact: flag(application.existing_debt / application.annual_income > 0.5),
        employment_impact: flag(application.employment_status == EmploymentStatus::Unemployed),
        delinquency_impact: flag(application.num_delinquencies > 2),
    }
}
