use super::domain::LoanApplication;

/// Field-domain violations rejected before any pipeline stage runs.
///
/// Values outside their declared domain are never silently coerced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("age {0} outside accepted range 18-100")]
    AgeOutOfRange(u8),
    #[error("annual_income must be a positive amount, got {0}")]
    NonPositiveIncome(f64),
    #[error("credit_score {0} outside accepted range 300-850")]
    CreditScoreOutOfRange(u16),
    #[error("existing_debt must not be negative, got {0}")]
    NegativeDebt(f64),
    #[error("loan_amount must be a positive amount, got {0}")]
    NonPositiveLoanAmount(f64),
    #[error("loan_term_months must be at least one month")]
    ZeroLoanTerm,
    #[error("credit_utilization {0} outside accepted range 0-1")]
    UtilizationOutOfRange(f64),
}

/// Check every declared field domain on an inbound application.
///
/// Floating-point comparisons are written so that non-finite inputs fail the
/// relevant check instead of slipping through.
pub fn validate(application: &LoanApplication) -> Result<(), ValidationError> {
    if !(18..=100).contains(&application.age) {
        return Err(ValidationError::AgeOutOfRange(application.age));
    }

    if !application.annual_income.is_finite() || application.annual_income <= 0.0 {
        return Err(ValidationError::NonPositiveIncome(application.annual_income));
    }

    if !(300..=850).contains(&application.credit_score) {
        return Err(ValidationError::CreditScoreOutOfRange(
            application.credit_score,
        ));
    }

    if !application.existing_debt.is_finite() || application.existing_debt < 0.0 {
        return Err(ValidationError::NegativeDebt(application.existing_debt));
    }

    if !application.loan_amount.is_finite() || application.loan_amount <= 0.0 {
        return Err(ValidationError::NonPositiveLoanAmount(
            application.loan_amount,
        ));
    }

    if application.loan_term_months == 0 {
        return Err(ValidationError::ZeroLoanTerm);
    }

    if !(0.0..=1.0).contains(&application.credit_utilization) {
        return Err(ValidationError::UtilizationOutOfRange(
            application.credit_utilization,
        ));
    }

    Ok(())
}
