use super::common::*;
use crate::pipeline::validation::{validate, ValidationError};

#[test]
fn worked_examples_pass_the_gate() {
    assert_eq!(validate(&baseline_application()), Ok(()));
    assert_eq!(validate(&risky_application()), Ok(()));
}

#[test]
fn age_bounds_are_inclusive() {
    let mut application = baseline_application();

    application.age = 18;
    assert_eq!(validate(&application), Ok(()));
    application.age = 100;
    assert_eq!(validate(&application), Ok(()));

    application.age = 17;
    assert_eq!(
        validate(&application),
        Err(ValidationError::AgeOutOfRange(17))
    );
    application.age = 101;
    assert_eq!(
        validate(&application),
        Err(ValidationError::AgeOutOfRange(101))
    );
}

#[test]
fn income_must_be_strictly_positive() {
    let mut application = baseline_application();

    application.annual_income = 0.0;
    assert!(matches!(
        validate(&application),
        Err(ValidationError::NonPositiveIncome(_))
    ));

    application.annual_income = f64::NAN;
    assert!(matches!(
        validate(&application),
        Err(ValidationError::NonPositiveIncome(_))
    ));
}

#[test]
fn credit_score_bounds_are_inclusive() {
    let mut application = baseline_application();

    application.credit_score = 300;
    assert_eq!(validate(&application), Ok(()));
    application.credit_score = 850;
    assert_eq!(validate(&application), Ok(()));

    application.credit_score = 299;
    assert!(validate(&application).is_err());
    application.credit_score = 851;
    assert!(validate(&application).is_err());
}

#[test]
fn debt_may_be_zero_but_not_negative() {
    let mut application = baseline_application();

    application.existing_debt = 0.0;
    assert_eq!(validate(&application), Ok(()));

    application.existing_debt = -1.0;
    assert!(matches!(
        validate(&application),
        Err(ValidationError::NegativeDebt(_))
    ));
}

#[test]
fn loan_term_must_cover_at_least_one_month() {
    let mut application = baseline_application();

    application.loan_term_months = 1;
    assert_eq!(validate(&application), Ok(()));

    application.loan_term_months = 0;
    assert_eq!(validate(&application), Err(ValidationError::ZeroLoanTerm));
}

#[test]
fn utilization_bounds_are_inclusive() {
    let mut application = baseline_application();

    application.credit_utilization = 0.0;
    assert_eq!(validate(&application), Ok(()));
    application.credit_utilization = 1.0;
    assert_eq!(validate(&application), Ok(()));

    application.credit_utilization = 1.01;
    assert!(matches!(
        validate(&application),
        Err(ValidationError::UtilizationOutOfRange(_))
    ));
}
