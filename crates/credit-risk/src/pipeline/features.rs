use super::domain::LoanApplication;

/// Fixed nominal annual interest rate used for the amortization estimate.
pub(crate) const NOMINAL_ANNUAL_RATE: f64 = 12.0;

/// Derived feature vector, rebuilt per request and owned by it alone.
///
/// Derivation is a total function: the application has already passed
/// validation, so the ratios and the amortization formula have no failure
/// modes (the `+ 1` income smoothing keeps the denominators positive and the
/// term is known to be non-zero).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub age: f64,
    pub annual_income: f64,
    pub employment_duration_months: f64,
    pub credit_score: f64,
    pub existing_debt: f64,
    pub loan_amount: f64,
    pub loan_term_months: f64,
    pub num_credit_accounts: f64,
    pub credit_utilization: f64,
    pub num_delinquencies: f64,
    pub payment_history_months: f64,
    pub debt_to_income: f64,
    pub loan_to_income: f64,
    pub interest_rate: f64,
    pub monthly_payment: f64,
    pub payment_to_income: f64,
    pub employment_status_encoded: f64,
}

impl FeatureVector {
    /// Column names in the order trained artifacts expect them.
    pub const FEATURE_NAMES: [&'static str; 17] = [
        "age",
        "annual_income",
        "employment_duration_months",
        "credit_score",
        "existing_debt",
        "loan_amount",
        "loan_term_months",
        "num_credit_accounts",
        "credit_utilization",
        "num_delinquencies",
        "payment_history_months",
        "debt_to_income_ratio",
        "loan_to_income_ratio",
        "interest_rate",
        "monthly_payment",
        "payment_to_income_ratio",
        "employment_status_encoded",
    ];

    pub fn derive(application: &LoanApplication) -> Self {
        let smoothed_income = application.annual_income + 1.0;
        let debt_to_income = application.existing_debt / smoothed_income;
        let loan_to_income = application.loan_amount / smoothed_income;

        let monthly_rate = NOMINAL_ANNUAL_RATE / 100.0 / 12.0;
        let discount = 1.0 - (1.0 + monthly_rate).powf(-f64::from(application.loan_term_months));
        let monthly_payment = application.loan_amount * monthly_rate / discount;
        let payment_to_income = monthly_payment * 12.0 / smoothed_income;

        Self {
            age: f64::from(application.age),
            annual_income: application.annual_income,
            employment_duration_months: f64::from(application.employment_duration_months),
            credit_score: f64::from(application.credit_score),
            existing_debt: application.existing_debt,
            loan_amount: application.loan_amount,
            loan_term_months: f64::from(application.loan_term_months),
            num_credit_accounts: f64::from(application.num_credit_accounts),
            credit_utilization: application.credit_utilization,
            num_delinquencies: f64::from(application.num_delinquencies),
            payment_history_months: f64::from(application.payment_history_months),
            debt_to_income,
            loan_to_income,
            interest_rate: NOMINAL_ANNUAL_RATE,
            monthly_payment,
            payment_to_income,
            employment_status_encoded: application.employment_status.encoded(),
        }
    }

    /// Values ordered to match [`Self::FEATURE_NAMES`].
    pub fn values(&self) -> [f64; 17] {
        [
            self.age,
            self.annual_income,
            self.employment_duration_months,
            self.credit_score,
            self.existing_debt,
            self.loan_amount,
            self.loan_term_months,
            self.num_credit_accounts,
            self.credit_utilization,
            self.num_delinquencies,
            self.payment_history_months,
            self.debt_to_income,
            self.loan_to_income,
            self.interest_rate,
            self.monthly_payment,
            self.payment_to_income,
            self.employment_status_encoded,
        ]
    }
}
