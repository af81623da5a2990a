use std::io::Read;

use serde::Deserialize;

use super::domain::{EmploymentStatus, LoanApplication};

/// Parse loan applications from a CSV export.
///
/// Rows are converted as-is; every parsed application still passes through the
/// normal validation gate inside the pipeline, so a syntactically valid row
/// with an out-of-domain value surfaces as a per-item failure at evaluation
/// time rather than here.
pub fn parse_applications<R: Read>(reader: R) -> Result<Vec<LoanApplication>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut applications = Vec::new();

    for record in csv_reader.deserialize::<ApplicationRow>() {
        applications.push(record?.into_application());
    }

    Ok(applications)
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    age: u8,
    annual_income: f64,
    employment_status: String,
    employment_duration_months: u32,
    credit_score: u16,
    existing_debt: f64,
    loan_amount: f64,
    loan_term_months: u32,
    #[serde(default)]
    loan_purpose: String,
    num_credit_accounts: u32,
    credit_utilization: f64,
    num_delinquencies: u32,
    payment_history_months: u32,
}

impl ApplicationRow {
    fn into_application(self) -> LoanApplication {
        LoanApplication {
            age: self.age,
            annual_income: self.annual_income,
            employment_status: EmploymentStatus::from_label(&self.employment_status),
            employment_duration_months: self.employment_duration_months,
            credit_score: self.credit_score,
            existing_debt: self.existing_debt,
            loan_amount: self.loan_amount,
            loan_term_months: self.loan_term_months,
            loan_purpose: self.loan_purpose,
            num_credit_accounts: self.num_credit_accounts,
            credit_utilization: self.credit_utilization,
            num_delinquencies: self.num_delinquencies,
            payment_history_months: self.payment_history_months,
        }
    }
}
