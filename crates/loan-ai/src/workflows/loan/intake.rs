use serde::{Deserialize, Serialize};

use super::domain::{ApplicationInput, EmploymentType, LoanPurpose};

pub const MINIMUM_AGE: u32 = 18;
pub const MAXIMUM_CREDIT_SCORE: u16 = 900;

/// Wire representation of a loan application as posted by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplicationRequest {
    pub age: u32,
    pub income: f64,
    pub expenses: f64,
    pub debt: f64,
    pub active_loans: u32,
    pub credit_score: u16,
    pub employment_type: EmploymentType,
    pub employment_years: f64,
    pub loan_amount: f64,
    pub loan_term: u32,
    pub loan_purpose: LoanPurpose,
}

/// Range violations detected before the evaluation pipeline runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("age must be at least {minimum} (found {found})")]
    Underage { minimum: u32, found: u32 },
    #[error("{field} must be a non-negative number (found {found})")]
    NegativeAmount { field: &'static str, found: f64 },
    #[error("creditScore must be between 0 and {maximum} (found {found})")]
    CreditScoreOutOfRange { maximum: u16, found: u16 },
    #[error("loanTerm must be at least one month")]
    EmptyLoanTerm,
}

impl LoanApplicationRequest {
    /// Check field ranges and convert into the pipeline input.
    pub fn validate(self) -> Result<ApplicationInput, IntakeError> {
        if self.age < MINIMUM_AGE {
            return Err(IntakeError::Underage {
                minimum: MINIMUM_AGE,
                found: self.age,
            });
        }

        for (field, value) in [
            ("income", self.income),
            ("expenses", self.expenses),
            ("debt", self.debt),
            ("employmentYears", self.employment_years),
            ("loanAmount", self.loan_amount),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(IntakeError::NegativeAmount {
                    field,
                    found: value,
                });
            }
        }

        if self.credit_score > MAXIMUM_CREDIT_SCORE {
            return Err(IntakeError::CreditScoreOutOfRange {
                maximum: MAXIMUM_CREDIT_SCORE,
                found: self.credit_score,
            });
        }

        if self.loan_term == 0 {
            return Err(IntakeError::EmptyLoanTerm);
        }

        Ok(ApplicationInput {
            age: self.age,
            monthly_income: self.income,
            monthly_expenses: self.expenses,
            total_debt: self.debt,
            active_loans: self.active_loans,
            credit_score: self.credit_score,
            employment_type: self.employment_type,
            employment_years: self.employment_years,
            loan_amount: self.loan_amount,
            loan_term_months: self.loan_term,
            loan_purpose: self.loan_purpose,
        })
    }
}
