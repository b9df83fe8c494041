use serde::{Deserialize, Serialize};

/// Employment categories accepted at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    Employee,
    Independent,
    Contract,
    Unemployed,
}

impl EmploymentType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Independent => "independent",
            Self::Contract => "contract",
            Self::Unemployed => "unemployed",
        }
    }

    /// Self-employed applicants are exempt from tenure-based rules.
    pub const fn is_independent(self) -> bool {
        matches!(self, Self::Independent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanPurpose {
    Consumption,
    Car,
    Education,
    Business,
    House,
    Other,
}

impl LoanPurpose {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Consumption => "consumption",
            Self::Car => "car",
            Self::Education => "education",
            Self::Business => "business",
            Self::House => "house",
            Self::Other => "other",
        }
    }
}

/// Applicant attributes after boundary validation. Monetary values are monthly
/// figures except `total_debt` and `loan_amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInput {
    pub age: u32,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub total_debt: f64,
    pub active_loans: u32,
    pub credit_score: u16,
    pub employment_type: EmploymentType,
    pub employment_years: f64,
    pub loan_amount: f64,
    pub loan_term_months: u32,
    pub loan_purpose: LoanPurpose,
}

/// Flat record consumed by every downstream rule and echoed back as `input_summary`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanProfile {
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
    pub dti: f64,
    pub income_after_expenses: f64,
}

impl LoanProfile {
    pub fn has_income(&self) -> bool {
        self.income > 0.0
    }

    /// Share of income absorbed by expenses and debt; 1.0 when there is no income.
    pub fn expense_ratio(&self) -> f64 {
        if self.has_income() {
            (self.expenses + self.debt) / self.income
        } else {
            1.0
        }
    }
}

/// Categorical bucket derived from the additive risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn from_score(score: u8) -> Self {
        if score >= 6 {
            Self::High
        } else if score >= 3 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Pass,
    Fail,
}

impl ComplianceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }
}
