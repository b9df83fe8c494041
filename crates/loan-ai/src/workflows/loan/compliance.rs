use serde::Serialize;

use super::domain::{ComplianceStatus, EmploymentType, LoanProfile};

const MINIMUM_INCOME: f64 = 400.0;
const MINIMUM_TENURE_YEARS: f64 = 0.5;
const MINIMUM_CREDIT_SCORE: u16 = 500;

/// Hard eligibility verdict, evaluated independently of the risk score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceResult {
    pub status: ComplianceStatus,
    pub reasons: Vec<String>,
}

impl ComplianceResult {
    pub fn passed(&self) -> bool {
        self.status == ComplianceStatus::Pass
    }
}

/// Collects every violated eligibility rule; never stops at the first one.
pub fn check_compliance(profile: &LoanProfile) -> ComplianceResult {
    let mut reasons = Vec::new();

    if profile.income < MINIMUM_INCOME {
        reasons.push("Income is below the minimum threshold.".to_string());
    }

    if profile.employment_type == EmploymentType::Unemployed {
        reasons.push("Applicant is unemployed.".to_string());
    }

    if profile.employment_years < MINIMUM_TENURE_YEARS && !profile.employment_type.is_independent()
    {
        reasons.push("Employment stability is very low.".to_string());
    }

    if profile.credit_score < MINIMUM_CREDIT_SCORE {
        reasons.push("Credit score is below the minimum allowed.".to_string());
    }

    let status = if reasons.is_empty() {
        ComplianceStatus::Pass
    } else {
        ComplianceStatus::Fail
    };

    ComplianceResult { status, reasons }
}
