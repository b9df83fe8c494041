use super::super::compliance::ComplianceResult;
use super::super::domain::{LoanProfile, RiskLevel};
use super::RiskAssessment;
use serde::Serialize;

/// Ceiling offered with a conditional approval, as a multiple of monthly income.
pub const MAX_AMOUNT_INCOME_MULTIPLIER: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DecisionLabel {
    #[serde(rename = "APPROVED")]
    Approved,
    #[serde(rename = "CONDITIONAL APPROVAL")]
    ConditionalApproval,
    #[serde(rename = "REJECTED")]
    Rejected,
}

impl DecisionLabel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::ConditionalApproval => "CONDITIONAL APPROVAL",
            Self::Rejected => "REJECTED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionCategory {
    ComplianceFail,
    HighRisk,
    MediumRisk,
    LowRisk,
}

impl DecisionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ComplianceFail => "compliance_fail",
            Self::HighRisk => "high_risk",
            Self::MediumRisk => "medium_risk",
            Self::LowRisk => "low_risk",
        }
    }
}

/// Final adjudication for an application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    #[serde(rename = "decision")]
    pub label: DecisionLabel,
    pub short_reason: &'static str,
    pub category: DecisionCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_max_amount: Option<f64>,
}

impl Decision {
    fn new(label: DecisionLabel, category: DecisionCategory, short_reason: &'static str) -> Self {
        Self {
            label,
            short_reason,
            category,
            suggested_max_amount: None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.label == DecisionLabel::Rejected
    }
}

/// Compliance failures override every risk tier.
pub fn decide(
    profile: &LoanProfile,
    risk: &RiskAssessment,
    compliance: &ComplianceResult,
) -> Decision {
    if !compliance.passed() {
        return Decision::new(
            DecisionLabel::Rejected,
            DecisionCategory::ComplianceFail,
            "Minimum bank requirements were not met.",
        );
    }

    match risk.level {
        RiskLevel::High => Decision::new(
            DecisionLabel::Rejected,
            DecisionCategory::HighRisk,
            "Overall risk is too high to approve safely.",
        ),
        RiskLevel::Medium => Decision {
            suggested_max_amount: Some(profile.income * MAX_AMOUNT_INCOME_MULTIPLIER),
            ..Decision::new(
                DecisionLabel::ConditionalApproval,
                DecisionCategory::MediumRisk,
                "Medium risk. Loan should be approved with conditions.",
            )
        },
        RiskLevel::Low => Decision::new(
            DecisionLabel::Approved,
            DecisionCategory::LowRisk,
            "Risk profile is acceptable for approval.",
        ),
    }
}
