mod policy;
mod rules;

pub use policy::{decide, Decision, DecisionCategory, DecisionLabel, MAX_AMOUNT_INCOME_MULTIPLIER};
pub use rules::assess_risk;

use super::domain::RiskLevel;
use serde::Serialize;

/// Rule families feeding the additive risk score, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    DebtToIncome,
    CreditScore,
    EmploymentHistory,
    ActiveLoans,
    LoanToIncome,
}

/// Discrete contribution to the risk score, kept for audits and tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: RiskFactor,
    pub points: u8,
    pub reason: &'static str,
}

/// Outcome of the risk rules for a single application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    #[serde(rename = "risk_score_numeric")]
    pub score: u8,
    #[serde(rename = "risk_level")]
    pub level: RiskLevel,
    #[serde(rename = "risk_percentage")]
    pub percentage: u8,
    pub reasons: Vec<String>,
    #[serde(skip)]
    pub components: Vec<ScoreComponent>,
}

impl RiskAssessment {
    pub fn points_for(&self, factor: RiskFactor) -> u8 {
        self.components
            .iter()
            .filter(|component| component.factor == factor)
            .map(|component| component.points)
            .sum()
    }
}
