use super::super::domain::{LoanProfile, RiskLevel};
use super::{RiskAssessment, RiskFactor, ScoreComponent};

const ACTIVE_LOANS_LIMIT: u32 = 4;

pub fn assess_risk(profile: &LoanProfile) -> RiskAssessment {
    let components: Vec<ScoreComponent> = [
        debt_to_income(profile),
        credit_score(profile),
        employment_history(profile),
        active_loans(profile),
        loan_to_income(profile),
    ]
    .into_iter()
    .flatten()
    .collect();

    let score: u8 = components.iter().map(|component| component.points).sum();
    let level = RiskLevel::from_score(score);

    RiskAssessment {
        score,
        level,
        percentage: risk_percentage(level, score),
        reasons: components
            .iter()
            .map(|component| component.reason.to_string())
            .collect(),
        components,
    }
}

/// Tier-dependent affine mapping of the score, capped at 100.
fn risk_percentage(level: RiskLevel, score: u8) -> u8 {
    let score = u32::from(score);
    let raw = match level {
        RiskLevel::Low => 20 + 4 * score,
        RiskLevel::Medium => 40 + 7 * score,
        RiskLevel::High => 70 + 5 * score,
    };
    raw.min(100) as u8
}

fn component(factor: RiskFactor, points: u8, reason: &'static str) -> Option<ScoreComponent> {
    Some(ScoreComponent {
        factor,
        points,
        reason,
    })
}

fn debt_to_income(profile: &LoanProfile) -> Option<ScoreComponent> {
    let factor = RiskFactor::DebtToIncome;
    if profile.dti > 0.60 {
        component(factor, 3, "Debt-to-income ratio is very high.")
    } else if profile.dti > 0.45 {
        component(factor, 2, "Debt-to-income ratio is moderately high.")
    } else if profile.dti > 0.30 {
        component(factor, 1, "Debt-to-income ratio is slightly elevated.")
    } else {
        None
    }
}

fn credit_score(profile: &LoanProfile) -> Option<ScoreComponent> {
    let factor = RiskFactor::CreditScore;
    match profile.credit_score {
        score if score < 550 => component(factor, 3, "Very low credit score."),
        score if score < 650 => component(factor, 2, "Low credit score."),
        score if score < 700 => component(factor, 1, "Moderate credit score."),
        _ => None,
    }
}

fn employment_history(profile: &LoanProfile) -> Option<ScoreComponent> {
    if profile.employment_years < 1.0 && !profile.employment_type.is_independent() {
        component(RiskFactor::EmploymentHistory, 1, "Short employment history in current job.")
    } else {
        None
    }
}

fn active_loans(profile: &LoanProfile) -> Option<ScoreComponent> {
    if profile.active_loans >= ACTIVE_LOANS_LIMIT {
        component(RiskFactor::ActiveLoans, 2, "There are several active loans.")
    } else {
        None
    }
}

fn loan_to_income(profile: &LoanProfile) -> Option<ScoreComponent> {
    let factor = RiskFactor::LoanToIncome;
    if profile.loan_amount > profile.income * 15.0 {
        component(factor, 2, "Requested amount is very high relative to income.")
    } else if profile.loan_amount > profile.income * 10.0 {
        component(factor, 1, "Requested amount is high relative to income.")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_follows_tier_mapping() {
        assert_eq!(risk_percentage(RiskLevel::Low, 0), 20);
        assert_eq!(risk_percentage(RiskLevel::Low, 2), 28);
        assert_eq!(risk_percentage(RiskLevel::Medium, 3), 61);
        assert_eq!(risk_percentage(RiskLevel::Medium, 5), 75);
        assert_eq!(risk_percentage(RiskLevel::High, 6), 100);
    }

    #[test]
    fn percentage_is_capped() {
        assert_eq!(risk_percentage(RiskLevel::High, 11), 100);
    }
}
