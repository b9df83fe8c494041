use super::common::*;
use crate::workflows::loan::domain::{EmploymentType, RiskLevel};
use crate::workflows::loan::evaluation::{assess_risk, RiskFactor};
use crate::workflows::loan::normalizer::DTI_SENTINEL;

#[test]
fn reference_applicant_is_medium_risk() {
    let profile = profile_of(&application());
    assert!((profile.dti - 1100.0 / 1500.0).abs() < 1e-9);

    let risk = assess_risk(&profile);

    assert_eq!(risk.points_for(RiskFactor::DebtToIncome), 3);
    assert_eq!(risk.points_for(RiskFactor::CreditScore), 1);
    assert_eq!(risk.points_for(RiskFactor::LoanToIncome), 0);
    assert_eq!(risk.score, 4);
    assert_eq!(risk.level, RiskLevel::Medium);
    assert_eq!(risk.percentage, 68);
    assert_eq!(
        risk.reasons,
        vec![
            "Debt-to-income ratio is very high.".to_string(),
            "Moderate credit score.".to_string(),
        ]
    );
}

#[test]
fn strong_applicant_has_no_risk_reasons() {
    let risk = assess_risk(&profile_of(&strong_application()));

    assert_eq!(risk.score, 0);
    assert_eq!(risk.level, RiskLevel::Low);
    assert_eq!(risk.percentage, 20);
    assert!(risk.reasons.is_empty());
}

#[test]
fn dti_buckets_are_mutually_exclusive() {
    let cases = [
        (1300.0, 0), // 0.28
        (1600.0, 1), // 0.34
        (2300.0, 2), // 0.48
        (3300.0, 3), // 0.68
    ];

    for (expenses, expected) in cases {
        let mut input = strong_application();
        input.total_debt = 100.0;
        input.monthly_expenses = expenses;
        let risk = assess_risk(&profile_of(&input));
        assert_eq!(
            risk.points_for(RiskFactor::DebtToIncome),
            expected,
            "expenses {expenses}"
        );
    }
}

#[test]
fn credit_score_thresholds_pick_highest_penalty() {
    for (score, expected) in [(549, 3), (550, 2), (649, 2), (650, 1), (699, 1), (700, 0)] {
        let mut input = strong_application();
        input.credit_score = score;
        let risk = assess_risk(&profile_of(&input));
        assert_eq!(risk.points_for(RiskFactor::CreditScore), expected, "score {score}");
    }
}

#[test]
fn short_tenure_is_ignored_for_independent_workers() {
    let mut input = strong_application();
    input.employment_years = 0.5;
    let employee = assess_risk(&profile_of(&input));
    assert_eq!(employee.points_for(RiskFactor::EmploymentHistory), 1);

    input.employment_type = EmploymentType::Independent;
    let independent = assess_risk(&profile_of(&input));
    assert_eq!(independent.points_for(RiskFactor::EmploymentHistory), 0);
}

#[test]
fn many_active_loans_and_large_requests_add_points() {
    let mut input = strong_application();
    input.active_loans = 4;
    input.loan_amount = 5000.0 * 16.0;
    let risk = assess_risk(&profile_of(&input));
    assert_eq!(risk.points_for(RiskFactor::ActiveLoans), 2);
    assert_eq!(risk.points_for(RiskFactor::LoanToIncome), 2);

    input.loan_amount = 5000.0 * 12.0;
    let risk = assess_risk(&profile_of(&input));
    assert_eq!(risk.points_for(RiskFactor::LoanToIncome), 1);
}

#[test]
fn reasons_follow_rule_order() {
    let mut input = application();
    input.credit_score = 500;
    input.employment_years = 0.2;
    input.active_loans = 5;
    input.loan_amount = 1500.0 * 20.0;

    let risk = assess_risk(&profile_of(&input));

    assert_eq!(risk.level, RiskLevel::High);
    assert_eq!(risk.score, 11);
    assert_eq!(risk.percentage, 100);
    assert_eq!(
        risk.reasons,
        vec![
            "Debt-to-income ratio is very high.".to_string(),
            "Very low credit score.".to_string(),
            "Short employment history in current job.".to_string(),
            "There are several active loans.".to_string(),
            "Requested amount is very high relative to income.".to_string(),
        ]
    );
}

#[test]
fn zero_income_hits_the_worst_dti_bucket() {
    let mut input = strong_application();
    input.monthly_income = 0.0;
    input.credit_score = 600;

    let profile = profile_of(&input);
    assert_eq!(profile.dti, DTI_SENTINEL);

    let risk = assess_risk(&profile);
    assert_eq!(risk.points_for(RiskFactor::DebtToIncome), 3);
    assert_eq!(risk.level, RiskLevel::High);
}

#[test]
fn tier_is_a_function_of_score() {
    for score in 0u8..=11 {
        let level = RiskLevel::from_score(score);
        let expected = if score >= 6 {
            RiskLevel::High
        } else if score >= 3 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };
        assert_eq!(level, expected, "score {score}");
    }
}
