//! Narrative text returned alongside the numeric evaluation.
//!
//! `build_explanation` is deterministic. The short applicant summary in
//! [`narrative`] may come from an external text-generation service.

pub mod narrative;

pub use narrative::{
    AiSummary, HttpNarrator, NarrativeError, NarrativeGenerator, NarrativeRequest,
    NarrativeSource, TemplateNarrator,
};

use serde::Serialize;

use super::domain::{LoanProfile, RiskLevel};
use super::evaluation::{Decision, RiskAssessment};

const RECOMMENDATIONS: [&str; 7] = [
    "Reduce outstanding debt, starting with the most expensive products, to bring the DTI towards the 0.30-0.35 range.",
    "Avoid opening new credit lines or raising card limits over the next 6-12 months.",
    "Pay every installment before its due date to rebuild the credit score.",
    "Set aside a small emergency fund so unexpected costs do not hit repayment capacity.",
    "Consolidate or renegotiate small high-rate obligations where possible.",
    "Consider a slightly lower amount or a longer term to ease the monthly payment.",
    "Keep the current employment and document any income growth.",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub deep_analysis: String,
    pub recommendations: String,
    pub final_conclusion: String,
    pub suggested_interest_rate: &'static str,
}

pub fn build_explanation(
    profile: &LoanProfile,
    risk: &RiskAssessment,
    decision: &Decision,
) -> Explanation {
    Explanation {
        deep_analysis: deep_analysis(profile, risk),
        recommendations: recommendations(),
        final_conclusion: conclusion(risk, decision),
        suggested_interest_rate: suggested_rate_band(risk.percentage),
    }
}

/// Rate band quoted for a given risk percentage.
pub fn suggested_rate_band(risk_percentage: u8) -> &'static str {
    match risk_percentage {
        pct if pct < 35 => "8% – 11%",
        pct if pct < 60 => "12% – 16%",
        pct if pct < 80 => "17% – 22%",
        _ => "23% – 32% (very high risk segment)",
    }
}

fn deep_analysis(profile: &LoanProfile, risk: &RiskAssessment) -> String {
    let absorbed_pct = profile.expense_ratio() * 100.0;

    format!(
        "The debt-to-income (DTI) ratio stands at {dti:.2}, placing the application in the {tier} \
risk band. Ratios above 0.50 leave little room to absorb unexpected expenses or a drop in income, \
which makes this indicator a central driver of the classification.\n\n\
Residual income after reported expenses is {free:.2} against a gross monthly income of {income:.2}. \
Expenses and existing debt together absorb about {absorbed_pct:.1}% of income, and the residual \
figure is the liquidity actually available to service a new obligation.\n\n\
A credit score of {score} combined with {loans} active loan(s) frames the repayment track record; \
each additional open obligation adds interest exposure and administrative load.\n\n\
Employment tenure of {years:.1} years anchors income stability. The requested {amount:.2} over \
{term} months is assessed against that capacity, with limited buffer if rates rise or income \
falls temporarily.",
        dti = profile.dti,
        tier = risk.level.label().to_uppercase(),
        free = profile.income_after_expenses,
        income = profile.income,
        score = profile.credit_score,
        loans = profile.active_loans,
        years = profile.employment_years,
        amount = profile.loan_amount,
        term = profile.loan_term,
    )
}

fn recommendations() -> String {
    let mut text =
        String::from("The following actions would strengthen the applicant's risk profile:\n");
    for item in RECOMMENDATIONS {
        text.push_str("\n• ");
        text.push_str(item);
    }
    text
}

fn conclusion(risk: &RiskAssessment, decision: &Decision) -> String {
    let posture = match risk.level {
        RiskLevel::Low => {
            "The profile sits in the low risk segment and qualifies for standard product conditions. \
Routine monitoring is sufficient."
        }
        RiskLevel::Medium => {
            "The profile is not extreme, but the combination of leverage, credit history and \
existing obligations calls for conservative conditions and closer monitoring. Following the \
recommendations, particularly debt reduction and credit score improvement, could move the \
applicant to a stronger category within 4-8 months."
        }
        RiskLevel::High => {
            "The accumulated risk signals are too strong for a standard product. A new application \
becomes reasonable once debt exposure and credit history have materially improved."
        }
    };

    format!(
        "Final decision: {label}.\n{reason}\n\nRisk posture: {tier} ({pct}%). {posture}",
        label = decision.label.label(),
        reason = decision.short_reason,
        tier = risk.level.label(),
        pct = risk.percentage,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_bands_follow_thresholds() {
        assert_eq!(suggested_rate_band(20), "8% – 11%");
        assert_eq!(suggested_rate_band(35), "12% – 16%");
        assert_eq!(suggested_rate_band(59), "12% – 16%");
        assert_eq!(suggested_rate_band(60), "17% – 22%");
        assert_eq!(suggested_rate_band(80), "23% – 32% (very high risk segment)");
        assert_eq!(suggested_rate_band(100), "23% – 32% (very high risk segment)");
    }

    #[test]
    fn recommendations_list_every_bullet() {
        let text = recommendations();
        assert_eq!(text.matches('•').count(), RECOMMENDATIONS.len());
    }
}
