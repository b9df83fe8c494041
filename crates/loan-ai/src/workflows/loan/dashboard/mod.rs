pub mod views;

pub use views::{
    AffordabilityPair, CreditScorePoint, DashboardCharts, DashboardMetrics, DashboardReport,
    DtiSimulation, GaugeValue, IncomeBreakdown, RatioPoint, TrafficLight, TrafficLights,
};

use super::compliance::ComplianceResult;
use super::domain::{LoanProfile, RiskLevel};
use super::evaluation::RiskAssessment;

/// Installment ratio reported when the applicant has no residual income.
pub const INSTALLMENT_RATIO_SENTINEL: f64 = 10.0;

const AFFORDABLE_RATIO: f64 = 0.30;
const STRETCHED_RATIO: f64 = 0.50;

/// Annual interest rate assumed for the installment estimate.
pub const fn annual_rate_for(level: RiskLevel) -> f64 {
    match level {
        RiskLevel::Low => 0.14,
        RiskLevel::Medium => 0.18,
        RiskLevel::High => 0.24,
    }
}

/// Annuity installment; falls back to straight division when the rate is zero.
/// Uses the reciprocal form so very long terms converge on interest-only.
pub fn monthly_installment(principal: f64, annual_rate: f64, term_months: u32) -> f64 {
    if term_months == 0 {
        return 0.0;
    }

    let monthly_rate = annual_rate / 12.0;
    if monthly_rate <= 0.0 {
        return principal / f64::from(term_months);
    }

    let growth = (1.0 + monthly_rate).powf(f64::from(term_months));
    principal * monthly_rate / (1.0 - growth.recip())
}

pub fn build_dashboard(
    profile: &LoanProfile,
    risk: &RiskAssessment,
    compliance: &ComplianceResult,
) -> DashboardReport {
    let installment = monthly_installment(
        profile.loan_amount,
        annual_rate_for(risk.level),
        profile.loan_term,
    );
    let monthly_free = profile.income_after_expenses;

    let installment_to_free_income = if monthly_free > 0.0 {
        installment / monthly_free
    } else {
        INSTALLMENT_RATIO_SENTINEL
    };
    let loan_to_income_ratio = if profile.has_income() {
        profile.loan_amount / (profile.income * 12.0)
    } else {
        0.0
    };

    let metrics = DashboardMetrics {
        dti: profile.dti,
        monthly_free,
        expense_ratio: profile.expense_ratio(),
        estimated_installment: installment,
        installment_to_free_income,
        loan_to_income_ratio,
    };

    let charts = DashboardCharts {
        risk_gauge: GaugeValue {
            value: risk.percentage,
        },
        income_vs_expenses: IncomeBreakdown {
            income: profile.income,
            expenses: profile.expenses,
            debt: profile.debt,
        },
        dti_simulation: simulate_dti(profile),
        affordability: AffordabilityPair {
            installment,
            free_income: monthly_free,
        },
        credit_score: CreditScorePoint {
            score: profile.credit_score,
        },
        loan_to_income: RatioPoint {
            ratio: loan_to_income_ratio,
        },
    };

    let traffic_lights = TrafficLights {
        risk: risk_light(risk.level),
        affordability: affordability_light(installment_to_free_income),
        compliance: if compliance.passed() {
            TrafficLight::Green
        } else {
            TrafficLight::Red
        },
    };

    DashboardReport {
        charts,
        metrics,
        traffic_lights,
    }
}

pub fn simulate_dti(profile: &LoanProfile) -> DtiSimulation {
    let with_debt_factor = |factor: f64| {
        if profile.has_income() {
            (profile.debt * factor + profile.expenses) / profile.income
        } else {
            profile.dti
        }
    };

    DtiSimulation {
        current: profile.dti,
        minus10: with_debt_factor(0.9),
        minus20: with_debt_factor(0.8),
        minus30: with_debt_factor(0.7),
    }
}

const fn risk_light(level: RiskLevel) -> TrafficLight {
    match level {
        RiskLevel::Low => TrafficLight::Green,
        RiskLevel::Medium => TrafficLight::Yellow,
        RiskLevel::High => TrafficLight::Red,
    }
}

fn affordability_light(installment_ratio: f64) -> TrafficLight {
    if installment_ratio < AFFORDABLE_RATIO {
        TrafficLight::Green
    } else if installment_ratio < STRETCHED_RATIO {
        TrafficLight::Yellow
    } else {
        TrafficLight::Red
    }
}
