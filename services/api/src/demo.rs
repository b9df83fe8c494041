use clap::Args;
use loan_ai::error::AppError;
use loan_ai::workflows::loan::{
    ApplicationInput, EmploymentType, LoanEvaluation, LoanEvaluationService, LoanPurpose,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the deep analysis, recommendations and conclusion for each applicant.
    #[arg(long)]
    pub(crate) full_text: bool,
    /// Only run the named sample applicant.
    #[arg(long)]
    pub(crate) applicant: Option<String>,
}

struct SampleApplicant {
    name: &'static str,
    input: ApplicationInput,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        full_text,
        applicant,
    } = args;

    let service = LoanEvaluationService::template_only();

    println!("Loan evaluation demo");
    for sample in sample_applicants() {
        if let Some(filter) = &applicant {
            if !sample.name.eq_ignore_ascii_case(filter) {
                continue;
            }
        }

        let evaluation = service.evaluate(&sample.input).await;
        render_evaluation(sample.name, &evaluation, full_text);
    }

    Ok(())
}

fn render_evaluation(name: &str, evaluation: &LoanEvaluation, full_text: bool) {
    let decision = &evaluation.final_decision;
    let risk = &evaluation.risk_analysis;
    let metrics = &evaluation.dashboard_metrics;
    let lights = &evaluation.traffic_lights;

    println!("\n{name}");
    println!(
        "- Decision: {} ({})",
        decision.label.label(),
        decision.category.label()
    );
    println!("  {}", decision.short_reason);
    if let Some(max_amount) = decision.suggested_max_amount {
        println!("  Suggested maximum amount: {max_amount:.2}");
    }
    println!(
        "- Risk: {} (score {}, {}%)",
        risk.level.label(),
        risk.score,
        risk.percentage
    );
    for reason in &risk.reasons {
        println!("  * {reason}");
    }

    if evaluation.compliance_analysis.reasons.is_empty() {
        println!("- Compliance: pass");
    } else {
        println!("- Compliance: fail");
        for reason in &evaluation.compliance_analysis.reasons {
            println!("  * {reason}");
        }
    }

    println!(
        "- Installment {:.2} | DTI {:.2} | expense ratio {:.2} | loan/annual income {:.2}",
        metrics.estimated_installment,
        metrics.dti,
        metrics.expense_ratio,
        metrics.loan_to_income_ratio
    );
    println!(
        "- Lights: risk {}, affordability {}, compliance {}",
        lights.risk.label(),
        lights.affordability.label(),
        lights.compliance.label()
    );
    println!("- Suggested rate: {}", evaluation.suggested_interest_rate);
    println!("- Summary: {}", evaluation.ai_summary.text);

    if full_text {
        println!("\n{}", evaluation.deep_analysis);
        println!("\n{}", evaluation.recommendations);
        println!("\n{}", evaluation.final_conclusion);
    }
}

fn sample_applicants() -> Vec<SampleApplicant> {
    vec![
        SampleApplicant {
            name: "steady-employee",
            input: ApplicationInput {
                age: 30,
                monthly_income: 5000.0,
                monthly_expenses: 1500.0,
                total_debt: 200.0,
                active_loans: 1,
                credit_score: 680,
                employment_type: EmploymentType::Employee,
                employment_years: 3.0,
                loan_amount: 10000.0,
                loan_term_months: 24,
                loan_purpose: LoanPurpose::Car,
            },
        },
        SampleApplicant {
            name: "stretched-budget",
            input: ApplicationInput {
                age: 30,
                monthly_income: 1500.0,
                monthly_expenses: 800.0,
                total_debt: 300.0,
                active_loans: 2,
                credit_score: 670,
                employment_type: EmploymentType::Employee,
                employment_years: 2.0,
                loan_amount: 1000.0,
                loan_term_months: 36,
                loan_purpose: LoanPurpose::Consumption,
            },
        },
        SampleApplicant {
            name: "new-contractor",
            input: ApplicationInput {
                age: 24,
                monthly_income: 2200.0,
                monthly_expenses: 1300.0,
                total_debt: 900.0,
                active_loans: 4,
                credit_score: 590,
                employment_type: EmploymentType::Contract,
                employment_years: 0.75,
                loan_amount: 30000.0,
                loan_term_months: 60,
                loan_purpose: LoanPurpose::Business,
            },
        },
        SampleApplicant {
            name: "between-jobs",
            input: ApplicationInput {
                age: 52,
                monthly_income: 300.0,
                monthly_expenses: 250.0,
                total_debt: 0.0,
                active_loans: 0,
                credit_score: 760,
                employment_type: EmploymentType::Unemployed,
                employment_years: 0.0,
                loan_amount: 2000.0,
                loan_term_months: 12,
                loan_purpose: LoanPurpose::Other,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_ai::workflows::loan::{assess, DecisionCategory};

    #[test]
    fn samples_cover_every_decision_category() {
        let categories: Vec<DecisionCategory> = sample_applicants()
            .iter()
            .map(|sample| assess(&sample.input).decision.category)
            .collect();

        assert_eq!(
            categories,
            vec![
                DecisionCategory::LowRisk,
                DecisionCategory::MediumRisk,
                DecisionCategory::HighRisk,
                DecisionCategory::ComplianceFail,
            ]
        );
    }
}
