use super::domain::{ApplicationInput, LoanProfile};

/// DTI reported when the applicant declares no income, so the ratio lands in the
/// worst bucket instead of dividing by zero.
pub const DTI_SENTINEL: f64 = 1e9;

pub fn normalize(input: &ApplicationInput) -> LoanProfile {
    let dti = if input.monthly_income > 0.0 {
        (input.total_debt + input.monthly_expenses) / input.monthly_income
    } else {
        DTI_SENTINEL
    };

    LoanProfile {
        age: input.age,
        income: input.monthly_income,
        expenses: input.monthly_expenses,
        debt: input.total_debt,
        active_loans: input.active_loans,
        credit_score: input.credit_score,
        employment_type: input.employment_type,
        employment_years: input.employment_years,
        loan_amount: input.loan_amount,
        loan_term: input.loan_term_months,
        loan_purpose: input.loan_purpose,
        dti,
        income_after_expenses: input.monthly_income - input.monthly_expenses,
    }
}
