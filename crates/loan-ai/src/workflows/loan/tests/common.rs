use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::{json, Value};

use crate::workflows::loan::domain::{ApplicationInput, EmploymentType, LoanPurpose};
use crate::workflows::loan::explanation::{
    NarrativeError, NarrativeGenerator, NarrativeRequest, NarrativeSource,
};
use crate::workflows::loan::normalizer::normalize;
use crate::workflows::loan::{loan_router, LoanEvaluationService, LoanProfile};

/// Medium-risk applicant: DTI 0.73 and a 670 credit score.
pub(super) fn application() -> ApplicationInput {
    ApplicationInput {
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
    }
}

/// Comfortable applicant that triggers no risk rule.
pub(super) fn strong_application() -> ApplicationInput {
    ApplicationInput {
        age: 41,
        monthly_income: 5000.0,
        monthly_expenses: 1000.0,
        total_debt: 200.0,
        active_loans: 1,
        credit_score: 780,
        employment_type: EmploymentType::Employee,
        employment_years: 6.0,
        loan_amount: 10000.0,
        loan_term_months: 24,
        loan_purpose: LoanPurpose::Car,
    }
}

pub(super) fn profile_of(input: &ApplicationInput) -> LoanProfile {
    normalize(input)
}

pub(super) fn request_json() -> Value {
    json!({
        "age": 30,
        "income": 1500,
        "expenses": 800,
        "debt": 300,
        "activeLoans": 2,
        "creditScore": 670,
        "employmentType": "employee",
        "employmentYears": 2,
        "loanAmount": 1000,
        "loanTerm": 36,
        "loanPurpose": "consumption"
    })
}

pub(super) fn router_with_template() -> axum::Router {
    loan_router(Arc::new(LoanEvaluationService::template_only()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Narrator returning a fixed string and counting invocations.
#[derive(Default)]
pub(super) struct CannedNarrator {
    pub(super) calls: AtomicUsize,
}

impl CannedNarrator {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NarrativeGenerator for CannedNarrator {
    async fn generate(&self, _request: &NarrativeRequest) -> Result<String, NarrativeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("External summary.".to_string())
    }

    fn source(&self) -> NarrativeSource {
        NarrativeSource::External
    }
}

pub(super) struct FailingNarrator;

#[async_trait]
impl NarrativeGenerator for FailingNarrator {
    async fn generate(&self, _request: &NarrativeRequest) -> Result<String, NarrativeError> {
        Err(NarrativeError::EmptyResponse)
    }

    fn source(&self) -> NarrativeSource {
        NarrativeSource::External
    }
}

pub(super) struct SlowNarrator(pub(super) Duration);

#[async_trait]
impl NarrativeGenerator for SlowNarrator {
    async fn generate(&self, _request: &NarrativeRequest) -> Result<String, NarrativeError> {
        tokio::time::sleep(self.0).await;
        Ok("Too late.".to_string())
    }

    fn source(&self) -> NarrativeSource {
        NarrativeSource::External
    }
}
