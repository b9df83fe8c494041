//! Loan eligibility evaluation: intake, rule scoring, compliance, decisioning,
//! narrative and dashboard metrics.
//!
//! Every stage except the optional narrator is a pure function of the
//! application; see [`service::assess`].

pub mod compliance;
pub mod dashboard;
pub mod domain;
pub mod evaluation;
pub mod explanation;
pub mod intake;
pub mod normalizer;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use compliance::{check_compliance, ComplianceResult};
pub use dashboard::{build_dashboard, DashboardReport, TrafficLight, TrafficLights};
pub use domain::{
    ApplicationInput, ComplianceStatus, EmploymentType, LoanProfile, LoanPurpose, RiskLevel,
};
pub use evaluation::{
    assess_risk, decide, Decision, DecisionCategory, DecisionLabel, RiskAssessment, RiskFactor,
};
pub use explanation::{
    build_explanation, AiSummary, Explanation, HttpNarrator, NarrativeError, NarrativeGenerator,
    NarrativeRequest, NarrativeSource, TemplateNarrator,
};
pub use intake::{IntakeError, LoanApplicationRequest};
pub use normalizer::{normalize, DTI_SENTINEL};
pub use router::loan_router;
pub use service::{assess, LoanAssessment, LoanEvaluation, LoanEvaluationService};
