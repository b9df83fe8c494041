use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::NarrativeConfig;

use super::compliance::{check_compliance, ComplianceResult};
use super::dashboard::{
    build_dashboard, DashboardCharts, DashboardMetrics, DashboardReport, TrafficLights,
};
use super::domain::{ApplicationInput, LoanProfile};
use super::evaluation::{assess_risk, decide, Decision, RiskAssessment};
use super::explanation::{
    build_explanation, AiSummary, Explanation, HttpNarrator, NarrativeError, NarrativeGenerator,
    NarrativeRequest, NarrativeSource, TemplateNarrator,
};
use super::normalizer::normalize;

const DEFAULT_NARRATIVE_TIMEOUT: Duration = Duration::from_secs(10);

/// Deterministic output of the rule pipeline for one application.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanAssessment {
    pub profile: LoanProfile,
    pub risk: RiskAssessment,
    pub compliance: ComplianceResult,
    pub decision: Decision,
    pub explanation: Explanation,
    pub dashboard: DashboardReport,
}

impl LoanAssessment {
    pub fn narrative_request(&self) -> NarrativeRequest {
        NarrativeRequest {
            decision: self.decision.label,
            short_reason: self.decision.short_reason,
            risk_level: self.risk.level,
            risk_percentage: self.risk.percentage,
            risk_reasons: self.risk.reasons.clone(),
            compliance_reasons: self.compliance.reasons.clone(),
            loan_amount: self.profile.loan_amount,
            loan_term: self.profile.loan_term,
            loan_purpose: self.profile.loan_purpose,
        }
    }

    pub fn into_evaluation(self, ai_summary: AiSummary) -> LoanEvaluation {
        let DashboardReport {
            charts,
            metrics,
            traffic_lights,
        } = self.dashboard;
        let Explanation {
            deep_analysis,
            recommendations,
            final_conclusion,
            suggested_interest_rate,
        } = self.explanation;

        LoanEvaluation {
            input_summary: self.profile,
            risk_analysis: self.risk,
            compliance_analysis: self.compliance,
            final_decision: self.decision,
            charts,
            dashboard_metrics: metrics,
            traffic_lights,
            deep_analysis,
            recommendations,
            final_conclusion,
            suggested_interest_rate,
            ai_summary,
        }
    }
}

/// Response body of the evaluation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanEvaluation {
    pub input_summary: LoanProfile,
    pub risk_analysis: RiskAssessment,
    pub compliance_analysis: ComplianceResult,
    pub final_decision: Decision,
    pub charts: DashboardCharts,
    pub dashboard_metrics: DashboardMetrics,
    pub traffic_lights: TrafficLights,
    pub deep_analysis: String,
    pub recommendations: String,
    pub final_conclusion: String,
    pub suggested_interest_rate: &'static str,
    pub ai_summary: AiSummary,
}

/// Run normalizer, rules, decision, explanation and dashboard for one input.
pub fn assess(input: &ApplicationInput) -> LoanAssessment {
    let profile = normalize(input);
    debug!(dti = profile.dti, residual = profile.income_after_expenses, "profile normalized");

    let risk = assess_risk(&profile);
    let compliance = check_compliance(&profile);
    debug!(
        score = risk.score,
        level = risk.level.label(),
        compliance = compliance.status.label(),
        "rules evaluated"
    );

    let decision = decide(&profile, &risk, &compliance);
    let explanation = build_explanation(&profile, &risk, &decision);
    let dashboard = build_dashboard(&profile, &risk, &compliance);

    LoanAssessment {
        profile,
        risk,
        compliance,
        decision,
        explanation,
        dashboard,
    }
}

/// Service composing the deterministic pipeline with the optional narrator.
pub struct LoanEvaluationService {
    narrator: Arc<dyn NarrativeGenerator>,
    fallback: TemplateNarrator,
    narrative_timeout: Duration,
}

impl LoanEvaluationService {
    pub fn new(narrator: Arc<dyn NarrativeGenerator>, narrative_timeout: Duration) -> Self {
        Self {
            narrator,
            fallback: TemplateNarrator,
            narrative_timeout,
        }
    }

    pub fn template_only() -> Self {
        Self::new(Arc::new(TemplateNarrator), DEFAULT_NARRATIVE_TIMEOUT)
    }

    /// Use the HTTP narrator when a credential is configured, templates otherwise.
    pub fn from_config(config: &NarrativeConfig) -> Result<Self, NarrativeError> {
        let narrator: Arc<dyn NarrativeGenerator> = match HttpNarrator::from_config(config)? {
            Some(http) => {
                info!(base_url = %config.base_url, model = %config.model, "external narrative enabled");
                Arc::new(http)
            }
            None => Arc::new(TemplateNarrator),
        };
        Ok(Self::new(narrator, config.timeout))
    }

    pub fn narrative_source(&self) -> NarrativeSource {
        self.narrator.source()
    }

    pub async fn evaluate(&self, input: &ApplicationInput) -> LoanEvaluation {
        let assessment = assess(input);
        info!(
            decision = assessment.decision.label.label(),
            category = assessment.decision.category.label(),
            risk_percentage = assessment.risk.percentage,
            "loan application evaluated"
        );

        let summary = self.summarize(&assessment.narrative_request()).await;
        assessment.into_evaluation(summary)
    }

    /// Never fails: any narrator error or timeout degrades to the template text.
    pub async fn summarize(&self, request: &NarrativeRequest) -> AiSummary {
        let outcome = tokio::time::timeout(self.narrative_timeout, self.narrator.generate(request))
            .await
            .unwrap_or(Err(NarrativeError::Timeout(self.narrative_timeout)));

        match outcome {
            Ok(text) => AiSummary {
                text,
                source: self.narrator.source(),
            },
            Err(err) => {
                warn!(error = %err, "narrative generation failed, using template summary");
                AiSummary {
                    text: self.fallback.render(request),
                    source: NarrativeSource::Template,
                }
            }
        }
    }
}

impl Default for LoanEvaluationService {
    fn default() -> Self {
        Self::template_only()
    }
}
