use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::json;

use crate::config::NarrativeConfig;

use super::super::domain::{LoanPurpose, RiskLevel};
use super::super::evaluation::DecisionLabel;

const SYSTEM_PROMPT: &str = "You are a credit analyst. Summarise the loan evaluation for the \
applicant in at most three plain sentences. Do not invent figures.";

/// Facts handed to a narrator; everything is already decided by the rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeRequest {
    pub decision: DecisionLabel,
    pub short_reason: &'static str,
    pub risk_level: RiskLevel,
    pub risk_percentage: u8,
    pub risk_reasons: Vec<String>,
    pub compliance_reasons: Vec<String>,
    pub loan_amount: f64,
    pub loan_term: u32,
    pub loan_purpose: LoanPurpose,
}

impl NarrativeRequest {
    fn prompt(&self) -> String {
        let mut prompt = format!(
            "Decision: {}. Reason: {} Risk level: {} ({}%). Requested {:.2} over {} months for {}.",
            self.decision.label(),
            self.short_reason,
            self.risk_level.label(),
            self.risk_percentage,
            self.loan_amount,
            self.loan_term,
            self.loan_purpose.label(),
        );
        if !self.risk_reasons.is_empty() {
            prompt.push_str(" Risk drivers: ");
            prompt.push_str(&self.risk_reasons.join(" "));
        }
        if !self.compliance_reasons.is_empty() {
            prompt.push_str(" Compliance issues: ");
            prompt.push_str(&self.compliance_reasons.join(" "));
        }
        prompt
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("narrative client could not be built: {0}")]
    Client(String),
    #[error("narrative request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("narrative response did not contain any text")]
    EmptyResponse,
    #[error("narrative generation timed out after {0:?}")]
    Timeout(Duration),
}

/// Capability producing the short applicant-facing summary.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError>;

    fn source(&self) -> NarrativeSource;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeSource {
    External,
    Template,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiSummary {
    pub text: String,
    pub source: NarrativeSource,
}

/// Deterministic narrator used on its own or as the fallback for [`HttpNarrator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl TemplateNarrator {
    pub fn render(&self, request: &NarrativeRequest) -> String {
        format!(
            "Decision {} with {} risk ({}%): {}",
            request.decision.label(),
            request.risk_level.label(),
            request.risk_percentage,
            request.short_reason
        )
    }
}

#[async_trait]
impl NarrativeGenerator for TemplateNarrator {
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
        Ok(self.render(request))
    }

    fn source(&self) -> NarrativeSource {
        NarrativeSource::Template
    }
}

/// OpenAI-compatible chat completion client.
pub struct HttpNarrator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl HttpNarrator {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NarrativeError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| NarrativeError::Client(err.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Returns `None` when no credential is configured.
    pub fn from_config(config: &NarrativeConfig) -> Result<Option<Self>, NarrativeError> {
        match &config.api_key {
            Some(key) => Self::new(&config.base_url, key, &config.model, config.timeout).map(Some),
            None => Ok(None),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for HttpNarrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpNarrator")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl NarrativeGenerator for HttpNarrator {
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": request.prompt() },
            ],
            "temperature": 0.3,
        });

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: serde_json::Value = response.json().await?;
        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .ok_or(NarrativeError::EmptyResponse)
    }

    fn source(&self) -> NarrativeSource {
        NarrativeSource::External
    }
}
