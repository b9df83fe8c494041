use loan_ai::config::NarrativeConfig;
use loan_ai::error::AppError;
use loan_ai::workflows::loan::LoanEvaluationService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn evaluation_service(
    config: &NarrativeConfig,
) -> Result<Arc<LoanEvaluationService>, AppError> {
    let service = LoanEvaluationService::from_config(config)?;
    Ok(Arc::new(service))
}
