use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;

use super::intake::LoanApplicationRequest;
use super::service::LoanEvaluationService;

pub const EVALUATE_PATH: &str = "/evaluate-loan-advanced";

/// Router builder exposing the evaluation endpoint and the service banner.
pub fn loan_router(service: Arc<LoanEvaluationService>) -> Router {
    Router::new()
        .route("/", get(banner_handler))
        .route(EVALUATE_PATH, post(evaluate_handler))
        .with_state(service)
}

pub(crate) async fn banner_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "AI Loan Evaluation backend running" }))
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<LoanEvaluationService>>,
    payload: Result<Json<LoanApplicationRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "rejected malformed loan application");
            let body = json!({ "error": rejection.body_text() });
            return (rejection_status(&rejection), Json(body)).into_response();
        }
    };

    match request.validate() {
        Ok(input) => Json(service.evaluate(&input).await).into_response(),
        Err(error) => {
            debug!(%error, "loan application failed intake validation");
            AppError::from(error).into_response()
        }
    }
}

/// Unreadable or untyped bodies count as invalid applications; size and buffering
/// failures keep their own status.
fn rejection_status(rejection: &JsonRejection) -> StatusCode {
    match rejection {
        JsonRejection::JsonDataError(_)
        | JsonRejection::JsonSyntaxError(_)
        | JsonRejection::MissingJsonContentType(_) => StatusCode::UNPROCESSABLE_ENTITY,
        other => other.status(),
    }
}
