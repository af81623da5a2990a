use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::LoanApplication;
use super::service::{CreditRiskService, EvaluationError};

/// Router builder exposing the single and batch prediction endpoints.
pub fn prediction_router(service: Arc<CreditRiskService>) -> Router {
    Router::new()
        .route("/api/v1/risk/predict", post(predict_handler))
        .route("/api/v1/risk/predict/batch", post(batch_handler))
        .with_state(service)
}

pub(crate) async fn predict_handler(
    State(service): State<Arc<CreditRiskService>>,
    axum::Json(application): axum::Json<LoanApplication>,
) -> Response {
    match service.evaluate(&application) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(EvaluationError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn batch_handler(
    State(service): State<Arc<CreditRiskService>>,
    axum::Json(applications): axum::Json<Vec<LoanApplication>>,
) -> Response {
    let result = service.evaluate_batch(&applications);
    (StatusCode::OK, axum::Json(result)).into_response()
}
