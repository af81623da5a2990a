use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use credit_risk::pipeline::{prediction_router, CreditRiskService};
use serde_json::json;

pub(crate) fn with_prediction_routes(service: Arc<CreditRiskService>) -> axum::Router {
    prediction_router(service)
        .route("/", axum::routing::get(root_endpoint))
        .route("/health", axum::routing::get(health_endpoint))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

/// Service banner; a lightweight alias for callers that only probe `/`.
pub(crate) async fn root_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "credit-risk-api",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub(crate) async fn health_endpoint(
    Extension(state): Extension<crate::infra::AppState>,
) -> Json<serde_json::Value> {
    let model_loaded = state.service.model_loaded();
    let status = if model_loaded { "healthy" } else { "degraded" };

    Json(json!({
        "status": status,
        "model_loaded": model_loaded,
        "model_version": state.service.model_version(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub(crate) async fn readiness_endpoint(
    Extension(state): Extension<crate::infra::AppState>,
) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(
    Extension(state): Extension<crate::infra::AppState>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
