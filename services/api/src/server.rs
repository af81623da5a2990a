use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use credit_risk::config::AppConfig;
use credit_risk::error::AppError;
use credit_risk::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{build_service, AppState};
use crate::routes::with_prediction_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(model) = args.model.take() {
        config.model.artifact_path = Some(model);
    }

    telemetry::init(&config.telemetry)?;

    let service = build_service(config.model.artifact_path.as_deref());

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        service: service.clone(),
    };

    let app = with_prediction_routes(service.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        model_loaded = service.model_loaded(),
        "credit risk service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
