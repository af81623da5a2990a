use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use credit_risk::pipeline::{CreditRiskService, LogisticArtifact, ModelArtifact};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) service: Arc<CreditRiskService>,
}

/// Load the scorer artifact if a path was supplied.
///
/// A missing or unloadable artifact is never fatal; the service then runs
/// permanently on the rule-based estimate for this process lifetime.
pub(crate) fn load_artifact(path: Option<&Path>) -> Option<Arc<dyn ModelArtifact>> {
    let path = path?;

    match LogisticArtifact::load(path) {
        Ok(artifact) => {
            info!(path = %path.display(), version = artifact.version(), "scorer artifact loaded");
            Some(Arc::new(artifact))
        }
        Err(error) => {
            warn!(
                path = %path.display(),
                %error,
                "scorer artifact unavailable, continuing rule-based"
            );
            None
        }
    }
}

pub(crate) fn build_service(artifact_path: Option<&Path>) -> Arc<CreditRiskService> {
    Arc::new(CreditRiskService::new(load_artifact(artifact_path)))
}
