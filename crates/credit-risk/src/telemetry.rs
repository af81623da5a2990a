use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter { value: String, source: ParseError },
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Directives applied when `RUST_LOG` is unset: the configured level for the
/// pipeline, HTTP internals held at `warn` so per-request scoring logs stay
/// readable.
fn default_directives(config: &TelemetryConfig) -> String {
    format!("{},hyper=warn,tower=warn", config.log_level)
}

/// Install the global tracing subscriber. `RUST_LOG` wins when set.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directives = default_directives(config);
            EnvFilter::try_new(&directives).map_err(|source| TelemetryError::EnvFilter {
                value: directives.clone(),
                source,
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
