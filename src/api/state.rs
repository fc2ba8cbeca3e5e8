//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::service::GeneratorService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Identifier generator service.
    pub generator: Arc<GeneratorService>,
    /// Prometheus recorder handle, absent when metrics are disabled.
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: Arc<AppConfig>, metrics_handle: Option<PrometheusHandle>) -> Self {
        let generator = Arc::new(GeneratorService::new(&config.generator));

        Self {
            config,
            generator,
            metrics_handle,
        }
    }
}
