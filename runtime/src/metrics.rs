//! Prometheus metrics for observability and monitoring.
//!
//! This module provides metric collection for the store runtime:
//! - Action throughput
//! - Reducer execution latency
//! - Effect execution counts
//! - Shutdown lifecycle
//!
//! # Example
//!
//! ```rust,no_run
//! use docdesk_runtime::metrics::MetricsServer;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut server = MetricsServer::new();
//! server.start()?;
//!
//! // Scrapeable text via server.render()
//! # Ok(())
//! # }
//! ```

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use thiserror::Error;

// Re-export metrics macros for use in other modules
pub use metrics::{counter, gauge, histogram};

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build metrics exporter
    #[error("Failed to build metrics exporter: {0}")]
    Build(String),
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Prometheus metrics recorder.
///
/// Installs the process-wide recorder and renders metrics in Prometheus
/// exposition format for whatever endpoint the embedding process exposes.
#[derive(Default)]
pub struct MetricsServer {
    handle: Option<PrometheusHandle>,
}

impl MetricsServer {
    /// Create a new metrics server.
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Initialize metric descriptions and install the recorder.
    ///
    /// # Errors
    ///
    /// Returns error if the metrics exporter cannot be built or installed.
    ///
    /// # Note
    ///
    /// If a metrics recorder is already installed (e.g., in tests), this
    /// is treated as a no-op rather than an error.
    pub fn start(&mut self) -> Result<(), MetricsError> {
        register_metrics();

        let builder = PrometheusBuilder::new()
            // Configure histogram buckets for latency measurements
            .set_buckets_for_metric(
                Matcher::Suffix("duration_seconds".to_string()),
                &[
                    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ],
            )
            .map_err(|e| MetricsError::Build(e.to_string()))?;

        match builder.install_recorder() {
            Ok(handle) => {
                self.handle = Some(handle);
                tracing::info!("Metrics recorder installed");
                Ok(())
            },
            Err(e) => {
                let err_msg = e.to_string();
                if err_msg.contains("already initialized") {
                    tracing::warn!(
                        "Metrics recorder already initialized, skipping re-initialization"
                    );
                    Ok(())
                } else {
                    Err(MetricsError::Install(err_msg))
                }
            },
        }
    }

    /// Get the metrics handle for rendering.
    #[must_use]
    pub const fn handle(&self) -> Option<&PrometheusHandle> {
        self.handle.as_ref()
    }

    /// Render current metrics in Prometheus format.
    ///
    /// Returns `None` if the recorder hasn't been installed.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        self.handle.as_ref().map(PrometheusHandle::render)
    }
}

/// Register all metric descriptions.
fn register_metrics() {
    // Store metrics
    describe_counter!(
        "store.commands.total",
        "Total number of actions processed by stores"
    );
    describe_histogram!(
        "store.reducer.duration_seconds",
        "Time taken to execute reducers"
    );

    // Effect metrics
    describe_counter!(
        "store.effects.executed",
        "Total number of effects executed, by type"
    );

    // Shutdown metrics
    describe_counter!(
        "store.shutdown.initiated",
        "Total number of shutdowns initiated"
    );
    describe_counter!(
        "store.shutdown.completed",
        "Total number of shutdowns that drained all effects"
    );
    describe_counter!(
        "store.shutdown.timeout",
        "Total number of shutdowns that timed out with effects running"
    );
    describe_counter!(
        "store.shutdown.rejected_actions",
        "Total number of actions rejected during shutdown"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_none_before_start() {
        let server = MetricsServer::new();
        assert!(server.render().is_none());
    }
}
