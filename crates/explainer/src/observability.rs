//! Logging initialization.

use explainer_error::{ConfigError, ExplainerResult};
use std::env;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Service name recorded at startup
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Log filter directive (e.g., "info", "explainer_models=debug")
    pub log_level: String,
    /// Enable JSON-formatted logs for structured logging
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Create a new configuration with the given service name.
    ///
    /// The filter starts from `RUST_LOG`, or `info` when unset.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json_logs: false,
        }
    }

    /// Set the service version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = version.into();
        self
    }

    /// Set the log filter.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Parsed filter.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the directive does not parse.
    pub fn env_filter(&self) -> ExplainerResult<EnvFilter> {
        EnvFilter::try_new(&self.log_level).map_err(|e| {
            ConfigError::new(format!("Invalid log filter '{}': {}", self.log_level, e)).into()
        })
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Initialize logging with a custom configuration.
///
/// Installs a global subscriber with an `EnvFilter` and a text or JSON
/// formatting layer.
///
/// # Errors
///
/// Fails when the filter does not parse or a global subscriber is already set.
pub fn init_observability_with_config(config: ObservabilityConfig) -> ExplainerResult<()> {
    let env_filter = config.env_filter()?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(
        service = %config.service_name,
        version = %config.service_version,
        json = config.json_logs,
        "Logging initialized"
    );
    Ok(())
}
